//! Core domain types for Letter Boxed
//!
//! The board, its adjacency rule and per-word validation.
//! All types here are pure and immutable once constructed.

mod board;
mod letters;
mod word;

pub use board::{Board, BoardError, LETTER_COUNT, SIDE_COUNT, SIDE_LEN, SideIndex};
pub use letters::LetterSet;
pub use word::{ValidatedWord, efficiency, validate};
