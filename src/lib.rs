//! Letter Boxed Solver
//!
//! Finds two-word solutions to Letter Boxed puzzles: words chained
//! tail-to-head that never use two letters from the same side in a row
//! and together cover all twelve letters.
//!
//! # Quick Start
//!
//! ```rust
//! use letter_boxed::core::Board;
//! use letter_boxed::solver::{filter_words, find_pairs};
//!
//! let board = Board::from_letters("abcdefghijkl").unwrap();
//! let words = filter_words(&board, ["adgjbehkci", "ifl", "add"]);
//!
//! let pairs = find_pairs(&words);
//! assert_eq!(pairs[0].to_string(), "adgjbehkci ifl");
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Dictionary loading
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
