//! Word lists for Letter Boxed solving
//!
//! Dictionaries are read from plaintext files, either streamed line by
//! line or loaded whole when several boards are solved against them.

pub mod loader;

pub use loader::{load_from_file, open_dictionary, read_words, words_from_slice};
