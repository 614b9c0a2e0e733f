//! Interactive TUI for browsing puzzles and their solutions

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
