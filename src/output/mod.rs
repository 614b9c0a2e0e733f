//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_board, print_puzzle, print_solve_result, print_user_board,
    status_line,
};
pub use formatters::render_board;
