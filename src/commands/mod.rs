//! Command implementations

pub mod benchmark;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, BoardStats, run_benchmark};
pub use solve::{LetterSource, SolveConfig, SolveResult, solve_puzzle};
