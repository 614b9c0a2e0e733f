//! Letter Boxed solving algorithms
//!
//! Dictionary filtering, two-word pair search, the pipeline tying them
//! together, and random puzzle generation.

mod engine;
pub mod filter;
pub mod generator;
pub mod pairs;

pub use engine::{Solution, SolveOutcome, solve, solve_stream};
pub use filter::{filter_stream, filter_words};
pub use generator::{GenerateError, GeneratorConfig, generate, random_letters};
pub use pairs::{SolutionPair, find_pairs};
