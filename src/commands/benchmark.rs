//! Benchmark command
//!
//! Measures how often random boards are solvable against a dictionary.

use crate::core::Board;
use crate::solver::{random_letters, solve};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    /// Number of random boards to solve
    pub boards: usize,
    /// Board `i` is generated from seed `seed + i`
    pub seed: u64,
    pub show_progress: bool,
}

/// Statistics for a single board
#[derive(Debug, Clone)]
pub struct BoardStats {
    pub letters: String,
    pub valid_words: usize,
    pub pairs: usize,
    /// Rendered length of the shortest solution
    pub shortest: Option<usize>,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_boards: usize,
    pub solvable: usize,
    pub average_valid_words: f64,
    pub average_pairs: f64,
    /// Shortest-solution length → number of boards
    pub shortest_distribution: HashMap<usize, usize>,
    pub boards: Vec<BoardStats>,
    pub duration: Duration,
    pub boards_per_second: f64,
}

fn board_stats(dictionary: &[String], seed: u64) -> Option<BoardStats> {
    let letters = random_letters(&mut StdRng::seed_from_u64(seed));
    let board = Board::from_letters(&letters).ok()?;
    let solution = solve(board, dictionary);

    Some(BoardStats {
        letters,
        valid_words: solution.valid_words,
        pairs: solution.pairs.len(),
        shortest: solution.best().map(str::len),
    })
}

/// Solve `config.boards` random boards in parallel
///
/// Each board is seeded independently, so results do not depend on thread
/// scheduling.
#[must_use]
pub fn run_benchmark(dictionary: &[String], config: BenchmarkConfig) -> BenchmarkResult {
    let start = Instant::now();

    let pb = if config.show_progress {
        ProgressBar::new(config.boards as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let boards: Vec<BoardStats> = (0..config.boards as u64)
        .into_par_iter()
        .filter_map(|i| {
            let stats = board_stats(dictionary, config.seed.wrapping_add(i));
            pb.inc(1);
            stats
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let total_boards = boards.len();
    let solvable = boards.iter().filter(|b| b.pairs > 0).count();

    let mut shortest_distribution: HashMap<usize, usize> = HashMap::new();
    for len in boards.iter().filter_map(|b| b.shortest) {
        *shortest_distribution.entry(len).or_insert(0) += 1;
    }

    let average = |total: usize| {
        if total_boards == 0 {
            0.0
        } else {
            total as f64 / total_boards as f64
        }
    };

    BenchmarkResult {
        total_boards,
        solvable,
        average_valid_words: average(boards.iter().map(|b| b.valid_words).sum()),
        average_pairs: average(boards.iter().map(|b| b.pairs).sum()),
        shortest_distribution,
        boards,
        duration,
        boards_per_second: total_boards as f64 / duration.as_secs_f64(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn config(boards: usize) -> BenchmarkConfig {
        BenchmarkConfig {
            boards,
            seed: 17,
            show_progress: false,
        }
    }

    fn sample_dictionary() -> Vec<String> {
        words_from_slice(&[
            "ace", "bad", "cab", "dog", "echo", "fig", "glad", "hint", "jolt", "kiwi", "lamp",
            "mango", "nest", "opal", "quip", "rust", "salt", "tide", "urge", "vow", "wax", "yak",
            "zone",
        ])
    }

    #[test]
    fn benchmark_runs() {
        let result = run_benchmark(&sample_dictionary(), config(20));

        assert_eq!(result.total_boards, 20);
        assert_eq!(result.boards.len(), 20);
        assert!(result.solvable <= result.total_boards);
        assert!(result.average_valid_words >= 0.0);
    }

    #[test]
    fn benchmark_distribution_sums_to_solvable() {
        let result = run_benchmark(&sample_dictionary(), config(20));

        let distribution_sum: usize = result.shortest_distribution.values().sum();
        assert_eq!(distribution_sum, result.solvable);
    }

    #[test]
    fn benchmark_is_deterministic_for_seed() {
        let dictionary = sample_dictionary();
        let first = run_benchmark(&dictionary, config(10));
        let second = run_benchmark(&dictionary, config(10));

        let letters = |r: &BenchmarkResult| {
            r.boards
                .iter()
                .map(|b| b.letters.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(letters(&first), letters(&second));
        assert_eq!(first.solvable, second.solvable);
    }

    #[test]
    fn benchmark_empty_run() {
        let result = run_benchmark(&sample_dictionary(), config(0));

        assert_eq!(result.total_boards, 0);
        assert_eq!(result.solvable, 0);
        assert!(result.average_pairs.abs() < f64::EPSILON);
    }
}
