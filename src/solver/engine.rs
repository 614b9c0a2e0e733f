//! Solving pipeline: board + dictionary → ranked solutions

use super::filter::{filter_stream, filter_words};
use super::pairs::find_pairs;
use crate::core::{Board, ValidatedWord};
use std::io;
use tracing::info;

/// Why a board produced no solutions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    /// At least one two-word solution exists
    Solved,
    /// No dictionary word is playable on the board
    NoValidWords,
    /// Words are playable but no pair covers the board
    NoSolutionPairs,
}

/// Result of running the pipeline on one board
#[derive(Debug, Clone)]
pub struct Solution {
    pub board: Board,
    pub valid_words: usize,
    /// Ranked `"first second"` strings, shortest first
    pub pairs: Vec<String>,
}

impl Solution {
    fn from_words(board: Board, words: &[ValidatedWord]) -> Self {
        let pairs: Vec<String> = find_pairs(words).iter().map(ToString::to_string).collect();

        info!(
            board = %board,
            valid_words = words.len(),
            pairs = pairs.len(),
            "board solved"
        );

        Self {
            board,
            valid_words: words.len(),
            pairs,
        }
    }

    #[must_use]
    pub fn outcome(&self) -> SolveOutcome {
        if self.valid_words == 0 {
            SolveOutcome::NoValidWords
        } else if self.pairs.is_empty() {
            SolveOutcome::NoSolutionPairs
        } else {
            SolveOutcome::Solved
        }
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.outcome() == SolveOutcome::Solved
    }

    /// Shortest solution, if any
    #[must_use]
    pub fn best(&self) -> Option<&str> {
        self.pairs.first().map(String::as_str)
    }
}

/// Solve a board against an in-memory dictionary
///
/// # Examples
/// ```
/// use letter_boxed::core::Board;
/// use letter_boxed::solver::solve;
///
/// let board = Board::from_letters("abcdefghijkl").unwrap();
/// let solution = solve(board, &["adgjbehkci", "ifl"]);
///
/// assert_eq!(solution.valid_words, 2);
/// assert_eq!(solution.best(), Some("adgjbehkci ifl"));
/// ```
pub fn solve<S: AsRef<str>>(board: Board, dictionary: &[S]) -> Solution {
    let words = filter_words(&board, dictionary);
    Solution::from_words(board, &words)
}

/// Solve a board, reading the dictionary one line at a time
///
/// A read error stops the scan; words read before it are still used.
pub fn solve_stream<I>(board: Board, lines: I) -> Solution
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let words = filter_stream(&board, lines);
    Solution::from_words(board, &words)
}
