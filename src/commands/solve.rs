//! Puzzle solving command
//!
//! Solves user-provided letters, or a generated puzzle when none are given
//! (or when the given letters have no solution and fallback is enabled).

use crate::core::Board;
use crate::solver::{GeneratorConfig, Solution, generate, solve_stream};
use crate::wordlists::{load_from_file, open_dictionary};
use anyhow::{Context, Result, bail};
use rand::Rng;
use std::path::Path;
use tracing::info;

/// Default number of solutions shown
pub const DEFAULT_TOP: usize = 5;

/// Configuration for solving a puzzle
#[derive(Debug, Clone)]
pub struct SolveConfig {
    /// Letters in clockwise order; `None` generates a random puzzle
    pub letters: Option<String>,
    /// Number of solutions to display
    pub top: usize,
    /// Display every solution instead of `top`
    pub show_all: bool,
    /// Generate a new puzzle when the given letters have no solution
    pub fallback: bool,
    pub generator: GeneratorConfig,
}

impl SolveConfig {
    #[must_use]
    pub fn new(letters: Option<String>) -> Self {
        Self {
            letters,
            top: DEFAULT_TOP,
            show_all: false,
            fallback: true,
            generator: GeneratorConfig::default(),
        }
    }

    /// How many solutions to display out of `available`
    #[must_use]
    pub fn display_count(&self, available: usize) -> usize {
        if self.show_all {
            available
        } else {
            self.top.min(available)
        }
    }
}

/// Where the solved board's letters came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterSource {
    UserProvided,
    Generated,
    /// User letters had no solution; carries them
    Fallback(String),
}

/// Result of the solve command
#[derive(Debug)]
pub struct SolveResult {
    pub source: LetterSource,
    pub solution: Solution,
}

/// Solve the configured puzzle against a dictionary file
///
/// User letters are solved by streaming the dictionary; generation loads it
/// into memory since every attempt rescans it.
///
/// # Errors
///
/// Returns an error if:
/// - The letters are not 12 distinct ASCII letters
/// - The dictionary cannot be opened
/// - The letters have no solution and fallback is disabled
/// - Generation finds no solvable puzzle within its attempt cap
pub fn solve_puzzle<R: Rng + ?Sized>(
    config: &SolveConfig,
    dictionary: &Path,
    rng: &mut R,
) -> Result<SolveResult> {
    let Some(letters) = &config.letters else {
        let solution = generate_from_file(dictionary, config.generator, rng)?;
        return Ok(SolveResult {
            source: LetterSource::Generated,
            solution,
        });
    };

    let board = Board::from_letters(letters)?;
    let lines = open_dictionary(dictionary)
        .with_context(|| format!("Failed to open dictionary {}", dictionary.display()))?;
    let solution = solve_stream(board, lines);

    if solution.is_solved() {
        return Ok(SolveResult {
            source: LetterSource::UserProvided,
            solution,
        });
    }

    if !config.fallback {
        bail!(
            "No two-word solution for '{}' ({} valid words). Try again!\n\
             This combination of letters wouldn't appear in a NYT Letter Boxed puzzle",
            solution.board,
            solution.valid_words
        );
    }

    info!(
        letters = %solution.board,
        outcome = ?solution.outcome(),
        "no solution, generating a new puzzle"
    );
    let generated = generate_from_file(dictionary, config.generator, rng)?;
    Ok(SolveResult {
        source: LetterSource::Fallback(solution.board.letters()),
        solution: generated,
    })
}

fn generate_from_file<R: Rng + ?Sized>(
    dictionary: &Path,
    config: GeneratorConfig,
    rng: &mut R,
) -> Result<Solution> {
    let words = load_from_file(dictionary)
        .with_context(|| format!("Failed to read dictionary {}", dictionary.display()))?;
    Ok(generate(rng, &words, config)?)
}
