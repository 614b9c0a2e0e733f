//! Random puzzle generation
//!
//! Samples plausible letter sets (a few vowels, the rest consonants) and
//! keeps the first board the dictionary can solve.

use super::engine::{Solution, solve};
use crate::core::{Board, LETTER_COUNT, SIDE_LEN};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use std::fmt;
use tracing::debug;

const VOWELS: &[u8] = b"aeiou";
const CONSONANTS: &[u8] = b"bcdfghjklmnpqrstvwxyz";

/// Vowels per board, inclusive range
const MIN_VOWELS: usize = 2;
const MAX_VOWELS: usize = 3;

/// Default cap on boards tried before giving up
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Generator settings
#[derive(Debug, Clone, Copy)]
pub struct GeneratorConfig {
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Error type for puzzle generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// No solvable board was found within the attempt cap
    AttemptsExhausted(usize),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AttemptsExhausted(attempts) => write!(
                f,
                "No solvable puzzle found after {attempts} attempts; try a larger dictionary"
            ),
        }
    }
}

impl std::error::Error for GenerateError {}

/// Sample twelve distinct letters in clockwise board order
///
/// Takes 2–3 vowels and fills the rest with consonants. A `q` without a `u`
/// is swapped for another consonant, and `q`/`u` never share a side.
pub fn random_letters<R: Rng + ?Sized>(rng: &mut R) -> String {
    let vowel_count = rng.random_range(MIN_VOWELS..=MAX_VOWELS);

    let mut letters: Vec<u8> = VOWELS.choose_multiple(rng, vowel_count).copied().collect();
    letters.extend(
        CONSONANTS
            .choose_multiple(rng, LETTER_COUNT - vowel_count)
            .copied(),
    );

    let has_u = letters.contains(&b'u');
    if !has_u && let Some(q) = letters.iter().position(|&b| b == b'q') {
        let unused: Vec<u8> = CONSONANTS
            .iter()
            .copied()
            .filter(|&b| b != b'q' && !letters.contains(&b))
            .collect();
        if let Some(&replacement) = unused.choose(rng) {
            letters[q] = replacement;
        }
    }

    letters.shuffle(rng);
    separate_q_and_u(&mut letters);

    letters.into_iter().map(char::from).collect()
}

/// Move `u` off `q`'s side so "qu" can be played
fn separate_q_and_u(letters: &mut [u8]) {
    let (Some(q), Some(u)) = (
        letters.iter().position(|&b| b == b'q'),
        letters.iter().position(|&b| b == b'u'),
    ) else {
        return;
    };

    let q_side = q / SIDE_LEN;
    if u / SIDE_LEN != q_side {
        return;
    }

    // Side order wraps, so the next side is always a different one
    let target = (q_side + 1) * SIDE_LEN % letters.len();
    letters.swap(u, target);
}

/// Generate a random board that the dictionary can solve
///
/// # Errors
///
/// Returns `GenerateError::AttemptsExhausted` if no board out of
/// `config.max_attempts` has a two-word solution.
pub fn generate<R, S>(
    rng: &mut R,
    dictionary: &[S],
    config: GeneratorConfig,
) -> Result<Solution, GenerateError>
where
    R: Rng + ?Sized,
    S: AsRef<str>,
{
    for attempt in 1..=config.max_attempts {
        let letters = random_letters(rng);
        let Ok(board) = Board::from_letters(&letters) else {
            continue;
        };

        let solution = solve(board, dictionary);
        debug!(
            attempt,
            letters = %letters,
            outcome = ?solution.outcome(),
            "generated board"
        );

        if solution.is_solved() {
            return Ok(solution);
        }
    }

    Err(GenerateError::AttemptsExhausted(config.max_attempts))
}
