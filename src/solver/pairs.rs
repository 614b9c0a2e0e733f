//! Two-word solution search
//!
//! Indexes the ranked words by first letter, then chains each word to the
//! words starting with its last letter, keeping pairs that cover the board.

use crate::core::{LETTER_COUNT, LetterSet, ValidatedWord};
use rustc_hash::FxHashMap;
use std::fmt;

/// Two words chained tail-to-head that together use every board letter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolutionPair<'a> {
    first: &'a ValidatedWord,
    second: &'a ValidatedWord,
}

impl<'a> SolutionPair<'a> {
    #[inline]
    #[must_use]
    pub const fn first(&self) -> &'a ValidatedWord {
        self.first
    }

    #[inline]
    #[must_use]
    pub const fn second(&self) -> &'a ValidatedWord {
        self.second
    }

    /// Distinct letters covered by both words
    #[inline]
    #[must_use]
    pub const fn letter_set(&self) -> LetterSet {
        self.first.letter_set().union(self.second.letter_set())
    }

    /// Letters typed to play the pair (sum of word lengths)
    #[inline]
    #[must_use]
    pub fn total_letters(&self) -> usize {
        self.first.len() + self.second.len()
    }

    /// Length of the rendered `"first second"` string, used for ranking
    #[inline]
    #[must_use]
    pub fn rendered_len(&self) -> usize {
        self.total_letters() + 1
    }
}

impl fmt::Display for SolutionPair<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.second)
    }
}

/// Group words by first letter, preserving their order
fn index_by_first_letter(words: &[ValidatedWord]) -> FxHashMap<u8, Vec<&ValidatedWord>> {
    let mut index: FxHashMap<u8, Vec<&ValidatedWord>> = FxHashMap::default();
    for word in words {
        index.entry(word.first_letter()).or_default().push(word);
    }
    index
}

/// Find every two-word solution, shortest first
///
/// `words` should be ranked by efficiency (as returned by the dictionary
/// filter); that order decides which first word is tried first among pairs
/// of equal length. Pairs are not deduplicated and a word may pair with
/// itself. Returns an empty list when nothing covers the board.
///
/// # Examples
/// ```
/// use letter_boxed::core::Board;
/// use letter_boxed::solver::{filter_words, find_pairs};
///
/// let board = Board::from_letters("abcdefghijkl").unwrap();
/// let words = filter_words(&board, ["adgjbehkci", "ifl", "ifk"]);
/// let pairs = find_pairs(&words);
///
/// assert_eq!(pairs.len(), 1);
/// assert_eq!(pairs[0].to_string(), "adgjbehkci ifl");
/// ```
#[must_use]
pub fn find_pairs(words: &[ValidatedWord]) -> Vec<SolutionPair<'_>> {
    let index = index_by_first_letter(words);

    let mut pairs = Vec::new();
    for first in words {
        let Some(bucket) = index.get(&first.last_letter()) else {
            continue;
        };

        pairs.extend(
            bucket
                .iter()
                .filter(|second| {
                    first.letter_set().union(second.letter_set()).len() >= LETTER_COUNT
                })
                .map(|&second| SolutionPair { first, second }),
        );
    }

    // Stable: equal lengths keep discovery order
    pairs.sort_by_key(SolutionPair::rendered_len);
    pairs
}
