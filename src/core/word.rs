//! Word validation against a board
//!
//! A word is playable when every letter is on the board and no two
//! consecutive letters share a side.

use super::board::{Board, LETTER_COUNT};
use super::letters::LetterSet;
use std::fmt;

/// A word that is playable on a specific board
///
/// Only produced by [`validate`]; carries the distinct letters it covers
/// and its efficiency score.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedWord {
    text: String,
    letter_set: LetterSet,
    efficiency: f64,
}

impl ValidatedWord {
    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Distinct board letters used by the word
    #[inline]
    #[must_use]
    pub const fn letter_set(&self) -> LetterSet {
        self.letter_set
    }

    /// Efficiency score in `(0, 100]`
    #[inline]
    #[must_use]
    pub const fn efficiency(&self) -> f64 {
        self.efficiency
    }

    /// First letter of the word
    #[inline]
    #[must_use]
    pub fn first_letter(&self) -> u8 {
        self.text.as_bytes()[0]
    }

    /// Last letter of the word
    #[inline]
    #[must_use]
    pub fn last_letter(&self) -> u8 {
        self.text.as_bytes()[self.text.len() - 1]
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: empty words never validate
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for ValidatedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Efficiency of a word with `distinct` letters out of `length`
///
/// `100 * (distinct / length) * (distinct / 12)`: rewards words that repeat
/// few letters and cover much of the board.
#[must_use]
pub fn efficiency(distinct: usize, length: usize) -> f64 {
    let distinct = distinct as f64;
    100.0 * (distinct / length as f64) * (distinct / LETTER_COUNT as f64)
}

/// Validate a word against a board
///
/// Walks the word letter by letter; each letter must lie on a side other
/// than the previous letter's side. Stops at the first illegal letter.
/// Returns `None` for unplayable or empty words.
///
/// # Examples
/// ```
/// use letter_boxed::core::{Board, validate};
///
/// let board = Board::from_letters("abcdefghijkl").unwrap();
///
/// let word = validate(&board, "adg").unwrap();
/// assert_eq!(word.letter_set().len(), 3);
/// assert!((word.efficiency() - 25.0).abs() < 1e-9);
///
/// assert!(validate(&board, "add").is_none()); // d, d share a side
/// assert!(validate(&board, "axg").is_none()); // x is not on the board
/// ```
#[must_use]
pub fn validate(board: &Board, word: &str) -> Option<ValidatedWord> {
    if word.is_empty() {
        return None;
    }

    let mut current = None;
    let mut letter_set = LetterSet::EMPTY;

    for letter in word.bytes() {
        current = Some(board.next_side(current, letter)?);
        letter_set.insert(letter);
    }

    Some(ValidatedWord {
        text: word.to_string(),
        letter_set,
        efficiency: efficiency(letter_set.len(), word.len()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::from_letters("abcdefghijkl").unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn validate_simple_word() {
        let word = validate(&board(), "adg").unwrap();
        assert_eq!(word.text(), "adg");
        assert_eq!(word.letter_set().to_string(), "adg");
        assert_close(word.efficiency(), 25.0);
    }

    #[test]
    fn validate_rejects_same_side_consecutive() {
        assert!(validate(&board(), "add").is_none());
        assert!(validate(&board(), "ab").is_none());
        assert!(validate(&board(), "dgjkd").is_none());
    }

    #[test]
    fn validate_allows_side_reuse_after_other_side() {
        let word = validate(&board(), "aja").unwrap();
        assert_eq!(word.letter_set().to_string(), "aj");
        assert_close(word.efficiency(), 100.0 * (2.0 / 3.0) * (2.0 / 12.0));
    }

    #[test]
    fn validate_rejects_letters_off_board() {
        assert!(validate(&board(), "axg").is_none());
        assert!(validate(&board(), "zzz").is_none());
    }

    #[test]
    fn validate_rejects_empty_word() {
        assert!(validate(&board(), "").is_none());
    }

    #[test]
    fn validate_is_case_sensitive() {
        // Capitalized dictionary entries (proper nouns) never match
        assert!(validate(&board(), "Adg").is_none());
    }

    #[test]
    fn validate_rejects_non_ascii() {
        assert!(validate(&board(), "adé").is_none());
    }

    #[test]
    fn validate_single_letter() {
        let word = validate(&board(), "a").unwrap();
        assert_eq!(word.first_letter(), b'a');
        assert_eq!(word.last_letter(), b'a');
        assert_close(word.efficiency(), 100.0 / 12.0);
    }

    #[test]
    fn perfect_word_scores_one_hundred() {
        let word = validate(&board(), "adgjbehkcfil").unwrap();
        assert_eq!(word.letter_set().len(), 12);
        assert_close(word.efficiency(), 100.0);
    }

    #[test]
    fn long_word_with_repeats_scores_below_one_hundred() {
        let word = validate(&board(), "adgjbehkcfila").unwrap();
        assert_eq!(word.letter_set().len(), 12);
        assert!(word.efficiency() < 100.0);
    }

    #[test]
    fn word_endpoints() {
        let word = validate(&board(), "adgj").unwrap();
        assert_eq!(word.first_letter(), b'a');
        assert_eq!(word.last_letter(), b'j');
        assert_eq!(word.len(), 4);
        assert_eq!(format!("{word}"), "adgj");
    }
}
