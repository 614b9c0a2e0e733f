//! Letter Boxed board representation
//!
//! A Board holds twelve distinct letters split into four sides of three.
//! Consecutive letters of a word must come from different sides.

use super::letters::LetterSet;
use std::fmt;

/// Number of sides on a board
pub const SIDE_COUNT: usize = 4;

/// Number of letters on each side
pub const SIDE_LEN: usize = 3;

/// Total number of letters on a board
pub const LETTER_COUNT: usize = SIDE_COUNT * SIDE_LEN;

/// Index of a side, clockwise from the top (0 = top, 1 = right, 2 = bottom, 3 = left)
pub type SideIndex = usize;

/// Error type for invalid boards
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Input is not exactly twelve ASCII letters
    InvalidLetterFormat(String),
    /// A letter appears more than once
    DuplicateLetter(char),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLetterFormat(input) => write!(
                f,
                "Letters '{input}' are not in correct format: expected exactly {LETTER_COUNT} letters, e.g. tnlihawrudof"
            ),
            Self::DuplicateLetter(letter) => {
                write!(f, "Letter '{letter}' appears more than once on the board")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// An immutable Letter Boxed board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    sides: [[u8; SIDE_LEN]; SIDE_COUNT],
    side_sets: [LetterSet; SIDE_COUNT],
    all_letters: LetterSet,
}

impl Board {
    /// Build a board from twelve letters in clockwise order
    ///
    /// Side `i` holds characters `[3i, 3i + 3)`. Input is case-insensitive.
    ///
    /// # Errors
    /// Returns `BoardError` if:
    /// - The input is not exactly 12 ASCII letters
    /// - A letter is repeated
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::Board;
    ///
    /// let board = Board::from_letters("TNLIHAWRUDOF").unwrap();
    /// assert_eq!(board.letters(), "tnlihawrudof");
    ///
    /// assert!(Board::from_letters("short").is_err());
    /// assert!(Board::from_letters("aabcdefghijk").is_err());
    /// ```
    pub fn from_letters(letters: &str) -> Result<Self, BoardError> {
        if letters.len() != LETTER_COUNT || !letters.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(BoardError::InvalidLetterFormat(letters.to_string()));
        }

        let bytes = letters.to_ascii_lowercase().into_bytes();

        let mut all_letters = LetterSet::EMPTY;
        for &b in &bytes {
            if all_letters.contains(b) {
                return Err(BoardError::DuplicateLetter(char::from(b)));
            }
            all_letters.insert(b);
        }

        let mut sides = [[0u8; SIDE_LEN]; SIDE_COUNT];
        let mut side_sets = [LetterSet::EMPTY; SIDE_COUNT];
        for (i, chunk) in bytes.chunks_exact(SIDE_LEN).enumerate() {
            sides[i].copy_from_slice(chunk);
            side_sets[i] = chunk.iter().copied().collect();
        }

        Ok(Self {
            sides,
            side_sets,
            all_letters,
        })
    }

    /// The four sides in board order
    #[inline]
    #[must_use]
    pub const fn sides(&self) -> &[[u8; SIDE_LEN]; SIDE_COUNT] {
        &self.sides
    }

    /// Letters on a single side
    ///
    /// # Panics
    /// Panics if `index >= SIDE_COUNT`
    #[inline]
    #[must_use]
    pub const fn side(&self, index: SideIndex) -> &[u8; SIDE_LEN] {
        &self.sides[index]
    }

    /// All twelve letters in side order
    #[must_use]
    pub fn letters(&self) -> String {
        self.sides.iter().flatten().map(|&b| char::from(b)).collect()
    }

    /// Set of all board letters
    #[inline]
    #[must_use]
    pub const fn letter_set(&self) -> LetterSet {
        self.all_letters
    }

    /// Check if a letter is on the board
    #[inline]
    #[must_use]
    pub const fn contains(&self, letter: u8) -> bool {
        self.all_letters.contains(letter)
    }

    /// Find the side holding a letter
    #[must_use]
    pub fn side_of(&self, letter: u8) -> Option<SideIndex> {
        self.side_sets.iter().position(|set| set.contains(letter))
    }

    /// Sides a word may continue on, in board order
    ///
    /// With no current side (start of a word) every side is legal;
    /// otherwise every side except the current one.
    #[allow(clippy::unused_self)] // adjacency is the same for every 4x3 board
    pub fn legal_next_sides(
        &self,
        current: Option<SideIndex>,
    ) -> impl Iterator<Item = SideIndex> + use<> {
        (0..SIDE_COUNT).filter(move |&side| Some(side) != current)
    }

    /// Find the first legal next side holding `letter`
    #[must_use]
    pub fn next_side(&self, current: Option<SideIndex>, letter: u8) -> Option<SideIndex> {
        self.legal_next_sides(current)
            .find(|&side| self.side_sets[side].contains(letter))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letters())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::from_letters("abcdefghijkl").unwrap()
    }

    #[test]
    fn board_splits_into_sides_in_order() {
        let board = board();
        assert_eq!(board.side(0), b"abc");
        assert_eq!(board.side(1), b"def");
        assert_eq!(board.side(2), b"ghi");
        assert_eq!(board.side(3), b"jkl");
    }

    #[test]
    fn board_uppercase_normalized() {
        let board = Board::from_letters("ABCdefGHIjkl").unwrap();
        assert_eq!(board.letters(), "abcdefghijkl");
        assert_eq!(format!("{board}"), "abcdefghijkl");
    }

    #[test]
    fn board_invalid_length() {
        assert!(matches!(
            Board::from_letters("abcdefghijk"),
            Err(BoardError::InvalidLetterFormat(_))
        ));
        assert!(matches!(
            Board::from_letters("abcdefghijklm"),
            Err(BoardError::InvalidLetterFormat(_))
        ));
        assert!(matches!(
            Board::from_letters(""),
            Err(BoardError::InvalidLetterFormat(_))
        ));
    }

    #[test]
    fn board_invalid_characters() {
        assert!(Board::from_letters("abcdefghijk1").is_err()); // Digit
        assert!(Board::from_letters("abcdef ghijk").is_err()); // Space
        assert!(Board::from_letters("abcdéfghijk").is_err()); // Non-ASCII
    }

    #[test]
    fn board_rejects_duplicates() {
        assert_eq!(
            Board::from_letters("abcdefghijka"),
            Err(BoardError::DuplicateLetter('a'))
        );
        // Case-insensitive duplicates
        assert_eq!(
            Board::from_letters("abcdefghijkA"),
            Err(BoardError::DuplicateLetter('a'))
        );
    }

    #[test]
    fn side_of_finds_letters() {
        let board = board();
        assert_eq!(board.side_of(b'a'), Some(0));
        assert_eq!(board.side_of(b'e'), Some(1));
        assert_eq!(board.side_of(b'i'), Some(2));
        assert_eq!(board.side_of(b'l'), Some(3));
        assert_eq!(board.side_of(b'z'), None);
    }

    #[test]
    fn legal_next_sides_from_start() {
        let board = board();
        let sides: Vec<_> = board.legal_next_sides(None).collect();
        assert_eq!(sides, vec![0, 1, 2, 3]);
    }

    #[test]
    fn legal_next_sides_excludes_current() {
        let board = board();
        for current in 0..SIDE_COUNT {
            let sides: Vec<_> = board.legal_next_sides(Some(current)).collect();
            assert_eq!(sides.len(), SIDE_COUNT - 1);
            assert!(!sides.contains(&current));
        }
    }

    #[test]
    fn next_side_rejects_same_side() {
        let board = board();
        assert_eq!(board.next_side(None, b'a'), Some(0));
        assert_eq!(board.next_side(Some(0), b'b'), None);
        assert_eq!(board.next_side(Some(1), b'b'), Some(0));
        assert_eq!(board.next_side(Some(1), b'x'), None);
    }

    #[test]
    fn board_letter_set_has_all_letters() {
        let board = board();
        assert_eq!(board.letter_set().len(), LETTER_COUNT);
        assert!(board.contains(b'k'));
        assert!(!board.contains(b'm'));
    }
}
