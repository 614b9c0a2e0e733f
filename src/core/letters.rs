//! Compact set of lowercase ASCII letters
//!
//! Stored as a 26-bit mask so unions and cardinality are single instructions.

use std::fmt;

/// A set of lowercase ASCII letters (`a`..=`z`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    #[inline]
    const fn bit(letter: u8) -> u32 {
        if letter.is_ascii_lowercase() {
            1 << (letter - b'a')
        } else {
            0
        }
    }

    /// Add a letter; non-lowercase bytes are ignored
    #[inline]
    pub const fn insert(&mut self, letter: u8) {
        self.0 |= Self::bit(letter);
    }

    /// Check membership
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        let bit = Self::bit(letter);
        bit != 0 && self.0 & bit != 0
    }

    /// Union of two sets
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check whether every letter of `self` is in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Iterate letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_set_insert_and_contains() {
        let mut set = LetterSet::EMPTY;
        assert!(set.is_empty());

        set.insert(b'a');
        set.insert(b'z');
        set.insert(b'a');

        assert_eq!(set.len(), 2);
        assert!(set.contains(b'a'));
        assert!(set.contains(b'z'));
        assert!(!set.contains(b'm'));
    }

    #[test]
    fn letter_set_ignores_non_lowercase() {
        let set: LetterSet = b"A1 -".iter().copied().collect();
        assert!(set.is_empty());
        assert!(!set.contains(b'A'));
    }

    #[test]
    fn letter_set_union() {
        let first: LetterSet = b"abcdefghi".iter().copied().collect();
        let full: LetterSet = b"ijkl".iter().copied().collect();
        let short: LetterSet = b"ijk".iter().copied().collect();

        assert_eq!(first.union(full).len(), 12);
        assert_eq!(first.union(short).len(), 11);
    }

    #[test]
    fn letter_set_subset() {
        let small: LetterSet = b"ad".iter().copied().collect();
        let big: LetterSet = b"abcd".iter().copied().collect();
        assert!(small.is_subset(big));
        assert!(!big.is_subset(small));
        assert!(LetterSet::EMPTY.is_subset(small));
    }

    #[test]
    fn letter_set_display_sorted() {
        let set: LetterSet = b"gda".iter().copied().collect();
        assert_eq!(set.to_string(), "adg");
    }
}
