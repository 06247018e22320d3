//! A single letter wheel, stored as a 26-bit membership mask.
//!
//! Bit `i` is set when the letter `'a' + i` appears on the wheel, so a
//! membership test is one shift and one AND no matter how many letters the
//! wheel carries.

use std::fmt;

use crate::error::{WordlockError, WordlockResult};

/// Number of letters a wheel can carry.
pub const ALPHABET_LENGTH: usize = 26;

/// Bitmask of letters on a wheel.
pub type LetterMask = u32;

/// Position of a lowercase ASCII letter in the alphabet (`'a'` is 0).
///
/// Returns `None` for anything that is not an ASCII letter. Uppercase input
/// is folded to lowercase first.
#[inline]
pub fn letter_index(letter: char) -> Option<u8> {
    if letter.is_ascii_alphabetic() {
        Some(letter.to_ascii_lowercase() as u8 - b'a')
    } else {
        None
    }
}

/// A wheel of the lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wheel {
    mask: LetterMask,
}

impl Wheel {
    /// Build a wheel from its letters.
    ///
    /// `number` is the 1-indexed wheel position, used only for error
    /// reporting. Letters are case-insensitive and repeats are harmless.
    pub fn from_letters(number: usize, letters: &str) -> WordlockResult<Self> {
        let mut mask: LetterMask = 0;
        for (i, c) in letters.chars().enumerate() {
            let index = letter_index(c).ok_or(WordlockError::InvalidCharacter {
                wheel: number,
                position: i + 1,
                character: c,
            })?;
            mask |= 1 << index;
        }
        Self::from_mask(number, mask)
    }

    /// Build a wheel from a raw mask. Bits above the 26th are ignored.
    pub fn from_mask(number: usize, mask: LetterMask) -> WordlockResult<Self> {
        let mask = mask & ((1 << ALPHABET_LENGTH) - 1);
        if mask == 0 {
            return Err(WordlockError::EmptyWheel { wheel: number });
        }
        Ok(Self { mask })
    }

    /// Whether the wheel carries the letter at alphabet `index` (0-25).
    #[inline]
    pub fn contains_index(&self, index: u8) -> bool {
        (index as usize) < ALPHABET_LENGTH && self.mask & (1 << index) != 0
    }

    /// Whether the wheel carries `letter` (case-insensitive).
    #[inline]
    pub fn contains(&self, letter: char) -> bool {
        letter_index(letter).is_some_and(|i| self.contains_index(i))
    }

    /// The raw membership mask.
    pub fn mask(&self) -> LetterMask {
        self.mask
    }

    /// Number of distinct letters on the wheel.
    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Always false; an empty wheel cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Distinct letters on the wheel, in alphabetical order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        (0..ALPHABET_LENGTH as u8)
            .filter(|&i| self.contains_index(i))
            .map(|i| (b'a' + i) as char)
    }
}

impl fmt::Display for Wheel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.letters() {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_index() {
        assert_eq!(letter_index('a'), Some(0));
        assert_eq!(letter_index('z'), Some(25));
        assert_eq!(letter_index('Q'), Some(16));
        assert_eq!(letter_index('1'), None);
        assert_eq!(letter_index('é'), None);
    }

    #[test]
    fn test_from_letters_sets_membership() {
        let wheel = Wheel::from_letters(1, "aBz").unwrap();
        assert!(wheel.contains('a'));
        assert!(wheel.contains('b'));
        assert!(wheel.contains('Z'));
        assert!(!wheel.contains('c'));
        assert_eq!(wheel.len(), 3);
        assert_eq!(wheel.to_string(), "abz");
    }

    #[test]
    fn test_duplicate_letters_are_idempotent() {
        let once = Wheel::from_letters(1, "ab").unwrap();
        let twice = Wheel::from_letters(1, "abAba").unwrap();
        assert_eq!(once, twice);
        assert_eq!(twice.len(), 2);
    }

    #[test]
    fn test_empty_wheel_rejected() {
        assert!(matches!(
            Wheel::from_letters(4, ""),
            Err(WordlockError::EmptyWheel { wheel: 4 })
        ));
        assert!(matches!(
            Wheel::from_mask(1, 1 << 30),
            Err(WordlockError::EmptyWheel { wheel: 1 })
        ));
    }

    #[test]
    fn test_invalid_character_position() {
        match Wheel::from_letters(2, "ab-d") {
            Err(WordlockError::InvalidCharacter {
                wheel,
                position,
                character,
            }) => {
                assert_eq!(wheel, 2);
                assert_eq!(position, 3);
                assert_eq!(character, '-');
            }
            other => panic!("Expected InvalidCharacter, got {:?}", other),
        }
    }

    #[test]
    fn test_full_alphabet() {
        let wheel = Wheel::from_letters(1, "abcdefghijklmnopqrstuvwxyz").unwrap();
        assert_eq!(wheel.len(), ALPHABET_LENGTH);
        assert!(('a'..='z').all(|c| wheel.contains(c)));
        assert!(!wheel.contains_index(26));
    }
}
