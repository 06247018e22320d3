//! Sliding a word across the wheels.
//!
//! A word of length `L` on a lock of `W` wheels has `W - L + 1` alignments:
//! offset `s` lines letter `j` up with wheel `s + j`. An alignment matches when
//! every letter is on its wheel. All matching alignments are counted, not just
//! the first.
//!
//! Cost is `O((W - L + 1) * L)` membership tests, each a single mask lookup,
//! so the number of letters per wheel does not matter.

use crate::lock::Lock;
use crate::word::Word;

/// Whether `word` fits the wheels starting at `offset`.
///
/// Stops at the first letter missing from its wheel.
#[inline]
fn fits_at(lock: &Lock, word: &Word, offset: usize) -> bool {
    let wheels = &lock.wheels()[offset..offset + word.len()];
    wheels
        .iter()
        .zip(word.indices())
        .all(|(wheel, &letter)| wheel.contains_index(letter))
}

/// Offsets (0-based, leftmost wheel) at which `word` is a combination, in
/// increasing order.
///
/// Yields nothing for words longer than the lock.
pub fn alignments<'a>(lock: &'a Lock, word: &'a Word) -> impl Iterator<Item = usize> + 'a {
    let positions = (lock.wheel_count() + 1).saturating_sub(word.len());
    let positions = if word.is_empty() { 0 } else { positions };
    (0..positions).filter(move |&offset| fits_at(lock, word, offset))
}

/// Number of alignments at which `word` is a combination.
pub fn count_alignments(lock: &Lock, word: &Word) -> usize {
    alignments(lock, word).count()
}

/// Whether `word` appears anywhere on the lock.
pub fn is_combination(lock: &Lock, word: &Word) -> bool {
    alignments(lock, word).next().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lock(rows: &[&str]) -> Lock {
        Lock::from_letter_rows(rows.iter().copied()).unwrap()
    }

    fn word(s: &str) -> Word {
        Word::parse(s).unwrap()
    }

    #[test]
    fn test_short_word_counts_every_offset() {
        let lock = lock(&["ab", "ab", "ab"]);
        assert_eq!(count_alignments(&lock, &word("ab")), 2);
        assert_eq!(count_alignments(&lock, &word("ba")), 2);
        assert_eq!(count_alignments(&lock, &word("a")), 3);
        assert_eq!(count_alignments(&lock, &word("abc")), 0);
    }

    #[test]
    fn test_offsets_are_reported_in_order() {
        let lock = lock(&["c", "a", "t", "a", "t"]);
        let w = word("at");
        let found: Vec<usize> = alignments(&lock, &w).collect();
        assert_eq!(found, vec![1, 3]);
    }

    #[test]
    fn test_partial_match_does_not_count() {
        // "dog" fits wheels 0-1 but the third letter fails everywhere
        let lock = lock(&["d", "o", "x", "d", "o"]);
        assert_eq!(count_alignments(&lock, &word("dog")), 0);
        assert!(!is_combination(&lock, &word("dog")));
        assert!(is_combination(&lock, &word("do")));
    }

    #[test]
    fn test_word_length_equals_wheel_count() {
        let lock = lock(&["abc", "abc", "abc"]);
        assert_eq!(count_alignments(&lock, &word("cab")), 1);
        assert_eq!(count_alignments(&lock, &word("cad")), 0);
    }

    #[test]
    fn test_word_longer_than_lock() {
        let lock = lock(&["a", "a"]);
        assert_eq!(count_alignments(&lock, &word("aaa")), 0);
        assert_eq!(alignments(&lock, &word("aaaa")).count(), 0);
    }

    #[test]
    fn test_case_insensitive() {
        let lock = lock(&["LoCk", "abc", "kL"]);
        assert_eq!(
            count_alignments(&lock, &word("ok")),
            count_alignments(&lock, &word("OK"))
        );
        assert_eq!(count_alignments(&lock, &word("LAK")), 1);
    }

    #[test]
    fn test_matching_does_not_change_lock() {
        let lock = lock(&["ab", "bc"]);
        let before = lock.clone();
        let w = word("b");
        let first = count_alignments(&lock, &w);
        for _ in 0..10 {
            assert_eq!(count_alignments(&lock, &w), first);
        }
        assert_eq!(lock, before);
    }

    #[test]
    fn test_position_matters() {
        // Each letter must be on its own wheel, not just somewhere on the lock
        let lock = lock(&["a", "b"]);
        assert_eq!(count_alignments(&lock, &word("ab")), 1);
        assert_eq!(count_alignments(&lock, &word("ba")), 0);
    }
}
