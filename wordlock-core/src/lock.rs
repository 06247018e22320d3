//! The lock: an ordered row of wheels, leftmost first.

use serde::Serialize;

use crate::error::{WordlockError, WordlockResult};
use crate::wheel::Wheel;

/// A combination lock built from letter wheels.
///
/// Immutable once built. Matching only ever reads it, so a single lock can be
/// shared by reference across any number of words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lock {
    wheels: Vec<Wheel>,
    /// Letters declared per wheel in the specification it was parsed from
    letters_per_wheel: Option<usize>,
}

impl Lock {
    /// Create a lock from its wheels.
    pub fn new(wheels: Vec<Wheel>) -> WordlockResult<Self> {
        if wheels.is_empty() {
            return Err(WordlockError::EmptyLock);
        }
        Ok(Self {
            wheels,
            letters_per_wheel: None,
        })
    }

    /// Create a lock from one letter string per wheel.
    ///
    /// Convenience for callers that already hold the letters in memory; no
    /// per-wheel length check is applied (see [`crate::parse`] for that).
    pub fn from_letter_rows<I, S>(rows: I) -> WordlockResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let wheels = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| Wheel::from_letters(i + 1, row.as_ref()))
            .collect::<WordlockResult<Vec<_>>>()?;
        Self::new(wheels)
    }

    pub(crate) fn with_letters_per_wheel(mut self, letters_per_wheel: usize) -> Self {
        self.letters_per_wheel = Some(letters_per_wheel);
        self
    }

    /// Number of wheels.
    pub fn wheel_count(&self) -> usize {
        self.wheels.len()
    }

    /// The wheels, leftmost first.
    pub fn wheels(&self) -> &[Wheel] {
        &self.wheels
    }

    /// Wheel at `index` (0 is leftmost).
    pub fn wheel(&self, index: usize) -> Option<&Wheel> {
        self.wheels.get(index)
    }

    /// Letters per wheel declared by the wheel file, if parsed from one.
    pub fn letters_per_wheel(&self) -> Option<usize> {
        self.letters_per_wheel
    }

    /// Serializable summary of the lock.
    pub fn summary(&self) -> LockSummary {
        LockSummary {
            wheel_count: self.wheel_count(),
            letters_per_wheel: self.letters_per_wheel,
            wheels: self.wheels.iter().map(|w| w.to_string()).collect(),
        }
    }
}

/// Lock description included in JSON reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LockSummary {
    pub wheel_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letters_per_wheel: Option<usize>,
    /// Distinct letters of each wheel, alphabetical
    pub wheels: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_lock_rejected() {
        assert!(matches!(Lock::new(Vec::new()), Err(WordlockError::EmptyLock)));
        assert!(matches!(
            Lock::from_letter_rows(Vec::<&str>::new()),
            Err(WordlockError::EmptyLock)
        ));
    }

    #[test]
    fn test_from_letter_rows() {
        let lock = Lock::from_letter_rows(["ab", "cd", "ef"]).unwrap();
        assert_eq!(lock.wheel_count(), 3);
        assert!(lock.wheel(1).unwrap().contains('d'));
        assert!(lock.wheel(3).is_none());
        assert_eq!(lock.letters_per_wheel(), None);
    }

    #[test]
    fn test_from_letter_rows_reports_wheel_number() {
        assert!(matches!(
            Lock::from_letter_rows(["ab", ""]),
            Err(WordlockError::EmptyWheel { wheel: 2 })
        ));
    }

    #[test]
    fn test_summary() {
        let lock = Lock::from_letter_rows(["ba", "zz"])
            .unwrap()
            .with_letters_per_wheel(2);
        let summary = lock.summary();
        assert_eq!(summary.wheel_count, 2);
        assert_eq!(summary.letters_per_wheel, Some(2));
        assert_eq!(summary.wheels, vec!["ab".to_string(), "z".to_string()]);
    }
}
