//! Typed error handling for wordlock.
//!
//! Every failure the library can report is a variant of [`WordlockError`], so
//! callers can tell a broken lock specification apart from an unreadable file
//! or a bad config without string matching.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for wordlock operations.
#[derive(Error, Debug)]
pub enum WordlockError {
    /// A wheel or dictionary file could not be opened or read
    #[error("Unable to read {path}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Wheel count is zero, missing or not a number
    #[error("Invalid value for wheel count: {found:?}. Expecting number greater than 0.")]
    InvalidWheelCount { found: String },

    /// Letters-per-wheel is zero, missing or not a number
    #[error("Invalid value for letters per wheel: {found:?}. Expecting number greater than 0.")]
    InvalidLettersPerWheel { found: String },

    /// A wheel line ended before the declared number of letters
    #[error("Wheel {wheel} contained insufficient letters: expected {expected}, found {found}.")]
    InsufficientLetters {
        /// 1-indexed wheel number
        wheel: usize,
        expected: usize,
        found: usize,
    },

    /// A wheel line contained something other than a-z / A-Z
    #[error(
        "Non-alphabetical character {character:?} found on wheel {wheel} at position {position}. \
         Ensure only characters a-z or A-Z are used."
    )]
    InvalidCharacter {
        /// 1-indexed wheel number
        wheel: usize,
        /// 1-indexed column on the wheel line
        position: usize,
        character: char,
    },

    /// A wheel line held more letters than declared
    #[error("Wheel {wheel} contained too many letters: expected {expected}, found {found}.")]
    TooManyLetters {
        /// 1-indexed wheel number
        wheel: usize,
        expected: usize,
        found: usize,
    },

    /// A wheel was built from an empty letter set
    #[error("Wheel {wheel} has no letters.")]
    EmptyWheel { wheel: usize },

    /// A lock was built from zero wheels
    #[error("A lock needs at least one wheel.")]
    EmptyLock,

    /// A dictionary line exceeded the maximum word length (strict mode)
    #[error("Word on dictionary line {line} exceeded maximum length: {length} > {max}.")]
    WordTooLong { line: usize, length: usize, max: usize },

    /// Configuration file errors
    #[error("Config error at {path}: {message}")]
    Config { path: PathBuf, message: String },
}

impl WordlockError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a config error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// True for errors that describe a malformed lock specification.
    pub fn is_lock_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidWheelCount { .. }
                | Self::InvalidLettersPerWheel { .. }
                | Self::InsufficientLetters { .. }
                | Self::InvalidCharacter { .. }
                | Self::TooManyLetters { .. }
                | Self::EmptyWheel { .. }
                | Self::EmptyLock
        )
    }

    /// Check if this is a recoverable error (the run can continue).
    ///
    /// Only a broken config file is recoverable: the run falls back to
    /// defaults. Lock, I/O and strict-mode dictionary errors abort.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } | Self::Config { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Convenience type alias for wordlock results.
pub type WordlockResult<T> = Result<T, WordlockError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> WordlockResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> WordlockResult<T> {
        self.map_err(|e| WordlockError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error() {
        let err = WordlockError::io(
            PathBuf::from("/data/wheels.txt"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        );
        assert!(matches!(err, WordlockError::Io { .. }));
        assert_eq!(err.path(), Some(&PathBuf::from("/data/wheels.txt")));
        assert!(err.to_string().contains("/data/wheels.txt"));
    }

    #[test]
    fn test_lock_error_messages() {
        let err = WordlockError::InsufficientLetters {
            wheel: 2,
            expected: 3,
            found: 2,
        };
        assert!(err.to_string().contains("insufficient letters"));

        let err = WordlockError::InvalidCharacter {
            wheel: 1,
            position: 2,
            character: '7',
        };
        assert!(err.to_string().contains("Non-alphabetical character"));

        let err = WordlockError::TooManyLetters {
            wheel: 1,
            expected: 2,
            found: 4,
        };
        assert!(err.to_string().contains("too many letters"));
    }

    #[test]
    fn test_error_classification() {
        assert!(WordlockError::EmptyLock.is_lock_error());
        assert!(WordlockError::InvalidWheelCount { found: "0".into() }.is_lock_error());
        assert!(!WordlockError::EmptyLock.is_recoverable());
        assert!(WordlockError::config("wordlock.toml", "bad").is_recoverable());
        assert!(!WordlockError::WordTooLong {
            line: 3,
            length: 300,
            max: 255
        }
        .is_recoverable());
    }

    #[test]
    fn test_io_result_ext() {
        let result: std::io::Result<()> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        let wordlock_result = result.with_path("/missing/dictionary.txt");
        assert!(matches!(wordlock_result, Err(WordlockError::Io { .. })));
    }
}
