//! Validated, lowercase dictionary words.

use std::fmt;

use serde::Serialize;

use crate::wheel::letter_index;

/// Longest word the dictionary accepts.
pub const MAX_WORD_LENGTH: usize = 255;

/// Why a dictionary line was not turned into a [`Word`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// Blank line
    Empty,
    /// Contains a character outside a-z / A-Z
    NonAlphabetic,
    /// Longer than [`MAX_WORD_LENGTH`]
    Oversized,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty line"),
            Self::NonAlphabetic => write!(f, "non-alphabetic characters"),
            Self::Oversized => write!(f, "exceeds {} characters", MAX_WORD_LENGTH),
        }
    }
}

/// A candidate word: 1 to [`MAX_WORD_LENGTH`] lowercase ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    /// Alphabet index (0-25) of each letter
    indices: Vec<u8>,
}

impl Word {
    /// Validate and lowercase a raw dictionary entry.
    ///
    /// No trimming happens here: a line with surrounding spaces is
    /// non-alphabetic. Callers strip line terminators.
    pub fn parse(raw: &str) -> Result<Self, Rejection> {
        if raw.is_empty() {
            return Err(Rejection::Empty);
        }
        // Oversized is decided on characters, so a long non-ASCII line still
        // counts as oversized rather than non-alphabetic.
        if raw.chars().count() > MAX_WORD_LENGTH {
            return Err(Rejection::Oversized);
        }
        let indices = raw
            .chars()
            .map(letter_index)
            .collect::<Option<Vec<u8>>>()
            .ok_or(Rejection::NonAlphabetic)?;

        Ok(Self {
            text: raw.to_ascii_lowercase(),
            indices,
        })
    }

    /// The lowercase word.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Alphabet indices of the letters, in order.
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Always false; an empty word cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = Rejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
