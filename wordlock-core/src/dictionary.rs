//! Streaming dictionary reader.
//!
//! One word per line. Lines are read one at a time and at most
//! [`MAX_LINE_BYTES`] of any line is buffered, so a dictionary of any size
//! is scanned in constant memory. Lines are classified from raw bytes: one
//! that is not valid UTF-8 is skipped as non-alphabetic.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::error::{IoResultExt, WordlockError, WordlockResult};
use crate::parse::LineSource;
use crate::word::{Rejection, Word, MAX_WORD_LENGTH};

/// Bytes buffered per line. Enough for [`MAX_WORD_LENGTH`] characters of
/// any UTF-8 width; a longer line is oversized whatever it holds.
pub const MAX_LINE_BYTES: usize = MAX_WORD_LENGTH * 4;

/// What to do with a line longer than [`MAX_WORD_LENGTH`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OversizePolicy {
    /// Skip it like any other malformed entry
    #[default]
    Skip,
    /// Fail the whole run with [`WordlockError::WordTooLong`]
    Abort,
}

/// One dictionary line, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A valid candidate word
    Word(Word),
    /// A line that was not a valid word
    Skipped {
        /// 1-indexed line number
        line: usize,
        reason: Rejection,
    },
}

/// Reader over a newline-delimited word list.
pub struct Dictionary<R> {
    source: LineSource<R>,
    policy: OversizePolicy,
}

impl<R: BufRead> Dictionary<R> {
    /// Wrap a reader. `origin` names the source in I/O errors.
    pub fn new(reader: R, origin: impl Into<PathBuf>) -> Self {
        Self {
            source: LineSource::new(reader, origin).with_limit(MAX_LINE_BYTES),
            policy: OversizePolicy::default(),
        }
    }

    /// Set the oversized line policy.
    pub fn with_policy(mut self, policy: OversizePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> OversizePolicy {
        self.policy
    }

    /// Read and classify the next line. `Ok(None)` at end of input.
    pub fn next_entry(&mut self) -> WordlockResult<Option<Entry>> {
        let (line, length, rejection) = {
            let Some(raw) = self.source.next_line()? else {
                return Ok(None);
            };
            let classified = if raw.is_truncated() {
                Err((Rejection::Oversized, raw.length))
            } else {
                match std::str::from_utf8(raw.bytes) {
                    Ok(text) => Word::parse(text).map_err(|r| (r, text.chars().count())),
                    Err(_) => Err((Rejection::NonAlphabetic, raw.length)),
                }
            };
            match classified {
                Ok(word) => return Ok(Some(Entry::Word(word))),
                Err((rejection, length)) => (raw.number, length, rejection),
            }
        };

        if rejection == Rejection::Oversized {
            match self.policy {
                OversizePolicy::Abort => {
                    return Err(WordlockError::WordTooLong {
                        line,
                        length,
                        max: MAX_WORD_LENGTH,
                    })
                }
                OversizePolicy::Skip => {
                    warn!(
                        line,
                        length,
                        origin = %self.source.origin().display(),
                        "skipping oversized dictionary line"
                    );
                }
            }
        }

        Ok(Some(Entry::Skipped {
            line,
            reason: rejection,
        }))
    }
}

impl<R: BufRead> Iterator for Dictionary<R> {
    type Item = WordlockResult<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_entry().transpose()
    }
}

/// Open a dictionary file for streaming.
pub fn open_dictionary(path: &Path) -> WordlockResult<Dictionary<BufReader<File>>> {
    let file = File::open(path).with_path(path)?;
    Ok(Dictionary::new(BufReader::new(file), path))
}
