//! Wheel specification parsing.
//!
//! Format:
//!
//! ```text
//! 3        <- wheel count
//! 4        <- letters per wheel
//! abcd     <- wheel 1 (leftmost)
//! EFGH
//! ijkl     <- wheel 3 (rightmost)
//! ```
//!
//! The two counts are whitespace-separated tokens and may share a line. Wheel
//! lines start on the line after the letters-per-wheel token and must hold
//! exactly the declared number of ASCII letters (any case). A trailing `\r`
//! is dropped; no other trimming is done, so stray spaces and non-UTF-8
//! bytes are reported as invalid characters. Lines after the last wheel are
//! ignored.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IoResultExt, WordlockError, WordlockResult};
use crate::lock::Lock;
use crate::wheel::Wheel;

/// One line as read from the input, terminator removed.
#[derive(Debug)]
pub(crate) struct Line<'a> {
    /// 1-indexed line number
    pub(crate) number: usize,
    /// Raw content, cut off at the read limit
    pub(crate) bytes: &'a [u8],
    /// Full content length in bytes, including anything past the limit
    pub(crate) length: usize,
}

impl Line<'_> {
    /// True when the line ran past the read limit and `bytes` holds a prefix.
    pub(crate) fn is_truncated(&self) -> bool {
        self.bytes.len() < self.length
    }
}

/// Byte-oriented line reader that strips terminators and keeps I/O errors
/// tied to a path.
///
/// Lines are not decoded; callers decide what invalid UTF-8 means. With a
/// limit set, at most `limit` bytes of a line are buffered and the rest is
/// consumed and counted.
pub(crate) struct LineSource<R> {
    reader: R,
    origin: PathBuf,
    buf: Vec<u8>,
    line_no: usize,
    limit: Option<usize>,
}

impl<R: BufRead> LineSource<R> {
    pub(crate) fn new(reader: R, origin: impl Into<PathBuf>) -> Self {
        Self {
            reader,
            origin: origin.into(),
            buf: Vec::new(),
            line_no: 0,
            limit: None,
        }
    }

    /// Buffer at most `limit` content bytes per line.
    pub(crate) fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Next line without its `\n` / `\r\n`, or `None` at end of input.
    pub(crate) fn next_line(&mut self) -> WordlockResult<Option<Line<'_>>> {
        self.buf.clear();
        let read = match self.limit {
            // +2 leaves room for a full-length line and its "\r\n"
            Some(limit) => (&mut self.reader)
                .take(limit as u64 + 2)
                .read_until(b'\n', &mut self.buf),
            None => self.reader.read_until(b'\n', &mut self.buf),
        }
        .with_path(&self.origin)?;
        if read == 0 {
            return Ok(None);
        }
        self.line_no += 1;

        let length = if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
            self.buf.len()
        } else {
            match self.limit {
                Some(limit) if self.buf.len() > limit => {
                    let length = self.drain_line().with_path(&self.origin)?;
                    self.buf.truncate(limit);
                    length
                }
                _ => self.buf.len(),
            }
        };

        Ok(Some(Line {
            number: self.line_no,
            bytes: &self.buf,
            length,
        }))
    }

    /// Consumes the rest of an over-long line without buffering it.
    ///
    /// Returns the full content length: what is in `buf` plus everything
    /// up to the next `\n`, minus a `\r` right before it.
    fn drain_line(&mut self) -> io::Result<usize> {
        let mut length = self.buf.len();
        let mut last = self.buf.last().copied();
        loop {
            let (used, newline) = {
                let available = match self.reader.fill_buf() {
                    Ok(available) => available,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                };
                if available.is_empty() {
                    return Ok(length);
                }
                match available.iter().position(|&b| b == b'\n') {
                    Some(i) => {
                        if i > 0 {
                            last = Some(available[i - 1]);
                        }
                        length += i;
                        (i + 1, true)
                    }
                    None => {
                        last = available.last().copied();
                        length += available.len();
                        (available.len(), false)
                    }
                }
            };
            self.reader.consume(used);
            if newline {
                if last == Some(b'\r') {
                    length -= 1;
                }
                return Ok(length);
            }
        }
    }

    pub(crate) fn origin(&self) -> &Path {
        &self.origin
    }
}

/// Parse a positive count token.
fn parse_count(token: Option<&String>) -> Option<usize> {
    token
        .and_then(|t| t.parse::<usize>().ok())
        .filter(|&n| n > 0)
}

/// Read the wheel count and letters-per-wheel header.
fn read_header<R: BufRead>(source: &mut LineSource<R>) -> WordlockResult<(usize, usize)> {
    let mut tokens: Vec<String> = Vec::with_capacity(2);
    while tokens.len() < 2 {
        match source.next_line()? {
            Some(line) => tokens.extend(
                String::from_utf8_lossy(line.bytes)
                    .split_whitespace()
                    .map(String::from),
            ),
            None => break,
        }
    }

    let wheel_count =
        parse_count(tokens.first()).ok_or_else(|| WordlockError::InvalidWheelCount {
            found: tokens.first().cloned().unwrap_or_default(),
        })?;

    // Anything after the letters-per-wheel token on its line makes it unreadable
    if tokens.len() > 2 {
        return Err(WordlockError::InvalidLettersPerWheel {
            found: tokens[1..].join(" "),
        });
    }
    let letters_per_wheel =
        parse_count(tokens.get(1)).ok_or_else(|| WordlockError::InvalidLettersPerWheel {
            found: tokens.get(1).cloned().unwrap_or_default(),
        })?;

    Ok((wheel_count, letters_per_wheel))
}

/// Validate one wheel line against the declared letter count and build it.
///
/// Length overflow is checked first; then characters are checked left to
/// right, so the first bad position decides between a short line and an
/// invalid character.
pub fn parse_wheel_line(
    number: usize,
    line: &str,
    letters_per_wheel: usize,
) -> WordlockResult<Wheel> {
    let found = line.chars().count();
    if found > letters_per_wheel {
        return Err(WordlockError::TooManyLetters {
            wheel: number,
            expected: letters_per_wheel,
            found,
        });
    }

    let mut chars = line.chars();
    for position in 1..=letters_per_wheel {
        match chars.next() {
            None => {
                return Err(WordlockError::InsufficientLetters {
                    wheel: number,
                    expected: letters_per_wheel,
                    found,
                })
            }
            Some(c) if !c.is_ascii_alphabetic() => {
                return Err(WordlockError::InvalidCharacter {
                    wheel: number,
                    position,
                    character: c,
                })
            }
            Some(_) => {}
        }
    }

    Wheel::from_letters(number, line)
}

/// Parse a lock specification from any buffered reader.
///
/// `origin` names the source in I/O errors.
pub fn read_lock<R: BufRead>(reader: R, origin: impl Into<PathBuf>) -> WordlockResult<Lock> {
    let mut source = LineSource::new(reader, origin);
    let (wheel_count, letters_per_wheel) = read_header(&mut source)?;
    debug!(
        wheel_count,
        letters_per_wheel,
        origin = %source.origin().display(),
        "read lock header"
    );

    // Not preallocated from wheel_count: the count is untrusted input
    let mut wheels = Vec::new();
    for number in 1..=wheel_count {
        let wheel = match source.next_line()? {
            // Undecodable bytes become U+FFFD and fail as invalid characters
            Some(line) => {
                let text = String::from_utf8_lossy(line.bytes);
                parse_wheel_line(number, &text, letters_per_wheel)?
            }
            None => {
                return Err(WordlockError::InsufficientLetters {
                    wheel: number,
                    expected: letters_per_wheel,
                    found: 0,
                })
            }
        };
        wheels.push(wheel);
    }
    debug!(origin = %source.origin().display(), "parsed {} wheels", wheels.len());

    Ok(Lock::new(wheels)?.with_letters_per_wheel(letters_per_wheel))
}

/// Parse a lock specification held in memory.
pub fn parse_lock(text: &str) -> WordlockResult<Lock> {
    read_lock(text.as_bytes(), "<memory>")
}

/// Open and parse a wheel file.
pub fn load_lock(path: &Path) -> WordlockResult<Lock> {
    let file = File::open(path).with_path(path)?;
    read_lock(BufReader::new(file), path)
}
