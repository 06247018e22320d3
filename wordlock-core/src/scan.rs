//! Dictionary scan: match every word against the lock and aggregate.
//!
//! The scan is a single sequential pass. Each word is fully matched before
//! the next line is read. Nothing here prints; the caller decides how to
//! report the [`ScanReport`].

use std::collections::BTreeMap;
use std::io::BufRead;

use serde::Serialize;
use tracing::{debug, info};

use crate::dictionary::{Dictionary, Entry};
use crate::error::WordlockResult;
use crate::lock::{Lock, LockSummary};
use crate::matcher::alignments;
use crate::word::{Rejection, Word};

/// A dictionary word that the lock can spell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordMatch {
    pub word: String,
    /// Number of alignments that spell the word
    pub alignments: usize,
    /// Leftmost wheel (0-based) of each matching alignment
    pub offsets: Vec<usize>,
}

/// Counters for a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    /// Dictionary lines read
    pub lines: usize,
    /// Words run through the matcher
    pub tested: usize,
    /// Valid words longer than the lock
    pub too_long_for_lock: usize,
    /// Lines skipped, by reason
    pub skipped: BTreeMap<Rejection, usize>,
}

impl ScanStats {
    /// Total lines skipped for any reason.
    pub fn skipped_total(&self) -> usize {
        self.skipped.values().sum()
    }
}

/// Result of scanning a dictionary against a lock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub lock: LockSummary,
    /// Matching words in dictionary order
    pub words: Vec<WordMatch>,
    /// Sum of alignments over all matching words
    pub total: usize,
    pub stats: ScanStats,
}

impl ScanReport {
    fn new(lock: &Lock) -> Self {
        Self {
            lock: lock.summary(),
            words: Vec::new(),
            total: 0,
            stats: ScanStats::default(),
        }
    }

    /// Match one word and record it if the lock can spell it.
    ///
    /// Returns the word's alignment count. Words longer than the lock are
    /// counted in the stats and never reach the matcher.
    pub fn record(&mut self, lock: &Lock, word: Word) -> usize {
        if word.len() > lock.wheel_count() {
            self.stats.too_long_for_lock += 1;
            return 0;
        }

        self.stats.tested += 1;
        let offsets: Vec<usize> = alignments(lock, &word).collect();
        let count = offsets.len();
        if count > 0 {
            self.total += count;
            self.words.push(WordMatch {
                word: word.into_string(),
                alignments: count,
                offsets,
            });
        }
        count
    }

    /// Whether any word matched.
    pub fn has_matches(&self) -> bool {
        !self.words.is_empty()
    }

    /// Iterator over matched words.
    pub fn matched_words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|m| m.word.as_str())
    }
}

/// Scan a whole dictionary against `lock`.
///
/// Stops at the first aborting error (unreadable input or an oversized line
/// under [`crate::dictionary::OversizePolicy::Abort`]); no partial report is
/// returned in that case.
pub fn scan_dictionary<R: BufRead>(
    lock: &Lock,
    dictionary: Dictionary<R>,
) -> WordlockResult<ScanReport> {
    let mut report = ScanReport::new(lock);

    for entry in dictionary {
        report.stats.lines += 1;
        match entry? {
            Entry::Word(word) => {
                report.record(lock, word);
            }
            Entry::Skipped { line, reason } => {
                debug!(line, %reason, "skipped dictionary line");
                *report.stats.skipped.entry(reason).or_insert(0) += 1;
            }
        }
    }

    info!(
        lines = report.stats.lines,
        tested = report.stats.tested,
        matched = report.words.len(),
        total = report.total,
        "dictionary scan complete"
    );
    Ok(report)
}

/// Scan words already held in memory.
///
/// Invalid entries are skipped the same way dictionary lines are.
pub fn scan_words<I, S>(lock: &Lock, words: I) -> ScanReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = ScanReport::new(lock);
    for raw in words {
        report.stats.lines += 1;
        match Word::parse(raw.as_ref()) {
            Ok(word) => {
                report.record(lock, word);
            }
            Err(reason) => *report.stats.skipped.entry(reason).or_insert(0) += 1,
        }
    }
    report
}
