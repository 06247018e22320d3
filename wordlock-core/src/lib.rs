//! wordlock-core: find the dictionary words a letter-wheel lock can spell.
//!
//! A lock is a row of wheels, each carrying a set of letters. A word is a
//! combination when it can be lined up across consecutive wheels with every
//! letter present on the wheel beneath it. Shorter words can slide along the
//! lock, and every position that works is counted.
//!
//! # Quick Start
//!
//! Use the [`prelude`] module for convenient imports:
//!
//! ```rust,ignore
//! use wordlock_core::prelude::*;
//!
//! let report = Wordlock::new("wheels.txt", "dictionary.txt").run()?;
//! for word in report.matched_words() {
//!     println!("{}", word);
//! }
//! println!("Found {} words.", report.total);
//! ```
//!
//! # Module Organization
//!
//! - [`wheel`]: 26-bit letter membership per wheel
//! - [`lock`]: Ordered wheels
//! - [`matcher`]: Alignment search for a single word
//! - [`parse`]: Wheel file parsing and validation
//! - [`word`]: Dictionary word validation
//! - [`dictionary`]: Streaming dictionary reader
//! - [`scan`]: Whole-dictionary scan and totals
//! - [`report`]: Plain and JSON output
//! - [`builder`]: Fluent API over files on disk
//! - [`error`]: Typed error handling

pub mod builder;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod lock;
pub mod logging;
pub mod matcher;
pub mod parse;
pub mod prelude;
pub mod report;
pub mod scan;
pub mod wheel;
pub mod word;

// ============================================================================
// Explicit Re-exports
// ============================================================================

// Error types
pub use error::{IoResultExt, WordlockError, WordlockResult};

// Builder API
pub use builder::{Wordlock, DEFAULT_DICTIONARY_FILE, DEFAULT_WHEELS_FILE};

// Configuration
pub use config::{
    load_config, load_config_file, OutputConfig, WordlockConfig, CONFIG_FILE_NAME,
};

// Lock model
pub use lock::{Lock, LockSummary};
pub use wheel::{letter_index, LetterMask, Wheel, ALPHABET_LENGTH};

// Matching
pub use matcher::{alignments, count_alignments, is_combination};

// Parsing
pub use parse::{load_lock, parse_lock, parse_wheel_line, read_lock};

// Dictionary
pub use dictionary::{open_dictionary, Dictionary, Entry, OversizePolicy, MAX_LINE_BYTES};
pub use word::{Rejection, Word, MAX_WORD_LENGTH};

// Scanning
pub use scan::{scan_dictionary, scan_words, ScanReport, ScanStats, WordMatch};

// Logging
pub use logging::init_structured_logging;

// Reporting
pub use report::{write_json, write_plain};
