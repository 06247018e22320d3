//! Builder pattern API for a wordlock run.
//!
//! ```rust,ignore
//! use wordlock_core::prelude::*;
//!
//! let report = Wordlock::new("wheels.txt", "dictionary.txt")
//!     .strict(true)
//!     .run()?;
//!
//! for word in report.matched_words() {
//!     println!("{}", word);
//! }
//! ```

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::WordlockConfig;
use crate::dictionary::{open_dictionary, OversizePolicy};
use crate::error::WordlockResult;
use crate::lock::Lock;
use crate::parse::load_lock;
use crate::scan::{scan_dictionary, ScanReport};

/// Default wheel file, relative to the working directory.
pub const DEFAULT_WHEELS_FILE: &str = "wheels.txt";

/// Default dictionary file, relative to the working directory.
pub const DEFAULT_DICTIONARY_FILE: &str = "dictionary.txt";

/// Builder for configuring a run.
#[derive(Debug, Clone)]
pub struct Wordlock {
    /// Wheel specification file
    wheels: PathBuf,

    /// Dictionary file
    dictionary: PathBuf,

    /// What to do with over-long dictionary lines
    oversize_policy: OversizePolicy,
}

impl Default for Wordlock {
    fn default() -> Self {
        Self::new(DEFAULT_WHEELS_FILE, DEFAULT_DICTIONARY_FILE)
    }
}

impl Wordlock {
    /// Create a builder for the given wheel and dictionary files.
    pub fn new(wheels: impl Into<PathBuf>, dictionary: impl Into<PathBuf>) -> Self {
        Self {
            wheels: wheels.into(),
            dictionary: dictionary.into(),
            oversize_policy: OversizePolicy::Skip,
        }
    }

    /// Builder seeded from a config file; unset paths fall back to defaults.
    pub fn from_config(config: &WordlockConfig) -> Self {
        let defaults = Self::default();
        Self {
            wheels: config.wheels.clone().unwrap_or(defaults.wheels),
            dictionary: config.dictionary.clone().unwrap_or(defaults.dictionary),
            oversize_policy: config.oversize_policy(),
        }
    }

    /// Replace the wheel file.
    pub fn wheels(mut self, path: impl Into<PathBuf>) -> Self {
        self.wheels = path.into();
        self
    }

    /// Replace the dictionary file.
    pub fn dictionary(mut self, path: impl Into<PathBuf>) -> Self {
        self.dictionary = path.into();
        self
    }

    /// Abort on oversized dictionary lines instead of skipping them.
    pub fn strict(mut self, enabled: bool) -> Self {
        self.oversize_policy = if enabled {
            OversizePolicy::Abort
        } else {
            OversizePolicy::Skip
        };
        self
    }

    pub fn wheels_path(&self) -> &Path {
        &self.wheels
    }

    pub fn dictionary_path(&self) -> &Path {
        &self.dictionary
    }

    pub fn oversize_policy(&self) -> OversizePolicy {
        self.oversize_policy
    }

    /// Parse the wheel file only.
    pub fn load_lock(&self) -> WordlockResult<Lock> {
        load_lock(&self.wheels)
    }

    /// Parse the lock, then scan the dictionary against it.
    ///
    /// The lock is parsed first, so a broken lock is reported even when the
    /// dictionary is missing too.
    pub fn run(&self) -> WordlockResult<ScanReport> {
        let lock = self.load_lock()?;
        debug!(
            wheels = %self.wheels.display(),
            wheel_count = lock.wheel_count(),
            "lock loaded"
        );

        let dictionary = open_dictionary(&self.dictionary)?.with_policy(self.oversize_policy);
        scan_dictionary(&lock, dictionary)
    }
}
