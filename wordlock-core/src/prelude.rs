//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use wordlock_core::prelude::*;
//! ```

// Errors
pub use crate::error::{WordlockError, WordlockResult};

// Lock model and matching
pub use crate::lock::Lock;
pub use crate::matcher::{alignments, count_alignments};
pub use crate::wheel::Wheel;
pub use crate::word::Word;

// Input
pub use crate::dictionary::{Dictionary, OversizePolicy};
pub use crate::parse::{load_lock, parse_lock};

// Scanning
pub use crate::scan::{scan_dictionary, ScanReport};

// Configuration
pub use crate::config::{load_config, WordlockConfig};

// Builder API
pub use crate::builder::Wordlock;
