// LogLens - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Log Record (output of extraction)
// =============================================================================

/// A single log event extracted from one matching line.
///
/// All three fields are captured verbatim from the source line. Records are
/// immutable once built: fields are private and exposed through accessors,
/// so filters and exporters can only ever produce new collections.
///
/// Field order matters: serde uses it for the CSV column order when records
/// are read back with `csv::Reader::deserialize`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogRecord {
    timestamp: String,
    level: String,
    message: String,
}

impl LogRecord {
    pub fn new(
        timestamp: impl Into<String>,
        level: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            level: level.into(),
            message: message.into(),
        }
    }

    /// Timestamp text exactly as it appeared between the brackets.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Level token with its original case.
    pub fn level(&self) -> &str {
        &self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Renders the record back in its source shape: `[ts] LEVEL - message`.
impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} - {}", self.timestamp, self.level, self.message)
    }
}

// =============================================================================
// Source Line (input to extraction)
// =============================================================================

/// One line handed to the extractor by a line source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLine {
    /// A line within the length cap, already trimmed.
    Text(String),

    /// A line longer than the cap. Its bytes were discarded while reading,
    /// only the raw length (excluding the terminator) is kept.
    Oversized { bytes: u64 },
}

impl From<String> for SourceLine {
    fn from(line: String) -> Self {
        Self::Text(line)
    }
}
