// LogLens - core/summary.rs
//
// Frequency counts over extracted records.
// Core layer: pure logic, no I/O.

use crate::core::model::LogRecord;
use std::collections::HashMap;

/// Count records per level string.
///
/// Keys are the levels exactly as captured, so `INFO` and `info` are counted
/// separately. No level vocabulary is assumed.
pub fn count_by_level(records: &[LogRecord]) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.level().to_string()).or_insert(0) += 1;
    }
    counts
}

/// Per-level counts for one extraction run, with display helpers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelSummary {
    counts: HashMap<String, usize>,
}

impl LevelSummary {
    pub fn from_records(records: &[LogRecord]) -> Self {
        Self {
            counts: count_by_level(records),
        }
    }

    pub fn get(&self, level: &str) -> usize {
        self.counts.get(level).copied().unwrap_or(0)
    }

    /// Sum of all counts; equals the number of records summarised.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Levels ordered by count (highest first), ties broken alphabetically.
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut rows: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(level, count)| (level.as_str(), *count))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        rows
    }
}
