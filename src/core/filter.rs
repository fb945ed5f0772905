// LogLens - core/filter.rs
//
// Level and message filters over record collections.
// Core layer: pure logic, no I/O. Every function returns a new Vec and
// leaves its input untouched; relative order is always preserved.

use crate::core::model::LogRecord;

/// Keep records whose level equals `target` uppercased.
///
/// Only the target is normalised. A record stored as `error` does not
/// match `filter_by_level(_, "error")`, because the comparison is against
/// `"ERROR"`. Logs with lower- or mixed-case levels need an exact-case
/// target that is already upper case to be found at all.
pub fn filter_by_level(records: &[LogRecord], target: &str) -> Vec<LogRecord> {
    let target = target.to_uppercase();
    records
        .iter()
        .filter(|record| record.level() == target)
        .cloned()
        .collect()
}

/// Keep records whose message contains `needle`, ignoring case on both sides.
///
/// An empty needle keeps every record.
pub fn filter_by_message(records: &[LogRecord], needle: &str) -> Vec<LogRecord> {
    let needle = needle.to_lowercase();
    records
        .iter()
        .filter(|record| message_contains(record, &needle))
        .cloned()
        .collect()
}

/// `needle_lower` must already be lowercased.
fn message_contains(record: &LogRecord, needle_lower: &str) -> bool {
    needle_lower.is_empty() || record.message().to_lowercase().contains(needle_lower)
}

/// Combined filter state. Active filters are AND-combined when applied.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Level to keep, compared as in [`filter_by_level`]. None = all levels.
    pub level: Option<String>,

    /// Case-insensitive message substring. Empty = no filter.
    pub text_search: String,
}

impl FilterState {
    /// Returns true if no filters are active.
    pub fn is_empty(&self) -> bool {
        self.level.is_none() && self.text_search.is_empty()
    }
}

/// Apply every active filter in `filter` to `records`.
pub fn apply_filters(records: &[LogRecord], filter: &FilterState) -> Vec<LogRecord> {
    if filter.is_empty() {
        return records.to_vec();
    }

    let level_upper = filter.level.as_deref().map(str::to_uppercase);
    let text_lower = filter.text_search.to_lowercase();

    let kept: Vec<LogRecord> = records
        .iter()
        .filter(|record| {
            level_upper
                .as_deref()
                .map_or(true, |level| record.level() == level)
                && message_contains(record, &text_lower)
        })
        .cloned()
        .collect();

    tracing::debug!(
        input = records.len(),
        kept = kept.len(),
        level = ?filter.level,
        text = %filter.text_search,
        "Filters applied"
    );

    kept
}
