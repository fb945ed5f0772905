// LogLens - app/analysis.rs
//
// End-to-end pipeline for one log file:
//   read_lines -> extract_entries -> {count_by_level, apply_filters}
//
// Everything is passed by value between stateless functions; nothing here
// holds records between calls.

use crate::core::filter::{self, FilterState};
use crate::core::model::LogRecord;
use crate::core::parser::{self, ParseConfig, ParseResult};
use crate::core::summary::LevelSummary;
use crate::platform::fs;
use crate::util::error::ParseError;
use std::path::Path;
use std::time::{Duration, Instant};

/// Read `path` and return every record it contains, in file order.
///
/// Fails only on I/O (missing file, permission denied, read error).
/// Lines that do not match the pattern are dropped.
pub fn extract(path: &Path, config: &ParseConfig) -> Result<Vec<LogRecord>, ParseError> {
    extract_file(path, config).map(|result| result.records)
}

/// As [`extract`], but keeps the line counters.
pub fn extract_file(path: &Path, config: &ParseConfig) -> Result<ParseResult, ParseError> {
    let io_err = |source| ParseError::Io {
        file: path.to_path_buf(),
        source,
    };

    let lines = fs::read_lines(path, config.max_line_length).map_err(io_err)?;
    parser::extract_entries(lines).map_err(io_err)
}

/// Outcome of analysing one file.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Level counts over all extracted records (before filtering).
    pub summary: LevelSummary,
    /// Records left after the filter was applied, in file order.
    pub records: Vec<LogRecord>,
    /// Number of records extracted before filtering.
    pub total_records: usize,
    pub lines_processed: u64,
    pub lines_skipped: u64,
    pub duration: Duration,
}

/// Extract, summarise and filter `path` in one pass over the file.
pub fn analyse(
    path: &Path,
    config: &ParseConfig,
    filter_state: &FilterState,
) -> Result<Analysis, ParseError> {
    let started = Instant::now();
    let parsed = extract_file(path, config)?;

    let summary = LevelSummary::from_records(&parsed.records);
    let records = filter::apply_filters(&parsed.records, filter_state);

    let analysis = Analysis {
        summary,
        total_records: parsed.records.len(),
        records,
        lines_processed: parsed.lines_processed,
        lines_skipped: parsed.lines_skipped,
        duration: started.elapsed(),
    };

    tracing::info!(
        file = %path.display(),
        records = analysis.total_records,
        kept = analysis.records.len(),
        skipped = analysis.lines_skipped,
        elapsed_ms = analysis.duration.as_millis() as u64,
        "Analysis complete"
    );

    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
[2025-04-11 14:23:10] INFO - System started successfully.
garbled line with no brackets
[2025-04-11 14:25:03] ERROR - Failed to connect to database.
";

    fn sample_file() -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample_log.txt");
        std::fs::write(&path, SAMPLE).unwrap();
        (dir, path)
    }

    #[test]
    fn test_extract_from_file() {
        let (_dir, path) = sample_file();
        let records = extract(&path, &ParseConfig::default()).unwrap();
        assert_eq!(
            records,
            vec![
                LogRecord::new("2025-04-11 14:23:10", "INFO", "System started successfully."),
                LogRecord::new("2025-04-11 14:25:03", "ERROR", "Failed to connect to database."),
            ]
        );
    }

    #[test]
    fn test_extract_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.log");
        match extract(&missing, &ParseConfig::default()) {
            Err(ParseError::Io { file, source }) => {
                assert_eq!(file, missing);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_extract_file_applies_line_cap() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("long.log");
        let long = format!("[t] INFO - {}", "x".repeat(4096));
        std::fs::write(&path, format!("{long}\n[t] WARN - short\n")).unwrap();

        let config = ParseConfig {
            max_line_length: 256,
        };
        let result = extract_file(&path, &config).unwrap();
        assert_eq!(result.records, vec![LogRecord::new("t", "WARN", "short")]);
        assert_eq!(result.lines_skipped, 1);

        let uncapped = extract_file(&path, &ParseConfig::default()).unwrap();
        assert_eq!(uncapped.records.len(), 2);
    }

    #[test]
    fn test_analyse_summarises_before_filtering() {
        let (_dir, path) = sample_file();
        let filter_state = FilterState {
            level: Some("error".to_string()),
            ..Default::default()
        };
        let analysis = analyse(&path, &ParseConfig::default(), &filter_state).unwrap();

        assert_eq!(analysis.total_records, 2);
        assert_eq!(analysis.summary.get("INFO"), 1);
        assert_eq!(analysis.summary.get("ERROR"), 1);
        assert_eq!(analysis.records.len(), 1);
        assert_eq!(analysis.records[0].level(), "ERROR");
        assert_eq!(analysis.lines_processed, 3);
        assert_eq!(analysis.lines_skipped, 1);
    }
}
