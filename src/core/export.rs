// LogLens - core/export.rs
//
// CSV and JSON export of log records.
// Writers are generic over `Write`; the `*_to_path` variants own the file
// handle for the duration of the call and overwrite any existing file.

use crate::core::model::LogRecord;
use crate::util::constants::CSV_HEADER;
use crate::util::error::ExportError;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Output format for an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    /// Pick the format from the destination's extension. Anything other than
    /// `.json` (case-insensitive) is written as CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Csv,
        }
    }
}

/// Export records to CSV format.
///
/// Writes the `timestamp,level,message` header (even for an empty slice),
/// then one row per record in input order. Fields containing a comma, quote
/// or line break are quoted by the csv writer.
pub fn export_csv<W: Write>(
    records: &[LogRecord],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let csv_err = |e| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER).map_err(csv_err)?;

    let mut count = 0;
    for record in records {
        csv_writer
            .write_record([record.timestamp(), record.level(), record.message()])
            .map_err(csv_err)?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}

/// Export records to JSON format (array of objects).
pub fn export_json<W: Write>(
    records: &[LogRecord],
    mut writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(&mut writer, records).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(records.len())
}

/// Create (or truncate) `path` and write `records` to it as CSV.
pub fn export_csv_to_path(records: &[LogRecord], path: &Path) -> Result<usize, ExportError> {
    export_to_path(records, path, ExportFormat::Csv)
}

/// Create (or truncate) `path` and write `records` in `format`.
///
/// A failure part-way through leaves whatever was already written.
pub fn export_to_path(
    records: &[LogRecord],
    path: &Path,
    format: ExportFormat,
) -> Result<usize, ExportError> {
    let file = File::create(path).map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let count = match format {
        ExportFormat::Csv => export_csv(records, file, path)?,
        ExportFormat::Json => export_json(records, file, path)?,
    };

    tracing::info!(
        path = %path.display(),
        format = ?format,
        records = count,
        "Export complete"
    );

    Ok(count)
}
