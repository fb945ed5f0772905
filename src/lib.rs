// LogLens - lib.rs
//
// Library entry point. Front ends call the five collaborator functions
// re-exported below; the `loglens` binary in `main.rs` is one such front end.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;

use crate::core::parser::ParseConfig;
use crate::util::error::ParseError;
use std::path::Path;

pub use crate::core::export::export_csv_to_path as export_csv;
pub use crate::core::filter::{filter_by_level, filter_by_message};
pub use crate::core::model::LogRecord;
pub use crate::core::summary::count_by_level;

/// Extract every well-formed record from the log file at `path`, in file
/// order, using the default line-length cap.
///
/// Use [`app::analysis::extract`] to supply a different [`ParseConfig`].
pub fn extract(path: &Path) -> Result<Vec<LogRecord>, ParseError> {
    app::analysis::extract(path, &ParseConfig::default())
}
