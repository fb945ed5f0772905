// LogLens - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogLens";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "LogLens";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Parsing limits
// =============================================================================

/// Practical cap on a single line's length in bytes. The line source buffers
/// at most this plus one byte of any line and skips the remainder, so a
/// longer line is never held in memory and counts as non-matching.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 64 * 1024; // 64 KB

/// Smallest accepted `[parsing] max_line_length`.
pub const MIN_MAX_LINE_LENGTH: usize = 256;

/// Hard upper bound on `[parsing] max_line_length`.
pub const ABSOLUTE_MAX_LINE_LENGTH: usize = 16 * 1024 * 1024; // 16 MB

/// Number of characters of a skipped line echoed in trace output.
pub const DEBUG_MAX_LINE_PREVIEW: usize = 200;

// =============================================================================
// Export
// =============================================================================

/// Fixed CSV header row.
pub const CSV_HEADER: [&str; 3] = ["timestamp", "level", "message"];

/// Destination used when neither the CLI nor config.toml names one.
pub const DEFAULT_EXPORT_FILE: &str = "log_output.csv";

// =============================================================================
// Logging
// =============================================================================

/// Default tracing filter when neither RUST_LOG, --debug nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Accepted values for `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// File names
// =============================================================================

/// Configuration file name, resolved relative to the platform config dir.
pub const CONFIG_FILE_NAME: &str = "config.toml";
