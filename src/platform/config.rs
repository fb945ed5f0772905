// LogLens - platform/config.rs
//
// Platform config directory resolution and config.toml loading with
// startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for LogLens configuration.
///
/// Resolution runs before logging is initialised (the config decides the log
/// level), so nothing here emits tracing events. `fallback` tells the caller
/// to report the current-directory fallback once the subscriber exists.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/loglens/ or %APPDATA%\LogLens\config\)
    pub config_dir: PathBuf,

    /// True when platform dirs could not be determined and `.` is used.
    pub fallback: bool,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        match ProjectDirs::from("", "", constants::APP_ID) {
            Some(proj_dirs) => Self {
                config_dir: proj_dirs.config_dir().to_path_buf(),
                fallback: false,
            },
            None => Self {
                config_dir: PathBuf::from("."),
                fallback: true,
            },
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored so a newer config file still loads
/// with an older binary.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[parsing]` section.
    pub parsing: ParsingSection,
    /// `[export]` section.
    pub export: ExportSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[parsing]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ParsingSection {
    /// Lines longer than this (bytes) are skipped.
    pub max_line_length: Option<usize>,
}

/// `[export]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ExportSection {
    /// Default export destination.
    pub output_file: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Practical line-length cap applied during extraction.
    pub max_line_length: usize,
    /// Export destination used when the CLI does not name one.
    pub output_file: PathBuf,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// The config.toml these values came from. None when defaults are used
    /// because the file is missing, unreadable, or unparseable.
    pub loaded_from: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_line_length: constants::DEFAULT_MAX_LINE_LENGTH,
            output_file: PathBuf::from(constants::DEFAULT_EXPORT_FILE),
            log_level: None,
            loaded_from: None,
        }
    }
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// A missing file gives defaults with no warnings (first run). An unreadable
/// or unparseable file gives defaults plus one warning, so the run still
/// proceeds but the user is told why their settings were ignored.
///
/// Called before logging is initialised, so it reports only through its
/// return value: warnings, and `AppConfig::loaded_from` for the caller to log.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            let err = ConfigError::Io {
                path: config_path.clone(),
                source: e,
            };
            warnings.push(format!("{err}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let err = ConfigError::TomlParse {
                path: config_path.clone(),
                source: e,
            };
            warnings.push(format!("{err}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    let (mut config, validation_warnings) = validate(raw);
    config.loaded_from = Some(config_path);
    warnings.extend(validation_warnings);

    (config, warnings)
}

/// Check each raw field against the named limits, accumulating all problems.
fn validate(raw: RawConfig) -> (AppConfig, Vec<String>) {
    let mut config = AppConfig::default();
    let mut warnings = Vec::new();

    if let Some(len) = raw.parsing.max_line_length {
        if (constants::MIN_MAX_LINE_LENGTH..=constants::ABSOLUTE_MAX_LINE_LENGTH).contains(&len) {
            config.max_line_length = len;
        } else {
            let err = ConfigError::ValueOutOfRange {
                field: "[parsing] max_line_length".to_string(),
                value: len.to_string(),
                expected: format!(
                    "{}-{}",
                    constants::MIN_MAX_LINE_LENGTH,
                    constants::ABSOLUTE_MAX_LINE_LENGTH
                ),
            };
            warnings.push(format!(
                "{err}. Using default ({}).",
                constants::DEFAULT_MAX_LINE_LENGTH
            ));
        }
    }

    if let Some(file) = raw.export.output_file {
        if file.trim().is_empty() {
            warnings.push(format!(
                "[export] output_file is empty. Using default ({}).",
                constants::DEFAULT_EXPORT_FILE
            ));
        } else {
            config.output_file = PathBuf::from(file);
        }
    }

    if let Some(level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            let err = ConfigError::ValueOutOfRange {
                field: "[logging] level".to_string(),
                value: level,
                expected: constants::VALID_LOG_LEVELS.join(", "),
            };
            warnings.push(format!(
                "{err}. Using default ({}).",
                constants::DEFAULT_LOG_LEVEL
            ));
        }
    }

    (config, warnings)
}
