// LogLens - main.rs
//
// Command-line front end. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation
// 3. Extraction, level summary and filtering of one log file
// 4. Printing matching entries and exporting them

use clap::Parser;
use loglens::app::analysis::{self, Analysis};
use loglens::core::export::{self, ExportFormat};
use loglens::core::filter::FilterState;
use loglens::core::parser::ParseConfig;
use loglens::platform::config::{self, PlatformPaths};
use loglens::util;
use std::path::PathBuf;
use std::process::ExitCode;

/// LogLens - extract `[timestamp] LEVEL - message` lines from a log file.
///
/// Prints a per-level summary, the entries left after filtering, and
/// exports them to CSV (or JSON when the output ends in `.json`).
#[derive(Parser, Debug)]
#[command(name = "loglens", version, about)]
struct Cli {
    /// Log file to read.
    path: PathBuf,

    /// Keep only entries with this level (uppercased before comparing).
    #[arg(short = 'l', long = "level")]
    level: Option<String>,

    /// Keep only entries whose message contains this text (case-insensitive).
    #[arg(short = 'm', long = "message")]
    message: Option<String>,

    /// Export destination (defaults to [export] output_file, then log_output.csv).
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Skip the export step.
    #[arg(long = "no-export", conflicts_with = "output")]
    no_export: bool,

    /// Directory containing config.toml (defaults to the platform config dir).
    #[arg(short = 'c', long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (config_dir, platform_fallback) = match cli.config_dir.clone() {
        Some(dir) => (dir, false),
        None => {
            let paths = PlatformPaths::resolve();
            (paths.config_dir, paths.fallback)
        }
    };
    let (app_config, config_warnings) = config::load_config(&config_dir);

    util::logging::init(cli.debug, app_config.log_level.as_deref());

    // Config resolution ran before the subscriber existed; report it now.
    if platform_fallback {
        tracing::warn!("Could not determine platform directories, using current directory");
    }
    tracing::debug!(config_dir = %config_dir.display(), "Config directory resolved");
    match app_config.loaded_from {
        Some(ref path) => tracing::info!(path = %path.display(), "Loaded config.toml"),
        None => tracing::debug!("No config.toml found; using defaults"),
    }
    for warning in &config_warnings {
        tracing::warn!("{}", warning);
    }

    tracing::info!(
        version = util::constants::APP_VERSION,
        file = %cli.path.display(),
        "LogLens starting"
    );

    match run(&cli, &app_config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Run failed");
            eprintln!("Error: {e}");
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, app_config: &config::AppConfig) -> util::error::Result<()> {
    let parse_config = ParseConfig {
        max_line_length: app_config.max_line_length,
    };

    let filter_state = FilterState {
        level: non_blank(cli.level.as_deref()),
        text_search: non_blank(cli.message.as_deref()).unwrap_or_default(),
    };

    let analysis = analysis::analyse(&cli.path, &parse_config, &filter_state)?;
    print_report(&analysis, &filter_state);

    if cli.no_export {
        return Ok(());
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| app_config.output_file.clone());
    let count = export::export_to_path(&analysis.records, &output, ExportFormat::from_path(&output))?;
    println!("\nExported {count} entries to {}", output.display());

    Ok(())
}

/// Treat empty or whitespace-only arguments as "not given".
fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn print_report(analysis: &Analysis, filter_state: &FilterState) {
    println!("Log Summary:");
    if analysis.summary.is_empty() {
        println!(" (no entries matched the log line format)");
    }
    for (level, count) in analysis.summary.sorted() {
        println!(" - {level}: {count} entries");
    }
    println!(
        " {} of {} lines parsed",
        analysis.total_records, analysis.lines_processed
    );

    if let Some(ref level) = filter_state.level {
        println!("\nShowing only {} entries", level.to_uppercase());
    }
    if !filter_state.text_search.is_empty() {
        println!("\nShowing entries containing '{}'", filter_state.text_search);
    }

    println!("\nDetailed Log Entries:");
    for record in &analysis.records {
        println!("{record}");
    }
}
