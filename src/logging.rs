//! Logging infrastructure for bank-cleaner
//!
//! Logs go to stderr and, when enabled, to a daily-rotating file in the
//! platform data directory. The console diagnostics of a run (shapes,
//! sublevel counts, removal counts) are printed to stdout separately and
//! are not part of the log stream.
//!
//! ## Usage
//!
//! ```no_run
//! use bank_cleaner::logging;
//!
//! // Initialize once at startup
//! logging::init(true).expect("Failed to initialize logging");
//!
//! tracing::info!("Pipeline started");
//! ```

use anyhow::{Context as _, Result};
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, Layer as _, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

const APP_DIR: &str = "bank-cleaner";

/// Gets the log directory path based on platform conventions
///
/// Returns:
/// - Windows: `%APPDATA%/bank-cleaner/logs`
/// - macOS: `~/Library/Application Support/bank-cleaner/logs`
/// - Linux: `~/.local/share/bank-cleaner/logs`
pub fn get_log_dir() -> Result<PathBuf> {
    let base_dir = dirs::data_dir().context("Failed to determine data directory")?;

    let log_dir = base_dir.join(APP_DIR).join("logs");

    if !log_dir.exists() {
        std::fs::create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;
    }

    Ok(log_dir)
}

/// Initializes the logging system.
///
/// The console layer is always installed. With `to_file`, a second layer
/// writes `bank-cleaner.<date>.log` into [`get_log_dir`]; if that directory
/// is unavailable the run continues with console logging only.
///
/// # Errors
///
/// Returns error if the env filter cannot be built or a global subscriber is
/// already installed.
pub fn init(to_file: bool) -> Result<()> {
    // Default to INFO, allow override with RUST_LOG
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .context("Failed to create env filter")?;

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .compact()
        .with_filter(env_filter);

    let (file_layer, file_error) = if to_file {
        match get_log_dir().and_then(|dir| build_file_appender(&dir).map(|a| (dir, a))) {
            Ok((dir, appender)) => {
                let layer = fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .with_ansi(false)
                    .with_writer(appender)
                    .with_filter(EnvFilter::new("debug"));
                (Some((dir, layer)), None)
            }
            Err(e) => (None, Some(e)),
        }
    } else {
        (None, None)
    };

    let log_dir = file_layer.as_ref().map(|(dir, _)| dir.clone());

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer.map(|(_, layer)| layer))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    match (log_dir, file_error) {
        (Some(dir), _) => tracing::debug!("Logging initialized, log directory: {}", dir.display()),
        (None, Some(e)) => tracing::warn!("File logging disabled: {e:#}"),
        (None, None) => tracing::debug!("Logging initialized (console only)"),
    }

    Ok(())
}

fn build_file_appender(log_dir: &std::path::Path) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .max_log_files(10)
        .filename_prefix(APP_DIR)
        .filename_suffix("log")
        .build(log_dir)
        .context("Failed to create log file appender")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dir_is_app_scoped() {
        // Not every CI sandbox has a data directory.
        if let Ok(dir) = get_log_dir() {
            assert!(dir.ends_with("bank-cleaner/logs"), "unexpected log dir {}", dir.display());
            assert!(dir.is_dir());
        }
    }
}
