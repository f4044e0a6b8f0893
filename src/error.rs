//! Centralized error handling for the bank-cleaner pipeline.
//!
//! Every stage of the run reports failures through [`CleanError`]. The
//! binary turns them into an `anyhow::Error` at the top level, so a failed
//! run prints the message chain and exits before anything is written.
//!
//! ## Custom Error Types with `enum`
//!
//! ```
//! use bank_cleaner::error::CleanError;
//!
//! fn describe(err: &CleanError) -> &'static str {
//!     match err {
//!         CleanError::InvalidPath(_) => "input file is missing",
//!         CleanError::MissingColumn(_) => "dataset lacks an expected column",
//!         CleanError::DataProcessing(_) => "CSV could not be parsed",
//!         _ => "other failure",
//!     }
//! }
//! ```
//!
//! ## Context Extension Trait
//!
//! The `ResultExt` trait adds `.context()` to any `Result` whose error
//! converts into [`CleanError`]:
//!
//! ```no_run
//! use bank_cleaner::error::ResultExt as _;
//! use std::fs;
//!
//! fn read_header() -> bank_cleaner::error::Result<String> {
//!     let text = fs::read_to_string("dataset_banco.csv").context("Failed to read dataset")?;
//!     Ok(text.lines().next().unwrap_or_default().to_owned())
//! }
//! ```

use std::fmt;

/// Main error type for bank-cleaner operations.
#[derive(Debug)]
pub enum CleanError {
    /// I/O errors (reading the input, writing the output, log files)
    Io(std::io::Error),

    /// Data processing errors (Polars parsing, filtering, statistics)
    DataProcessing(String),

    /// An expected categorical or numeric column is absent
    MissingColumn(String),

    /// Input file not found or invalid path
    InvalidPath(String),

    /// Configuration errors
    Config(String),

    /// The plot viewer could not be started
    Render(String),

    /// Generic error with context
    Other(String),
}

impl fmt::Display for CleanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::DataProcessing(msg) => write!(f, "Data processing error: {msg}"),
            Self::MissingColumn(name) => write!(f, "Missing expected column: {name}"),
            Self::InvalidPath(msg) => write!(f, "Invalid path: {msg}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Render(msg) => write!(f, "Plot viewer error: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CleanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CleanError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<anyhow::Error> for CleanError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(format!("{err:#}"))
    }
}

impl From<serde_json::Error> for CleanError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

impl From<polars::error::PolarsError> for CleanError {
    fn from(err: polars::error::PolarsError) -> Self {
        Self::DataProcessing(err.to_string())
    }
}

/// Result type alias for bank-cleaner operations.
pub type Result<T> = std::result::Result<T, CleanError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<CleanError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err: CleanError = e.into();
            CleanError::Other(format!("{}: {}", msg.into(), err))
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err: CleanError = e.into();
            CleanError::Other(format!("{}: {}", f(), err))
        })
    }
}
