//! # bank-cleaner
//!
//! Cleans the bank-marketing client dataset: rows with missing values and
//! exact duplicates are dropped, implausible `age`, `duration` and `previous`
//! values are filtered out, and the cleaned table is written back to CSV.
//! Along the way the run profiles the columns and prepares the data behind
//! three diagnostic figures (boxen plots, count plots and a correlation
//! heatmap), which [`analyser::gui`] can show in a native window.
//!
//! ```no_run
//! use bank_cleaner::{config::RunConfig, pipeline};
//!
//! let config = RunConfig::default();
//! let outcome = pipeline::run(&config, &mut std::io::stdout().lock())?;
//! println!("{} rows kept", outcome.cleaned.height());
//! # Ok::<(), bank_cleaner::error::CleanError>(())
//! ```
//!
//! ## Modules
//!
//! - [`analyser::logic`]: loading, filters, profiling and plot data
//! - [`analyser::gui`]: the plot viewer
//! - [`pipeline`]: the end-to-end run
//! - [`config`]: run configuration
//! - [`error`]: error type shared by the library
//! - [`logging`]: tracing setup

#![warn(clippy::all, rust_2018_idioms)]

pub mod analyser;
pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod theme;
