//! Command-line entry point.
//!
//! ```text
//! main()
//!   ├─> parse flags, resolve RunConfig
//!   ├─> initialise tracing
//!   ├─> pipeline::run (console report on stdout, cleaned CSV on disk)
//!   └─> open the plot viewer unless --no-plots
//! ```

#![warn(clippy::all, rust_2018_idioms)]

mod cli;

use anyhow::{Context as _, Result};
use bank_cleaner::{analyser, logging, pipeline};
use clap::Parser as _;

fn main() -> Result<()> {
    let config = cli::Cli::parse().into_config()?;
    logging::init(config.log_to_file)?;

    let outcome = {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        pipeline::run(&config, &mut out)
            .with_context(|| format!("Cleaning {} failed", config.input.display()))?
    };

    if config.show_plots {
        // The cleaned file is already written; a missing display is not fatal.
        if let Err(e) = analyser::gui::show(outcome.plots) {
            tracing::warn!("Plot viewer unavailable: {e}");
        }
    }

    Ok(())
}
