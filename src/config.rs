//! Run configuration.
//!
//! Defaults reproduce the fixed behaviour of the cleaning run: read
//! `dataset_banco.csv`, write `cleaned_dataset_banco.csv`, show the plots.
//! A JSON file can override any field, and CLI flags override the file.

use crate::error::{CleanError, Result, ResultExt as _};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "dataset_banco.csv";
pub const DEFAULT_OUTPUT: &str = "cleaned_dataset_banco.csv";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// CSV file to clean
    pub input: PathBuf,
    /// Destination of the cleaned CSV; overwritten if present
    pub output: PathBuf,
    /// Open the plot viewer once the cleaned file is written
    pub show_plots: bool,
    /// Also write logs to the platform data directory
    pub log_to_file: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            show_plots: true,
            log_to_file: true,
        }
    }
}

impl RunConfig {
    /// Loads a configuration from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations that would overwrite the input with the output.
    pub fn validate(&self) -> Result<()> {
        if self.input.as_os_str().is_empty() || self.output.as_os_str().is_empty() {
            return Err(CleanError::Config(
                "input and output paths must not be empty".to_owned(),
            ));
        }
        if same_file(&self.input, &self.output) {
            return Err(CleanError::Config(format!(
                "output path {} is the same as the input path",
                self.output.display()
            )));
        }
        Ok(())
    }
}

/// Compares the two paths after resolving `.`/`..` and symlinks. The output
/// need not exist yet, so it is resolved through its parent directory.
fn same_file(input: &Path, output: &Path) -> bool {
    if input == output {
        return true;
    }
    match (std::fs::canonicalize(input), resolve_output(output)) {
        (Ok(input), Some(output)) => input == output,
        _ => false,
    }
}

fn resolve_output(path: &Path) -> Option<PathBuf> {
    if let Ok(resolved) = std::fs::canonicalize(path) {
        return Some(resolved);
    }
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Some(std::fs::canonicalize(parent).ok()?.join(path.file_name()?))
}
