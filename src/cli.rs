use anyhow::Result;
use bank_cleaner::config::RunConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bank-cleaner",
    about = "Clean the bank-marketing client dataset and plot its distributions"
)]
pub struct Cli {
    /// CSV file to clean [default: dataset_banco.csv]
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Where to write the cleaned CSV [default: cleaned_dataset_banco.csv]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip the plot viewer
    #[arg(long)]
    pub no_plots: bool,

    /// Path to a JSON run configuration
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Resolves the effective configuration: defaults, then the config file, then flags.
    pub fn into_config(self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };

        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if self.no_plots {
            config.show_plots = false;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory as _;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_uses_fixed_paths() -> Result<()> {
        let config = Cli::try_parse_from(["bank-cleaner"])?.into_config()?;
        assert_eq!(config, RunConfig::default());
        Ok(())
    }

    #[test]
    fn test_flags_override_defaults() -> Result<()> {
        let config = Cli::try_parse_from([
            "bank-cleaner",
            "--input",
            "raw.csv",
            "-o",
            "out.csv",
            "--no-plots",
        ])?
        .into_config()?;
        assert_eq!(config.input, PathBuf::from("raw.csv"));
        assert_eq!(config.output, PathBuf::from("out.csv"));
        assert!(!config.show_plots);
        Ok(())
    }
}
