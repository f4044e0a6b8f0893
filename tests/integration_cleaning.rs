//! End-to-end runs of the cleaning pipeline on `testdata/bank_sample.csv`.
//!
//! The fixture has 14 rows: two with a missing field, one exact duplicate,
//! and one violation of each domain bound. Eight rows survive.

#![expect(clippy::unwrap_used, clippy::indexing_slicing)]

use bank_cleaner::analyser::logic::{DOMAIN_BOUNDS, load_df};
use bank_cleaner::config::RunConfig;
use bank_cleaner::error::CleanError;
use bank_cleaner::pipeline;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FIXTURE: &str = "testdata/bank_sample.csv";

fn config_for(input: &Path, output: &Path) -> RunConfig {
    RunConfig {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        show_plots: false,
        log_to_file: false,
    }
}

fn run_fixture(dir: &TempDir) -> anyhow::Result<(PathBuf, pipeline::PipelineOutcome, String)> {
    let output = dir.path().join("cleaned.csv");
    let mut console = Vec::new();
    let outcome = pipeline::run(&config_for(Path::new(FIXTURE), &output), &mut console)?;
    Ok((output, outcome, String::from_utf8(console)?))
}

fn floats(df: &DataFrame, name: &str) -> Vec<f64> {
    df.column(name)
        .unwrap()
        .as_materialized_series()
        .cast(&DataType::Float64)
        .unwrap()
        .f64()
        .unwrap()
        .into_no_null_iter()
        .collect()
}

#[test]
fn test_fixture_row_accounting() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (_, outcome, console) = run_fixture(&dir)?;
    let report = &outcome.report;

    assert_eq!(report.initial_shape, (14, 17));
    assert_eq!(report.removed_by("drop_nulls"), Some(2));
    assert_eq!(report.removed_by("drop_duplicates"), Some(1));
    assert_eq!(report.removed_by("age > 100"), Some(1));
    assert_eq!(report.removed_by("duration <= 0"), Some(1));
    assert_eq!(report.removed_by("previous >= 100"), Some(1));
    assert_eq!(report.final_shape, (8, 17));
    assert_eq!(report.initial_shape.0 - report.total_removed(), report.final_shape.0);

    assert!(console.starts_with("Initial shape: (14, 17)\nShape after dropping NA: (12, 17)\n"));
    assert!(console.contains("Length after outlier removal: 8\n"));
    assert!(console.ends_with(&format!(
        "Cleaned dataset saved as '{}'\n",
        dir.path().join("cleaned.csv").display()
    )));
    Ok(())
}

#[test]
fn test_output_respects_bounds_and_has_no_gaps() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (output, _, _) = run_fixture(&dir)?;
    let cleaned = load_df(&output)?;

    assert_eq!(cleaned.height(), 8);
    for column in cleaned.get_columns() {
        assert_eq!(column.null_count(), 0, "{} has nulls", column.name());
    }

    assert!(floats(&cleaned, "age").iter().all(|&v| v <= 100.0));
    assert!(floats(&cleaned, "duration").iter().all(|&v| v > 0.0));
    assert!(floats(&cleaned, "previous").iter().all(|&v| v < 100.0));
    for bound in DOMAIN_BOUNDS {
        let survivors = cleaned.clone().lazy().filter(bound.keep_expr()).collect()?;
        assert_eq!(survivors.height(), cleaned.height(), "{bound}");
    }

    let deduped = cleaned.unique_stable(None, UniqueKeepStrategy::First, None)?;
    assert_eq!(deduped.height(), cleaned.height());
    Ok(())
}

#[test]
fn test_boundary_values_are_kept() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (_, outcome, _) = run_fixture(&dir)?;

    let ages = floats(&outcome.cleaned, "age");
    let durations = floats(&outcome.cleaned, "duration");
    let previous = floats(&outcome.cleaned, "previous");
    assert!(ages.contains(&100.0));
    assert!(durations.contains(&1.0));
    assert!(previous.contains(&99.0));
    Ok(())
}

#[test]
fn test_output_keeps_header_and_row_order() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (output, _, _) = run_fixture(&dir)?;

    let written = std::fs::read_to_string(&output)?;
    let source = std::fs::read_to_string(FIXTURE)?;
    assert_eq!(written.lines().next(), source.lines().next());

    let first = written.lines().nth(1).unwrap();
    assert_eq!(
        first,
        "58,management,married,tertiary,no,2143,yes,no,unknown,5,may,261,1,-1,0,unknown,no"
    );

    let ages = floats(&load_df(&output)?, "age");
    assert_eq!(ages, vec![58.0, 44.0, 33.0, 28.0, 60.0, 100.0, 25.0, 52.0]);
    Ok(())
}

#[test]
fn test_second_run_is_a_no_op() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (first, _, _) = run_fixture(&dir)?;
    let second = dir.path().join("cleaned_twice.csv");

    let outcome = pipeline::run(&config_for(&first, &second), &mut std::io::sink())?;
    assert_eq!(outcome.report.total_removed(), 0);
    assert_eq!(std::fs::read_to_string(&first)?, std::fs::read_to_string(&second)?);
    Ok(())
}

#[test]
fn test_missing_column_writes_nothing() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("no_previous.csv");
    let output = dir.path().join("out.csv");
    let trimmed: String = std::fs::read_to_string(FIXTURE)?
        .lines()
        .map(|line| {
            let mut fields: Vec<&str> = line.split(',').collect();
            fields.remove(14);
            fields.join(",") + "\n"
        })
        .collect();
    std::fs::write(&input, trimmed)?;

    let result = pipeline::run(&config_for(&input, &output), &mut std::io::sink());
    assert!(matches!(result, Err(CleanError::MissingColumn(ref c)) if c.contains("previous")));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_missing_input_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let output = dir.path().join("out.csv");
    let result = pipeline::run(
        &config_for(&dir.path().join("absent.csv"), &output),
        &mut std::io::sink(),
    );
    assert!(matches!(result, Err(CleanError::InvalidPath(_))));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_plot_data_covers_every_column() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (_, outcome, _) = run_fixture(&dir)?;
    let plots = &outcome.plots;

    assert_eq!(plots.distributions.len(), 7);
    assert_eq!(plots.frequencies.len(), 10);
    assert_eq!(plots.correlation.columns.len(), 7);

    // Boxen data is taken before the bounds: the 150-year-old is still there.
    let age = &plots.distributions[0];
    assert_eq!(age.column, "age");
    assert_eq!(age.count, 11);

    // Counts are taken after the bounds.
    let y = plots.frequencies.iter().find(|c| c.column == "y").unwrap();
    assert_eq!(y.total(), 8);
    Ok(())
}

fn header() -> anyhow::Result<String> {
    Ok(std::fs::read_to_string(FIXTURE)?
        .lines()
        .next()
        .unwrap()
        .to_owned())
}

fn assert_runs_to_empty_output(input: &Path, dir: &TempDir) -> anyhow::Result<()> {
    let output = dir.path().join("cleaned.csv");
    let outcome = pipeline::run(&config_for(input, &output), &mut std::io::sink())?;

    assert_eq!(outcome.report.final_shape, (0, 17));
    assert!(outcome.profile.std_dev("age").is_some_and(f64::is_nan));
    assert!(outcome.profile.zero_variance_columns().is_empty());
    assert!(outcome.plots.correlation.data.iter().flatten().all(|c| c.is_nan()));
    assert_eq!(std::fs::read_to_string(&output)?.trim_end(), header()?);
    Ok(())
}

#[test]
fn test_header_only_input_writes_header_only_output() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("empty.csv");
    std::fs::write(&input, format!("{}\n", header()?))?;

    assert_runs_to_empty_output(&input, &dir)
}

#[test]
fn test_column_without_values_empties_the_table() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("no_ages.csv");
    let blanked: String = std::fs::read_to_string(FIXTURE)?
        .lines()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                format!("{line}\n")
            } else {
                let (_, rest) = line.split_once(',').unwrap();
                format!(",{rest}\n")
            }
        })
        .collect();
    std::fs::write(&input, blanked)?;

    assert_runs_to_empty_output(&input, &dir)
}
