//! The cleaning run, top to bottom.
//!
//! ```text
//! load ─> drop missing ─> profile ─> drop duplicates ─> (boxen data)
//!      ─> age / duration / previous bounds ─> (count + heatmap data) ─> save
//! ```
//!
//! Console diagnostics go to the writer handed in by the caller; the plots
//! are returned as data so the viewer can draw them after the output file
//! is on disk.

use crate::analyser::logic::{
    CATEGORICAL_COLUMNS, CleaningReport, DropDuplicatesTransform, DropNullsTransform,
    NUMERIC_COLUMNS, PlotBundle, ProfileReport, StepReport, TransformPipeline, apply_step,
    calculate_correlation_matrix, distributions, frequencies, load_df, profile_df,
    require_dataset_columns, save_df,
};
use crate::config::RunConfig;
use crate::error::Result;
use polars::prelude::DataFrame;
use std::io::Write;

/// Everything a finished run produced.
pub struct PipelineOutcome {
    pub cleaned: DataFrame,
    pub report: CleaningReport,
    pub profile: ProfileReport,
    pub plots: PlotBundle,
}

/// Loads the input, cleans it, and writes the output file.
///
/// Nothing is written unless every step before the writer succeeded.
pub fn run(config: &RunConfig, out: &mut dyn Write) -> Result<PipelineOutcome> {
    tracing::info!("Loading {}", config.input.display());
    let df = load_df(&config.input)?;
    let mut outcome = clean_df(df, out)?;

    save_df(&mut outcome.cleaned, &config.output)?;
    tracing::info!(
        rows = outcome.cleaned.height(),
        "Wrote {}",
        config.output.display()
    );
    writeln!(out)?;
    writeln!(
        out,
        "Cleaned dataset saved as '{}'",
        config.output.display()
    )?;

    Ok(outcome)
}

/// Runs the filters, the profiler and the plot preparation on an in-memory table.
pub fn clean_df(df: DataFrame, out: &mut dyn Write) -> Result<PipelineOutcome> {
    require_dataset_columns(&df)?;

    let mut steps: Vec<StepReport> = Vec::new();
    let initial_shape = df.shape();
    writeln!(out, "Initial shape: {initial_shape:?}")?;

    let (df, step) = apply_step(&DropNullsTransform, df)?;
    steps.push(step);
    writeln!(out, "Shape after dropping NA: {:?}", df.shape())?;

    let profile = profile_df(&df, &CATEGORICAL_COLUMNS, &NUMERIC_COLUMNS)?;
    writeln!(out)?;
    write!(out, "{profile}")?;

    writeln!(out)?;
    writeln!(out, "Length before removing duplicates: {}", df.height())?;
    let (df, step) = apply_step(&DropDuplicatesTransform, df)?;
    steps.push(step);
    writeln!(out, "Length after removing duplicates: {}", df.height())?;

    let boxen = distributions(&df, &NUMERIC_COLUMNS)?;

    let bounds = TransformPipeline::domain_bounds();
    tracing::debug!("Applying domain bounds: {}", bounds.names().join(", "));
    let (df, bound_steps) = bounds.apply(df)?;
    for step in &bound_steps {
        writeln!(out, "Removed {} rows with {}", step.removed(), step.step)?;
    }
    steps.extend(bound_steps);
    writeln!(out)?;
    writeln!(out, "Length after outlier removal: {}", df.height())?;

    let plots = PlotBundle {
        distributions: boxen,
        frequencies: frequencies(&df, &CATEGORICAL_COLUMNS)?,
        correlation: calculate_correlation_matrix(&df, &NUMERIC_COLUMNS)?,
    };

    let report = CleaningReport {
        initial_shape,
        steps,
        final_shape: df.shape(),
    };
    tracing::info!(
        removed = report.total_removed(),
        remaining = report.final_shape.0,
        "Cleaning finished"
    );

    Ok(PipelineOutcome {
        cleaned: df,
        report,
        profile,
        plots,
    })
}
