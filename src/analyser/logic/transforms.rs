//! Row filters and the pipeline that runs them.
//!
//! Each filter only discards rows; column set, column order and the order
//! of surviving rows are left untouched.

use super::columns::{DOMAIN_BOUNDS, DomainBound};
use super::types::StepReport;
use crate::error::Result;
use polars::prelude::*;

/// A single narrowing step over the dataset.
pub trait Transform {
    /// Apply this transform to a `DataFrame`
    fn apply(&self, df: DataFrame) -> Result<DataFrame>;

    /// Short label used in reports
    fn name(&self) -> String;

    /// Human readable summary of what this transform removes
    fn description(&self) -> String;
}

/// Drop rows with a missing value in any column
#[derive(Debug, Clone, Copy, Default)]
pub struct DropNullsTransform;

impl Transform for DropNullsTransform {
    fn apply(&self, df: DataFrame) -> Result<DataFrame> {
        Ok(df.drop_nulls::<String>(None)?)
    }

    fn name(&self) -> String {
        "drop_nulls".to_owned()
    }

    fn description(&self) -> String {
        "Drop rows with any missing field".to_owned()
    }
}

/// Drop rows identical to an earlier row in every column, keeping the first
#[derive(Debug, Clone, Copy, Default)]
pub struct DropDuplicatesTransform;

impl Transform for DropDuplicatesTransform {
    fn apply(&self, df: DataFrame) -> Result<DataFrame> {
        Ok(df.unique_stable(None, UniqueKeepStrategy::First, None)?)
    }

    fn name(&self) -> String {
        "drop_duplicates".to_owned()
    }

    fn description(&self) -> String {
        "Drop exact-duplicate rows".to_owned()
    }
}

/// Keep only rows whose value satisfies a domain bound
#[derive(Debug, Clone, Copy)]
pub struct BoundFilterTransform {
    bound: DomainBound,
}

impl BoundFilterTransform {
    pub fn new(bound: DomainBound) -> Self {
        Self { bound }
    }
}

impl Transform for BoundFilterTransform {
    fn apply(&self, df: DataFrame) -> Result<DataFrame> {
        Ok(df.lazy().filter(self.bound.keep_expr()).collect()?)
    }

    fn name(&self) -> String {
        self.bound.violation()
    }

    fn description(&self) -> String {
        format!("Drop rows with {}", self.bound.violation())
    }
}

/// Transforms applied in sequence, recording row counts per step.
pub struct TransformPipeline {
    transforms: Vec<Box<dyn Transform>>,
}

impl TransformPipeline {
    pub fn new(transforms: Vec<Box<dyn Transform>>) -> Self {
        Self { transforms }
    }

    /// The fixed domain bounds, one step per bound.
    pub fn domain_bounds() -> Self {
        Self::new(
            DOMAIN_BOUNDS
                .iter()
                .map(|&b| Box::new(BoundFilterTransform::new(b)) as Box<dyn Transform>)
                .collect(),
        )
    }

    /// Apply all transforms in sequence
    pub fn apply(&self, df: DataFrame) -> Result<(DataFrame, Vec<StepReport>)> {
        let mut result = df;
        let mut reports = Vec::with_capacity(self.transforms.len());

        for transform in &self.transforms {
            let (next, report) = apply_step(transform.as_ref(), result)?;
            result = next;
            reports.push(report);
        }

        Ok((result, reports))
    }

    pub fn names(&self) -> Vec<String> {
        self.transforms.iter().map(|t| t.name()).collect()
    }
}

/// Runs one transform and reports how many rows it removed.
pub fn apply_step(transform: &dyn Transform, df: DataFrame) -> Result<(DataFrame, StepReport)> {
    let rows_before = df.height();
    let df = transform.apply(df)?;
    let report = StepReport {
        step: transform.name(),
        rows_before,
        rows_after: df.height(),
    };
    tracing::debug!(
        step = %report.step,
        removed = report.removed(),
        remaining = report.rows_after,
        "{}",
        transform.description()
    );
    Ok((df, report))
}
