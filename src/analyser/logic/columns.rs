//! Column conventions of the bank-marketing dataset and the domain bounds
//! used to discard implausible rows.

use crate::error::{CleanError, Result};
use polars::prelude::*;
use std::fmt;

/// Columns whose values come from a small fixed set of labels.
pub const CATEGORICAL_COLUMNS: [&str; 10] = [
    "job",
    "marital",
    "education",
    "default",
    "housing",
    "loan",
    "contact",
    "month",
    "poutcome",
    "y",
];

/// Columns holding continuous or count-like quantities.
pub const NUMERIC_COLUMNS: [&str; 7] = [
    "age", "balance", "day", "duration", "campaign", "pdays", "previous",
];

/// Fixed, manually chosen bounds, applied in this order.
pub const DOMAIN_BOUNDS: [DomainBound; 3] = [
    DomainBound::new("age", BoundRule::AtMost(100.0)),
    DomainBound::new("duration", BoundRule::GreaterThan(0.0)),
    DomainBound::new("previous", BoundRule::LessThan(100.0)),
];

/// Which values of a column are plausible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundRule {
    /// keep `v <= limit`
    AtMost(f64),
    /// keep `v > limit`
    GreaterThan(f64),
    /// keep `v < limit`
    LessThan(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainBound {
    pub column: &'static str,
    pub rule: BoundRule,
}

impl DomainBound {
    pub const fn new(column: &'static str, rule: BoundRule) -> Self {
        Self { column, rule }
    }

    /// Expression that is true for rows to keep.
    pub fn keep_expr(&self) -> Expr {
        let value = col(self.column);
        match self.rule {
            BoundRule::AtMost(limit) => value.lt_eq(lit(limit)),
            BoundRule::GreaterThan(limit) => value.gt(lit(limit)),
            BoundRule::LessThan(limit) => value.lt(lit(limit)),
        }
    }

    /// The condition under which a row is discarded, e.g. `age > 100`.
    pub fn violation(&self) -> String {
        let (op, limit) = match self.rule {
            BoundRule::AtMost(limit) => (">", limit),
            BoundRule::GreaterThan(limit) => ("<=", limit),
            BoundRule::LessThan(limit) => (">=", limit),
        };
        format!("{} {op} {limit}", self.column)
    }
}

impl fmt::Display for DomainBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (op, limit) = match self.rule {
            BoundRule::AtMost(limit) => ("<=", limit),
            BoundRule::GreaterThan(limit) => (">", limit),
            BoundRule::LessThan(limit) => ("<", limit),
        };
        write!(f, "{} {op} {limit}", self.column)
    }
}

/// Fails with [`CleanError::MissingColumn`] for the first expected column the frame lacks.
pub fn require_columns(df: &DataFrame, names: &[&str]) -> Result<()> {
    for name in names {
        if df.column(name).is_err() {
            return Err(CleanError::MissingColumn((*name).to_owned()));
        }
    }
    Ok(())
}

/// Checks for every categorical and numeric column of the dataset.
pub fn require_dataset_columns(df: &DataFrame) -> Result<()> {
    require_columns(df, &CATEGORICAL_COLUMNS)?;
    require_columns(df, &NUMERIC_COLUMNS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_sets_are_disjoint() {
        for name in CATEGORICAL_COLUMNS {
            assert!(!NUMERIC_COLUMNS.contains(&name), "{name} is in both sets");
        }
    }

    #[test]
    fn test_bounds_at_their_limits() -> anyhow::Result<()> {
        let df = df!(
            "age" => &[100.0_f64, 100.5],
            "duration" => &[1.0_f64, 0.0],
            "previous" => &[99.0_f64, 100.0]
        )?;
        for bound in DOMAIN_BOUNDS {
            let kept = df.clone().lazy().filter(bound.keep_expr()).collect()?;
            assert_eq!(kept.height(), 1, "{bound}");
        }
        Ok(())
    }

    #[test]
    fn test_bound_labels() {
        let labels: Vec<String> = DOMAIN_BOUNDS.iter().map(DomainBound::violation).collect();
        assert_eq!(labels, ["age > 100", "duration <= 0", "previous >= 100"]);
        assert_eq!(DOMAIN_BOUNDS[0].to_string(), "age <= 100");
    }

    #[test]
    fn test_require_columns_names_the_missing_one() -> anyhow::Result<()> {
        let df = df!("age" => &[30_i64], "job" => &["admin."])?;
        assert!(require_columns(&df, &["age", "job"]).is_ok());
        let err = require_columns(&df, &["age", "balance"]).expect_err("balance is absent");
        assert!(matches!(err, CleanError::MissingColumn(ref c) if c == "balance"));
        Ok(())
    }
}
