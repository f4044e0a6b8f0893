//! Read-only diagnostics: how many sublevels each categorical column has and
//! how much each numeric column varies.

use super::types::{CategoricalProfile, NumericProfile, ProfileReport};
use crate::error::{CleanError, Result};
use polars::prelude::*;

pub fn profile_df(df: &DataFrame, categorical: &[&str], numeric: &[&str]) -> Result<ProfileReport> {
    let categorical = categorical
        .iter()
        .map(|&name| {
            Ok(CategoricalProfile {
                name: name.to_owned(),
                distinct: distinct_count(df, name)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let numeric = numeric
        .iter()
        .map(|&name| {
            Ok(NumericProfile {
                name: name.to_owned(),
                std_dev: sample_std(df, name)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ProfileReport {
        categorical,
        numeric,
    })
}

/// Number of distinct non-missing values.
pub fn distinct_count(df: &DataFrame, name: &str) -> Result<usize> {
    let series = df.column(name)?.as_materialized_series();
    Ok(series.drop_nulls().n_unique()?)
}

/// Sample standard deviation (ddof = 1); NaN when fewer than two values are present.
pub fn sample_std(df: &DataFrame, name: &str) -> Result<f64> {
    let values = float_column(df, name)?;
    let ca = values.f64()?;
    if ca.len() - ca.null_count() < 2 {
        return Ok(f64::NAN);
    }
    Ok(ca.std(1).unwrap_or(f64::NAN))
}

/// Non-missing values of a numeric column as `f64`, in row order.
pub fn numeric_values(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let values = float_column(df, name)?;
    Ok(values.f64()?.into_iter().flatten().collect())
}

fn float_column(df: &DataFrame, name: &str) -> Result<Series> {
    let series = df.column(name)?.as_materialized_series();
    if series.null_count() == series.len() {
        return Ok(Series::full_null(name.into(), series.len(), &DataType::Float64));
    }
    if !series.dtype().is_primitive_numeric() {
        return Err(CleanError::DataProcessing(format!(
            "column '{name}' is {} but a numeric column was expected",
            series.dtype()
        )));
    }
    Ok(series.cast(&DataType::Float64)?)
}
