use super::profiling;
use super::types::{CorrelationMatrix, LetterValueBox, LetterValueSummary, ValueCounts};
use crate::error::Result;
use polars::prelude::*;
use std::collections::HashMap;

/// Letter-value summary of a column's values for a boxen plot.
///
/// The number of boxes follows Tukey's rule, `floor(log2 n) - 3`, with at
/// least one box. Box `i` spans the `0.5^(i+1)` and `1 - 0.5^(i+1)`
/// quantiles; everything outside the outermost box is an outlier.
pub fn letter_values(column: &str, values: &[f64]) -> LetterValueSummary {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();
    let median = quantile_sorted(&sorted, 0.5);

    let boxes: Vec<LetterValueBox> = (1..=letter_value_depth(count))
        .filter_map(|depth| {
            let tail = 0.5_f64.powi(depth as i32 + 1);
            let lower = quantile_sorted(&sorted, tail)?;
            let upper = quantile_sorted(&sorted, 1.0 - tail)?;
            Some(LetterValueBox {
                depth,
                lower,
                upper,
            })
        })
        .collect();

    let outliers = match boxes.last() {
        Some(outer) => sorted
            .iter()
            .copied()
            .filter(|&v| v < outer.lower || v > outer.upper)
            .collect(),
        None => Vec::new(),
    };

    LetterValueSummary {
        column: column.to_owned(),
        count,
        median,
        boxes,
        outliers,
    }
}

/// Tukey depth for `n` observations; zero when there is nothing to plot.
pub fn letter_value_depth(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let log2 = usize::BITS - 1 - n.leading_zeros();
    (log2 as usize).saturating_sub(3).max(1)
}

/// Linearly interpolated quantile of already sorted values.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let pos = p.clamp(0.0, 1.0) * last as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let a = *sorted.get(lo)?;
    let b = *sorted.get(hi)?;
    Some(a + (b - a) * (pos - lo as f64))
}

/// Frequency of each label, in order of first appearance. Missing values are skipped.
pub fn value_counts(df: &DataFrame, column: &str) -> Result<ValueCounts> {
    let series = df
        .column(column)?
        .as_materialized_series()
        .cast(&DataType::String)?;
    let ca = series.str()?;

    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for label in ca.into_iter().flatten() {
        match index.get(label) {
            Some(&i) => {
                if let Some(entry) = counts.get_mut(i) {
                    entry.1 += 1;
                }
            }
            None => {
                index.insert(label, counts.len());
                counts.push((label.to_owned(), 1));
            }
        }
    }

    Ok(ValueCounts {
        column: column.to_owned(),
        counts,
    })
}

/// Pearson correlation between every pair of the given numeric columns.
///
/// Pairs involving a column without variance have no defined correlation and
/// are reported as NaN, including the column's own diagonal cell.
pub fn calculate_correlation_matrix(df: &DataFrame, columns: &[&str]) -> Result<CorrelationMatrix> {
    let series = columns
        .iter()
        .map(|&name| {
            Ok(df
                .column(name)?
                .as_materialized_series()
                .cast(&DataType::Float64)?)
        })
        .collect::<Result<Vec<Series>>>()?;
    let arrays = series
        .iter()
        .map(|s| Ok(s.f64()?))
        .collect::<Result<Vec<&Float64Chunked>>>()?;

    let has_variance: Vec<bool> = arrays
        .iter()
        .map(|ca| ca.std(1).is_some_and(|s| s.is_finite() && s > 0.0))
        .collect();

    let mut data = Vec::with_capacity(arrays.len());
    for (i, a) in arrays.iter().enumerate() {
        let mut row = Vec::with_capacity(arrays.len());
        for (j, b) in arrays.iter().enumerate() {
            let defined = has_variance.get(i).copied().unwrap_or(false)
                && has_variance.get(j).copied().unwrap_or(false);
            let corr = if !defined {
                f64::NAN
            } else if i == j {
                1.0
            } else {
                polars::prelude::cov::pearson_corr(*a, *b)
                    .filter(|c| c.is_finite())
                    .map_or(f64::NAN, |c| c.clamp(-1.0, 1.0))
            };
            row.push(corr);
        }
        data.push(row);
    }

    Ok(CorrelationMatrix {
        columns: columns.iter().map(|&c| c.to_owned()).collect(),
        data,
    })
}

/// Boxen-plot data for each of the given numeric columns.
pub fn distributions(df: &DataFrame, columns: &[&str]) -> Result<Vec<LetterValueSummary>> {
    columns
        .iter()
        .map(|&name| Ok(letter_values(name, &profiling::numeric_values(df, name)?)))
        .collect()
}

/// Count-plot data for each of the given categorical columns.
pub fn frequencies(df: &DataFrame, columns: &[&str]) -> Result<Vec<ValueCounts>> {
    columns
        .iter()
        .map(|&name| value_counts(df, name))
        .collect()
}
