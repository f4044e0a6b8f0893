#![expect(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing
)]


use polars::prelude::*;

/// A small frame with every expected column, one row per client.
pub(super) fn clients(
    ages: &[i64],
    durations: &[i64],
    previous: &[i64],
    jobs: &[&str],
) -> PolarsResult<DataFrame> {
    let n = ages.len();
    df!(
        "age" => ages,
        "job" => jobs,
        "marital" => vec!["married"; n],
        "education" => vec!["secondary"; n],
        "default" => vec!["no"; n],
        "balance" => vec![1_000_i64; n],
        "housing" => vec!["yes"; n],
        "loan" => vec!["no"; n],
        "contact" => vec!["cellular"; n],
        "day" => vec![5_i64; n],
        "month" => vec!["may"; n],
        "duration" => durations,
        "campaign" => vec![1_i64; n],
        "pdays" => vec![-1_i64; n],
        "previous" => previous,
        "poutcome" => vec!["unknown"; n],
        "y" => vec!["no"; n],
    )
}
