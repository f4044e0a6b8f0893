use super::columns::NUMERIC_COLUMNS;
use crate::error::{CleanError, Result};
use polars::prelude::*;
use std::path::Path;

/// Field values read as missing, following the usual data-frame conventions.
pub const MISSING_TOKENS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Reads a comma-separated file with a header row. No rows are changed.
///
/// A numeric column with no values at all is read back as text by the CSV
/// reader; such columns are typed as `Float64` so the filters and profiler
/// see them as numeric.
pub fn load_df(path: &Path) -> Result<DataFrame> {
    if !path.is_file() {
        return Err(CleanError::InvalidPath(format!(
            "{} does not exist or is not a file",
            path.display()
        )));
    }

    let null_values = NullValues::AllColumns(MISSING_TOKENS.iter().map(|&t| t.into()).collect());

    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_separator(b',')
        .with_infer_schema_length(Some(10_000))
        .with_missing_is_null(true)
        .with_null_values(Some(null_values))
        .finish()
        .and_then(LazyFrame::collect)
        .map_err(|e| {
            CleanError::DataProcessing(format!("Failed to read CSV {}: {e}", path.display()))
        })?;

    type_empty_numeric_columns(df)
}

fn type_empty_numeric_columns(mut df: DataFrame) -> Result<DataFrame> {
    for name in NUMERIC_COLUMNS {
        let Ok(column) = df.column(name) else {
            continue;
        };
        let untyped = matches!(column.dtype(), DataType::String | DataType::Null);
        if untyped && column.null_count() == column.len() {
            let typed = column.cast(&DataType::Float64)?;
            tracing::debug!("Column '{name}' has no values; reading it as Float64");
            df.with_column(typed)?;
        }
    }
    Ok(df)
}

/// Writes the frame as CSV with a header and no index column, replacing any existing file.
pub fn save_df(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    CsvWriter::new(file)
        .include_header(true)
        .with_separator(b',')
        .finish(df)
        .map_err(|e| {
            CleanError::DataProcessing(format!("Failed to write CSV {}: {e}", path.display()))
        })
}
