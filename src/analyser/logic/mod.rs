pub mod analysis;
pub mod columns;
pub mod io;
pub mod profiling;
pub mod transforms;
pub mod types;

pub use analysis::{
    calculate_correlation_matrix, distributions, frequencies, letter_values, value_counts,
};
pub use columns::{
    BoundRule, CATEGORICAL_COLUMNS, DOMAIN_BOUNDS, DomainBound, NUMERIC_COLUMNS,
    require_dataset_columns,
};
pub use io::{load_df, save_df};
pub use profiling::profile_df;
pub use transforms::{
    BoundFilterTransform, DropDuplicatesTransform, DropNullsTransform, Transform,
    TransformPipeline, apply_step,
};
pub use types::{
    CleaningReport, CorrelationMatrix, LetterValueBox, LetterValueSummary, PlotBundle,
    ProfileReport, StepReport, ValueCounts,
};

#[cfg(test)]
mod tests;
