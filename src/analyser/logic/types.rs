use serde::Serialize;
use std::fmt;

/// Row counts around one filtering step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub step: String,
    pub rows_before: usize,
    pub rows_after: usize,
}

impl StepReport {
    pub fn removed(&self) -> usize {
        self.rows_before.saturating_sub(self.rows_after)
    }
}

/// Shape of the table before and after cleaning, with every step in between.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CleaningReport {
    pub initial_shape: (usize, usize),
    pub steps: Vec<StepReport>,
    pub final_shape: (usize, usize),
}

impl CleaningReport {
    pub fn total_removed(&self) -> usize {
        self.steps.iter().map(StepReport::removed).sum()
    }

    pub fn removed_by(&self, step: &str) -> Option<usize> {
        self.steps
            .iter()
            .find(|s| s.step == step)
            .map(StepReport::removed)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoricalProfile {
    pub name: String,
    pub distinct: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NumericProfile {
    pub name: String,
    /// Sample standard deviation (ddof = 1); NaN with fewer than two values.
    pub std_dev: f64,
}

impl NumericProfile {
    /// Exactly zero; NaN is never flagged.
    pub fn is_zero_variance(&self) -> bool {
        self.std_dev == 0.0
    }
}

/// Read-only diagnostics of the categorical and numeric columns.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProfileReport {
    pub categorical: Vec<CategoricalProfile>,
    pub numeric: Vec<NumericProfile>,
}

impl ProfileReport {
    /// Numeric columns that carry no information.
    pub fn zero_variance_columns(&self) -> Vec<&NumericProfile> {
        self.numeric.iter().filter(|p| p.is_zero_variance()).collect()
    }

    pub fn distinct(&self, name: &str) -> Option<usize> {
        self.categorical
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.distinct)
    }

    pub fn std_dev(&self, name: &str) -> Option<f64> {
        self.numeric
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.std_dev)
    }
}

impl fmt::Display for ProfileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Unique sublevels in categorical columns:")?;
        for p in &self.categorical {
            writeln!(f, " - {}: {}", p.name, p.distinct)?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "Numeric columns with 0 standard deviation (no variability):"
        )?;
        let flat = self.zero_variance_columns();
        if flat.is_empty() {
            writeln!(f, " (none)")?;
        }
        for p in flat {
            writeln!(f, " - {}", p.name)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub data: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn get(&self, row: &str, col: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == row)?;
        let j = self.columns.iter().position(|c| c == col)?;
        self.data.get(i).and_then(|r| r.get(j)).copied()
    }
}

/// One nested box of a letter-value (boxen) plot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LetterValueBox {
    /// 1 for the quartiles, 2 for the eighths, and so on
    pub depth: usize,
    pub lower: f64,
    pub upper: f64,
}

/// Data behind the boxen plot of one numeric column.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LetterValueSummary {
    pub column: String,
    pub count: usize,
    pub median: Option<f64>,
    /// Innermost box first
    pub boxes: Vec<LetterValueBox>,
    pub outliers: Vec<f64>,
}

/// Data behind the count plot of one categorical column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValueCounts {
    pub column: String,
    /// Labels in order of first appearance
    pub counts: Vec<(String, usize)>,
}

impl ValueCounts {
    pub fn get(&self, label: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|(l, _)| l == label)
            .map(|&(_, n)| n)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|&(_, n)| n).sum()
    }
}

/// Everything the plot viewer draws.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlotBundle {
    pub distributions: Vec<LetterValueSummary>,
    pub frequencies: Vec<ValueCounts>,
    pub correlation: CorrelationMatrix,
}
