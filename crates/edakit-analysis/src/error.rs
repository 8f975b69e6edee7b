use edakit_stats::StatsError;

/// Errors raised by the analysis helpers.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum AnalysisError {
    #[display("{_0}")]
    Stats(StatsError),
    #[display("Column '{name}' not found")]
    ColumnNotFound { name: String },
    #[display("Significance level must be in (0, 1), got {alpha}")]
    InvalidAlpha { alpha: f64 },
    #[display("Test size must be in (0, 1), got {test_size}")]
    InvalidTestSize { test_size: f64 },
    #[display("Non-numeric value '{value}' in column '{column}' at row {row}")]
    NonNumericValue {
        column: String,
        row: usize,
        value: String,
    },
    #[display("Invalid distribution parameters: {reason}")]
    InvalidDistribution { reason: String },
    #[display("Failed to read or write CSV data: {_0}")]
    Csv(csv::Error),
}

impl From<StatsError> for AnalysisError {
    fn from(err: StatsError) -> Self {
        Self::Stats(err)
    }
}

impl From<csv::Error> for AnalysisError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Checks that a significance level lies strictly between 0 and 1.
pub(crate) fn validate_alpha(alpha: f64) -> Result<f64, AnalysisError> {
    if alpha > 0.0 && alpha < 1.0 {
        Ok(alpha)
    } else {
        Err(AnalysisError::InvalidAlpha { alpha })
    }
}
