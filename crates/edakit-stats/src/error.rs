/// Errors raised when a sample cannot be analyzed.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum StatsError {
    #[display("sample is empty")]
    EmptySample,
    #[display("sample contains a non-finite value at index {index}")]
    NonFiniteValue { index: usize },
    #[display("sample has zero variance")]
    ZeroVariance,
    #[display("sample spread is too large to represent as a finite number")]
    NonFiniteScale,
    #[display("sample size {given} is too small (at least {needed} values required)")]
    InsufficientSampleSize { given: usize, needed: usize },
    #[display("sample size {given} is too large (at most {max} values supported)")]
    ExcessiveSampleSize { given: usize, max: usize },
}

/// Checks that a sample is non-empty and contains only finite values.
pub(crate) fn validate(values: &[f64]) -> Result<(), StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptySample);
    }
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(StatsError::NonFiniteValue { index });
    }
    Ok(())
}
