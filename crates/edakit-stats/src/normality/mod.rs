//! Goodness-of-fit tests for the normal distribution.
//!
//! - [`shapiro_wilk`]: W statistic with Royston's p-value approximation
//! - [`kolmogorov_smirnov`], [`kolmogorov_smirnov_fitted`]: distance between the empirical and a normal CDF
//! - [`anderson_darling`]: tail-weighted EDF statistic with tabulated critical values

pub use self::{
    anderson_darling::{AndersonDarlingTest, SIGNIFICANCE_LEVELS, anderson_darling},
    kolmogorov_smirnov::{EXACT_MAX_SAMPLE_SIZE, kolmogorov_smirnov, kolmogorov_smirnov_fitted},
    shapiro::shapiro_wilk,
};

mod anderson_darling;
mod kolmogorov_smirnov;
pub mod shapiro;

/// Outcome of a test that reports a statistic and a p-value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PValueTest {
    /// The test statistic.
    pub statistic: f64,
    /// Probability of a statistic at least as extreme under the null hypothesis.
    pub p_value: f64,
}
