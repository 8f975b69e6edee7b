//! Exploratory data analysis helpers
//!
//! This crate interprets hypothesis tests, checks samples for normality and
//! summarizes the distribution of tabular columns. Numerical work is done by
//! `edakit-stats`; charts are returned as [`figure::Figure`] values rather
//! than drawn.
//!
//! # Overview
//!
//! - **Hypothesis interpretation** ([`check_hypothesis`]): turn a p-value into
//!   a sentence about the null hypothesis
//! - **Normality checking** ([`check_normality`], [`normality::NormalityCheck`]):
//!   Shapiro-Wilk, Kolmogorov-Smirnov and Anderson-Darling tests plus a
//!   histogram/KDE and Q-Q figure
//! - **Distribution description** ([`describe_distribution`]): summary
//!   statistics, skewness and kurtosis plus a histogram/boxplot figure
//! - **Workflow helpers**: CSV tables ([`table::Table`]), seeded train/test
//!   splitting ([`split::train_test_split`]) and synthetic samples
//!   ([`sample::SampleGenerator`])
//!
//! All helpers are synchronous and keep no state between calls.
//!
//! # Examples
//!
//! ## Checking normality
//!
//! ```
//! use edakit_analysis::{
//!     DEFAULT_ALPHA, RANDOM_STATE, check_normality,
//!     sample::{SampleDistribution, SampleGenerator},
//! };
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//!
//! let data = SampleGenerator::new(RANDOM_STATE)
//!     .generate(SampleDistribution::Exponential { rate: 1.0 }, 1000)?;
//! assert!(!check_normality(&data, DEFAULT_ALPHA)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Describing a column
//!
//! ```no_run
//! use edakit_analysis::{describe_distribution, table::Table};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//!
//! let table = Table::from_path("measurements.csv")?;
//! let description = describe_distribution(&table, "height")?;
//! println!("skewness = {}", description.stats.skewness);
//! # Ok(())
//! # }
//! ```

pub use self::{
    describe::describe_distribution, error::AnalysisError, hypothesis::check_hypothesis,
    normality::check_normality,
};

pub mod describe;
mod error;
pub mod figure;
pub mod hypothesis;
pub mod normality;
pub mod sample;
pub mod split;
pub mod table;

/// Seed shared by the random parts of an analysis workflow.
pub const RANDOM_STATE: u64 = 0;

/// Fraction of rows held out for testing.
pub const TEST_SIZE: f64 = 0.2;

/// Default significance level for hypothesis and normality checks.
pub const DEFAULT_ALPHA: f64 = 0.02;
