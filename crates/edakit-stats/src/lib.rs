//! Statistical primitives for exploratory data analysis.
//!
//! This crate provides the numerical building blocks used by `edakit-analysis`:
//!
//! - **Descriptive statistics**: count, mean, standard deviation, quartiles, skewness, kurtosis
//! - **Percentiles**: linearly interpolated percentiles and quartiles
//! - **Histogram generation**: equal-width bins with automatic bin-count selection
//! - **Kernel density estimation**: Gaussian KDE with Scott's bandwidth
//! - **Box plots**: quartiles, Tukey whiskers and outliers
//! - **Probability plots**: normal Q-Q plot points with a least-squares fit
//! - **Normality tests**: Shapiro-Wilk, Kolmogorov-Smirnov and Anderson-Darling
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`percentiles`]: Percentile computation
//! - [`histogram`]: Histogram construction for visualizing data distributions
//! - [`kde`]: Smooth density estimates
//! - [`boxplot`]: Box-and-whisker summaries
//! - [`probplot`]: Normal probability plot data
//! - [`normality`]: Goodness-of-fit tests for the normal distribution
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use edakit_stats::descriptive::DescriptiveStats;
//!
//! let stats = DescriptiveStats::new(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! assert!(stats.skewness.abs() < 1e-12);
//! ```
//!
//! ## Testing for normality
//!
//! ```
//! use edakit_stats::normality::{anderson_darling, kolmogorov_smirnov, shapiro_wilk};
//!
//! let values = [-1.2, -0.8, -0.3, 0.0, 0.1, 0.4, 0.9, 1.5];
//! let sw = shapiro_wilk(&values).unwrap();
//! let ks = kolmogorov_smirnov(&values, 0.0, 1.0).unwrap();
//! let ad = anderson_darling(&values).unwrap();
//! assert!(sw.p_value > 0.05);
//! assert!(ks.p_value > 0.05);
//! assert!(ad.statistic < ad.critical_values[2]);
//! ```

pub use self::error::StatsError;

pub mod boxplot;
pub mod descriptive;
mod error;
pub mod histogram;
pub mod kde;
pub mod normality;
pub mod percentiles;
pub mod probplot;

/// Sorts a copy of the values in ascending order.
pub(crate) fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}
