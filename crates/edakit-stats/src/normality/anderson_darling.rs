use statrs::distribution::{ContinuousCDF as _, Normal};

use crate::{StatsError, descriptive::DescriptiveStats, error::validate};

/// Significance levels (in percent) the critical values are tabulated for.
pub const SIGNIFICANCE_LEVELS: [f64; 5] = [15.0, 10.0, 5.0, 2.5, 1.0];

/// Asymptotic critical values for the normal case with estimated mean and variance.
const ASYMPTOTIC_CRITICAL_VALUES: [f64; 5] = [0.576, 0.656, 0.787, 0.918, 1.092];

/// Result of the Anderson-Darling normality test.
#[derive(Debug, Clone, PartialEq)]
pub struct AndersonDarlingTest {
    /// The `A²` statistic.
    pub statistic: f64,
    /// Critical values matching [`significance_levels`](Self::significance_levels).
    pub critical_values: [f64; 5],
    /// Significance levels in percent, from least to most strict.
    pub significance_levels: [f64; 5],
}

impl AndersonDarlingTest {
    /// Critical value for the given significance level (in percent), if tabulated.
    ///
    /// ```
    /// use edakit_stats::normality::anderson_darling;
    ///
    /// let result = anderson_darling(&[2.1, 2.9, 3.2, 3.8, 4.0, 4.4, 5.1, 6.3]).unwrap();
    /// assert_eq!(result.critical_value_at(5.0), Some(result.critical_values[2]));
    /// assert_eq!(result.critical_value_at(20.0), None);
    /// ```
    #[must_use]
    pub fn critical_value_at(&self, significance_level: f64) -> Option<f64> {
        self.significance_levels
            .iter()
            .position(|level| (level - significance_level).abs() < f64::EPSILON)
            .map(|idx| self.critical_values[idx])
    }
}

/// Anderson-Darling test for normality with estimated parameters.
///
/// The sample is standardized with its mean and sample standard deviation
/// (`n - 1` denominator). Critical values are the asymptotic ones adjusted
/// for sample size by `1 + 4/n - 25/n²` (Stephens, 1974), rounded to three
/// decimals.
///
/// # Errors
///
/// Returns an error if the sample has fewer than two values, contains
/// non-finite values, or has a zero or overflowing variance.
///
/// # Examples
///
/// ```
/// use edakit_stats::normality::anderson_darling;
///
/// let result = anderson_darling(&[-1.2, -0.8, -0.3, 0.0, 0.1, 0.4, 0.9, 1.5]).unwrap();
/// assert!(result.statistic < result.critical_values[2]);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn anderson_darling(values: &[f64]) -> Result<AndersonDarlingTest, StatsError> {
    validate(values)?;
    let n = values.len();
    if n < 2 {
        return Err(StatsError::InsufficientSampleSize {
            given: n,
            needed: 2,
        });
    }
    let stats = DescriptiveStats::new(values)?;
    if !stats.std_dev.is_finite() {
        return Err(StatsError::NonFiniteScale);
    }
    if stats.std_dev <= 0.0 {
        return Err(StatsError::ZeroVariance);
    }

    let sorted = crate::sorted(values);
    let standard = Normal::standard();
    let z = sorted
        .iter()
        .map(|x| (x - stats.mean) / stats.std_dev)
        .collect::<Vec<_>>();

    let nf = n as f64;
    let sum = (0..n)
        .map(|i| {
            let ln_cdf = standard.cdf(z[i]).max(f64::MIN_POSITIVE).ln();
            let ln_sf = standard.sf(z[n - 1 - i]).max(f64::MIN_POSITIVE).ln();
            (2 * i + 1) as f64 * (ln_cdf + ln_sf)
        })
        .sum::<f64>();
    let statistic = -nf - sum / nf;

    let adjustment = 1.0 + 4.0 / nf - 25.0 / (nf * nf);
    let critical_values =
        ASYMPTOTIC_CRITICAL_VALUES.map(|value| (value / adjustment * 1000.0).round() / 1000.0);

    Ok(AndersonDarlingTest {
        statistic,
        critical_values,
        significance_levels: SIGNIFICANCE_LEVELS,
    })
}
