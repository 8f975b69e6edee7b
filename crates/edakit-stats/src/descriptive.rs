use crate::{
    StatsError,
    error::validate,
    percentiles::Quartiles,
};

/// Descriptive statistics summarizing a dataset.
///
/// Dispersion uses the sample (`n - 1`) estimators, while the shape measures
/// (skewness and kurtosis) use the biased population moments, so the summary
/// matches what a data-frame `describe()` followed by moment-based skew and
/// kurtosis would report.
#[derive(Debug, Clone)]
pub struct DescriptiveStats {
    /// The number of values in the dataset.
    pub count: usize,
    /// The arithmetic mean (average) of the dataset.
    pub mean: f64,
    /// The sample variance (`n - 1` denominator). `NaN` for a single value.
    pub variance: f64,
    /// The sample standard deviation. `NaN` for a single value.
    pub std_dev: f64,
    /// The minimum value in the dataset.
    pub min: f64,
    /// The first quartile (25th percentile).
    pub q1: f64,
    /// The median (50th percentile).
    pub median: f64,
    /// The third quartile (75th percentile).
    pub q3: f64,
    /// The maximum value in the dataset.
    pub max: f64,
    /// Skewness `m3 / m2^1.5` from the biased central moments.
    pub skewness: f64,
    /// Excess (Fisher) kurtosis `m4 / m2^2 - 3` from the biased central moments.
    pub kurtosis: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// This method will sort the values internally before computing statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset is empty or contains non-finite values.
    ///
    /// # Examples
    ///
    /// ```
    /// # use edakit_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::new(&[5.0, 2.0, 4.0, 1.0, 3.0]).unwrap();
    /// assert_eq!(stats.count, 5);
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// ```
    pub fn new(values: &[f64]) -> Result<Self, StatsError> {
        validate(values)?;
        Self::from_sorted(&crate::sorted(values))
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// This is an optimized version that skips the sorting step.
    /// Use this when you already have sorted data to avoid unnecessary work.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    pub fn from_sorted(sorted_values: &[f64]) -> Result<Self, StatsError> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );
        validate(sorted_values)?;

        let count = sorted_values.len();
        let n = count as f64;
        let min = sorted_values[0];
        let max = sorted_values[count - 1];
        let mean = sorted_values.iter().sum::<f64>() / n;

        let (m2, m3, m4) = central_moments(sorted_values, mean);
        let variance = if count > 1 {
            m2 * n / (n - 1.0)
        } else {
            f64::NAN
        };
        // Shape measures are undefined without spread
        let (skewness, kurtosis) = if m2 > 0.0 {
            (m3 / m2.powf(1.5), m4 / (m2 * m2) - 3.0)
        } else {
            (f64::NAN, f64::NAN)
        };

        let quartiles = Quartiles::from_sorted(sorted_values);

        Ok(Self {
            count,
            mean,
            variance,
            std_dev: variance.sqrt(),
            min,
            q1: quartiles.q1,
            median: quartiles.median,
            q3: quartiles.q3,
            max,
            skewness,
            kurtosis,
        })
    }

    /// Interquartile range (`q3 - q1`).
    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Biased second, third and fourth central moments.
#[expect(clippy::cast_precision_loss)]
fn central_moments(values: &[f64], mean: f64) -> (f64, f64, f64) {
    let n = values.len() as f64;
    let (s2, s3, s4) = values.iter().fold((0.0, 0.0, 0.0), |(s2, s3, s4), v| {
        let d = v - mean;
        let d2 = d * d;
        (s2 + d2, s3 + d2 * d, s4 + d2 * d2)
    });
    (s2 / n, s3 / n, s4 / n)
}

/// Population standard deviation (`n` denominator).
#[expect(clippy::cast_precision_loss)]
pub(crate) fn population_std_dev(values: &[f64], mean: f64) -> f64 {
    let n = values.len() as f64;
    (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n).sqrt()
}

/// Arithmetic mean.
#[expect(clippy::cast_precision_loss)]
pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
