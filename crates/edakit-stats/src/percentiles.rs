/// The three quartiles of a dataset.
///
/// # Examples
///
/// ```
/// use edakit_stats::percentiles::Quartiles;
///
/// let quartiles = Quartiles::from_sorted(&[1.0, 2.0, 3.0, 4.0, 5.0]);
/// assert_eq!(quartiles.q1, 2.0);
/// assert_eq!(quartiles.median, 3.0);
/// assert_eq!(quartiles.q3, 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartiles {
    /// The 25th percentile.
    pub q1: f64,
    /// The 50th percentile.
    pub median: f64,
    /// The 75th percentile.
    pub q3: f64,
}

impl Quartiles {
    /// Computes quartiles from sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );
        Self {
            q1: compute_percentile(sorted_values, 25.0),
            median: compute_percentile(sorted_values, 50.0),
            q3: compute_percentile(sorted_values, 75.0),
        }
    }

    /// Interquartile range (`q3 - q1`).
    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Computes a single percentile value from sorted data.
///
/// Uses linear interpolation between the two closest ranks: the k-th percentile
/// lies at fractional position `(n - 1) * k / 100` of the sorted data.
///
/// Returns `f64::NAN` if the input is empty.
///
/// # Examples
///
/// ```
/// use edakit_stats::percentiles::compute_percentile;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(compute_percentile(&values, 50.0), 3.0);
/// assert_eq!(compute_percentile(&values, 25.0), 2.0);
/// assert_eq!(compute_percentile(&[1.0, 2.0], 50.0), 1.5);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn compute_percentile(sorted_values: &[f64], percentile: f64) -> f64 {
    if sorted_values.is_empty() {
        return f64::NAN;
    }
    let last = sorted_values.len() - 1;
    let position = (last as f64 * percentile.clamp(0.0, 100.0) / 100.0).clamp(0.0, last as f64);
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted_values[lower] + (sorted_values[upper] - sorted_values[lower]) * fraction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentile_extremes() {
        let values = [3.0, 7.0, 11.0];
        assert_eq!(compute_percentile(&values, 0.0), 3.0);
        assert_eq!(compute_percentile(&values, 100.0), 11.0);
    }

    #[test]
    fn test_percentile_interpolates() {
        let values = [10.0, 20.0, 30.0, 40.0];
        // position = 3 * 0.25 = 0.75
        assert!((compute_percentile(&values, 25.0) - 17.5).abs() < 1e-12);
    }

    #[test]
    fn test_percentile_empty() {
        assert!(compute_percentile(&[], 50.0).is_nan());
    }

    #[test]
    fn test_quartiles_of_even_sample() {
        let quartiles = Quartiles::from_sorted(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(quartiles.q1, 1.75);
        assert_eq!(quartiles.median, 2.5);
        assert_eq!(quartiles.q3, 3.25);
        assert_eq!(quartiles.iqr(), 1.5);
    }
}
