//! Gaussian kernel density estimation.

use std::f64::consts::PI;

use crate::{StatsError, descriptive::DescriptiveStats, error::validate};

/// A Gaussian kernel density estimate with Scott's rule bandwidth.
///
/// The bandwidth is `std_dev * n^(-1/5)` where `std_dev` is the sample
/// standard deviation.
///
/// # Examples
///
/// ```
/// use edakit_stats::kde::GaussianKde;
///
/// let kde = GaussianKde::new(&[1.0, 2.0, 2.5, 3.0, 4.0]).unwrap();
/// assert!(kde.evaluate(2.5) > kde.evaluate(0.0));
/// ```
#[derive(Debug, Clone)]
pub struct GaussianKde {
    points: Vec<f64>,
    bandwidth: f64,
}

impl GaussianKde {
    /// Fits the estimator to the given sample.
    ///
    /// # Errors
    ///
    /// Returns an error if the sample has fewer than two values, contains
    /// non-finite values, or has a zero or overflowing variance.
    #[expect(clippy::cast_precision_loss)]
    pub fn new(values: &[f64]) -> Result<Self, StatsError> {
        validate(values)?;
        if values.len() < 2 {
            return Err(StatsError::InsufficientSampleSize {
                given: values.len(),
                needed: 2,
            });
        }
        let std_dev = DescriptiveStats::new(values)?.std_dev;
        if !std_dev.is_finite() {
            return Err(StatsError::NonFiniteScale);
        }
        if std_dev <= 0.0 {
            return Err(StatsError::ZeroVariance);
        }
        let bandwidth = std_dev * (values.len() as f64).powf(-0.2);
        Ok(Self {
            points: values.to_vec(),
            bandwidth,
        })
    }

    /// The kernel bandwidth.
    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Evaluates the estimated density at `x`.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        let h = self.bandwidth;
        let norm = 1.0 / (self.points.len() as f64 * h * (2.0 * PI).sqrt());
        norm * self
            .points
            .iter()
            .map(|p| {
                let u = (x - p) / h;
                (-0.5 * u * u).exp()
            })
            .sum::<f64>()
    }

    /// Evaluates the density on `num_points` evenly spaced points spanning `[start, end]`.
    ///
    /// Returns `(x, density)` pairs.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn curve(&self, start: f64, end: f64, num_points: usize) -> Vec<(f64, f64)> {
        if num_points < 2 {
            return vec![(start, self.evaluate(start))];
        }
        let step = (end - start) / (num_points - 1) as f64;
        (0..num_points)
            .map(|i| {
                let x = start + step * i as f64;
                (x, self.evaluate(x))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scott_bandwidth() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let kde = GaussianKde::new(&values).unwrap();
        let expected = 2.5_f64.sqrt() * 5.0_f64.powf(-0.2);
        assert!((kde.bandwidth() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_density_integrates_to_one() {
        let values = [-1.2, -0.4, 0.0, 0.3, 0.9, 1.7, 2.2];
        let kde = GaussianKde::new(&values).unwrap();
        let curve = kde.curve(-10.0, 12.0, 2001);
        let step = 22.0 / 2000.0;
        let area = curve.iter().map(|(_, y)| y * step).sum::<f64>();
        assert!((area - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_rejects_degenerate_samples() {
        assert_eq!(
            GaussianKde::new(&[1.0]).unwrap_err(),
            StatsError::InsufficientSampleSize {
                given: 1,
                needed: 2
            }
        );
        assert_eq!(
            GaussianKde::new(&[3.0, 3.0, 3.0]).unwrap_err(),
            StatsError::ZeroVariance
        );
    }
}
