//! Normal probability (Q-Q) plot data.

use statrs::distribution::{ContinuousCDF as _, Normal};

use crate::{StatsError, error::validate};

/// Points and least-squares fit of a normal probability plot.
///
/// Sample values are ordered and paired with the standard normal quantiles of
/// Filliben's estimate of the uniform order statistic medians.
#[derive(Debug, Clone)]
pub struct ProbabilityPlot {
    /// Theoretical quantiles (x axis).
    pub theoretical: Vec<f64>,
    /// Ordered sample values (y axis).
    pub ordered: Vec<f64>,
    /// Slope of the least-squares line through the points.
    pub slope: f64,
    /// Intercept of the least-squares line through the points.
    pub intercept: f64,
    /// Pearson correlation of the points; close to 1 for normal data.
    pub r: f64,
}

impl ProbabilityPlot {
    /// Builds the plot against the standard normal distribution.
    ///
    /// # Errors
    ///
    /// Returns an error if the sample has fewer than two values or contains
    /// non-finite values.
    ///
    /// # Examples
    ///
    /// ```
    /// # use edakit_stats::probplot::ProbabilityPlot;
    /// let plot = ProbabilityPlot::normal(&[2.0, 4.0, 6.0]).unwrap();
    /// assert_eq!(plot.ordered, vec![2.0, 4.0, 6.0]);
    /// assert!(plot.theoretical[1].abs() < 1e-12);
    /// assert!(plot.r > 0.99);
    /// ```
    pub fn normal(values: &[f64]) -> Result<Self, StatsError> {
        validate(values)?;
        if values.len() < 2 {
            return Err(StatsError::InsufficientSampleSize {
                given: values.len(),
                needed: 2,
            });
        }

        let standard = Normal::standard();
        let theoretical = order_statistic_medians(values.len())
            .into_iter()
            .map(|p| standard.inverse_cdf(p))
            .collect::<Vec<_>>();
        let ordered = crate::sorted(values);
        let (slope, intercept, r) = least_squares(&theoretical, &ordered);

        Ok(Self {
            theoretical,
            ordered,
            slope,
            intercept,
            r,
        })
    }

    /// Iterates over `(theoretical, ordered)` point pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.theoretical
            .iter()
            .copied()
            .zip(self.ordered.iter().copied())
    }

    /// Value of the fitted line at `x`.
    #[must_use]
    pub fn fitted(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Filliben's approximation of the uniform order statistic medians.
#[expect(clippy::cast_precision_loss)]
fn order_statistic_medians(n: usize) -> Vec<f64> {
    let nf = n as f64;
    let last = 0.5_f64.powf(1.0 / nf);
    let mut medians = (1..=n)
        .map(|i| (i as f64 - 0.3175) / (nf + 0.365))
        .collect::<Vec<_>>();
    medians[n - 1] = last;
    medians[0] = 1.0 - last;
    medians
}

/// Ordinary least squares of `y` on `x`, returning `(slope, intercept, r)`.
fn least_squares(x: &[f64], y: &[f64]) -> (f64, f64, f64) {
    let x_mean = crate::descriptive::mean(x);
    let y_mean = crate::descriptive::mean(y);
    let (sxx, syy, sxy) = x.iter().zip(y).fold((0.0, 0.0, 0.0), |(sxx, syy, sxy), (a, b)| {
        let dx = a - x_mean;
        let dy = b - y_mean;
        (sxx + dx * dx, syy + dy * dy, sxy + dx * dy)
    });
    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;
    let r = if syy > 0.0 {
        sxy / (sxx * syy).sqrt()
    } else {
        f64::NAN
    };
    (slope, intercept, r)
}
