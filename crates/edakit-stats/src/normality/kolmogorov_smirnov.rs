use std::{
    f64::consts::PI,
    ops::{Index, IndexMut},
};

use statrs::distribution::{ContinuousCDF, Normal};

use crate::{
    StatsError,
    descriptive::{mean, population_std_dev},
    error::validate,
};

use super::PValueTest;

/// Largest sample size for which the p-value uses the exact distribution of
/// the statistic. Larger samples use the limiting Kolmogorov distribution.
pub const EXACT_MAX_SAMPLE_SIZE: usize = 10_000;

/// One-sample, two-sided Kolmogorov-Smirnov test against a normal distribution
/// with the given `mean` and `std_dev`.
///
/// The statistic is the largest distance between the empirical distribution
/// function and the normal CDF. Up to [`EXACT_MAX_SAMPLE_SIZE`] values the
/// p-value comes from the exact finite-sample distribution (Marsaglia, Tsang
/// and Wang, 2003); beyond that it is `P(K > sqrt(n) * D)` for the limiting
/// Kolmogorov distribution `K`.
///
/// # Errors
///
/// Returns an error if the sample is empty or contains non-finite values, if
/// `std_dev` is not strictly positive, or if it is not finite.
///
/// # Examples
///
/// ```
/// use edakit_stats::normality::kolmogorov_smirnov;
///
/// let values = [-1.5, -0.9, -0.4, -0.1, 0.0, 0.2, 0.5, 0.8, 1.3, 1.9];
/// let result = kolmogorov_smirnov(&values, 0.0, 1.0).unwrap();
/// assert!(result.statistic < 0.2);
/// assert!(result.p_value > 0.5);
/// ```
pub fn kolmogorov_smirnov(
    values: &[f64],
    mean: f64,
    std_dev: f64,
) -> Result<PValueTest, StatsError> {
    validate(values)?;
    if !std_dev.is_finite() || !mean.is_finite() {
        return Err(StatsError::NonFiniteScale);
    }
    if std_dev <= 0.0 {
        return Err(StatsError::ZeroVariance);
    }
    let dist = Normal::new(mean, std_dev).map_err(|_| StatsError::ZeroVariance)?;

    let statistic = ks_statistic(&crate::sorted(values), &dist);
    let p_value = ks_sf(values.len(), statistic);

    Ok(PValueTest {
        statistic,
        p_value,
    })
}

/// Kolmogorov-Smirnov test against a normal distribution fitted to the sample.
///
/// The reference distribution uses the sample mean and the population
/// standard deviation (`n` denominator).
///
/// # Errors
///
/// Returns an error if the sample is empty, contains non-finite values, or
/// has a zero or overflowing variance.
///
/// # Examples
///
/// ```
/// use edakit_stats::normality::kolmogorov_smirnov_fitted;
///
/// let values = [4.1, 5.3, 4.8, 5.0, 5.9, 4.4, 5.1, 4.7, 5.6, 5.2];
/// assert!(kolmogorov_smirnov_fitted(&values).unwrap().p_value > 0.05);
/// ```
pub fn kolmogorov_smirnov_fitted(values: &[f64]) -> Result<PValueTest, StatsError> {
    validate(values)?;
    let mean = mean(values);
    kolmogorov_smirnov(values, mean, population_std_dev(values, mean))
}

/// Largest vertical distance between the empirical CDF and `dist`'s CDF.
#[expect(clippy::cast_precision_loss)]
fn ks_statistic<D>(sorted_values: &[f64], dist: &D) -> f64
where
    D: ContinuousCDF<f64, f64>,
{
    let n = sorted_values.len() as f64;
    sorted_values
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            let cdf = dist.cdf(x);
            let d_plus = (i + 1) as f64 / n - cdf;
            let d_minus = cdf - i as f64 / n;
            d_plus.max(d_minus)
        })
        .fold(0.0, f64::max)
}

/// `P(D_n > d)` for the two-sided statistic of a sample of size `n`.
#[expect(clippy::cast_precision_loss)]
fn ks_sf(n: usize, d: f64) -> f64 {
    let nf = n as f64;
    if n > EXACT_MAX_SAMPLE_SIZE {
        return kolmogorov_sf(nf.sqrt() * d);
    }
    let s = d * d * nf;
    if s > 7.24 || (s > 3.76 && n > 99) {
        // Far tail, where the exact form loses precision
        let exponent = (2.000_071 + 0.331 / nf.sqrt() + 1.409 / nf) * s;
        return (2.0 * (-exponent).exp()).clamp(0.0, 1.0);
    }
    (1.0 - kolmogorov_cdf_exact(n, d)).clamp(0.0, 1.0)
}

/// Exact `P(D_n <= d)` via the matrix power of Marsaglia, Tsang and Wang.
///
/// Entries are kept below `1e140` by moving powers of ten into a separate
/// exponent while multiplying.
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]
fn kolmogorov_cdf_exact(n: usize, d: f64) -> f64 {
    let nf = n as f64;
    let nd = nf * d;
    let k = nd.floor() as usize + 1;
    let m = 2 * k - 1;
    let h = k as f64 - nd;

    let mut matrix = SquareMatrix::from_fn(m, |i, j| if i + 1 >= j { 1.0 } else { 0.0 });
    for i in 0..m {
        matrix[(i, 0)] -= h.powi(i as i32 + 1);
        matrix[(m - 1, i)] -= h.powi((m - i) as i32);
    }
    if 2.0 * h - 1.0 > 0.0 {
        matrix[(m - 1, 0)] += (2.0 * h - 1.0).powi(m as i32);
    }
    for i in 0..m {
        for j in 0..=i {
            for g in 1..=(i - j + 1) {
                matrix[(i, j)] /= g as f64;
            }
        }
    }

    let (power, mut exponent) = matrix.power(n);
    let mut value = power[(k - 1, k - 1)];
    // Multiply by n! / n^n
    for i in 1..=n {
        value = value * i as f64 / nf;
        if value < 1e-140 {
            value *= 1e140;
            exponent -= 140;
        }
    }
    value * 10_f64.powi(exponent)
}

#[derive(Debug, Clone)]
struct SquareMatrix {
    size: usize,
    data: Vec<f64>,
}

impl SquareMatrix {
    fn from_fn(size: usize, f: impl Fn(usize, usize) -> f64) -> Self {
        let data = (0..size * size).map(|idx| f(idx / size, idx % size)).collect();
        Self { size, data }
    }

    fn multiply(&self, other: &Self) -> Self {
        let size = self.size;
        let mut data = vec![0.0; size * size];
        for i in 0..size {
            for l in 0..size {
                let a = self.data[i * size + l];
                if a == 0.0 {
                    continue;
                }
                let row = &other.data[l * size..(l + 1) * size];
                for (out, b) in data[i * size..(i + 1) * size].iter_mut().zip(row) {
                    *out += a * b;
                }
            }
        }
        Self { size, data }
    }

    /// Returns `(P, e)` with `self^n = P * 10^e`.
    fn power(&self, n: usize) -> (Self, i32) {
        if n <= 1 {
            return (self.clone(), 0);
        }
        let (half, half_exponent) = self.power(n / 2);
        let squared = half.multiply(&half);
        let mut result = if n % 2 == 0 {
            squared
        } else {
            self.multiply(&squared)
        };
        let mut exponent = 2 * half_exponent;
        let mid = self.size / 2;
        if result[(mid, mid)] > 1e140 {
            result.data.iter_mut().for_each(|v| *v *= 1e-140);
            exponent += 140;
        }
        (result, exponent)
    }
}

impl Index<(usize, usize)> for SquareMatrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[row * self.size + col]
    }
}

impl IndexMut<(usize, usize)> for SquareMatrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.data[row * self.size + col]
    }
}

/// Survival function of the Kolmogorov distribution, `P(K > lambda)`.
pub(crate) fn kolmogorov_sf(lambda: f64) -> f64 {
    if lambda <= 0.0 {
        return 1.0;
    }
    if lambda < 1.18 {
        // Jacobi theta form converges quickly for small arguments
        let k = (2.0 * PI).sqrt() / lambda;
        let t = -PI * PI / (8.0 * lambda * lambda);
        let cdf = k * (1..=8_i32)
            .map(|j| {
                let odd = f64::from(2 * j - 1);
                (odd * odd * t).exp()
            })
            .sum::<f64>();
        (1.0 - cdf).clamp(0.0, 1.0)
    } else {
        let sum = (1..=100_i32)
            .map(|j| {
                let sign = if j % 2 == 0 { -1.0 } else { 1.0 };
                let j = f64::from(j);
                sign * (-2.0 * j * j * lambda * lambda).exp()
            })
            .sum::<f64>();
        (2.0 * sum).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kolmogorov_sf_reference_values() {
        // Classic critical values of the limiting distribution
        assert!((kolmogorov_sf(1.358) - 0.05).abs() < 1e-3);
        assert!((kolmogorov_sf(1.628) - 0.01).abs() < 1e-3);
        assert!((kolmogorov_sf(1.224) - 0.10).abs() < 1e-3);
        assert!((kolmogorov_sf(0.5) - 0.9639).abs() < 1e-3);
        assert_eq!(kolmogorov_sf(0.0), 1.0);
    }

    #[test]
    fn test_kolmogorov_sf_is_continuous_at_switch() {
        let below = kolmogorov_sf(1.18 - 1e-9);
        let above = kolmogorov_sf(1.18);
        assert!((below - above).abs() < 1e-6);
    }

    #[test]
    fn test_exact_distribution_reference_values() {
        // Worked example from Marsaglia, Tsang and Wang (2003)
        assert!((kolmogorov_cdf_exact(10, 0.274) - 0.628_479_615_456_504_3).abs() < 1e-12);
        // A single observation always has D >= 0.5
        assert!(kolmogorov_cdf_exact(1, 0.5).abs() < 1e-12);
        assert!((ks_sf(8, 0.25) - 0.613_409_042_358_398_4).abs() < 1e-9);
    }

    #[test]
    fn test_tail_approximation_joins_exact_distribution() {
        let d = (3.76_f64 / 200.0).sqrt();
        let exact = ks_sf(200, d - 1e-9);
        let approx = ks_sf(200, d + 1e-9);
        assert!((exact - 0.000_966_29).abs() < 1e-7, "{exact}");
        assert!((approx - exact).abs() < 1e-6, "{exact} {approx}");
    }

    #[test]
    fn test_large_samples_use_limiting_distribution() {
        let n = EXACT_MAX_SAMPLE_SIZE + 1;
        let d = 0.005;
        assert_eq!(ks_sf(n, d), kolmogorov_sf(10_001_f64.sqrt() * d));
        // At the size limit the exact value sits just below the limiting one
        let exact = ks_sf(EXACT_MAX_SAMPLE_SIZE, d);
        assert!((exact - 0.962_877_8).abs() < 1e-6, "{exact}");
        assert!(exact < kolmogorov_sf(0.5));
    }

    #[test]
    fn test_statistic_single_value() {
        // ECDF jumps from 0 to 1 at the mean, where the normal CDF is 0.5
        let result = kolmogorov_smirnov(&[3.0], 3.0, 1.0).unwrap();
        assert!((result.statistic - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_shifted_sample_rejected() {
        let values = (0..200).map(|i| 5.0 + f64::from(i) / 100.0).collect::<Vec<_>>();
        let result = kolmogorov_smirnov(&values, 0.0, 1.0).unwrap();
        assert!(result.statistic > 0.99);
        assert!(result.p_value < 1e-10);
    }

    #[test]
    fn test_fitted_matches_explicit_parameters() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        // mean 5, population std 2
        let fitted = kolmogorov_smirnov_fitted(&values).unwrap();
        let explicit = kolmogorov_smirnov(&values, 5.0, 2.0).unwrap();
        assert_eq!(fitted, explicit);
        assert_eq!(
            kolmogorov_smirnov_fitted(&[3.0, 3.0]).unwrap_err(),
            StatsError::ZeroVariance
        );
    }

    #[test]
    fn test_rejects_invalid_scale() {
        assert_eq!(
            kolmogorov_smirnov(&[1.0, 2.0], 0.0, 0.0).unwrap_err(),
            StatsError::ZeroVariance
        );
        assert_eq!(
            kolmogorov_smirnov(&[1.0, 2.0], 0.0, f64::INFINITY).unwrap_err(),
            StatsError::NonFiniteScale
        );
        // Squared deviations overflow even though every value is finite
        assert_eq!(
            kolmogorov_smirnov_fitted(&[-1e160, 0.0, 1e160]).unwrap_err(),
            StatsError::NonFiniteScale
        );
    }
}
