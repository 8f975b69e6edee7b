use std::f64::consts::PI;

use statrs::distribution::{ContinuousCDF as _, Normal};

use crate::{StatsError, error::validate};

use super::PValueTest;

/// Smallest sample size the test is defined for.
pub const MIN_SAMPLE_SIZE: usize = 3;
/// Largest sample size the p-value approximation is valid for.
pub const MAX_SAMPLE_SIZE: usize = 5000;

// Royston (1995) polynomial coefficients
const C1: [f64; 6] = [0.0, 0.221_157, -0.147_981, -2.071_19, 4.434_685, -2.706_056];
const C2: [f64; 6] = [0.0, 0.042_981, -0.293_762, -1.752_461, 5.682_633, -3.582_633];
const C3: [f64; 4] = [0.544, -0.399_78, 0.025_054, -6.714e-4];
const C4: [f64; 4] = [1.3822, -0.778_57, 0.062_767, -0.002_032_2];
const C5: [f64; 4] = [-1.5861, -0.310_82, -0.083_751, 0.003_891_5];
const C6: [f64; 3] = [-0.4803, -0.082_676, 0.003_030_2];
const G: [f64; 2] = [-2.273, 0.459];

/// Shapiro-Wilk test of the null hypothesis that the sample is drawn from a
/// normal distribution.
///
/// The W statistic and its p-value follow Royston's AS R94 approximation,
/// valid for sample sizes between 3 and 5000.
///
/// # Errors
///
/// Returns an error if the sample is outside the supported size range,
/// contains non-finite values, or has a zero or overflowing range.
///
/// # Examples
///
/// ```
/// use edakit_stats::normality::shapiro_wilk;
///
/// let result = shapiro_wilk(&[1.2, 0.8, 1.5, 0.9, 1.0, 1.1, 0.7, 1.3, 1.4, 0.6]).unwrap();
/// assert!(result.p_value > 0.05);
///
/// let bimodal = [1.0, 1.0, 1.0, 1.0, 1.0, 10.0, 10.0, 10.0, 10.0, 10.0];
/// assert!(shapiro_wilk(&bimodal).unwrap().p_value < 0.05);
/// ```
pub fn shapiro_wilk(values: &[f64]) -> Result<PValueTest, StatsError> {
    validate(values)?;
    let n = values.len();
    if n < MIN_SAMPLE_SIZE {
        return Err(StatsError::InsufficientSampleSize {
            given: n,
            needed: MIN_SAMPLE_SIZE,
        });
    }
    if n > MAX_SAMPLE_SIZE {
        return Err(StatsError::ExcessiveSampleSize {
            given: n,
            max: MAX_SAMPLE_SIZE,
        });
    }

    let sorted = crate::sorted(values);
    let range = sorted[n - 1] - sorted[0];
    if !range.is_finite() {
        return Err(StatsError::NonFiniteScale);
    }
    if range <= 0.0 {
        return Err(StatsError::ZeroVariance);
    }
    // W is scale invariant; on the unit range the squared deviations stay finite
    let x = sorted
        .iter()
        .map(|v| (v - sorted[0]) / range)
        .collect::<Vec<_>>();

    let a = coefficients(n);
    let w = w_statistic(&x, &a);
    if !w.is_finite() {
        return Err(StatsError::NonFiniteScale);
    }
    let w = w.min(1.0);
    let p_value = p_value(w, n).clamp(0.0, 1.0);

    Ok(PValueTest {
        statistic: w,
        p_value,
    })
}

fn poly(coefficients: &[f64], x: f64) -> f64 {
    coefficients
        .iter()
        .rev()
        .fold(0.0, |acc, &c| acc.mul_add(x, c))
}

/// Upper half of the antisymmetric coefficient vector, normalized so the full
/// vector has unit length.
#[expect(clippy::cast_precision_loss)]
fn coefficients(n: usize) -> Vec<f64> {
    let half = n / 2;
    if n == 3 {
        return vec![std::f64::consts::FRAC_1_SQRT_2];
    }

    let standard = Normal::standard();
    let nf = n as f64;
    // Blom scores of the lower half (negative)
    let m = (1..=half)
        .map(|i| standard.inverse_cdf((i as f64 - 0.375) / (nf + 0.25)))
        .collect::<Vec<_>>();
    let summ2 = 2.0 * m.iter().map(|v| v * v).sum::<f64>();
    let ssumm2 = summ2.sqrt();
    let rsn = 1.0 / nf.sqrt();

    let a1 = poly(&C1, rsn) - m[0] / ssumm2;
    let (corrected, fac) = if n > 5 {
        let a2 = poly(&C2, rsn) - m[1] / ssumm2;
        let fac = ((summ2 - 2.0 * (m[0] * m[0] + m[1] * m[1]))
            / (1.0 - 2.0 * (a1 * a1 + a2 * a2)))
            .sqrt();
        (vec![a1, a2], fac)
    } else {
        let fac = ((summ2 - 2.0 * m[0] * m[0]) / (1.0 - 2.0 * a1 * a1)).sqrt();
        (vec![a1], fac)
    };

    let mut a = m.iter().map(|mi| -mi / fac).collect::<Vec<_>>();
    a[..corrected.len()].copy_from_slice(&corrected);
    a
}

fn w_statistic(x: &[f64], a: &[f64]) -> f64 {
    let n = x.len();
    let numerator = a
        .iter()
        .enumerate()
        .map(|(i, ai)| ai * (x[n - 1 - i] - x[i]))
        .sum::<f64>();
    let mean = crate::descriptive::mean(x);
    let ss = x.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    numerator * numerator / ss
}

#[expect(clippy::cast_precision_loss)]
fn p_value(w: f64, n: usize) -> f64 {
    if n == 3 {
        // Exact distribution for three observations
        return 1.0 - 6.0 / PI * w.sqrt().acos();
    }

    let w1 = 1.0 - w;
    if w1 <= 0.0 {
        return 1.0;
    }
    let y = w1.ln();
    let nf = n as f64;
    let standard = Normal::standard();

    let z = if n <= 11 {
        let gamma = poly(&G, nf);
        if y >= gamma {
            return 0.0;
        }
        let y = -(gamma - y).ln();
        (y - poly(&C3, nf)) / poly(&C4, nf).exp()
    } else {
        let ln_n = nf.ln();
        (y - poly(&C5, ln_n)) / poly(&C6, ln_n).exp()
    };
    standard.sf(z)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_distr::{Distribution as _, Exp, Normal as NormalDistr};
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_coefficients_have_unit_norm() {
        for n in [4, 5, 6, 11, 12, 50, 501] {
            let a = coefficients(n);
            let norm = 2.0 * a.iter().map(|v| v * v).sum::<f64>();
            assert!((norm - 1.0).abs() < 1e-9, "n = {n}: {norm}");
            assert!(a.windows(2).all(|w| w[0] >= w[1]), "n = {n}: {a:?}");
        }
    }

    #[test]
    fn test_three_values() {
        // Equally spaced points are perfectly linear in normal scores
        let result = shapiro_wilk(&[1.0, 2.0, 3.0]).unwrap();
        assert!((result.statistic - 1.0).abs() < 1e-12);
        assert!((result.p_value - 1.0).abs() < 1e-9);

        // W attains its minimum 0.75 when two values coincide
        let result = shapiro_wilk(&[1.0, 1.0, 2.0]).unwrap();
        assert!((result.statistic - 0.75).abs() < 1e-12);
        assert!(result.p_value.abs() < 1e-9);
    }

    #[test]
    fn test_reference_sample() {
        let values = [148.0, 154.0, 158.0, 160.0, 161.0, 162.0, 166.0, 170.0, 182.0, 195.0];
        let result = shapiro_wilk(&values).unwrap();
        assert!((result.statistic - 0.908).abs() < 1e-3, "{result:?}");
        assert!((result.p_value - 0.268).abs() < 5e-3, "{result:?}");
    }

    #[test]
    fn test_statistic_is_scale_invariant() {
        let bimodal = [1.0, 1.0, 1.0, 1.0, 1.0, 10.0, 10.0, 10.0, 10.0, 10.0];
        let base = shapiro_wilk(&bimodal).unwrap();
        assert!((base.statistic - 0.655).abs() < 1e-3, "{base:?}");
        assert!(base.p_value < 1e-3, "{base:?}");

        for factor in [1e160, 1e-160, -3.0] {
            let scaled = bimodal.map(|v| v * factor);
            let result = shapiro_wilk(&scaled).unwrap();
            assert!((result.statistic - base.statistic).abs() < 1e-9, "x{factor}: {result:?}");
            assert!((result.p_value - base.p_value).abs() < 1e-9, "x{factor}: {result:?}");
        }
    }

    #[test]
    fn test_normal_sample_not_rejected() {
        let mut rng = Pcg32::seed_from_u64(7);
        let dist = NormalDistr::new(0.0, 1.0).unwrap();
        let values = (0..500).map(|_| dist.sample(&mut rng)).collect::<Vec<_>>();
        let result = shapiro_wilk(&values).unwrap();
        assert!(result.statistic > 0.99);
        assert!(result.p_value > 0.001);
    }

    #[test]
    fn test_exponential_sample_rejected() {
        let mut rng = Pcg32::seed_from_u64(7);
        let dist = Exp::new(1.0).unwrap();
        let values = (0..500).map(|_| dist.sample(&mut rng)).collect::<Vec<_>>();
        let result = shapiro_wilk(&values).unwrap();
        assert!(result.p_value < 1e-6);
    }

    #[test]
    fn test_size_limits() {
        assert_eq!(
            shapiro_wilk(&[1.0, 2.0]).unwrap_err(),
            StatsError::InsufficientSampleSize {
                given: 2,
                needed: 3
            }
        );
        let values = (0..=5000_u32).map(f64::from).collect::<Vec<_>>();
        assert_eq!(
            shapiro_wilk(&values).unwrap_err(),
            StatsError::ExcessiveSampleSize {
                given: MAX_SAMPLE_SIZE + 1,
                max: MAX_SAMPLE_SIZE
            }
        );
        assert_eq!(
            shapiro_wilk(&[4.0, 4.0, 4.0, 4.0]).unwrap_err(),
            StatsError::ZeroVariance
        );
        assert_eq!(
            shapiro_wilk(&[-f64::MAX, 0.0, f64::MAX]).unwrap_err(),
            StatsError::NonFiniteScale
        );
    }
}
