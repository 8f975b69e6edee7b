use std::ops::Range;

use crate::{StatsError, error::validate, percentiles::Quartiles};

/// A histogram representation of a dataset's distribution.
///
/// The histogram divides the data range into equal-width bins and counts the
/// frequency of values falling into each bin. The first bin starts at the
/// minimum and the last bin ends at the maximum of the data; the last bin is
/// closed on both sides so the maximum is counted.
#[derive(Debug, Clone)]
pub struct Histogram {
    /// The bins comprising the histogram, in ascending order.
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
///
/// Each bin represents a range of values and the count of data points falling within that range.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// The range of values covered by this bin (inclusive start, exclusive end).
    pub range: Range<f64>,
    /// The number of values that fall within this bin's range.
    pub count: u64,
}

impl HistogramBin {
    /// Width of the bin.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.range.end - self.range.start
    }

    /// Midpoint of the bin.
    #[must_use]
    pub fn center(&self) -> f64 {
        f64::midpoint(self.range.start, self.range.end)
    }
}

/// Largest bin count [`BinRule::Auto`] picks before falling back to Sturges.
pub const MAX_AUTO_BINS: usize = 1000;

/// Strategy for choosing the number of bins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BinRule {
    /// The smaller of the Freedman-Diaconis and Sturges bin widths.
    ///
    /// Falls back to Sturges when the interquartile range is zero or when
    /// outliers would push the bin count above [`MAX_AUTO_BINS`].
    #[default]
    Auto,
    /// A fixed number of equal-width bins.
    Fixed(usize),
}

impl Histogram {
    /// Creates a histogram from unsorted values.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset is empty, contains non-finite values,
    /// or spans a range that overflows `f64`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use edakit_stats::histogram::{BinRule, Histogram};
    /// let values = [5.0, 2.0, 8.0, 1.0, 9.0, 3.0, 7.0, 4.0, 6.0, 10.0];
    /// let histogram = Histogram::new(&values, BinRule::Fixed(3)).unwrap();
    /// assert_eq!(histogram.bins.len(), 3);
    /// assert_eq!(histogram.total_count(), 10);
    /// ```
    pub fn new(values: &[f64], rule: BinRule) -> Result<Self, StatsError> {
        validate(values)?;
        let sorted = crate::sorted(values);
        if !(sorted[sorted.len() - 1] - sorted[0]).is_finite() {
            return Err(StatsError::NonFiniteScale);
        }
        Ok(Self::from_sorted(&sorted, rule))
    }

    /// Creates a histogram from pre-sorted, finite values.
    ///
    /// An empty input produces an empty histogram. The range between the
    /// smallest and largest value must itself be finite.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], rule: BinRule) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let (Some(&min), Some(&max)) = (sorted_values.first(), sorted_values.last()) else {
            return Self { bins: vec![] };
        };

        // Degenerate range: a single unit-wide bin centered on the value
        let (start, end, num_bins) = if max - min < f64::EPSILON * max.abs().max(1.0) {
            (min - 0.5, max + 0.5, 1)
        } else {
            let num_bins = match rule {
                BinRule::Auto => auto_bin_count(sorted_values, max - min),
                BinRule::Fixed(n) => n.max(1),
            };
            (min, max, num_bins)
        };

        let width = (end - start) / num_bins as f64;
        let mut bins = (0..num_bins)
            .map(|i| HistogramBin {
                range: (start + i as f64 * width)..(start + (i + 1) as f64 * width),
                count: 0,
            })
            .collect::<Vec<_>>();
        // Recompute the last edge to avoid floating-point accumulation errors
        if let Some(last) = bins.last_mut() {
            last.range.end = end;
        }

        for &value in sorted_values {
            let idx = (((value - start) / width).floor() as usize).min(num_bins - 1);
            bins[idx].count += 1;
        }

        Self { bins }
    }

    /// Total number of values counted by the histogram.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// Probability density of each bin, normalized so the histogram area is 1.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn densities(&self) -> Vec<f64> {
        let total = self.total_count() as f64;
        self.bins
            .iter()
            .map(|bin| {
                if total == 0.0 {
                    0.0
                } else {
                    bin.count as f64 / (total * bin.width())
                }
            })
            .collect()
    }
}

#[expect(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]
fn auto_bin_count(sorted_values: &[f64], range: f64) -> usize {
    let n = sorted_values.len() as f64;
    let sturges_bins = ((n.log2() + 1.0).ceil() as usize).max(1);
    let fd_width = 2.0 * Quartiles::from_sorted(sorted_values).iqr() * n.powf(-1.0 / 3.0);
    if fd_width <= 0.0 {
        return sturges_bins;
    }
    // Float-to-int casts saturate, so a huge outlier lands above the cap
    let fd_bins = (range / fd_width).ceil() as usize;
    if fd_bins > MAX_AUTO_BINS {
        return sturges_bins;
    }
    fd_bins.max(sturges_bins)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_include_maximum() {
        let histogram = Histogram::new(&[0.0, 1.0, 2.0, 3.0, 4.0], BinRule::Fixed(2)).unwrap();
        assert_eq!(histogram.bins.len(), 2);
        assert_eq!(histogram.bins[0].count, 2);
        assert_eq!(histogram.bins[1].count, 3);
        assert_eq!(histogram.bins[1].range.end, 4.0);
    }

    #[test]
    fn test_constant_values() {
        let histogram = Histogram::new(&[7.0; 4], BinRule::Auto).unwrap();
        assert_eq!(histogram.bins.len(), 1);
        assert_eq!(histogram.bins[0].range, 6.5..7.5);
        assert_eq!(histogram.bins[0].count, 4);
    }

    #[test]
    fn test_auto_rule_uses_sturges_for_small_samples() {
        // n = 5: Sturges gives ceil(log2(5) + 1) = 4 bins, FD width is wider
        let histogram = Histogram::new(&[1.0, 2.0, 3.0, 4.0, 5.0], BinRule::Auto).unwrap();
        assert_eq!(histogram.bins.len(), 4);
    }

    #[test]
    fn test_densities_integrate_to_one() {
        let values = (0..100).map(f64::from).map(|v| (v * 0.37).sin()).collect::<Vec<_>>();
        let histogram = Histogram::new(&values, BinRule::Auto).unwrap();
        let area = histogram
            .bins
            .iter()
            .zip(histogram.densities())
            .map(|(bin, density)| bin.width() * density)
            .sum::<f64>();
        assert!((area - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_extreme_outlier_falls_back_to_sturges() {
        for outlier in [1e9, 1e30, f64::MAX / 2.0] {
            let mut values = (0..100).map(f64::from).collect::<Vec<_>>();
            values.push(outlier);
            let histogram = Histogram::new(&values, BinRule::Auto).unwrap();
            // ceil(log2(101) + 1) = 8
            assert_eq!(histogram.bins.len(), 8, "outlier {outlier}");
            assert_eq!(histogram.total_count(), 101);
            assert_eq!(histogram.bins[7].count, 1);
        }
    }

    #[test]
    fn test_overflowing_range_is_an_error() {
        assert_eq!(
            Histogram::new(&[-f64::MAX, f64::MAX], BinRule::Auto).unwrap_err(),
            StatsError::NonFiniteScale
        );
    }

    #[test]
    fn test_empty_sorted_input() {
        assert!(Histogram::from_sorted(&[], BinRule::Auto).bins.is_empty());
    }
}
