use crate::{StatsError, error::validate, percentiles::Quartiles};

/// Five-number summary with Tukey whiskers, as drawn by a box-and-whisker plot.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxplotSummary {
    pub quartiles: Quartiles,
    /// Smallest value within `q1 - 1.5 * IQR`.
    pub lower_whisker: f64,
    /// Largest value within `q3 + 1.5 * IQR`.
    pub upper_whisker: f64,
    /// Values beyond the whiskers, in ascending order.
    pub outliers: Vec<f64>,
}

impl BoxplotSummary {
    /// Whisker reach in multiples of the interquartile range.
    pub const WHISKER_IQR: f64 = 1.5;

    /// Computes the summary from unsorted values.
    ///
    /// # Examples
    ///
    /// ```
    /// # use edakit_stats::boxplot::BoxplotSummary;
    /// let summary = BoxplotSummary::new(&[1.0, 2.0, 3.0, 4.0, 100.0]).unwrap();
    /// assert_eq!(summary.upper_whisker, 4.0);
    /// assert_eq!(summary.outliers, vec![100.0]);
    /// ```
    pub fn new(values: &[f64]) -> Result<Self, StatsError> {
        validate(values)?;
        let sorted = crate::sorted(values);
        let quartiles = Quartiles::from_sorted(&sorted);
        let reach = Self::WHISKER_IQR * quartiles.iqr();
        let low_fence = quartiles.q1 - reach;
        let high_fence = quartiles.q3 + reach;

        let inside = sorted
            .iter()
            .copied()
            .filter(|v| (low_fence..=high_fence).contains(v));
        let lower_whisker = inside.clone().next().unwrap_or(quartiles.q1);
        let upper_whisker = inside.last().unwrap_or(quartiles.q3);
        let outliers = sorted
            .iter()
            .copied()
            .filter(|v| !(low_fence..=high_fence).contains(v))
            .collect();

        Ok(Self {
            quartiles,
            lower_whisker,
            upper_whisker,
            outliers,
        })
    }
}
