//! Multi-test normality checking.
//!
//! [`NormalityCheck`] runs three goodness-of-fit tests against a sample:
//!
//! 1. **Shapiro-Wilk**, only for samples of at most
//!    [`MAX_SAMPLE_SIZE`](edakit_stats::normality::shapiro::MAX_SAMPLE_SIZE) values
//! 2. **Kolmogorov-Smirnov** against a normal distribution fitted with the
//!    sample mean and population standard deviation
//! 3. **Anderson-Darling**, judged at its 5% critical value
//!
//! The per-test verdicts are collected in [`NormalityResults`], but the
//! overall verdict of the report is taken from the Kolmogorov-Smirnov p-value
//! alone. The Anderson-Darling verdict ignores `alpha`.
//!
//! # Examples
//!
//! ```
//! use edakit_analysis::normality::{NormalityCheck, TestName};
//!
//! let data = [4.9, 5.1, 5.0, 4.8, 5.3, 4.7, 5.2, 5.0, 4.9, 5.1, 5.4, 4.6];
//! let report = NormalityCheck::new(0.02).unwrap().run(&data).unwrap();
//! assert!(report.is_normal);
//! assert_eq!(report.results.len(), 3);
//! assert!(report.results.get(TestName::Shapiro).is_some());
//! ```

use std::fmt;

use edakit_stats::{
    descriptive::DescriptiveStats,
    histogram::{BinRule, Histogram},
    kde::GaussianKde,
    normality::{
        AndersonDarlingTest, PValueTest, anderson_darling, kolmogorov_smirnov_fitted,
        shapiro::{self, shapiro_wilk},
    },
    probplot::ProbabilityPlot,
};
use serde::{Serialize, Serializer};

use crate::{
    DEFAULT_ALPHA,
    error::{AnalysisError, validate_alpha},
    figure::{Figure, Panel},
};

/// Printed when the sample looks normal.
pub const NORMAL_MESSAGE: &str = "The data is normally distributed (fail to reject H0).";
/// Printed when the sample does not look normal.
pub const NOT_NORMAL_MESSAGE: &str = "The data is not normally distributed (reject H0).";

/// Index of the 5% level in the Anderson-Darling critical values.
const ANDERSON_DARLING_LEVEL_INDEX: usize = 2;

/// Identifies one of the normality tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestName {
    Shapiro,
    KolmogorovSmirnov,
    AndersonDarling,
}

impl TestName {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Shapiro => "shapiro",
            Self::KolmogorovSmirnov => "kolmogorov_smirnov",
            Self::AndersonDarling => "anderson_darling",
        }
    }
}

impl fmt::Display for TestName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl Serialize for TestName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Verdict of a test that reports a p-value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PValueTestResult {
    pub statistic: f64,
    pub p_value: f64,
    /// `p_value > alpha`.
    pub normal: bool,
}

impl PValueTestResult {
    fn new(test: PValueTest, alpha: f64) -> Self {
        Self {
            statistic: test.statistic,
            p_value: test.p_value,
            normal: test.p_value > alpha,
        }
    }
}

/// Verdict of a test judged against tabulated critical values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriticalValueTestResult {
    pub statistic: f64,
    pub critical_values: [f64; 5],
    /// Significance levels in percent, aligned with `critical_values`.
    pub significance_levels: [f64; 5],
    /// `statistic < critical_values[2]`, the 5% level.
    pub normal: bool,
}

impl From<AndersonDarlingTest> for CriticalValueTestResult {
    fn from(test: AndersonDarlingTest) -> Self {
        Self {
            statistic: test.statistic,
            normal: test.statistic < test.critical_values[ANDERSON_DARLING_LEVEL_INDEX],
            critical_values: test.critical_values,
            significance_levels: test.significance_levels,
        }
    }
}

/// Outcome of one normality test.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TestResult {
    PValue(PValueTestResult),
    CriticalValue(CriticalValueTestResult),
}

impl TestResult {
    #[must_use]
    pub fn statistic(&self) -> f64 {
        match self {
            Self::PValue(result) => result.statistic,
            Self::CriticalValue(result) => result.statistic,
        }
    }

    /// The p-value, for tests that report one.
    #[must_use]
    pub fn p_value(&self) -> Option<f64> {
        match self {
            Self::PValue(result) => Some(result.p_value),
            Self::CriticalValue(_) => None,
        }
    }

    #[must_use]
    pub fn is_normal(&self) -> bool {
        match self {
            Self::PValue(result) => result.normal,
            Self::CriticalValue(result) => result.normal,
        }
    }
}

/// Test results keyed by test name, in execution order.
///
/// Serializes as a map from test name to result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalityResults {
    entries: Vec<(TestName, TestResult)>,
}

impl NormalityResults {
    fn insert(&mut self, name: TestName, result: TestResult) {
        debug_assert!(self.get(name).is_none(), "duplicate result for {name}");
        self.entries.push((name, result));
    }

    #[must_use]
    pub fn get(&self, name: TestName) -> Option<&TestResult> {
        self.entries
            .iter()
            .find_map(|(n, result)| (*n == name).then_some(result))
    }

    pub fn iter(&self) -> impl Iterator<Item = (TestName, &TestResult)> + '_ {
        self.entries.iter().map(|(name, result)| (*name, result))
    }

    pub fn names(&self) -> impl Iterator<Item = TestName> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for NormalityResults {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.entries.iter().map(|(name, result)| (name, result)))
    }
}

/// Full outcome of a normality check.
#[derive(Debug, Clone, Serialize)]
pub struct NormalityReport {
    pub alpha: f64,
    pub results: NormalityResults,
    /// Overall verdict: the Kolmogorov-Smirnov p-value exceeds `alpha`.
    pub is_normal: bool,
    /// Histogram with KDE and Q-Q plot, side by side.
    #[serde(skip)]
    pub figure: Figure,
}

impl NormalityReport {
    /// Message describing the overall verdict.
    #[must_use]
    pub fn message(&self) -> &'static str {
        if self.is_normal {
            NORMAL_MESSAGE
        } else {
            NOT_NORMAL_MESSAGE
        }
    }
}

/// Configured normality check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalityCheck {
    alpha: f64,
    bin_rule: BinRule,
}

impl Default for NormalityCheck {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            bin_rule: BinRule::Auto,
        }
    }
}

impl NormalityCheck {
    /// Creates a check at significance level `alpha`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidAlpha`] unless `0 < alpha < 1`.
    pub fn new(alpha: f64) -> Result<Self, AnalysisError> {
        Ok(Self {
            alpha: validate_alpha(alpha)?,
            ..Self::default()
        })
    }

    /// Overrides how the histogram panel picks its bins.
    #[must_use]
    pub fn with_bin_rule(self, bin_rule: BinRule) -> Self {
        Self { bin_rule, ..self }
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Runs all applicable tests and builds the diagnostic figure.
    ///
    /// # Errors
    ///
    /// Returns an error if the sample is empty, contains non-finite values,
    /// has zero variance, or is too small for one of the tests.
    pub fn run(&self, data: &[f64]) -> Result<NormalityReport, AnalysisError> {
        let alpha = self.alpha;
        let stats = DescriptiveStats::new(data)?;
        tracing::debug!(
            count = stats.count,
            mean = stats.mean,
            std_dev = stats.std_dev,
            "Checking normality"
        );

        let mut results = NormalityResults::default();

        if data.len() <= shapiro::MAX_SAMPLE_SIZE {
            let test = shapiro_wilk(data)?;
            tracing::info!(
                statistic = test.statistic,
                p_value = test.p_value,
                "Shapiro-Wilk test"
            );
            results.insert(
                TestName::Shapiro,
                TestResult::PValue(PValueTestResult::new(test, alpha)),
            );
        } else {
            tracing::info!(
                sample_size = data.len(),
                max = shapiro::MAX_SAMPLE_SIZE,
                "Shapiro-Wilk test skipped due to large sample size"
            );
        }

        let ks = PValueTestResult::new(kolmogorov_smirnov_fitted(data)?, alpha);
        tracing::info!(
            statistic = ks.statistic,
            p_value = ks.p_value,
            "Kolmogorov-Smirnov test"
        );
        results.insert(TestName::KolmogorovSmirnov, TestResult::PValue(ks));

        let ad = CriticalValueTestResult::from(anderson_darling(data)?);
        tracing::info!(
            statistic = ad.statistic,
            critical_values = ?ad.critical_values,
            "Anderson-Darling test"
        );
        results.insert(TestName::AndersonDarling, TestResult::CriticalValue(ad));

        let figure = self.build_figure(data)?;

        Ok(NormalityReport {
            alpha,
            results,
            is_normal: ks.p_value > alpha,
            figure,
        })
    }

    fn build_figure(&self, data: &[f64]) -> Result<Figure, AnalysisError> {
        let histogram = Histogram::new(data, self.bin_rule)?;
        let kde = GaussianKde::new(data).ok();
        let plot = ProbabilityPlot::normal(data)?;
        Ok(Figure::grid(
            None,
            1,
            2,
            vec![
                Panel::density_histogram("Histogram with KDE", &histogram, kde.as_ref()),
                Panel::qq_plot("Q-Q Plot", &plot),
            ],
        ))
    }
}

/// Checks whether `data` looks normally distributed at significance level `alpha`.
///
/// Prints the verdict message and returns `true` when the Kolmogorov-Smirnov
/// p-value exceeds `alpha`. Use [`NormalityCheck::run`] to get the per-test
/// results and the diagnostic figure.
///
/// # Errors
///
/// Returns an error if `alpha` is outside `(0, 1)` or the sample cannot be
/// tested (see [`NormalityCheck::run`]).
pub fn check_normality(data: &[f64], alpha: f64) -> Result<bool, AnalysisError> {
    let report = NormalityCheck::new(alpha)?.run(data)?;
    println!("{}", report.message());
    Ok(report.is_normal)
}
