//! Interpretation of hypothesis test outcomes.
//!
//! A test is summarized by its p-value; the null hypothesis is rejected when
//! the p-value is strictly below the significance level.

use edakit_stats::normality::PValueTest;

use crate::normality::PValueTestResult;

/// Sentence returned when the null hypothesis is rejected.
pub const REJECT_SENTENCE: &str = "There is sufficient evidence to reject the null hypothesis.";

/// Sentence returned when the null hypothesis is retained.
pub const FAIL_TO_REJECT_SENTENCE: &str =
    "There is not sufficient evidence to reject the null hypothesis.";

/// A test outcome that exposes a p-value.
pub trait HasPValue {
    fn p_value(&self) -> f64;
}

impl HasPValue for f64 {
    fn p_value(&self) -> f64 {
        *self
    }
}

impl HasPValue for PValueTest {
    fn p_value(&self) -> f64 {
        self.p_value
    }
}

impl HasPValue for PValueTestResult {
    fn p_value(&self) -> f64 {
        self.p_value
    }
}

/// Decision about the null hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HypothesisDecision {
    Reject,
    FailToReject,
}

impl HypothesisDecision {
    /// Decides by comparing `p_value` strictly against `alpha`.
    ///
    /// # Examples
    ///
    /// ```
    /// use edakit_analysis::hypothesis::HypothesisDecision;
    ///
    /// assert_eq!(HypothesisDecision::decide(0.01, 0.02), HypothesisDecision::Reject);
    /// assert_eq!(HypothesisDecision::decide(0.02, 0.02), HypothesisDecision::FailToReject);
    /// ```
    #[must_use]
    pub fn decide(p_value: f64, alpha: f64) -> Self {
        if p_value < alpha {
            Self::Reject
        } else {
            Self::FailToReject
        }
    }

    #[must_use]
    pub fn sentence(self) -> &'static str {
        match self {
            Self::Reject => REJECT_SENTENCE,
            Self::FailToReject => FAIL_TO_REJECT_SENTENCE,
        }
    }
}

/// Interprets a test outcome at significance level `alpha`.
///
/// Returns [`REJECT_SENTENCE`] when the p-value is below `alpha` and
/// [`FAIL_TO_REJECT_SENTENCE`] otherwise, including when they are equal.
///
/// # Examples
///
/// ```
/// use edakit_analysis::{DEFAULT_ALPHA, check_hypothesis, hypothesis::REJECT_SENTENCE};
///
/// assert_eq!(check_hypothesis(&0.001, DEFAULT_ALPHA), REJECT_SENTENCE);
/// ```
pub fn check_hypothesis<T>(test: &T, alpha: f64) -> &'static str
where
    T: HasPValue + ?Sized,
{
    tracing::info!(alpha, "Checking hypothesis");
    HypothesisDecision::decide(test.p_value(), alpha).sentence()
}
