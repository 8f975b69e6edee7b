use edakit_analysis::{
    AnalysisError, DEFAULT_ALPHA, RANDOM_STATE, check_normality,
    figure::PanelKind,
    normality::{NormalityCheck, TestName, TestResult},
    sample::{SampleDistribution, SampleGenerator},
};
use edakit_stats::StatsError;

const STANDARD_NORMAL: SampleDistribution = SampleDistribution::Normal {
    mean: 0.0,
    std_dev: 1.0,
};

fn evenly_spaced(n: u32) -> Vec<f64> {
    (0..n).map(|i| f64::from(i) / f64::from(n - 1)).collect()
}

#[test]
fn test_large_sample_skips_shapiro() {
    let data = SampleGenerator::new(RANDOM_STATE)
        .generate(STANDARD_NORMAL, 5001)
        .unwrap();
    let report = NormalityCheck::default().run(&data).unwrap();

    assert!(report.results.get(TestName::Shapiro).is_none());
    assert!(report.results.get(TestName::KolmogorovSmirnov).is_some());
    assert!(report.results.get(TestName::AndersonDarling).is_some());
    assert_eq!(report.results.len(), 2);
}

#[test]
fn test_shapiro_runs_at_size_limit() {
    let data = SampleGenerator::new(RANDOM_STATE)
        .generate(STANDARD_NORMAL, 5000)
        .unwrap();
    let report = NormalityCheck::default().run(&data).unwrap();
    assert_eq!(report.results.len(), 3);
}

#[test]
fn test_normal_sample_is_normal() {
    let data = SampleGenerator::new(RANDOM_STATE)
        .generate(STANDARD_NORMAL, 1000)
        .unwrap();
    assert!(check_normality(&data, DEFAULT_ALPHA).unwrap());
}

#[test]
fn test_exponential_sample_is_not_normal() {
    let data = SampleGenerator::new(RANDOM_STATE)
        .generate(SampleDistribution::Exponential { rate: 1.0 }, 1000)
        .unwrap();
    assert!(!check_normality(&data, DEFAULT_ALPHA).unwrap());

    let report = NormalityCheck::default().run(&data).unwrap();
    assert!(report.results.iter().all(|(_, result)| !result.is_normal()));
}

#[test]
fn test_anderson_darling_compares_against_five_percent_level() {
    let data = SampleGenerator::new(RANDOM_STATE)
        .generate(STANDARD_NORMAL, 200)
        .unwrap();
    let report = NormalityCheck::default().run(&data).unwrap();
    let Some(TestResult::CriticalValue(ad)) = report.results.get(TestName::AndersonDarling) else {
        panic!("missing Anderson-Darling result");
    };

    assert_eq!(ad.significance_levels, [15.0, 10.0, 5.0, 2.5, 1.0]);
    assert_eq!(ad.significance_levels[2], 5.0);
    assert_eq!(ad.normal, ad.statistic < ad.critical_values[2]);
    assert!(ad.critical_values.is_sorted());
}

#[test]
fn test_anderson_darling_ignores_alpha() {
    let data = evenly_spaced(100);
    let strict = NormalityCheck::new(0.001).unwrap().run(&data).unwrap();
    let lenient = NormalityCheck::new(0.5).unwrap().run(&data).unwrap();
    assert_eq!(
        strict.results.get(TestName::AndersonDarling),
        lenient.results.get(TestName::AndersonDarling)
    );
}

#[test]
fn test_overall_verdict_comes_from_kolmogorov_smirnov_only() {
    // A uniform grid: too light-tailed for Shapiro-Wilk and Anderson-Darling,
    // but close enough to a fitted normal CDF for Kolmogorov-Smirnov
    let data = evenly_spaced(100);
    let report = NormalityCheck::default().run(&data).unwrap();

    let shapiro = report.results.get(TestName::Shapiro).unwrap();
    let ks = report.results.get(TestName::KolmogorovSmirnov).unwrap();
    let ad = report.results.get(TestName::AndersonDarling).unwrap();
    assert!(!shapiro.is_normal(), "{shapiro:?}");
    assert!(!ad.is_normal(), "{ad:?}");
    assert!(ks.is_normal(), "{ks:?}");

    assert!(report.is_normal);
    assert!(check_normality(&data, DEFAULT_ALPHA).unwrap());
}

#[test]
fn test_alpha_controls_p_value_verdicts() {
    let data = evenly_spaced(100);
    // Shapiro-Wilk p is about 0.0017 for this grid
    let report = NormalityCheck::new(0.001).unwrap().run(&data).unwrap();
    assert!(report.results.get(TestName::Shapiro).unwrap().is_normal());
}

#[test]
fn test_degenerate_samples_are_errors() {
    assert!(check_normality(&[], DEFAULT_ALPHA).is_err());
    assert!(check_normality(&[1.0, f64::INFINITY, 2.0], DEFAULT_ALPHA).is_err());
    assert!(check_normality(&[3.0; 20], DEFAULT_ALPHA).is_err());
    assert!(check_normality(&[1.0, 2.0], DEFAULT_ALPHA).is_err());
}

#[test]
fn test_extreme_outlier_keeps_histogram_small() {
    for outlier in [1e9, 1e30] {
        let mut data = (0..100).map(f64::from).collect::<Vec<_>>();
        data.push(outlier);
        assert!(!check_normality(&data, DEFAULT_ALPHA).unwrap());

        let report = NormalityCheck::default().run(&data).unwrap();
        let PanelKind::DensityHistogram { bars, .. } = &report.figure.panels[0].kind else {
            panic!("first panel is not a density histogram");
        };
        assert_eq!(bars.len(), 8, "outlier {outlier}");
    }
}

#[test]
fn test_overflowing_spread_is_an_error() {
    let bimodal = [1.0, 1.0, 1.0, 1.0, 1.0, 10.0, 10.0, 10.0, 10.0, 10.0];
    // Shapiro-Wilk alone still sees the bimodal shape at this scale
    let scaled = bimodal.map(|v| v * 1e160);
    let shapiro = edakit_stats::normality::shapiro_wilk(&scaled).unwrap();
    assert!(shapiro.p_value < 1e-3, "{shapiro:?}");

    assert!(matches!(
        NormalityCheck::default().run(&scaled),
        Err(AnalysisError::Stats(StatsError::NonFiniteScale))
    ));
}
