use edakit_analysis::{
    AnalysisError, RANDOM_STATE, TEST_SIZE, check_hypothesis, describe_distribution,
    figure::PanelKind,
    hypothesis::{FAIL_TO_REJECT_SENTENCE, REJECT_SENTENCE},
    normality::{NormalityCheck, TestName},
    split::train_test_split,
    table::Table,
};

#[test]
fn test_describe_known_values() {
    let table = Table::from_reader("x,label\n1,a\n2,b\n3,c\n4,d\n5,e\n".as_bytes()).unwrap();
    let description = describe_distribution(&table, "x").unwrap();

    assert_eq!(description.stats.count, 5);
    assert_eq!(description.stats.mean, 3.0);
    assert!(description.stats.skewness.abs() < 1e-12);
    assert!((description.stats.std_dev - 2.5_f64.sqrt()).abs() < 1e-12);
    assert_eq!(description.stats.median, 3.0);
}

#[test]
fn test_describe_rejects_text_column() {
    let table = Table::from_reader("x,label\n1,a\n".as_bytes()).unwrap();
    assert!(matches!(
        describe_distribution(&table, "label"),
        Err(AnalysisError::NonNumericValue { .. })
    ));
}

#[test]
fn test_hypothesis_boundaries() {
    for (p_value, expected) in [
        (0.0, REJECT_SENTENCE),
        (0.019_999, REJECT_SENTENCE),
        (0.02, FAIL_TO_REJECT_SENTENCE),
        (0.020_001, FAIL_TO_REJECT_SENTENCE),
        (0.9, FAIL_TO_REJECT_SENTENCE),
    ] {
        assert_eq!(check_hypothesis(&p_value, 0.02), expected, "p = {p_value}");
    }
}

#[test]
fn test_hypothesis_on_normality_result() {
    let data = (0..100).map(|i| f64::from(i) / 99.0).collect::<Vec<_>>();
    let report = NormalityCheck::default().run(&data).unwrap();
    let edakit_analysis::normality::TestResult::PValue(shapiro) =
        report.results.get(TestName::Shapiro).unwrap()
    else {
        panic!("Shapiro-Wilk reports a p-value");
    };
    assert_eq!(check_hypothesis(shapiro, report.alpha), REJECT_SENTENCE);
}

#[test]
fn test_split_with_workflow_constants() {
    let table = Table::from_columns(vec![("x".to_owned(), (0..25).map(f64::from).collect())]);
    let (train, test) = train_test_split(&table, TEST_SIZE, RANDOM_STATE).unwrap();
    assert_eq!(test.len(), 5);
    assert_eq!(train.len(), 20);
    assert_eq!(
        train_test_split(&table, TEST_SIZE, RANDOM_STATE).unwrap(),
        (train, test)
    );
}

#[test]
fn test_describe_with_extreme_outlier() {
    let mut values = (0..100).map(f64::from).collect::<Vec<_>>();
    values.push(1e30);
    let table = Table::from_columns(vec![("x".to_owned(), values)]);
    let description = describe_distribution(&table, "x").unwrap();

    assert_eq!(description.stats.max, 1e30);
    let PanelKind::CountHistogram { bars } = &description.figure.panels[0].kind else {
        panic!("first panel is not a count histogram");
    };
    assert_eq!(bars.len(), 8);
    assert_eq!(bars.iter().map(|bar| bar.height).sum::<f64>(), 101.0);
}
