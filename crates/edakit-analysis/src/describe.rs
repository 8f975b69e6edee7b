//! Descriptive summaries of a single column.

use std::fmt;

use edakit_stats::{
    boxplot::BoxplotSummary,
    descriptive::DescriptiveStats,
    histogram::{BinRule, Histogram},
};

use crate::{
    error::AnalysisError,
    figure::{Figure, Panel},
    table::Table,
};

/// Summary statistics and charts for one column.
///
/// The [`Display`](fmt::Display) output lists count, mean, std, min,
/// quartiles and max, followed by the skewness and kurtosis lines.
#[derive(Debug, Clone)]
pub struct DistributionDescription {
    pub name: String,
    pub stats: DescriptiveStats,
    /// Histogram above a boxplot.
    pub figure: Figure,
}

impl fmt::Display for DistributionDescription {
    #[expect(clippy::cast_precision_loss)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.stats;
        let rows = [
            ("count", format!("{:.6}", s.count as f64)),
            ("mean", format!("{:.6}", s.mean)),
            ("std", format!("{:.6}", s.std_dev)),
            ("min", format!("{:.6}", s.min)),
            ("25%", format!("{:.6}", s.q1)),
            ("50%", format!("{:.6}", s.median)),
            ("75%", format!("{:.6}", s.q3)),
            ("max", format!("{:.6}", s.max)),
        ];
        let width = rows.iter().map(|(_, value)| value.len()).max().unwrap_or(0);
        for (label, value) in rows {
            writeln!(f, "{label:<5}    {value:>width$}")?;
        }
        writeln!(f, "Name: {}, dtype: float64", self.name)?;
        writeln!(f, "Skewness: {:?}", s.skewness)?;
        write!(f, "Kurtosis: {:?}", s.kurtosis)
    }
}

/// Computes the summary of column `name` and prints it to stdout.
///
/// # Errors
///
/// Returns an error if the column is missing, holds non-numeric values, or
/// has no values.
///
/// # Examples
///
/// ```
/// use edakit_analysis::{describe_distribution, table::Table};
///
/// let table = Table::from_columns(vec![("x".to_owned(), vec![1.0, 2.0, 3.0, 4.0, 5.0])]);
/// let description = describe_distribution(&table, "x").unwrap();
/// assert_eq!(description.stats.mean, 3.0);
/// ```
pub fn describe_distribution(
    table: &Table,
    name: &str,
) -> Result<DistributionDescription, AnalysisError> {
    let values = table.numeric_column(name)?;
    let description = DistributionDescription::new(name, &values)?;
    println!("{description}");
    Ok(description)
}

impl DistributionDescription {
    /// Computes the summary without printing it.
    pub fn new(name: &str, values: &[f64]) -> Result<Self, AnalysisError> {
        let stats = DescriptiveStats::new(values)?;
        tracing::debug!(name, count = stats.count, "Describing distribution");
        let histogram = Histogram::new(values, BinRule::Auto)?;
        let boxplot = BoxplotSummary::new(values)?;
        let figure = Figure::grid(
            Some(format!("Distribution of '{name}'")),
            2,
            1,
            vec![
                Panel::count_histogram(name, &histogram),
                Panel::boxplot(name, &boxplot),
            ],
        );
        Ok(Self {
            name: name.to_owned(),
            stats,
            figure,
        })
    }
}
