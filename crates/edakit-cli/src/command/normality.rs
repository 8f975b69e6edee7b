use std::path::PathBuf;

use anyhow::Context;
use edakit_analysis::{
    DEFAULT_ALPHA,
    normality::{NormalityCheck, NormalityReport, TestResult},
};

use crate::{
    util::{self, Destination},
    view,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct NormalityArg {
    /// CSV file with a header row
    pub input: PathBuf,
    /// Column to test
    #[arg(long)]
    pub column: String,
    /// Significance level
    #[arg(long, default_value_t = DEFAULT_ALPHA)]
    pub alpha: f64,
    /// Show the histogram and Q-Q plot in the terminal
    #[arg(long)]
    pub plot: bool,
    /// Write the per-test results as JSON to this path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &NormalityArg) -> anyhow::Result<()> {
    let NormalityArg {
        input,
        column,
        alpha,
        plot,
        output,
    } = arg;

    let data = util::read_column(input, column)?;
    let report = NormalityCheck::new(*alpha)?
        .run(&data)
        .with_context(|| format!("Failed to check normality of column '{column}'"))?;

    print_report(column, &report);

    if let Some(path) = output {
        let destination = Destination::File(path.clone());
        destination.write_json(&report)?;
        println!("\nResults saved to: {destination}");
    }
    if *plot {
        view::show_figure(&report.figure)?;
    }
    Ok(())
}

fn print_report(column: &str, report: &NormalityReport) {
    println!("Normality of '{column}' (alpha = {})", report.alpha);
    println!("==========================================");
    for (name, result) in report.results.iter() {
        let verdict = if result.is_normal() {
            "normal"
        } else {
            "not normal"
        };
        match result {
            TestResult::PValue(r) => println!(
                "  {name:<20} statistic = {:>10.6}  p-value = {:>10.6}  {verdict}",
                r.statistic, r.p_value
            ),
            TestResult::CriticalValue(r) => println!(
                "  {name:<20} statistic = {:>10.6}  critical (5%) = {:>6.3}  {verdict}",
                r.statistic, r.critical_values[2]
            ),
        }
    }
    println!();
    println!("{}", report.message());
}
