use std::path::PathBuf;

use anyhow::Context;
use edakit_analysis::describe_distribution;

use crate::{util, view};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DescribeArg {
    /// CSV file with a header row
    pub input: PathBuf,
    /// Column to describe
    #[arg(long)]
    pub column: String,
    /// Show the histogram and boxplot in the terminal
    #[arg(long)]
    pub plot: bool,
}

pub(crate) fn run(arg: &DescribeArg) -> anyhow::Result<()> {
    let DescribeArg {
        input,
        column,
        plot,
    } = arg;

    let table = util::read_table(input)?;
    let description = describe_distribution(&table, column)
        .with_context(|| format!("Failed to describe column '{column}'"))?;

    if *plot {
        view::show_figure(&description.figure)?;
    }
    Ok(())
}
