use clap::{Parser, Subcommand};

use self::{
    describe::DescribeArg, generate_sample::GenerateSampleArg, hypothesis::HypothesisArg,
    normality::NormalityArg, split::SplitArg,
};

mod describe;
mod generate_sample;
mod hypothesis;
mod normality;
mod split;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Check whether a column is normally distributed
    Normality(#[clap(flatten)] NormalityArg),
    /// Print summary statistics of a column
    Describe(#[clap(flatten)] DescribeArg),
    /// Interpret a p-value at a significance level
    Hypothesis(#[clap(flatten)] HypothesisArg),
    /// Generate a synthetic sample as CSV
    GenerateSample(#[clap(flatten)] GenerateSampleArg),
    /// Split a CSV file into train and test sets
    Split(#[clap(flatten)] SplitArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Normality(arg) => normality::run(&arg)?,
        Mode::Describe(arg) => describe::run(&arg)?,
        Mode::Hypothesis(arg) => hypothesis::run(&arg),
        Mode::GenerateSample(arg) => generate_sample::run(&arg)?,
        Mode::Split(arg) => split::run(&arg)?,
    }
    Ok(())
}
