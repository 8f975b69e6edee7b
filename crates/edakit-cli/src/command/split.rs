use std::path::PathBuf;

use edakit_analysis::{RANDOM_STATE, TEST_SIZE, split::train_test_split};

use crate::util::{self, Destination};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SplitArg {
    /// CSV file with a header row
    pub input: PathBuf,
    /// Fraction of rows held out for testing
    #[arg(long, default_value_t = TEST_SIZE)]
    pub test_size: f64,
    /// Random seed for shuffling
    #[arg(long, default_value_t = RANDOM_STATE)]
    pub seed: u64,
    /// Output path for the training rows
    #[arg(long)]
    pub train: PathBuf,
    /// Output path for the test rows
    #[arg(long)]
    pub test: PathBuf,
}

pub(crate) fn run(arg: &SplitArg) -> anyhow::Result<()> {
    let SplitArg {
        input,
        test_size,
        seed,
        train,
        test,
    } = arg;

    let table = util::read_table(input)?;
    let (train_table, test_table) = train_test_split(&table, *test_size, *seed)?;

    Destination::File(train.clone()).write_table(&train_table)?;
    Destination::File(test.clone()).write_table(&test_table)?;

    println!(
        "Split {} rows: {} train -> {}, {} test -> {}",
        table.len(),
        train_table.len(),
        train.display(),
        test_table.len(),
        test.display()
    );
    Ok(())
}
