use std::path::PathBuf;

use edakit_analysis::{
    RANDOM_STATE,
    sample::{SampleDistribution, SampleGenerator},
    table::Table,
};

use crate::util::Destination;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum DistributionKind {
    Normal,
    Exponential,
    Uniform,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GenerateSampleArg {
    /// Distribution to draw from
    #[arg(long, value_enum, default_value_t = DistributionKind::Normal)]
    pub distribution: DistributionKind,
    /// Number of values
    #[arg(long, default_value_t = 1000)]
    pub size: usize,
    /// Random seed
    #[arg(long, default_value_t = RANDOM_STATE)]
    pub seed: u64,
    /// Name of the generated column
    #[arg(long, default_value = "value")]
    pub column: String,
    /// Output CSV file path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl DistributionKind {
    fn standard(self) -> SampleDistribution {
        match self {
            Self::Normal => SampleDistribution::Normal {
                mean: 0.0,
                std_dev: 1.0,
            },
            Self::Exponential => SampleDistribution::Exponential { rate: 1.0 },
            Self::Uniform => SampleDistribution::Uniform {
                low: 0.0,
                high: 1.0,
            },
        }
    }
}

pub(crate) fn run(arg: &GenerateSampleArg) -> anyhow::Result<()> {
    let GenerateSampleArg {
        distribution,
        size,
        seed,
        column,
        output,
    } = arg;

    let values = SampleGenerator::new(*seed).generate(distribution.standard(), *size)?;
    let table = Table::from_columns(vec![(column.clone(), values)]);

    let destination = Destination::new(output.as_deref());
    destination.write_table(&table)?;
    tracing::info!(
        ?distribution,
        size,
        seed,
        output = %destination,
        "Generated sample"
    );
    Ok(())
}
