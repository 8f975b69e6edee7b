use edakit_analysis::{DEFAULT_ALPHA, check_hypothesis};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct HypothesisArg {
    /// P-value reported by a test
    #[arg(long)]
    pub p_value: f64,
    /// Significance level
    #[arg(long, default_value_t = DEFAULT_ALPHA)]
    pub alpha: f64,
}

pub(crate) fn run(arg: &HypothesisArg) {
    let HypothesisArg { p_value, alpha } = *arg;
    println!("{}", check_hypothesis(&p_value, alpha));
}
