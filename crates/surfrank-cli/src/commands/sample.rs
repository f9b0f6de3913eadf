//! Sampling-only ranking command

use crate::app::{OutputFormat, RankArgs};
use crate::output;
use anyhow::Result;
use surfrank_core::{Config, SamplingEstimator};

pub fn run(args: RankArgs, config: Config, format: OutputFormat) -> Result<()> {
    let (graph, config) = super::prepare(&args, config)?;

    let ranks = SamplingEstimator::new()
        .with_damping(config.rank.damping)
        .with_samples(config.rank.samples)
        .with_seed(config.rank.seed)
        .run(&graph)?;

    print!("{}", output::format_ranks(&ranks, format));
    Ok(())
}
