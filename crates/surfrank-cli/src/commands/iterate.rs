//! Iteration-only ranking command

use crate::app::{OutputFormat, RankArgs};
use crate::output;
use anyhow::Result;
use surfrank_core::{Config, IterativeSolver};

pub fn run(args: RankArgs, config: Config, format: OutputFormat) -> Result<()> {
    let (graph, config) = super::prepare(&args, config)?;

    let ranks = IterativeSolver::new()
        .with_damping(config.rank.damping)
        .with_epsilon(config.rank.epsilon)
        .with_max_iterations(config.rank.max_iterations)
        .run(&graph)?;

    print!("{}", output::format_ranks(&ranks, format));
    Ok(())
}
