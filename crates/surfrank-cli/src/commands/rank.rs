//! Side-by-side ranking command

use crate::app::{OutputFormat, RankArgs};
use crate::output;
use anyhow::Result;
use surfrank_core::{rank_corpus, Config};

/// Rank the corpus with both estimators and print them side by side
pub fn run(args: RankArgs, config: Config, format: OutputFormat, verbose: bool) -> Result<()> {
    let (graph, config) = super::prepare(&args, config)?;
    let report = rank_corpus(&graph, &config.rank)?;

    print!("{}", output::format_report(&report, format));

    if verbose {
        let verdict = if report.agrees() { "agree" } else { "disagree" };
        eprintln!(
            "Estimators {} (max difference {:.4}, tolerance {:.4})",
            verdict, report.max_difference, report.tolerance
        );
    }
    Ok(())
}
