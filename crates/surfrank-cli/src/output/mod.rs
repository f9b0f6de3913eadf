//! Output formatters

pub mod csv;
pub mod json;
pub mod markdown;
pub mod terminal;

use crate::app::OutputFormat;
use surfrank_core::{CorpusGraph, RankReport, RankResult};

/// Format both estimates side by side
pub fn format_report(report: &RankReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_report(report),
        OutputFormat::Csv => csv::format_report(report),
        OutputFormat::Md => markdown::format_report(report),
        OutputFormat::Cli => terminal::format_report(report),
    }
}

/// Format a single estimator's ranks
pub fn format_ranks(ranks: &RankResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_ranks(ranks),
        OutputFormat::Csv => csv::format_ranks(ranks),
        OutputFormat::Md => markdown::format_ranks(ranks),
        OutputFormat::Cli => terminal::format_ranks(ranks),
    }
}

/// Format the corpus link graph
pub fn format_links(graph: &CorpusGraph, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_links(graph),
        OutputFormat::Csv => csv::format_links(graph),
        OutputFormat::Md => markdown::format_links(graph),
        OutputFormat::Cli => terminal::format_links(graph),
    }
}

/// Section heading naming the estimator behind a result
pub fn heading(ranks: &RankResult) -> String {
    match ranks.stats {
        surfrank_core::RunStats::Sampling { samples, .. } => {
            format!("PageRank Results from Sampling (n = {})", samples)
        }
        surfrank_core::RunStats::Iteration { .. } => "PageRank Results from Iteration".to_string(),
    }
}
