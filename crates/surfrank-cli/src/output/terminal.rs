//! Terminal output formatter

use super::heading;
use surfrank_core::{CorpusGraph, RankReport, RankResult};

pub fn format_report(report: &RankReport) -> String {
    let mut output = format_ranks(&report.sampled);
    output.push_str(&format_ranks(&report.iterated));
    output
}

pub fn format_ranks(ranks: &RankResult) -> String {
    let mut output = heading(ranks);
    output.push('\n');

    for (page, rank) in ranks.iter() {
        output.push_str(&format!("  {}: {:.4}\n", page, rank));
    }

    output
}

pub fn format_links(graph: &CorpusGraph) -> String {
    let mut output = String::new();

    for (page, targets) in graph.to_links() {
        if targets.is_empty() {
            output.push_str(&format!("{} -> (no links)\n", page));
        } else {
            let joined = targets.into_iter().collect::<Vec<_>>().join(", ");
            output.push_str(&format!("{} -> {}\n", page, joined));
        }
    }

    output
}
