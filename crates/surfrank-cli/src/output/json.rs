//! JSON output formatter

use surfrank_core::{CorpusGraph, RankReport, RankResult};

pub fn format_report(report: &RankReport) -> String {
    let output = serde_json::json!({
        "sampled": report.sampled,
        "iterated": report.iterated,
        "max_difference": report.max_difference,
        "tolerance": report.tolerance,
        "agrees": report.agrees(),
    });

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string()) + "\n"
}

pub fn format_ranks(ranks: &RankResult) -> String {
    serde_json::to_string_pretty(ranks).unwrap_or_else(|_| "{}".to_string()) + "\n"
}

pub fn format_links(graph: &CorpusGraph) -> String {
    serde_json::to_string_pretty(&graph.to_links()).unwrap_or_else(|_| "{}".to_string()) + "\n"
}
