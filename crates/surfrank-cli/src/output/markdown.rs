//! Markdown output formatter

use super::heading;
use surfrank_core::{CorpusGraph, RankReport, RankResult};

pub fn format_report(report: &RankReport) -> String {
    let mut output = String::from("| Page | Sampling | Iteration |\n|------|---------:|----------:|\n");

    for row in report.rows() {
        output.push_str(&format!(
            "| {} | {:.4} | {:.4} |\n",
            escape_cell(row.page),
            row.sampled,
            row.iterated
        ));
    }

    output
}

pub fn format_ranks(ranks: &RankResult) -> String {
    let mut output = format!("## {}\n\n| Page | Rank |\n|------|-----:|\n", heading(ranks));

    for (page, rank) in ranks.iter() {
        output.push_str(&format!("| {} | {:.4} |\n", escape_cell(page), rank));
    }

    output
}

pub fn format_links(graph: &CorpusGraph) -> String {
    let mut output = String::from("| Page | Links |\n|------|-------|\n");

    for (page, targets) in graph.to_links() {
        let joined = targets
            .iter()
            .map(|t| escape_cell(t))
            .collect::<Vec<_>>()
            .join(", ");
        output.push_str(&format!("| {} | {} |\n", escape_cell(&page), joined));
    }

    output
}

fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|")
}
