//! CSV output formatter

use surfrank_core::{CorpusGraph, RankReport, RankResult};

pub fn format_report(report: &RankReport) -> String {
    let mut output = String::from("page,sampled,iterated\n");

    for row in report.rows() {
        output.push_str(&format!(
            "{},{},{}\n",
            escape_csv(row.page),
            row.sampled,
            row.iterated
        ));
    }

    output
}

pub fn format_ranks(ranks: &RankResult) -> String {
    let mut output = String::from("page,rank\n");

    for (page, rank) in ranks.iter() {
        output.push_str(&format!("{},{}\n", escape_csv(page), rank));
    }

    output
}

/// One row per link; dangling pages get a row with an empty target
pub fn format_links(graph: &CorpusGraph) -> String {
    let mut output = String::from("source,target\n");

    for (page, targets) in graph.to_links() {
        if targets.is_empty() {
            output.push_str(&format!("{},\n", escape_csv(&page)));
        }
        for target in targets {
            output.push_str(&format!("{},{}\n", escape_csv(&page), escape_csv(&target)));
        }
    }

    output
}

fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
