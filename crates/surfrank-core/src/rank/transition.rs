//! Damped random-surfer transition model

use super::{validate_damping, ProbabilityDistribution};
use crate::error::Result;
use crate::graph::CorpusGraph;

/// Fraction of a page's followed-link mass that each of its targets receives.
///
/// A dangling page counts as linking to every page of the corpus, itself
/// included. Both estimators go through this rule.
pub(crate) fn link_share(graph: &CorpusGraph, source: usize) -> f64 {
    match graph.out_degree(source) {
        0 => 1.0 / graph.len() as f64,
        degree => 1.0 / degree as f64,
    }
}

/// Next-page probabilities from `source`, indexed like the graph.
///
/// Every page gets `(1 - d) / N` for the random jump; each link target adds
/// `d * link_share`. For a dangling page the two terms collapse to exactly
/// `1 / N`, which is written directly so the distribution is uniform to the
/// last bit.
pub(crate) fn next_page_weights(graph: &CorpusGraph, source: usize, damping: f64) -> Vec<f64> {
    let n = graph.len();
    if graph.is_dangling(source) {
        return vec![1.0 / n as f64; n];
    }

    let mut weights = vec![(1.0 - damping) / n as f64; n];
    let follow = damping * link_share(graph, source);
    for &target in graph.outbound_indices(source) {
        weights[target] += follow;
    }
    weights
}

/// Probability distribution over the page visited after `page`.
///
/// With probability `damping` the surfer follows one of the page's links
/// chosen uniformly; otherwise it jumps to any page of the corpus. A page
/// without links sends the surfer to a uniformly random page.
pub fn transition_model(
    graph: &CorpusGraph,
    page: &str,
    damping: f64,
) -> Result<ProbabilityDistribution> {
    validate_damping(damping)?;
    graph.ensure_non_empty()?;
    let source = graph.require(page)?;

    let weights = next_page_weights(graph, source, damping);
    let probabilities = graph
        .pages()
        .zip(weights)
        .map(|(p, w)| (p.to_string(), w))
        .collect();

    Ok(ProbabilityDistribution::new(probabilities))
}
