//! Side-by-side report of both estimators

use super::{IterativeSolver, RankResult, SamplingEstimator};
use crate::config::RankConfig;
use crate::error::Result;
use crate::graph::CorpusGraph;
use serde::Serialize;

/// Results of both estimators over the same corpus
#[derive(Debug, Clone, Serialize)]
pub struct RankReport {
    pub sampled: RankResult,
    pub iterated: RankResult,
    /// Largest per-page difference between the two estimates
    pub max_difference: f64,
    /// Agreement threshold the report was produced with
    pub tolerance: f64,
}

/// One page with both estimates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankRow<'a> {
    pub page: &'a str,
    pub sampled: f64,
    pub iterated: f64,
}

impl RankReport {
    pub fn new(sampled: RankResult, iterated: RankResult, tolerance: f64) -> Self {
        let max_difference = sampled.max_abs_difference(&iterated);
        Self {
            sampled,
            iterated,
            max_difference,
            tolerance,
        }
    }

    /// Whether the two estimators agree within tolerance
    pub fn agrees(&self) -> bool {
        self.max_difference <= self.tolerance
    }

    /// Rows ordered by page identifier
    pub fn rows(&self) -> Vec<RankRow<'_>> {
        self.iterated
            .iter()
            .map(|(page, iterated)| RankRow {
                page,
                sampled: self.sampled.get(page).unwrap_or(0.0),
                iterated,
            })
            .collect()
    }
}

/// Run the sampling estimator and the iterative solver on one corpus
pub fn rank_corpus(graph: &CorpusGraph, config: &RankConfig) -> Result<RankReport> {
    config.validate()?;

    let sampled = SamplingEstimator::new()
        .with_damping(config.damping)
        .with_samples(config.samples)
        .with_seed(config.seed)
        .run(graph)?;

    let iterated = IterativeSolver::new()
        .with_damping(config.damping)
        .with_epsilon(config.epsilon)
        .with_max_iterations(config.max_iterations)
        .run(graph)?;

    let report = RankReport::new(sampled, iterated, config.tolerance);
    if report.agrees() {
        tracing::info!(
            pages = graph.len(),
            max_difference = report.max_difference,
            "Estimators agree"
        );
    } else {
        tracing::warn!(
            max_difference = report.max_difference,
            tolerance = report.tolerance,
            "Sampling and iteration disagree beyond tolerance"
        );
    }

    Ok(report)
}
