//! Random-surfer PageRank estimation
//!
//! Two independent estimators share the corpus graph and the transition
//! model:
//! - [`sample_ranks`] walks a Markov chain and counts visits
//! - [`iterate_ranks`] applies the PageRank update until it stops moving
//!
//! [`rank_corpus`] runs both and reports them side by side.

mod iterative;
mod report;
mod sampling;
mod transition;

pub use iterative::{iterate_ranks, IterativeSolver};
pub use report::{rank_corpus, RankReport, RankRow};
pub use sampling::{sample_ranks, sample_ranks_with_rng, SamplingEstimator};
pub use transition::transition_model;

use crate::error::{Result, SurfRankError};
use serde::Serialize;
use std::collections::BTreeMap;

/// Reject damping factors outside the open interval (0, 1)
pub fn validate_damping(damping: f64) -> Result<()> {
    if damping.is_finite() && damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(SurfRankError::InvalidInput(format!(
            "damping factor must be in (0, 1), got {}",
            damping
        )))
    }
}

/// One-step probability of moving to each page of the corpus
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProbabilityDistribution {
    probabilities: BTreeMap<String, f64>,
}

impl ProbabilityDistribution {
    pub(crate) fn new(probabilities: BTreeMap<String, f64>) -> Self {
        Self { probabilities }
    }

    /// Probability of `page`, or `None` if it is not in the corpus
    pub fn get(&self, page: &str) -> Option<f64> {
        self.probabilities.get(page).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.probabilities.iter().map(|(p, &v)| (p.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// Sum of all probabilities (1.0 up to rounding)
    pub fn total(&self) -> f64 {
        self.probabilities.values().sum()
    }
}

/// How a rank result was produced
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "estimator", rename_all = "snake_case")]
pub enum RunStats {
    Sampling { samples: usize, seed: Option<u64> },
    Iteration { sweeps: usize, delta: f64 },
}

/// Estimated PageRank of every page in a corpus
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankResult {
    pub scores: BTreeMap<String, f64>,
    pub stats: RunStats,
}

impl RankResult {
    pub fn get(&self, page: &str) -> Option<f64> {
        self.scores.get(page).copied()
    }

    /// Pages and scores, ordered by page identifier
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.scores.iter().map(|(p, &v)| (p.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.scores.values().sum()
    }

    /// Short label for the estimator that produced this result
    pub fn estimator(&self) -> &'static str {
        match self.stats {
            RunStats::Sampling { .. } => "sampling",
            RunStats::Iteration { .. } => "iteration",
        }
    }

    /// Top `n` pages by score, ties broken by page identifier
    pub fn top(&self, n: usize) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(n);
        ranked
    }

    /// Largest per-page absolute difference; pages missing on one side count as 0
    pub fn max_abs_difference(&self, other: &RankResult) -> f64 {
        self.differences(other).fold(0.0, f64::max)
    }

    /// Mean per-page absolute difference over the union of both page sets
    pub fn mean_abs_difference(&self, other: &RankResult) -> f64 {
        let (sum, count) = self
            .differences(other)
            .fold((0.0, 0usize), |(s, c), d| (s + d, c + 1));
        if count == 0 {
            0.0
        } else {
            sum / count as f64
        }
    }

    fn differences<'a>(&'a self, other: &'a RankResult) -> impl Iterator<Item = f64> + 'a {
        let only_other = other
            .scores
            .iter()
            .filter(|(p, _)| !self.scores.contains_key(*p))
            .map(|(_, &v)| v.abs());
        self.scores
            .iter()
            .map(|(p, &v)| (v - other.get(p).unwrap_or(0.0)).abs())
            .chain(only_other)
    }
}
