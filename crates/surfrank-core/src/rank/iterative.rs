//! PageRank by repeated application of the update equation

use super::transition::link_share;
use super::{validate_damping, RankResult, RunStats};
use crate::error::{Result, SurfRankError};
use crate::graph::CorpusGraph;

/// Fixed-point PageRank solver.
///
/// Each sweep computes every page's new rank from the previous sweep's
/// snapshot only (Jacobi style); the snapshots are swapped afterwards and
/// never updated in place.
#[derive(Debug, Clone)]
pub struct IterativeSolver {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Convergence threshold on the largest per-page change
    pub epsilon: f64,
    /// Give up with `NonConvergence` after this many sweeps
    pub max_iterations: Option<usize>,
}

impl Default for IterativeSolver {
    fn default() -> Self {
        Self {
            damping: crate::DEFAULT_DAMPING,
            epsilon: crate::DEFAULT_EPSILON,
            max_iterations: None,
        }
    }
}

impl IterativeSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: Option<usize>) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Iterate until no page moves by more than `epsilon`.
    ///
    /// The returned ranks are those of the last computed sweep.
    #[tracing::instrument(skip(self, graph), fields(pages = graph.len(), damping = self.damping, epsilon = self.epsilon))]
    pub fn run(&self, graph: &CorpusGraph) -> Result<RankResult> {
        validate_damping(self.damping)?;
        graph.ensure_non_empty()?;
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(SurfRankError::InvalidInput(format!(
                "epsilon must be positive, got {}",
                self.epsilon
            )));
        }
        if self.max_iterations == Some(0) {
            return Err(SurfRankError::InvalidInput(
                "max iterations must be positive".to_string(),
            ));
        }

        let n = graph.len();
        let damping = self.damping;
        let teleport = (1.0 - damping) / n as f64;

        let mut ranks = vec![1.0 / n as f64; n];
        let mut next = vec![0.0; n];
        let mut sweeps = 0;

        loop {
            sweeps += 1;

            // Dangling pages feed every target equally
            let dangling_mass: f64 = graph
                .dangling_indices()
                .iter()
                .map(|&q| ranks[q] * link_share(graph, q))
                .sum();

            for (target, slot) in next.iter_mut().enumerate() {
                let linked: f64 = graph
                    .inbound_indices(target)
                    .iter()
                    .map(|&q| ranks[q] * link_share(graph, q))
                    .sum();
                *slot = teleport + damping * (linked + dangling_mass);
            }

            let delta = ranks
                .iter()
                .zip(&next)
                .map(|(old, new)| (old - new).abs())
                .fold(0.0, f64::max);

            std::mem::swap(&mut ranks, &mut next);

            if delta <= self.epsilon {
                tracing::debug!(sweeps, delta, "Iteration converged");
                return Ok(self.result(graph, ranks, sweeps, delta));
            }

            if let Some(max) = self.max_iterations {
                if sweeps >= max {
                    tracing::warn!(sweeps, delta, "Iteration cap reached before convergence");
                    return Err(SurfRankError::NonConvergence {
                        iterations: sweeps,
                        delta,
                    });
                }
            }
        }
    }

    fn result(&self, graph: &CorpusGraph, ranks: Vec<f64>, sweeps: usize, delta: f64) -> RankResult {
        let scores = graph
            .pages()
            .zip(ranks)
            .map(|(page, rank)| (page.to_string(), rank))
            .collect();

        RankResult {
            scores,
            stats: RunStats::Iteration { sweeps, delta },
        }
    }
}

/// Compute PageRank by iteration until the largest change is at most `epsilon`
pub fn iterate_ranks(graph: &CorpusGraph, damping: f64, epsilon: f64) -> Result<RankResult> {
    IterativeSolver::new()
        .with_damping(damping)
        .with_epsilon(epsilon)
        .run(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_EPSILON;

    fn chain_with_dangling_end() -> CorpusGraph {
        CorpusGraph::from_links(vec![("A", vec!["B"]), ("B", vec!["C"]), ("C", vec![])])
    }

    #[test]
    fn test_ranks_sum_to_one() {
        let g = CorpusGraph::from_links(vec![
            ("1.html", vec!["2.html", "3.html"]),
            ("2.html", vec!["3.html"]),
            ("3.html", vec!["1.html"]),
            ("4.html", vec![]),
        ]);
        let ranks = iterate_ranks(&g, 0.85, DEFAULT_EPSILON).unwrap();

        assert_eq!(ranks.len(), 4);
        assert!((ranks.total() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_symmetric_pair() {
        let g = CorpusGraph::from_links(vec![("A", vec!["B"]), ("B", vec!["A"])]);
        let ranks = iterate_ranks(&g, 0.85, DEFAULT_EPSILON).unwrap();

        assert!((ranks.get("A").unwrap() - 0.5).abs() < 1e-9);
        assert!((ranks.get("B").unwrap() - 0.5).abs() < 1e-9);
        // Already the stationary distribution, so the first sweep converges.
        assert!(matches!(ranks.stats, RunStats::Iteration { sweeps: 1, .. }));
    }

    #[test]
    fn test_dangling_mass_spread_uniformly() {
        // a = j + dc/3, b = j + da + dc/3, c = j + db + dc/3 with j = 0.05
        // gives b = 1.85a, c = 2.5725a and a = 1 / 5.4225.
        let g = chain_with_dangling_end();
        let ranks = iterate_ranks(&g, 0.85, 1e-12).unwrap();

        let a = 1.0 / 5.4225;
        assert!((ranks.get("A").unwrap() - a).abs() < 1e-9);
        assert!((ranks.get("B").unwrap() - 1.85 * a).abs() < 1e-9);
        assert!((ranks.get("C").unwrap() - 2.5725 * a).abs() < 1e-9);
        assert!((ranks.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_sweep_redistributes_dangling_rank() {
        let g = chain_with_dangling_end();
        let err = IterativeSolver::new()
            .with_epsilon(1e-12)
            .with_max_iterations(Some(1))
            .run(&g)
            .unwrap_err();

        // After one sweep from 1/3 each, A only receives teleport and C's share.
        let expected_a = 0.05 + 0.85 / 9.0;
        match err {
            SurfRankError::NonConvergence { iterations, delta } => {
                assert_eq!(iterations, 1);
                assert!((delta - (1.0 / 3.0 - expected_a)).abs() < 1e-12);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_single_page() {
        let g = CorpusGraph::from_links(vec![("A", Vec::<String>::new())]);
        let ranks = iterate_ranks(&g, 0.85, DEFAULT_EPSILON).unwrap();
        assert!((ranks.get("A").unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_deterministic() {
        let g = chain_with_dangling_end();
        let first = iterate_ranks(&g, 0.85, DEFAULT_EPSILON).unwrap();
        let second = iterate_ranks(&g, 0.85, DEFAULT_EPSILON).unwrap();

        for ((p1, r1), (p2, r2)) in first.iter().zip(second.iter()) {
            assert_eq!(p1, p2);
            assert_eq!(r1.to_bits(), r2.to_bits());
        }
    }

    #[test]
    fn test_converged_result_within_epsilon() {
        let g = chain_with_dangling_end();
        let ranks = iterate_ranks(&g, 0.85, DEFAULT_EPSILON).unwrap();

        match ranks.stats {
            RunStats::Iteration { sweeps, delta } => {
                assert!(sweeps > 1);
                assert!(delta <= DEFAULT_EPSILON);
            }
            other => panic!("unexpected stats: {other:?}"),
        }
    }

    #[test]
    fn test_generous_cap_still_converges() {
        let g = chain_with_dangling_end();
        let capped = IterativeSolver::new()
            .with_max_iterations(Some(1_000))
            .run(&g)
            .unwrap();
        let uncapped = IterativeSolver::new().run(&g).unwrap();
        assert_eq!(capped, uncapped);
    }

    #[test]
    fn test_rejects_invalid_input() {
        let g = chain_with_dangling_end();
        assert!(iterate_ranks(&g, 0.85, 0.0).unwrap_err().is_invalid_input());
        assert!(iterate_ranks(&g, 0.85, -1.0).unwrap_err().is_invalid_input());
        assert!(iterate_ranks(&g, 1.0, 0.001).unwrap_err().is_invalid_input());
        assert!(iterate_ranks(&CorpusGraph::default(), 0.85, 0.001)
            .unwrap_err()
            .is_invalid_input());
    }

    #[test]
    fn test_rejects_zero_iteration_cap() {
        let g = chain_with_dangling_end();
        let err = IterativeSolver::new()
            .with_max_iterations(Some(0))
            .run(&g)
            .unwrap_err();
        assert!(err.is_invalid_input());
        assert!(!matches!(err, SurfRankError::NonConvergence { .. }));
    }
}
