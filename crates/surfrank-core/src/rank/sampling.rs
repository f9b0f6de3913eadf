//! PageRank by Markov chain sampling

use super::transition::next_page_weights;
use super::{validate_damping, RankResult, RunStats};
use crate::error::{Result, SurfRankError};
use crate::graph::CorpusGraph;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Monte Carlo estimator: follow one random surfer and count where it goes.
///
/// The chain is strictly sequential. Visit frequencies converge to the
/// stationary distribution with error shrinking like `1/sqrt(samples)`.
#[derive(Debug, Clone)]
pub struct SamplingEstimator {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Number of steps taken by the surfer
    pub samples: usize,
    /// Seed for a reproducible walk
    pub seed: Option<u64>,
}

impl Default for SamplingEstimator {
    fn default() -> Self {
        Self {
            damping: crate::DEFAULT_DAMPING,
            samples: crate::DEFAULT_SAMPLES,
            seed: None,
        }
    }
}

impl SamplingEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Run the chain with a `StdRng` seeded from `seed`, or the thread RNG
    pub fn run(&self, graph: &CorpusGraph) -> Result<RankResult> {
        let visits = match self.seed {
            Some(seed) => self.walk(graph, &mut StdRng::seed_from_u64(seed))?,
            None => self.walk(graph, &mut rand::thread_rng())?,
        };
        Ok(self.frequencies(graph, &visits, self.seed))
    }

    /// Run the chain with a caller-supplied random source
    pub fn run_with_rng<R: Rng>(&self, graph: &CorpusGraph, rng: &mut R) -> Result<RankResult> {
        let visits = self.walk(graph, rng)?;
        Ok(self.frequencies(graph, &visits, None))
    }

    #[tracing::instrument(skip(self, graph, rng), fields(pages = graph.len(), samples = self.samples, damping = self.damping))]
    fn walk<R: Rng>(&self, graph: &CorpusGraph, rng: &mut R) -> Result<Vec<usize>> {
        validate_damping(self.damping)?;
        graph.ensure_non_empty()?;
        if self.samples == 0 {
            return Err(SurfRankError::InvalidInput(
                "sample count must be positive".to_string(),
            ));
        }

        let n = graph.len();
        let mut visits = vec![0usize; n];
        // Built on first visit; a page's distribution never changes during a walk.
        let mut samplers: Vec<Option<WeightedIndex<f64>>> = (0..n).map(|_| None).collect();

        let mut current = rng.gen_range(0..n);
        for _ in 0..self.samples {
            let sampler = match samplers[current].take() {
                Some(sampler) => sampler,
                None => WeightedIndex::new(next_page_weights(graph, current, self.damping))
                    .map_err(|e| {
                        SurfRankError::InvalidInput(format!(
                            "transition weights for {}: {}",
                            graph.page(current),
                            e
                        ))
                    })?,
            };
            let next = sampler.sample(rng);
            samplers[current] = Some(sampler);

            visits[next] += 1;
            current = next;
        }

        tracing::debug!(
            visited = visits.iter().filter(|&&v| v > 0).count(),
            "Sampling walk finished"
        );
        Ok(visits)
    }

    fn frequencies(&self, graph: &CorpusGraph, visits: &[usize], seed: Option<u64>) -> RankResult {
        let total = self.samples as f64;
        let scores = graph
            .pages()
            .zip(visits)
            .map(|(page, &count)| (page.to_string(), count as f64 / total))
            .collect();

        RankResult {
            scores,
            stats: RunStats::Sampling {
                samples: self.samples,
                seed,
            },
        }
    }
}

/// Estimate PageRank from `samples` steps of a random surfer
pub fn sample_ranks(graph: &CorpusGraph, damping: f64, samples: usize) -> Result<RankResult> {
    SamplingEstimator::new()
        .with_damping(damping)
        .with_samples(samples)
        .run(graph)
}

/// Same as [`sample_ranks`] with an explicit random source
pub fn sample_ranks_with_rng<R: Rng>(
    graph: &CorpusGraph,
    damping: f64,
    samples: usize,
    rng: &mut R,
) -> Result<RankResult> {
    SamplingEstimator::new()
        .with_damping(damping)
        .with_samples(samples)
        .run_with_rng(graph, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::iterate_ranks;

    fn corpus() -> CorpusGraph {
        CorpusGraph::from_links(vec![
            ("1.html", vec!["2.html"]),
            ("2.html", vec!["1.html", "3.html"]),
            ("3.html", vec!["2.html", "4.html"]),
            ("4.html", vec!["2.html"]),
        ])
    }

    #[test]
    fn test_frequencies_sum_to_one() {
        let g = corpus();
        let mut rng = StdRng::seed_from_u64(42);
        let ranks = sample_ranks_with_rng(&g, 0.85, 10_000, &mut rng).unwrap();

        assert_eq!(ranks.len(), 4);
        assert!((ranks.total() - 1.0).abs() < 1e-12);
        assert!(ranks.iter().all(|(_, v)| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_symmetric_pair() {
        let g = CorpusGraph::from_links(vec![("A", vec!["B"]), ("B", vec!["A"])]);
        let ranks = SamplingEstimator::new()
            .with_seed(Some(7))
            .run(&g)
            .unwrap();

        assert!((ranks.get("A").unwrap() - 0.5).abs() < 0.03);
        assert!((ranks.get("B").unwrap() - 0.5).abs() < 0.03);
    }

    #[test]
    fn test_single_page() {
        let g = CorpusGraph::from_links(vec![("A", Vec::<String>::new())]);
        let ranks = sample_ranks(&g, 0.85, 100).unwrap();
        assert_eq!(ranks.get("A"), Some(1.0));
    }

    #[test]
    fn test_seed_is_reproducible() {
        let g = corpus();
        let estimator = SamplingEstimator::new().with_samples(2_000).with_seed(Some(11));

        let first = estimator.run(&g).unwrap();
        let second = estimator.run(&g).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.stats,
            RunStats::Sampling {
                samples: 2_000,
                seed: Some(11)
            }
        );
    }

    #[test]
    fn test_close_to_iteration() {
        let g = corpus();
        let mut rng = StdRng::seed_from_u64(1234);
        let sampled = sample_ranks_with_rng(&g, 0.85, 50_000, &mut rng).unwrap();
        let iterated = iterate_ranks(&g, 0.85, 1e-9).unwrap();

        assert!(
            sampled.max_abs_difference(&iterated) < 0.03,
            "sampled {:?} vs iterated {:?}",
            sampled.scores,
            iterated.scores
        );
    }

    #[test]
    fn test_rejects_invalid_input() {
        let g = corpus();
        assert!(sample_ranks(&g, 0.85, 0).unwrap_err().is_invalid_input());
        assert!(sample_ranks(&g, 1.2, 10).unwrap_err().is_invalid_input());
        assert!(sample_ranks(&CorpusGraph::default(), 0.85, 10)
            .unwrap_err()
            .is_invalid_input());
    }
}
