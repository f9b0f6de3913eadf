//! Surfrank Core Library
//!
//! PageRank for a directed hyperlink graph under the random-surfer model.
//!
//! # Features
//! - Corpus graph built from a directory of HTML pages
//! - Damped transition model with uniform jumps from dangling pages
//! - Markov chain sampling estimator with reproducible seeding
//! - Iterative fixed-point solver with convergence control
//! - Side-by-side report reconciling both estimates

pub mod config;
pub mod error;
pub mod graph;
pub mod rank;

pub use config::{Config, CrawlConfig, RankConfig};
pub use error::{Error, Result, SurfRankError};
pub use graph::{crawl, extract_links, CorpusGraph};
pub use rank::{
    iterate_ranks, rank_corpus, sample_ranks, sample_ranks_with_rng, transition_model,
    IterativeSolver, ProbabilityDistribution, RankReport, RankResult, RankRow, RunStats,
    SamplingEstimator,
};

/// Probability that the surfer follows a link
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Markov chain steps drawn by the sampling estimator
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Largest per-page change accepted as converged
pub const DEFAULT_EPSILON: f64 = 0.001;

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "surfrank";
