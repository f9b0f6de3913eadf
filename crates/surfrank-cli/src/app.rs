//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use surfrank_core::{CrawlConfig, RankConfig};

#[derive(Parser)]
#[command(name = "surfrank")]
#[command(
    author,
    version,
    about = "Rank a directory of HTML pages with random-surfer PageRank"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to the user config directory)
    #[arg(long, global = true, env = "SURFRANK_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank pages with both estimators side by side
    Rank(RankArgs),

    /// Rank pages by sampling a random surfer
    Sample(RankArgs),

    /// Rank pages by iterating the PageRank equation
    Iterate(RankArgs),

    /// Show the link graph of a corpus
    Links(CorpusArgs),
}

#[derive(Args)]
pub struct CorpusArgs {
    /// Directory containing the corpus pages
    pub corpus: PathBuf,

    /// Glob pattern for page files
    #[arg(long)]
    pub pattern: Option<String>,

    /// Include pages in subdirectories
    #[arg(long)]
    pub recursive: bool,
}

impl CorpusArgs {
    pub fn apply(&self, crawl: &mut CrawlConfig) {
        if let Some(ref pattern) = self.pattern {
            crawl.pattern = pattern.clone();
        }
        if self.recursive {
            crawl.recursive = true;
        }
    }
}

#[derive(Args)]
pub struct RankArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Probability of following a link
    #[arg(short, long)]
    pub damping: Option<f64>,

    /// Number of random surfer steps
    #[arg(short = 'n', long)]
    pub samples: Option<usize>,

    /// Convergence threshold for iteration
    #[arg(long)]
    pub epsilon: Option<f64>,

    /// Fail if iteration has not converged after this many sweeps
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Seed for reproducible sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Largest per-page difference at which both estimators agree
    #[arg(long)]
    pub tolerance: Option<f64>,
}

impl RankArgs {
    pub fn apply(&self, rank: &mut RankConfig) {
        if let Some(damping) = self.damping {
            rank.damping = damping;
        }
        if let Some(samples) = self.samples {
            rank.samples = samples;
        }
        if let Some(epsilon) = self.epsilon {
            rank.epsilon = epsilon;
        }
        if self.max_iterations.is_some() {
            rank.max_iterations = self.max_iterations;
        }
        if self.seed.is_some() {
            rank.seed = self.seed;
        }
        if let Some(tolerance) = self.tolerance {
            rank.tolerance = tolerance;
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
    Csv,
    Md,
}
