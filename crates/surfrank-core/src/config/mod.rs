//! Configuration management

use crate::error::{Result, SurfRankError};
use crate::rank::validate_damping;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Ranking parameters
    #[serde(default)]
    pub rank: RankConfig,

    /// Corpus discovery settings
    #[serde(default)]
    pub crawl: CrawlConfig,
}

/// Parameters shared by both estimators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankConfig {
    /// Probability of following a link rather than jumping to a random page
    #[serde(default = "default_damping")]
    pub damping: f64,

    /// Number of Markov chain steps drawn by the sampling estimator
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Largest per-page change that still counts as converged
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,

    /// Optional cap on iterative sweeps
    #[serde(default)]
    pub max_iterations: Option<usize>,

    /// Seed for the sampling estimator (random when unset)
    #[serde(default)]
    pub seed: Option<u64>,

    /// Largest per-page difference at which the two estimators still agree
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            samples: default_samples(),
            epsilon: default_epsilon(),
            max_iterations: None,
            seed: None,
            tolerance: default_tolerance(),
        }
    }
}

impl RankConfig {
    /// Check the parameters before any estimator runs
    pub fn validate(&self) -> Result<()> {
        validate_damping(self.damping)?;
        if self.samples == 0 {
            return Err(SurfRankError::InvalidInput(
                "sample count must be positive".to_string(),
            ));
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(SurfRankError::InvalidInput(format!(
                "epsilon must be positive, got {}",
                self.epsilon
            )));
        }
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            return Err(SurfRankError::InvalidInput(format!(
                "tolerance must be non-negative, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == Some(0) {
            return Err(SurfRankError::InvalidInput(
                "max iterations must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_damping() -> f64 {
    damping_or_default(std::env::var("SURFRANK_DAMPING").ok().as_deref())
}

fn default_samples() -> usize {
    samples_or_default(std::env::var("SURFRANK_SAMPLES").ok().as_deref())
}

/// Parse an env override, ignoring values outside (0, 1)
fn damping_or_default(value: Option<&str>) -> f64 {
    value
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|&d| validate_damping(d).is_ok())
        .unwrap_or(crate::DEFAULT_DAMPING)
}

fn samples_or_default(value: Option<&str>) -> usize {
    value
        .and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(crate::DEFAULT_SAMPLES)
}

fn default_epsilon() -> f64 {
    crate::DEFAULT_EPSILON
}

fn default_tolerance() -> f64 {
    0.05
}

/// Which files of a directory make up the corpus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlConfig {
    /// Glob pattern for page files, relative to the corpus directory
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// Descend into subdirectories
    #[serde(default)]
    pub recursive: bool,

    /// Skip dot-files and dot-directories
    #[serde(default = "default_true")]
    pub exclude_hidden: bool,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
            recursive: false,
            exclude_hidden: true,
        }
    }
}

fn default_pattern() -> String {
    "*.html".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load config from default path
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SurfRankError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }

    pub fn validate(&self) -> Result<()> {
        self.rank
            .validate()
            .map_err(|e| SurfRankError::Config(e.to_string()))?;
        if self.crawl.pattern.trim().is_empty() {
            return Err(SurfRankError::Config("crawl pattern is empty".to_string()));
        }
        Ok(())
    }
}
