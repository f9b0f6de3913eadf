//! Error types for surfrank

use thiserror::Error;

/// Result type alias using SurfRankError
pub type Result<T> = std::result::Result<T, SurfRankError>;

/// Error type alias for convenience
pub type Error = SurfRankError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOT_FOUND: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
    pub const NON_CONVERGENCE: i32 = 4;
}

/// Main error type for surfrank
#[derive(Debug, Error)]
pub enum SurfRankError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walk directory error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Page not in corpus: {0}")]
    PageNotFound(String),

    #[error("No convergence after {iterations} iterations (delta {delta:.6})")]
    NonConvergence { iterations: usize, delta: f64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Crawl error: {0}")]
    Crawl(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),
}

impl SurfRankError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Crawl(_) => exit_codes::NOT_FOUND,
            Self::InvalidInput(_) | Self::PageNotFound(_) | Self::Config(_) => {
                exit_codes::INVALID_INPUT
            }
            Self::NonConvergence { .. } => exit_codes::NON_CONVERGENCE,
            _ => exit_codes::GENERAL_ERROR,
        }
    }

    /// Whether this error belongs to the invalid-input family
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::PageNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            SurfRankError::InvalidInput("empty".into()).exit_code(),
            exit_codes::INVALID_INPUT
        );
        assert_eq!(
            SurfRankError::PageNotFound("x.html".into()).exit_code(),
            exit_codes::INVALID_INPUT
        );
        assert_eq!(
            SurfRankError::NonConvergence {
                iterations: 3,
                delta: 0.5
            }
            .exit_code(),
            exit_codes::NON_CONVERGENCE
        );
        assert_eq!(
            SurfRankError::Crawl("missing".into()).exit_code(),
            exit_codes::NOT_FOUND
        );
    }

    #[test]
    fn test_non_convergence_message() {
        let err = SurfRankError::NonConvergence {
            iterations: 10,
            delta: 0.0125,
        };
        assert_eq!(
            err.to_string(),
            "No convergence after 10 iterations (delta 0.012500)"
        );
    }
}
