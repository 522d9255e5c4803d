//! CLI error types

use stats_core::types::DistributionError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `statlib` binary
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Distribution(#[from] DistributionError),

    #[error("Self-check failed: {failed} of {total} checks out of tolerance")]
    CheckFailed { failed: usize, total: usize },

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
