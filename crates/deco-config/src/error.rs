//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error, including values such as
    /// `run.bound` that fail their own validation.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),
}
