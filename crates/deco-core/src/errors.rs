//! Error types for input validation.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The value cannot be used as a scan bound (negative or not an integer).
    #[error("Invalid bound '{value}': {reason}")]
    InvalidBound { value: String, reason: String },
}

impl CoreError {
    pub(crate) fn invalid_bound(value: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidBound {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
