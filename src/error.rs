use std::time::Duration;

use thiserror::Error;

/// Errors returned by the clustering and summary routines in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Input data that cannot be clustered or summarised.
    #[error("invalid input at index {index}: {message}")]
    InvalidInput {
        /// Index of the offending point or label.
        index: usize,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// A run took longer than its configured time limit.
    #[error("time limit of {limit:?} exceeded")]
    TimeLimitExceeded {
        /// The configured limit.
        limit: Duration,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
