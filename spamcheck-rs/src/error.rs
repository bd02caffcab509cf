//! Error types for spamcheck-rs

use std::collections::TryReserveError;
use thiserror::Error;

/// Result type alias for classifier operations
pub type Result<T> = std::result::Result<T, SpamError>;

/// Classifier error types
#[derive(Error, Debug)]
pub enum SpamError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Vocabulary storage could not grow
    #[error("Vocabulary growth failed: {0}")]
    CapacityOverflow(#[from] TryReserveError),

    /// Threshold outside [0, 1]
    #[error("Invalid classification threshold: {0} (expected a value in [0, 1])")]
    InvalidThreshold(f64),
}
