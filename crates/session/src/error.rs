//! Error types for browse sessions.

use thiserror::Error;

/// Errors raised when a buyer action cannot be applied
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The price bucket key is not in the configured table
    #[error("Unknown price bucket: {0}")]
    UnknownPriceBucket(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, SessionError>;
