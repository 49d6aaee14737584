//! Error types for the catalog crate.
//!
//! Only the edges of the system can fail: reading a creator feed from disk
//! and loading marketplace configuration. Filtering itself is total.

use thiserror::Error;

/// Errors that can occur while loading creators or configuration
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a file or directory
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A feed or config file was not valid JSON for the expected shape
    ///
    /// Missing array fields are not a parse error; they load as empty.
    #[error("Parse error in {file}: {reason}")]
    ParseError { file: String, reason: String },

    /// Configuration loaded but violates a table invariant
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
