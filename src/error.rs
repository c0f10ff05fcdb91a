//! Error types for adrule.

use thiserror::Error;

/// Error type for adrule operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Git command failure
    #[error("git error: {0}")]
    Git(String),
}

/// Result type alias for adrule operations.
pub type Result<T> = std::result::Result<T, Error>;
