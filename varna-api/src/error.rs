//! API error types

use thiserror::Error;
use varna_core::TableError;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Classification tables could not be built
    #[error("table error: {0}")]
    Tables(#[from] TableError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// A word rejected by strict validation
    #[error("invalid word {word:?}: {reason}")]
    InvalidWord {
        /// The rejected input
        word: String,
        /// Validation failure
        reason: String,
    },

    /// Rule context was not a JSON object
    #[error("invalid rule context: {0}")]
    Context(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
