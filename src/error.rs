// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExploreError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("fetch failed: {message}")]
    Fetch {
        status: Option<u16>,
        message: String,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExploreError>;

impl ExploreError {
    /// Shorthand for a transport-level failure with no HTTP status.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        ExploreError::Fetch {
            status: None,
            message: message.into(),
        }
    }
}
