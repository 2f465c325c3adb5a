//! API error types

use crate::dto::ValidationError;
use hanzi_engine::EngineError;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request rejected before segmentation
    #[error("validation error: {0}")]
    Validation(ValidationError),

    /// Engine error
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// Request did not finish in time
    #[error("segmentation timed out after {millis} ms")]
    Timeout {
        /// Configured timeout
        millis: u64,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl ApiError {
    /// Check if this is the client-facing validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
