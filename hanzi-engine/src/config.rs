//! Configuration types for the engine

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};

/// Default input limit in characters
pub const CHAR_LIMIT: usize = 1000;

/// What the cascade does when repair tokens fail to rebuild a span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentMode {
    /// Fail the whole invocation
    Strict,
    /// Keep the span as a single unmatched token and log a warning
    #[default]
    Graceful,
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum input length in characters
    pub char_limit: usize,
    /// Alignment violation policy
    pub alignment_mode: AlignmentMode,
    /// Let the general cutter use its HMM for unknown words
    pub hmm: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            char_limit: CHAR_LIMIT,
            alignment_mode: AlignmentMode::Graceful,
            hmm: true,
        }
    }
}

impl EngineConfig {
    /// Configuration that fails on alignment violations
    pub fn strict() -> Self {
        Self {
            alignment_mode: AlignmentMode::Strict,
            ..Self::default()
        }
    }

    /// Production configuration
    pub fn graceful() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.char_limit == 0 {
            return Err(EngineError::ConfigError(
                "char_limit must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Reject `text` when it is over the character limit
    pub fn check_limit(&self, text: &str) -> Result<()> {
        let chars = text.chars().count();
        if chars > self.char_limit {
            return Err(EngineError::InputTooLarge {
                chars,
                limit: self.char_limit,
            });
        }
        Ok(())
    }
}
