//! High-level configuration API

use crate::error::{ApiError, Result};
use hanzi_engine::{AlignmentMode, EngineConfig};
use std::time::Duration;

/// High-level configuration for segmentation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    inner: EngineConfig,
    timeout: Option<Duration>,
}

impl Config {
    /// Configuration that fails on alignment violations
    pub fn strict() -> Self {
        Self {
            inner: EngineConfig::strict(),
            timeout: None,
        }
    }

    /// Production configuration
    pub fn graceful() -> Self {
        Self::default()
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Maximum input length in characters
    pub fn char_limit(&self) -> usize {
        self.inner.char_limit
    }

    /// Alignment violation policy
    pub fn alignment_mode(&self) -> AlignmentMode {
        self.inner.alignment_mode
    }

    /// Per-request timeout, if any
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub(crate) fn engine_config(&self) -> &EngineConfig {
        &self.inner
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the character limit
    pub fn char_limit(mut self, limit: usize) -> Self {
        self.config.inner.char_limit = limit;
        self
    }

    /// Set the alignment policy
    pub fn alignment_mode(mut self, mode: AlignmentMode) -> Self {
        self.config.inner.alignment_mode = mode;
        self
    }

    /// Enable or disable the general cutter's HMM
    pub fn hmm(mut self, hmm: bool) -> Self {
        self.config.inner.hmm = hmm;
        self
    }

    /// Abort requests that take longer than `timeout`
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Use the strict preset, keeping the timeout
    pub fn strict(mut self) -> Self {
        self.config.inner = EngineConfig::strict();
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        self.config
            .inner
            .validate()
            .map_err(|e| ApiError::Config(e.to_string()))?;
        if self.config.timeout == Some(Duration::ZERO) {
            return Err(ApiError::Config("timeout must be greater than 0".to_string()));
        }
        Ok(self.config)
    }
}
