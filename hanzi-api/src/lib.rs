//! Public API for hanzi-memo segmentation
//!
//! This crate wraps the engine pipeline behind request/response DTOs and
//! turns the input limit into the client-facing [`ValidationError`].

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use hanzi_engine::{EngineError, LexiconPort, SegmentPipeline};
use std::future::Future;
use std::sync::Arc;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{Input, LexemeDto, SegmentDto, SegmentRequest, ValidationError};
pub use error::{ApiError, Result};
pub use hanzi_engine::{AlignmentMode, CollectionId, Lexeme, LexemeId, MemoryLexicon};

/// Main entry point for segmentation
///
/// Holds no per-request state, so one processor can serve any number of
/// concurrent requests over the same lexicon.
#[derive(Debug)]
pub struct SegmentProcessor {
    inner: Arc<SegmentPipeline>,
    config: Config,
}

impl SegmentProcessor {
    /// Create a processor with the default configuration
    pub fn new(lexicon: Arc<dyn LexiconPort>) -> Result<Self> {
        Self::with_config(lexicon, Config::default())
    }

    /// Create a processor with custom configuration
    pub fn with_config(lexicon: Arc<dyn LexiconPort>, config: Config) -> Result<Self> {
        let inner = SegmentPipeline::builder(lexicon)
            .config(config.engine_config().clone())
            .build()
            .map_err(|e| match e {
                EngineError::ConfigError(msg) => ApiError::Config(msg),
                other => ApiError::Engine(other),
            })?;

        Ok(Self {
            inner: Arc::new(inner),
            config,
        })
    }

    /// Segment `text`, hiding what the selectors name
    pub async fn get_segments(
        &self,
        text: &str,
        blacklist_collection: Option<&str>,
        blacklist_lexeme: Option<&str>,
    ) -> Result<Vec<SegmentDto>> {
        let segments = self
            .with_timeout(
                self.inner
                    .get_segments(text, blacklist_collection, blacklist_lexeme),
            )
            .await?
            .map_err(|e| match e {
                EngineError::InputTooLarge { limit, .. } => {
                    ApiError::Validation(ValidationError::character_limit(limit))
                }
                other => ApiError::Engine(other),
            })?;

        Ok(segments.into_iter().map(SegmentDto::from).collect())
    }

    /// Serve one request
    pub async fn segment(&self, request: &SegmentRequest) -> Result<Vec<SegmentDto>> {
        self.get_segments(
            &request.zh,
            request.blacklist_collection.as_deref(),
            request.blacklist_lexeme.as_deref(),
        )
        .await
    }

    /// Segment the text read from `input`
    pub async fn process(
        &self,
        input: Input,
        blacklist_collection: Option<&str>,
        blacklist_lexeme: Option<&str>,
    ) -> Result<Vec<SegmentDto>> {
        let text = input.read_text()?;
        self.get_segments(&text, blacklist_collection, blacklist_lexeme)
            .await
    }

    /// Every lexeme written as `word`
    pub async fn lookup(&self, word: &str) -> Result<Vec<LexemeDto>> {
        let lexemes = self.with_timeout(self.inner.lookup(word)).await??;
        Ok(lexemes.into_iter().map(LexemeDto::from).collect())
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    async fn with_timeout<F: Future>(&self, future: F) -> Result<F::Output> {
        match self.config.timeout() {
            Some(timeout) => tokio::time::timeout(timeout, future)
                .await
                .map_err(|_| ApiError::Timeout {
                    millis: timeout.as_millis() as u64,
                }),
            None => Ok(future.await),
        }
    }
}

// Convenience functions

/// Segment text with the default configuration
pub async fn get_segments(
    lexicon: Arc<dyn LexiconPort>,
    text: &str,
    blacklist_collection: Option<&str>,
    blacklist_lexeme: Option<&str>,
) -> Result<Vec<SegmentDto>> {
    let processor = SegmentProcessor::new(lexicon)?;
    processor
        .get_segments(text, blacklist_collection, blacklist_lexeme)
        .await
}

/// Serialize segments as the JSON response body
#[cfg(feature = "serde")]
pub fn to_json(segments: &[SegmentDto], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(segments)?
    } else {
        serde_json::to_string(segments)?
    };
    Ok(json)
}
