//! Segment pipeline and builder
//!
//! The pipeline checks the input limit, resolves the blacklist, runs the
//! cascade and assembles the output. Each call is independent and holds
//! no state besides the shared lexicon.

use crate::assembler::SegmentAssembler;
use crate::blacklist::BlacklistResolver;
use crate::cascade::SegmentationCascade;
use crate::config::EngineConfig;
#[cfg(not(feature = "jieba"))]
use crate::error::EngineError;
use crate::error::Result;
use crate::lexicon::LexiconPort;
use hanzi_core::{Cutter, LexemeProjection, Segment, Tokenizer};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Main segmentation pipeline
pub struct SegmentPipeline {
    config: EngineConfig,
    lexicon: Arc<dyn LexiconPort>,
    blacklist: BlacklistResolver,
    cascade: SegmentationCascade,
    assembler: SegmentAssembler,
}

impl SegmentPipeline {
    /// Start building a pipeline over `lexicon`
    pub fn builder(lexicon: Arc<dyn LexiconPort>) -> SegmentPipelineBuilder {
        SegmentPipelineBuilder::new(lexicon)
    }

    /// Segment `text`, hiding what the selected blacklists name
    ///
    /// Both selectors are comma-separated; `None` or blank selects nothing.
    #[instrument(skip_all, fields(chars = text.chars().count()))]
    pub async fn get_segments(
        &self,
        text: &str,
        blacklist_collection: Option<&str>,
        blacklist_lexeme: Option<&str>,
    ) -> Result<Vec<Segment>> {
        self.config.check_limit(text)?;

        let blacklist = self
            .blacklist
            .resolve(blacklist_collection, blacklist_lexeme)
            .await?;
        let candidates = self.cascade.segment(text).await?;
        let segments = self.assembler.assemble(candidates, &blacklist).await?;

        debug!(segments = segments.len(), "segmentation complete");
        Ok(segments)
    }

    /// Every lexeme written as `word`, sorted like segment projections
    pub async fn lookup(&self, word: &str) -> Result<Vec<LexemeProjection>> {
        let ids = self.lexicon.find_by_text(word.trim()).await?;
        self.assembler.project(&ids).await
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl std::fmt::Debug for SegmentPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SegmentPipeline")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Builder for [`SegmentPipeline`]
///
/// Without explicit cutters the builder uses jieba for both the general cut
/// and the repair tokens, which needs the `jieba` feature.
pub struct SegmentPipelineBuilder {
    lexicon: Arc<dyn LexiconPort>,
    general: Option<Arc<dyn Cutter>>,
    tokenizer: Option<Arc<dyn Tokenizer>>,
    config: EngineConfig,
}

impl SegmentPipelineBuilder {
    /// Create a builder with the default configuration
    pub fn new(lexicon: Arc<dyn LexiconPort>) -> Self {
        Self {
            lexicon,
            general: None,
            tokenizer: None,
            config: EngineConfig::default(),
        }
    }

    /// Replace the configuration
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the tier 1 cutter
    pub fn general_cutter(mut self, cutter: Arc<dyn Cutter>) -> Self {
        self.general = Some(cutter);
        self
    }

    /// Set the tier 2 tokenizer
    pub fn repair_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    /// Build the pipeline
    pub fn build(self) -> Result<SegmentPipeline> {
        self.config.validate()?;

        let (general, tokenizer) = match (self.general, self.tokenizer) {
            (Some(general), Some(tokenizer)) => (general, tokenizer),
            (general, tokenizer) => {
                let (default_general, default_tokenizer) = default_cutters(self.config.hmm)?;
                (
                    general.unwrap_or(default_general),
                    tokenizer.unwrap_or(default_tokenizer),
                )
            }
        };

        debug!(
            cutter = general.name(),
            mode = ?self.config.alignment_mode,
            "building segment pipeline"
        );

        Ok(SegmentPipeline {
            blacklist: BlacklistResolver::new(self.lexicon.clone()),
            cascade: SegmentationCascade::new(
                self.lexicon.clone(),
                general,
                tokenizer,
                self.config.alignment_mode,
            ),
            assembler: SegmentAssembler::new(self.lexicon.clone()),
            lexicon: self.lexicon,
            config: self.config,
        })
    }
}

type Cutters = (Arc<dyn Cutter>, Arc<dyn Tokenizer>);

#[cfg(feature = "jieba")]
fn default_cutters(hmm: bool) -> Result<Cutters> {
    let jieba = Arc::new(crate::jieba::JiebaCutter::new(hmm));
    let general: Arc<dyn Cutter> = jieba.clone();
    let tokenizer: Arc<dyn Tokenizer> = jieba;
    Ok((general, tokenizer))
}

#[cfg(not(feature = "jieba"))]
fn default_cutters(_hmm: bool) -> Result<Cutters> {
    Err(EngineError::ConfigError(
        "no cutter configured and the jieba feature is disabled".to_string(),
    ))
}
