//! Segmentation orchestration for hanzi-memo
//!
//! This crate wires the core cutters into the three-tier cascade, talks to
//! the lexicon through [`LexiconPort`], resolves blacklists and evaluates
//! segment visibility.
//!
//! # Example
//!
//! ```rust
//! use hanzi_engine::{Lexeme, MemoryLexicon, SegmentPipeline};
//! use std::sync::Arc;
//!
//! # async fn run() -> hanzi_engine::Result<()> {
//! let mut lexicon = MemoryLexicon::new();
//! lexicon.insert(Lexeme::new("1", Some("你好"), None, Some("ni3 hao3"))?);
//!
//! let pipeline = SegmentPipeline::builder(Arc::new(lexicon)).build()?;
//! let segments = pipeline.get_segments("你好", None, None).await?;
//! assert_eq!(segments[0].text, "你好");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod assembler;
pub mod blacklist;
pub mod cascade;
pub mod config;
pub mod error;
#[cfg(feature = "jieba")]
pub mod jieba;
pub mod lexicon;
pub mod processor;
pub mod visibility;

// Re-export key types
pub use assembler::SegmentAssembler;
pub use blacklist::{parse_selector, BlacklistResolver};
pub use cascade::SegmentationCascade;
pub use config::{AlignmentMode, EngineConfig, CHAR_LIMIT};
pub use error::{EngineError, LexiconError, Result};
#[cfg(feature = "jieba")]
pub use jieba::JiebaCutter;
pub use lexicon::{LexiconPort, LexiconResult, MemoryLexicon};
pub use processor::{SegmentPipeline, SegmentPipelineBuilder};
pub use visibility::{Visibility, VisibilityEvaluator};

// Re-export from core for convenience
pub use hanzi_core::{
    Blacklist, CandidateSegment, CollectionId, Cutter, Lexeme, LexemeId, LexemeIds,
    LexemeProjection, Segment, Span, Tokenizer,
};
