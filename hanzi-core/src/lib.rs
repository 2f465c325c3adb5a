//! Core data model and cutters for Chinese text segmentation
//!
//! This crate holds the pieces of the hanzi-memo pipeline that need no I/O:
//! the lexeme/span/segment types, CJK character classification, the
//! [`Cutter`] and [`Tokenizer`] seams, the character fallback cutter and the
//! alignment-repair cutter together with the coverage checks every tier
//! has to satisfy.
//!
//! # Example
//!
//! ```rust
//! use hanzi_core::{CharacterCutter, Cutter};
//!
//! let cutter = CharacterCutter::new();
//! assert_eq!(cutter.cut("ABC你好"), vec!["ABC", "你", "好"]);
//! ```

#![warn(missing_docs)]

pub mod classify;
pub mod coverage;
pub mod cutter;
pub mod error;
pub mod fallback;
pub mod repair;
pub mod types;

pub use classify::{contains_cjk, is_cjk};
pub use cutter::{Cutter, Token, Tokenizer};
pub use error::{AlignmentViolation, CoreError, Result};
pub use fallback::CharacterCutter;
pub use repair::AlignmentRepairCutter;
pub use types::{
    Blacklist, CandidateSegment, CollectionId, Lexeme, LexemeId, LexemeIds, LexemeProjection,
    Segment, Span,
};
