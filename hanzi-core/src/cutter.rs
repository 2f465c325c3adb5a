//! Pluggable segmentation strategies

use std::sync::Arc;

/// Splits text into pieces that concatenate back to the input
pub trait Cutter: Send + Sync {
    /// Cut `text` into ordered, non-empty pieces
    fn cut<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Get a human-readable name for this cutter
    fn name(&self) -> &'static str;
}

/// A tokenizer candidate with character offsets into the tokenized text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Token text
    pub word: &'a str,
    /// Start character offset (inclusive)
    pub start: usize,
    /// End character offset (exclusive)
    pub end: usize,
}

impl<'a> Token<'a> {
    /// Create a token
    pub fn new(word: &'a str, start: usize, end: usize) -> Self {
        Self { word, start, end }
    }
}

/// Produces offset-carrying token candidates, possibly overlapping
///
/// Candidates are emitted in the tokenizer's own order; overlap resolution
/// is left to [`AlignmentRepairCutter`](crate::AlignmentRepairCutter).
pub trait Tokenizer: Send + Sync {
    /// Tokenize `text`
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>>;
}

impl<C: Cutter + ?Sized> Cutter for Arc<C> {
    fn cut<'a>(&self, text: &'a str) -> Vec<&'a str> {
        (**self).cut(text)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for Arc<T> {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        (**self).tokenize(text)
    }
}
