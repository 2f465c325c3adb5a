//! Alignment-repair cutter
//!
//! Re-splits a span using a [`Tokenizer`] whose candidates may overlap
//! (for instance search-mode sub-words emitted next to the full word).
//! Candidates are taken in emission order; a candidate is kept only when it
//! starts at or after the coverage pointer, which then advances to its end.
//! The kept tokens must rebuild the span exactly, otherwise the cut fails
//! with an [`AlignmentViolation`] and the caller decides what to do.

use crate::cutter::{Token, Tokenizer};
use crate::error::AlignmentViolation;
use crate::types::Span;

/// Second-tier cutter with overlap resolution and a coverage check
#[derive(Debug, Clone)]
pub struct AlignmentRepairCutter<T> {
    tokenizer: T,
}

impl<T: Tokenizer> AlignmentRepairCutter<T> {
    /// Wrap a tokenizer
    pub fn new(tokenizer: T) -> Self {
        Self { tokenizer }
    }

    /// Cut `text` into non-overlapping tokens sorted by start offset
    pub fn cut<'a>(&self, text: &'a str) -> Result<Vec<Token<'a>>, AlignmentViolation> {
        let mut cursor = 0;
        let mut kept = Vec::new();

        for token in self.tokenizer.tokenize(text) {
            if token.start < cursor || token.end <= token.start || token.word.is_empty() {
                continue;
            }
            cursor = token.end;
            kept.push(token);
        }

        let reconstructed: String = kept.iter().map(|t| t.word).collect();
        if reconstructed != text {
            return Err(AlignmentViolation::new(text, reconstructed));
        }

        Ok(kept)
    }

    /// Cut a span, producing child spans in the original input's offsets
    pub fn split(&self, span: &Span) -> Result<Vec<Span>, AlignmentViolation> {
        let tokens = self.cut(span.text())?;
        let mut byte_offset = span.byte_offset;
        let mut char_offset = span.char_offset;
        let mut spans = Vec::with_capacity(tokens.len());

        // Offsets follow the kept words, not the tokenizer's own numbering
        for token in tokens {
            spans.push(Span::new(token.word, byte_offset, char_offset));
            byte_offset += token.word.len();
            char_offset += token.word.chars().count();
        }

        Ok(spans)
    }
}
