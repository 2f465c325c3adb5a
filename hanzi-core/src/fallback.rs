//! Character fallback cutter
//!
//! Last tier of the cascade: every CJK ideograph becomes its own piece,
//! while runs of non-CJK characters are passed through whole. A span with
//! no ideographs is therefore returned unchanged.

use crate::classify::is_cjk;
use crate::cutter::Cutter;

/// Splits CJK text into single characters
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterCutter;

impl CharacterCutter {
    /// Create a new character cutter
    pub fn new() -> Self {
        Self
    }
}

impl Cutter for CharacterCutter {
    fn cut<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut pieces = Vec::new();
        let mut run_start: Option<usize> = None;

        for (idx, ch) in text.char_indices() {
            if is_cjk(ch) {
                if let Some(start) = run_start.take() {
                    pieces.push(&text[start..idx]);
                }
                pieces.push(&text[idx..idx + ch.len_utf8()]);
            } else if run_start.is_none() {
                run_start = Some(idx);
            }
        }

        if let Some(start) = run_start {
            pieces.push(&text[start..]);
        }

        pieces
    }

    fn name(&self) -> &'static str {
        "character"
    }
}
