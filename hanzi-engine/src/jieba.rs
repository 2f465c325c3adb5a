//! Jieba-backed general cutter and repair tokenizer

use crate::error::{EngineError, Result};
use hanzi_core::{Cutter, Token, Tokenizer};
use jieba_rs::{Jieba, TokenizeMode};
use std::io::BufRead;
use std::sync::Arc;

/// General-purpose word segmentation through `jieba-rs`
///
/// As a [`Cutter`] it performs a full-string cut; as a [`Tokenizer`] it
/// emits search-mode candidates, which overlap and are meant to be fed to
/// [`AlignmentRepairCutter`](hanzi_core::AlignmentRepairCutter).
#[derive(Clone)]
pub struct JiebaCutter {
    jieba: Arc<Jieba>,
    hmm: bool,
}

impl std::fmt::Debug for JiebaCutter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiebaCutter").field("hmm", &self.hmm).finish()
    }
}

impl JiebaCutter {
    /// Create a cutter with jieba's bundled dictionary
    pub fn new(hmm: bool) -> Self {
        Self::shared(Arc::new(Jieba::new()), hmm)
    }

    /// Create a cutter from a custom jieba dictionary
    pub fn with_dict<R: BufRead>(dict: &mut R, hmm: bool) -> Result<Self> {
        let jieba = Jieba::with_dict(dict)
            .map_err(|e| EngineError::ConfigError(format!("invalid jieba dictionary: {e}")))?;
        Ok(Self::shared(Arc::new(jieba), hmm))
    }

    /// Reuse an already loaded jieba instance
    pub fn shared(jieba: Arc<Jieba>, hmm: bool) -> Self {
        Self { jieba, hmm }
    }
}

impl Cutter for JiebaCutter {
    fn cut<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.jieba.cut(text, self.hmm)
    }

    fn name(&self) -> &'static str {
        "jieba"
    }
}

impl Tokenizer for JiebaCutter {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        self.jieba
            .tokenize(text, TokenizeMode::Search, self.hmm)
            .into_iter()
            .map(|token| Token::new(token.word, token.start, token.end))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanzi_core::coverage::{align, reconstructs};
    use hanzi_core::Span;
    use std::sync::OnceLock;

    fn cutter() -> &'static JiebaCutter {
        static CUTTER: OnceLock<JiebaCutter> = OnceLock::new();
        CUTTER.get_or_init(|| JiebaCutter::new(true))
    }

    #[test]
    fn test_cut_covers_input() {
        for text in ["我们中出了一个叛徒", "ABC你好", "你好，世界！ hello world", "\n"] {
            let spans = align(&Span::root(text), cutter().cut(text)).unwrap();
            assert!(reconstructs(text, &spans), "cut of {text:?} lost characters");
        }
    }

    #[test]
    fn test_tokenize_offsets_are_characters() {
        let text = "ABC你好";
        for token in cutter().tokenize(text) {
            let expected: String = text
                .chars()
                .skip(token.start)
                .take(token.end - token.start)
                .collect();
            assert_eq!(token.word, expected);
        }
    }
}
