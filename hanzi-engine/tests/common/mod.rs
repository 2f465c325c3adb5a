//! Shared fixtures for engine integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use hanzi_engine::{
    AlignmentMode, CollectionId, Cutter, EngineConfig, Lexeme, LexemeId, LexemeIds,
    LexiconError, LexiconPort, LexiconResult, MemoryLexicon, SegmentPipeline, Tokenizer,
};
use hanzi_core::{is_cjk, Token};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Splits at every change between CJK and non-CJK characters
pub struct ScriptRuns;

impl Cutter for ScriptRuns {
    fn cut<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut pieces = Vec::new();
        let mut start = 0;
        let mut last = None;
        for (idx, ch) in text.char_indices() {
            let class = is_cjk(ch);
            if last.is_some_and(|prev| prev != class) {
                pieces.push(&text[start..idx]);
                start = idx;
            }
            last = Some(class);
        }
        if start < text.len() {
            pieces.push(&text[start..]);
        }
        pieces
    }

    fn name(&self) -> &'static str {
        "script-runs"
    }
}

/// Emits the whole text followed by every single character
pub struct WholeThenChars;

impl Tokenizer for WholeThenChars {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        let count = text.chars().count();
        let mut tokens = vec![Token::new(text, 0, count)];
        tokens.extend(
            text.char_indices()
                .enumerate()
                .map(|(i, (idx, ch))| Token::new(&text[idx..idx + ch.len_utf8()], i, i + 1)),
        );
        tokens
    }
}

/// Loses the last character of every multi-character span
pub struct DropsLast;

impl Tokenizer for DropsLast {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        let count = text.chars().count();
        match text.char_indices().last() {
            Some((idx, _)) if count > 1 => vec![Token::new(&text[..idx], 0, count - 1)],
            _ => Vec::new(),
        }
    }
}

/// Lexicon with a handful of greetings and an `hsk1` collection of 你 and 好
pub fn lexicon() -> MemoryLexicon {
    let mut lexicon = MemoryLexicon::new();
    let entries = [
        ("nh", "你好", "你好", "ni3 hao3"),
        ("n", "你", "你", "ni3"),
        ("h", "好", "好", "hao3"),
        ("h2", "好", "好", "hao4"),
        ("w", "我", "我", "wo3"),
        ("xx", "谢谢", "謝謝", "xie4 xie5"),
    ];
    for (id, sc, tc, pinyin) in entries {
        lexicon.insert(Lexeme::new(id, Some(sc), Some(tc), Some(pinyin)).unwrap());
    }
    let hsk1 = CollectionId::new("hsk1");
    for id in ["n", "h", "h2"] {
        lexicon.add_to_collection(&hsk1, &LexemeId::new(id));
    }
    lexicon
}

/// Lexicon without the 你好 compound
pub fn lexicon_without_compound() -> MemoryLexicon {
    let mut lexicon = MemoryLexicon::new();
    for (id, word, pinyin) in [("n", "你", "ni3"), ("h", "好", "hao3")] {
        lexicon.insert(Lexeme::new(id, Some(word), None, Some(pinyin)).unwrap());
    }
    lexicon
}

/// Port method a [`FailingLexicon`] breaks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    Text,
    Id,
    Collection,
}

/// Serves [`lexicon`] except for one method, which always fails
pub struct FailingLexicon {
    inner: MemoryLexicon,
    fail_on: FailOn,
    failures: AtomicUsize,
}

impl FailingLexicon {
    pub fn new(fail_on: FailOn) -> Arc<Self> {
        Arc::new(Self {
            inner: lexicon(),
            fail_on,
            failures: AtomicUsize::new(0),
        })
    }

    /// Number of calls that were answered with an error
    pub fn failures(&self) -> usize {
        self.failures.load(Ordering::SeqCst)
    }

    fn check(&self, method: FailOn) -> LexiconResult<()> {
        if method == self.fail_on {
            self.failures.fetch_add(1, Ordering::SeqCst);
            return Err(LexiconError::Unavailable(format!("{method:?} lookups are down")));
        }
        Ok(())
    }
}

#[async_trait]
impl LexiconPort for FailingLexicon {
    async fn find_by_text(&self, text: &str) -> LexiconResult<LexemeIds> {
        self.check(FailOn::Text)?;
        self.inner.find_by_text(text).await
    }

    async fn find_by_id(&self, id: &LexemeId) -> LexiconResult<Option<Lexeme>> {
        self.check(FailOn::Id)?;
        self.inner.find_by_id(id).await
    }

    async fn find_ids_by_collection(
        &self,
        collection: &CollectionId,
    ) -> LexiconResult<LexemeIds> {
        self.check(FailOn::Collection)?;
        self.inner.find_ids_by_collection(collection).await
    }
}

/// Pipeline over an arbitrary port with the fake general cutter
pub fn pipeline_over(lexicon: Arc<dyn LexiconPort>) -> SegmentPipeline {
    SegmentPipeline::builder(lexicon)
        .general_cutter(Arc::new(ScriptRuns))
        .repair_tokenizer(Arc::new(WholeThenChars))
        .build()
        .unwrap()
}

/// Pipeline over deterministic fake cutters
pub fn pipeline(
    lexicon: MemoryLexicon,
    tokenizer: Arc<dyn Tokenizer>,
    mode: AlignmentMode,
) -> SegmentPipeline {
    let config = EngineConfig {
        alignment_mode: mode,
        ..EngineConfig::default()
    };
    SegmentPipeline::builder(Arc::new(lexicon))
        .config(config)
        .general_cutter(Arc::new(ScriptRuns))
        .repair_tokenizer(tokenizer)
        .build()
        .unwrap()
}

/// Current-thread runtime for driving the pipeline from sync tests
pub fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
}
