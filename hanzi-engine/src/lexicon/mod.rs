//! Lexicon port and implementations
//!
//! The pipeline never talks to storage directly; it is handed an
//! `Arc<dyn LexiconPort>` and awaits its lookups. [`MemoryLexicon`] is the
//! in-process implementation used by the CLI and by tests.

pub mod memory;

use crate::error::LexiconError;
use async_trait::async_trait;
use hanzi_core::{CollectionId, Lexeme, LexemeId, LexemeIds};
use std::fmt;

pub use memory::MemoryLexicon;

/// Result type for lexicon operations
pub type LexiconResult<T> = std::result::Result<T, LexiconError>;

/// Read-only access to lexicon data
#[async_trait]
pub trait LexiconPort: Send + Sync {
    /// Ids of lexemes whose simplified or traditional form equals `text`
    async fn find_by_text(&self, text: &str) -> LexiconResult<LexemeIds>;

    /// Hydrate one lexeme, `None` if the id is unknown
    async fn find_by_id(&self, id: &LexemeId) -> LexiconResult<Option<Lexeme>>;

    /// Ids of lexemes that belong to `collection`; unknown collections are empty
    async fn find_ids_by_collection(&self, collection: &CollectionId)
        -> LexiconResult<LexemeIds>;
}

impl fmt::Debug for dyn LexiconPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LexiconPort {{ ... }}")
    }
}
