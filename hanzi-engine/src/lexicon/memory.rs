//! In-memory lexicon

use super::{LexiconPort, LexiconResult};
use async_trait::async_trait;
use hanzi_core::{CollectionId, Lexeme, LexemeId, LexemeIds};
use std::collections::HashMap;

/// Lexicon held in hash maps, populated up front and then shared read-only
#[derive(Debug, Clone, Default)]
pub struct MemoryLexicon {
    lexemes: HashMap<LexemeId, Lexeme>,
    by_simplified: HashMap<String, LexemeIds>,
    by_traditional: HashMap<String, LexemeIds>,
    collections: HashMap<CollectionId, LexemeIds>,
}

impl MemoryLexicon {
    /// Create an empty lexicon
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a lexeme, replacing any previous record with the same id
    pub fn insert(&mut self, lexeme: Lexeme) {
        if let Some(previous) = self.lexemes.remove(lexeme.id()) {
            unindex(&mut self.by_simplified, previous.simplified(), previous.id());
            unindex(&mut self.by_traditional, previous.traditional(), previous.id());
        }

        if let Some(form) = lexeme.simplified() {
            self.by_simplified
                .entry(form.to_string())
                .or_default()
                .insert(lexeme.id().clone());
        }
        if let Some(form) = lexeme.traditional() {
            self.by_traditional
                .entry(form.to_string())
                .or_default()
                .insert(lexeme.id().clone());
        }

        self.lexemes.insert(lexeme.id().clone(), lexeme);
    }

    /// Add a lexeme to a collection
    ///
    /// Returns `false` when the lexeme is unknown or already a member.
    pub fn add_to_collection(&mut self, collection: &CollectionId, id: &LexemeId) -> bool {
        if !self.lexemes.contains_key(id) {
            return false;
        }
        self.collections
            .entry(collection.clone())
            .or_default()
            .insert(id.clone())
    }

    /// Ids whose simplified or traditional form equals `text`
    pub fn ids_matching(&self, text: &str) -> LexemeIds {
        self.ids_matching_forms(Some(text), Some(text))
    }

    /// Ids whose simplified form equals `simplified` or whose traditional
    /// form equals `traditional`
    pub fn ids_matching_forms(
        &self,
        simplified: Option<&str>,
        traditional: Option<&str>,
    ) -> LexemeIds {
        let mut ids = LexemeIds::new();
        if let Some(found) = simplified.and_then(|form| self.by_simplified.get(form)) {
            ids.extend(found.iter().cloned());
        }
        if let Some(found) = traditional.and_then(|form| self.by_traditional.get(form)) {
            ids.extend(found.iter().cloned());
        }
        ids
    }

    /// Look up a lexeme record
    pub fn get(&self, id: &LexemeId) -> Option<&Lexeme> {
        self.lexemes.get(id)
    }

    /// Number of lexemes
    pub fn len(&self) -> usize {
        self.lexemes.len()
    }

    /// Check if the lexicon has no lexemes
    pub fn is_empty(&self) -> bool {
        self.lexemes.is_empty()
    }

    /// Known collections, sorted
    pub fn collection_ids(&self) -> Vec<&CollectionId> {
        let mut ids: Vec<_> = self.collections.keys().collect();
        ids.sort();
        ids
    }

    /// Number of lexemes in `collection`
    pub fn collection_len(&self, collection: &CollectionId) -> usize {
        self.collections.get(collection).map_or(0, LexemeIds::len)
    }
}

fn unindex(index: &mut HashMap<String, LexemeIds>, form: Option<&str>, id: &LexemeId) {
    if let Some(form) = form {
        if let Some(ids) = index.get_mut(form) {
            ids.remove(id);
            if ids.is_empty() {
                index.remove(form);
            }
        }
    }
}

#[async_trait]
impl LexiconPort for MemoryLexicon {
    async fn find_by_text(&self, text: &str) -> LexiconResult<LexemeIds> {
        Ok(self.ids_matching(text))
    }

    async fn find_by_id(&self, id: &LexemeId) -> LexiconResult<Option<Lexeme>> {
        Ok(self.lexemes.get(id).cloned())
    }

    async fn find_ids_by_collection(
        &self,
        collection: &CollectionId,
    ) -> LexiconResult<LexemeIds> {
        Ok(self.collections.get(collection).cloned().unwrap_or_default())
    }
}
