//! Blacklist resolution from caller selectors

use crate::error::Result;
use crate::lexicon::LexiconPort;
use futures::future::try_join_all;
use hanzi_core::{Blacklist, CollectionId, LexemeId};
use std::sync::Arc;
use tracing::debug;

/// Turns comma-separated collection and lexeme selectors into a [`Blacklist`]
#[derive(Debug, Clone)]
pub struct BlacklistResolver {
    lexicon: Arc<dyn LexiconPort>,
}

impl BlacklistResolver {
    /// Create a resolver backed by `lexicon`
    pub fn new(lexicon: Arc<dyn LexiconPort>) -> Self {
        Self { lexicon }
    }

    /// Resolve the union of every named collection and every named lexeme
    pub async fn resolve(
        &self,
        collection_selector: Option<&str>,
        lexeme_selector: Option<&str>,
    ) -> Result<Blacklist> {
        let collections: Vec<CollectionId> = collection_selector
            .map(|selector| parse_selector(selector).map(CollectionId::from).collect())
            .unwrap_or_default();

        let mut blacklist: Blacklist = lexeme_selector
            .map(|selector| parse_selector(selector).map(LexemeId::from).collect())
            .unwrap_or_default();

        let members = try_join_all(
            collections
                .iter()
                .map(|collection| self.lexicon.find_ids_by_collection(collection)),
        )
        .await?;
        for ids in members {
            blacklist.extend(ids);
        }

        debug!(
            collections = collections.len(),
            blacklisted = blacklist.len(),
            "blacklist resolved"
        );
        Ok(blacklist)
    }
}

/// Split a comma-separated selector, trimming items and skipping blanks
pub fn parse_selector(selector: &str) -> impl Iterator<Item = &str> {
    selector
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
}
