//! Visibility evaluation against a blacklist
//!
//! `is_visible` hides a segment only when every lexeme it matched is
//! blacklisted. `strict_visible` additionally hides a segment when each of
//! its characters, looked up on its own, has at least one blacklisted
//! match: a learner who knows every character is assumed to know the
//! compound. Characters without any match never count as known.

use crate::error::Result;
use crate::lexicon::LexiconPort;
use futures::future::try_join_all;
use hanzi_core::{Blacklist, CandidateSegment};
use std::sync::Arc;

/// Visibility flags for one segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    /// Shown unless every matching lexeme is blacklisted
    pub is_visible: bool,
    /// Also hidden when every character is individually blacklisted
    pub strict_visible: bool,
}

impl Visibility {
    /// Both flags off
    pub const HIDDEN: Self = Self {
        is_visible: false,
        strict_visible: false,
    };
}

/// Computes [`Visibility`] for candidates
#[derive(Debug, Clone)]
pub struct VisibilityEvaluator {
    lexicon: Arc<dyn LexiconPort>,
}

impl VisibilityEvaluator {
    /// Create an evaluator backed by `lexicon`
    pub fn new(lexicon: Arc<dyn LexiconPort>) -> Self {
        Self { lexicon }
    }

    /// Evaluate one candidate
    pub async fn evaluate(
        &self,
        candidate: &CandidateSegment,
        blacklist: &Blacklist,
    ) -> Result<Visibility> {
        let Some(lexeme_ids) = candidate.lexeme_ids() else {
            return Ok(Visibility::HIDDEN);
        };

        let is_visible = lexeme_ids.iter().any(|id| !blacklist.contains(id));
        if !is_visible {
            return Ok(Visibility::HIDDEN);
        }
        if blacklist.is_empty() {
            return Ok(Visibility {
                is_visible,
                strict_visible: true,
            });
        }

        let text = candidate.span().text();
        let lookups = text
            .char_indices()
            .map(|(idx, ch)| self.lexicon.find_by_text(&text[idx..idx + ch.len_utf8()]));
        let per_char = try_join_all(lookups).await?;
        let every_char_known = per_char.iter().all(|ids| blacklist.contains_any(ids));

        Ok(Visibility {
            is_visible,
            strict_visible: !every_char_known,
        })
    }
}
