//! Segment assembly
//!
//! Turns cascade candidates into output [`Segment`]s: matched ids are
//! hydrated into projections and visibility is attached. Output order is
//! the cascade order.

use crate::error::{EngineError, Result};
use crate::lexicon::LexiconPort;
use crate::visibility::{Visibility, VisibilityEvaluator};
use futures::future::try_join_all;
use hanzi_core::{Blacklist, CandidateSegment, LexemeIds, LexemeProjection, Segment};
use std::sync::Arc;

/// Assembler for output segments
#[derive(Debug, Clone)]
pub struct SegmentAssembler {
    lexicon: Arc<dyn LexiconPort>,
    evaluator: VisibilityEvaluator,
}

impl SegmentAssembler {
    /// Create a new assembler
    pub fn new(lexicon: Arc<dyn LexiconPort>) -> Self {
        Self {
            evaluator: VisibilityEvaluator::new(lexicon.clone()),
            lexicon,
        }
    }

    /// Assemble candidates into segments, keeping their order
    pub async fn assemble(
        &self,
        candidates: Vec<CandidateSegment>,
        blacklist: &Blacklist,
    ) -> Result<Vec<Segment>> {
        try_join_all(
            candidates
                .into_iter()
                .map(|candidate| self.assemble_one(candidate, blacklist)),
        )
        .await
    }

    async fn assemble_one(
        &self,
        candidate: CandidateSegment,
        blacklist: &Blacklist,
    ) -> Result<Segment> {
        let Visibility {
            is_visible,
            strict_visible,
        } = self.evaluator.evaluate(&candidate, blacklist).await?;

        let (text, lexemes) = match candidate {
            CandidateSegment::Unresolved(span) => (span.into_text(), Vec::new()),
            CandidateSegment::Resolved { span, lexeme_ids } => {
                let lexemes = self.project(&lexeme_ids).await?;
                (span.into_text(), lexemes)
            }
        };

        Ok(Segment {
            text,
            lexemes,
            is_visible,
            strict_visible,
        })
    }

    /// Hydrate ids into projections sorted by romanization, then id
    ///
    /// An id the lexicon cannot hydrate is an error rather than a silent gap.
    pub async fn project(&self, ids: &LexemeIds) -> Result<Vec<LexemeProjection>> {
        let hydrated = try_join_all(ids.iter().map(|id| async move {
            self.lexicon
                .find_by_id(id)
                .await?
                .map(|lexeme| lexeme.project())
                .ok_or_else(|| EngineError::LexemeHydrationFailure { id: id.clone() })
        }))
        .await?;

        let mut projections = hydrated;
        projections.sort_by(|a, b| {
            a.romanization
                .cmp(&b.romanization)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(projections)
    }
}
