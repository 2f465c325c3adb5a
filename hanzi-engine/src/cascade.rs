//! Three-tier segmentation cascade
//!
//! 1. The general cutter splits the whole input; every piece is looked up.
//! 2. Unmatched pieces are re-split by the alignment-repair cutter and the
//!    new tokens looked up again.
//! 3. Pieces still unmatched are split into single CJK characters and looked
//!    up one last time.
//!
//! Tier 1 fixes the order of the output; later tiers only refine unmatched
//! entries in place. Lookups within a tier run concurrently and are
//! reassembled in span order.

use crate::config::AlignmentMode;
use crate::error::Result;
use crate::lexicon::LexiconPort;
use futures::future::try_join_all;
use hanzi_core::coverage;
use hanzi_core::{
    contains_cjk, AlignmentRepairCutter, CandidateSegment, CharacterCutter, Cutter, Span,
    Tokenizer,
};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Result of asking a tier to refine one unmatched span
enum Refinement {
    /// Leave the entry as it is
    Unchanged { settled: bool },
    /// Replace the entry with these spans, each looked up again
    Split(Vec<Span>),
}

/// A candidate plus whether later tiers may still refine it
struct Tracked {
    candidate: CandidateSegment,
    settled: bool,
}

enum Slot {
    Kept(Tracked),
    Refined(usize),
}

/// Orchestrates the general, repair and character cutters
pub struct SegmentationCascade {
    lexicon: Arc<dyn LexiconPort>,
    general: Arc<dyn Cutter>,
    repair: AlignmentRepairCutter<Arc<dyn Tokenizer>>,
    fallback: CharacterCutter,
    mode: AlignmentMode,
}

impl SegmentationCascade {
    /// Create a cascade over the given lexicon and cutters
    pub fn new(
        lexicon: Arc<dyn LexiconPort>,
        general: Arc<dyn Cutter>,
        tokenizer: Arc<dyn Tokenizer>,
        mode: AlignmentMode,
    ) -> Self {
        Self {
            lexicon,
            general,
            repair: AlignmentRepairCutter::new(tokenizer),
            fallback: CharacterCutter::new(),
            mode,
        }
    }

    /// Segment `text` into candidates that rebuild it exactly
    pub async fn segment(&self, text: &str) -> Result<Vec<CandidateSegment>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let spans = coverage::align(&Span::root(text), self.general.cut(text))?;
        let entries: Vec<Tracked> = self
            .lookup_all(spans)
            .await?
            .into_iter()
            .map(|candidate| Tracked {
                candidate,
                settled: false,
            })
            .collect();
        log_tier(self.general.name(), &entries);

        let entries = self
            .refine(entries, |span| self.repair_refinement(span))
            .await?;
        log_tier("repair", &entries);

        let entries = self
            .refine(entries, |span| self.fallback_refinement(span))
            .await?;
        log_tier(self.fallback.name(), &entries);

        Ok(entries.into_iter().map(|entry| entry.candidate).collect())
    }

    fn repair_refinement(&self, span: &Span) -> Result<Refinement> {
        match self.repair.split(span) {
            Ok(spans) => Ok(split_or_unchanged(span, spans)),
            Err(violation) => match self.mode {
                AlignmentMode::Strict => Err(violation.into()),
                AlignmentMode::Graceful => {
                    warn!(
                        span = %violation.span,
                        reconstructed = %violation.reconstructed,
                        span_len = violation.span_len,
                        reconstructed_len = violation.reconstructed_len,
                        "repair cut lost characters, keeping span whole"
                    );
                    Ok(Refinement::Unchanged { settled: true })
                }
            },
        }
    }

    fn fallback_refinement(&self, span: &Span) -> Result<Refinement> {
        if !contains_cjk(span.text()) {
            return Ok(Refinement::Unchanged { settled: true });
        }
        let spans = coverage::align(span, self.fallback.cut(span.text()))?;
        Ok(split_or_unchanged(span, spans))
    }

    /// Apply one tier to every unmatched, unsettled entry
    async fn refine<F>(&self, entries: Vec<Tracked>, mut refine_span: F) -> Result<Vec<Tracked>>
    where
        F: FnMut(&Span) -> Result<Refinement>,
    {
        let mut slots = Vec::with_capacity(entries.len());
        let mut pending = Vec::new();

        for entry in entries {
            let refinement = match &entry.candidate {
                CandidateSegment::Unresolved(span) if !entry.settled => Some(refine_span(span)?),
                _ => None,
            };

            match refinement {
                None => slots.push(Slot::Kept(entry)),
                Some(Refinement::Unchanged { settled }) => {
                    slots.push(Slot::Kept(Tracked { settled, ..entry }))
                }
                Some(Refinement::Split(spans)) => {
                    slots.push(Slot::Refined(spans.len()));
                    pending.extend(spans);
                }
            }
        }

        let mut looked_up = self.lookup_all(pending).await?.into_iter();
        let mut refined = Vec::with_capacity(slots.len());
        for slot in slots {
            match slot {
                Slot::Kept(entry) => refined.push(entry),
                Slot::Refined(count) => {
                    refined.extend(looked_up.by_ref().take(count).map(|candidate| Tracked {
                        candidate,
                        settled: false,
                    }))
                }
            }
        }

        Ok(refined)
    }

    /// Look up every span concurrently, keeping span order
    async fn lookup_all(&self, spans: Vec<Span>) -> Result<Vec<CandidateSegment>> {
        let lookups = spans.into_iter().map(|span| async move {
            let ids = self.lexicon.find_by_text(span.text()).await?;
            trace!(span = span.text(), matches = ids.len(), "lexicon lookup");
            Ok::<_, crate::error::EngineError>(CandidateSegment::from_lookup(span, ids))
        });
        try_join_all(lookups).await
    }
}

fn split_or_unchanged(span: &Span, spans: Vec<Span>) -> Refinement {
    match spans.as_slice() {
        [only] if only.text() == span.text() => Refinement::Unchanged { settled: false },
        _ => Refinement::Split(spans),
    }
}

fn log_tier(tier: &str, entries: &[Tracked]) {
    let resolved = entries
        .iter()
        .filter(|entry| entry.candidate.is_resolved())
        .count();
    debug!(
        tier,
        segments = entries.len(),
        resolved,
        unresolved = entries.len() - resolved,
        "tier complete"
    );
}
