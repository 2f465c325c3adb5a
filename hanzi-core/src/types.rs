//! Core types: lexemes, spans, candidate and output segments

use crate::error::{CoreError, Result};
use std::collections::{BTreeSet, HashSet};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(String);

        impl $name {
            /// Wrap an identifier
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the identifier
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Opaque lexeme identifier
    LexemeId
);

string_id!(
    /// Opaque collection identifier
    CollectionId
);

/// Set of lexeme ids matched by one lookup
pub type LexemeIds = BTreeSet<LexemeId>;

/// A lexicon entry
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lexeme {
    id: LexemeId,
    simplified: Option<String>,
    traditional: Option<String>,
    romanization: Option<String>,
}

impl Lexeme {
    /// Create a lexeme; empty forms are treated as absent
    ///
    /// Fails when neither a simplified nor a traditional form remains.
    pub fn new(
        id: impl Into<LexemeId>,
        simplified: Option<&str>,
        traditional: Option<&str>,
        romanization: Option<&str>,
    ) -> Result<Self> {
        let id = id.into();
        let simplified = non_empty(simplified);
        let traditional = non_empty(traditional);

        if simplified.is_none() && traditional.is_none() {
            return Err(CoreError::MissingForm {
                id: id.to_string(),
            });
        }

        Ok(Self {
            id,
            simplified,
            traditional,
            romanization: non_empty(romanization),
        })
    }

    /// Lexeme id
    pub fn id(&self) -> &LexemeId {
        &self.id
    }

    /// Simplified form
    pub fn simplified(&self) -> Option<&str> {
        self.simplified.as_deref()
    }

    /// Traditional form
    pub fn traditional(&self) -> Option<&str> {
        self.traditional.as_deref()
    }

    /// Romanization (pinyin with tone numbers)
    pub fn romanization(&self) -> Option<&str> {
        self.romanization.as_deref()
    }

    /// Project the lexeme into its output shape
    pub fn project(&self) -> LexemeProjection {
        LexemeProjection {
            id: self.id.clone(),
            simplified: self.simplified.clone(),
            traditional: self.traditional.clone(),
            romanization: self.romanization.clone(),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// A contiguous, non-empty piece of the original input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    text: String,
    /// Byte offset of the span in the original input
    pub byte_offset: usize,
    /// Character offset of the span in the original input
    pub char_offset: usize,
}

impl Span {
    /// Create a span at the given offsets
    pub fn new(text: impl Into<String>, byte_offset: usize, char_offset: usize) -> Self {
        Self {
            text: text.into(),
            byte_offset,
            char_offset,
        }
    }

    /// Span covering a whole input
    pub fn root(text: &str) -> Self {
        Self::new(text, 0, 0)
    }

    /// Span text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Consume the span, returning its text
    pub fn into_text(self) -> String {
        self.text
    }
}

/// A span as it moves through the segmentation cascade
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateSegment {
    /// No lexicon match yet
    Unresolved(Span),
    /// Matched at least one lexeme
    Resolved {
        /// The matched span
        span: Span,
        /// Matched lexeme ids, never empty
        lexeme_ids: LexemeIds,
    },
}

impl CandidateSegment {
    /// Build a candidate from a lookup result
    pub fn from_lookup(span: Span, lexeme_ids: LexemeIds) -> Self {
        if lexeme_ids.is_empty() {
            CandidateSegment::Unresolved(span)
        } else {
            CandidateSegment::Resolved { span, lexeme_ids }
        }
    }

    /// The underlying span
    pub fn span(&self) -> &Span {
        match self {
            CandidateSegment::Unresolved(span) => span,
            CandidateSegment::Resolved { span, .. } => span,
        }
    }

    /// Matched ids, if resolved
    pub fn lexeme_ids(&self) -> Option<&LexemeIds> {
        match self {
            CandidateSegment::Unresolved(_) => None,
            CandidateSegment::Resolved { lexeme_ids, .. } => Some(lexeme_ids),
        }
    }

    /// Check if the candidate matched the lexicon
    pub fn is_resolved(&self) -> bool {
        matches!(self, CandidateSegment::Resolved { .. })
    }
}

/// Lexeme ids a learner already knows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blacklist {
    ids: HashSet<LexemeId>,
}

impl Blacklist {
    /// Empty blacklist (no filtering)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check membership
    pub fn contains(&self, id: &LexemeId) -> bool {
        self.ids.contains(id)
    }

    /// Check whether any of `ids` is blacklisted
    pub fn contains_any<'a>(&self, ids: impl IntoIterator<Item = &'a LexemeId>) -> bool {
        ids.into_iter().any(|id| self.contains(id))
    }

    /// Number of blacklisted ids
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if nothing is blacklisted
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Add an id
    pub fn insert(&mut self, id: LexemeId) -> bool {
        self.ids.insert(id)
    }
}

impl FromIterator<LexemeId> for Blacklist {
    fn from_iter<I: IntoIterator<Item = LexemeId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl Extend<LexemeId> for Blacklist {
    fn extend<I: IntoIterator<Item = LexemeId>>(&mut self, iter: I) {
        self.ids.extend(iter);
    }
}

/// Hydrated lexeme as attached to an output segment
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LexemeProjection {
    /// Lexeme id
    pub id: LexemeId,
    /// Simplified form
    pub simplified: Option<String>,
    /// Traditional form
    pub traditional: Option<String>,
    /// Romanization
    pub romanization: Option<String>,
}

/// Final pipeline output for one span
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Segment text
    pub text: String,
    /// Matched lexemes, empty when unmatched
    pub lexemes: Vec<LexemeProjection>,
    /// Shown unless every matching lexeme is blacklisted
    pub is_visible: bool,
    /// Also hidden when every character is individually blacklisted
    pub strict_visible: bool,
}
