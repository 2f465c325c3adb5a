//! Layered error types for the engine

use hanzi_core::{AlignmentViolation, CoreError, LexemeId};
use thiserror::Error;

/// Failures reported by a lexicon backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexiconError {
    /// Backend could not be reached
    #[error("lexicon unavailable: {0}")]
    Unavailable(String),

    /// Backend returned an error
    #[error("lexicon backend error: {0}")]
    Backend(String),
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core algorithm error
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Repair tokens failed to rebuild a span (strict mode only)
    #[error("alignment invariant violated: {0}")]
    AlignmentInvariantViolation(#[from] AlignmentViolation),

    /// A matched lexeme id has no record
    #[error("lexeme {id} matched but could not be hydrated")]
    LexemeHydrationFailure {
        /// The dangling id
        id: LexemeId,
    },

    /// Input longer than the configured character limit
    #[error("input has {chars} characters (limit: {limit})")]
    InputTooLarge {
        /// Characters in the input
        chars: usize,
        /// Configured limit
        limit: usize,
    },

    /// Lexicon port failure
    #[error("lexicon error: {0}")]
    Lexicon(#[from] LexiconError),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = EngineError::InputTooLarge {
            chars: 1001,
            limit: 1000,
        };
        assert_eq!(error.to_string(), "input has 1001 characters (limit: 1000)");

        let error = EngineError::LexemeHydrationFailure {
            id: LexemeId::new("cedict:42"),
        };
        assert!(error.to_string().contains("cedict:42"));
    }

    #[test]
    fn test_from_conversions() {
        let error: EngineError = LexiconError::Unavailable("closed".to_string()).into();
        assert!(matches!(error, EngineError::Lexicon(_)));

        let error: EngineError = AlignmentViolation::new("你好", "你".to_string()).into();
        assert!(matches!(error, EngineError::AlignmentInvariantViolation(_)));
    }
}
