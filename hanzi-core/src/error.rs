//! Core error types (deterministic only)

use thiserror::Error;

/// Core errors raised while building or aligning spans
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A cutter produced a piece that does not continue the input at the
    /// current position
    #[error("piece `{piece}` does not align with the input at character {char_offset}")]
    Misaligned {
        /// Character offset where the piece was expected to start
        char_offset: usize,
        /// The offending piece
        piece: String,
    },

    /// A cutter produced an empty piece
    #[error("empty piece at character {char_offset}")]
    EmptyPiece {
        /// Character offset where the empty piece was produced
        char_offset: usize,
    },

    /// A cutter stopped before the end of its input
    #[error("pieces cover {covered} of {total} characters")]
    IncompleteCoverage {
        /// Characters covered by the pieces
        covered: usize,
        /// Characters in the input
        total: usize,
    },

    /// Lexeme without any written form
    #[error("lexeme {id} has neither a simplified nor a traditional form")]
    MissingForm {
        /// The lexeme id
        id: String,
    },
}

/// Repair tokens that fail to reconstruct the span they were cut from
///
/// Lengths are counted in characters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to split `{span}` ({span_len}), instead got `{reconstructed}` ({reconstructed_len})")]
pub struct AlignmentViolation {
    /// The span that was being re-segmented
    pub span: String,
    /// Concatenation of the tokens that survived overlap filtering
    pub reconstructed: String,
    /// Length of `span` in characters
    pub span_len: usize,
    /// Length of `reconstructed` in characters
    pub reconstructed_len: usize,
}

impl AlignmentViolation {
    /// Record a violation for `span`
    pub fn new(span: &str, reconstructed: String) -> Self {
        Self {
            span: span.to_string(),
            span_len: span.chars().count(),
            reconstructed_len: reconstructed.chars().count(),
            reconstructed,
        }
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_violation_lengths_are_in_chars() {
        let violation = AlignmentViolation::new("中华人民共和国", "中华人民共和".to_string());
        assert_eq!(violation.span_len, 7);
        assert_eq!(violation.reconstructed_len, 6);
        assert_eq!(
            violation.to_string(),
            "failed to split `中华人民共和国` (7), instead got `中华人民共和` (6)"
        );
    }

    #[test]
    fn test_core_error_display() {
        let error = CoreError::IncompleteCoverage {
            covered: 3,
            total: 5,
        };
        assert_eq!(error.to_string(), "pieces cover 3 of 5 characters");
    }
}
