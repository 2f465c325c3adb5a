//! Coverage checks for cutter output
//!
//! Every tier must hand back pieces that, concatenated in order, rebuild
//! the text it was given. [`align`] turns raw pieces into [`Span`]s with
//! offsets into the original input and rejects gaps, overlaps and empty
//! pieces on the way.

use crate::error::{CoreError, Result};
use crate::types::Span;

/// Align `pieces` against `parent`, producing spans in the parent's
/// coordinate space
pub fn align<'a, I>(parent: &Span, pieces: I) -> Result<Vec<Span>>
where
    I: IntoIterator<Item = &'a str>,
{
    let text = parent.text();
    let mut spans = Vec::new();
    let mut byte_pos = 0;
    let mut char_pos = 0;

    for piece in pieces {
        if piece.is_empty() {
            return Err(CoreError::EmptyPiece {
                char_offset: parent.char_offset + char_pos,
            });
        }

        if !text[byte_pos..].starts_with(piece) {
            return Err(CoreError::Misaligned {
                char_offset: parent.char_offset + char_pos,
                piece: piece.to_string(),
            });
        }

        spans.push(Span::new(
            piece,
            parent.byte_offset + byte_pos,
            parent.char_offset + char_pos,
        ));
        byte_pos += piece.len();
        char_pos += piece.chars().count();
    }

    if byte_pos != text.len() {
        return Err(CoreError::IncompleteCoverage {
            covered: char_pos,
            total: parent.char_len(),
        });
    }

    Ok(spans)
}

/// Check whether `spans` rebuild `text` exactly
pub fn reconstructs(text: &str, spans: &[Span]) -> bool {
    let mut rest = text;
    for span in spans {
        match rest.strip_prefix(span.text()) {
            Some(tail) if !span.text().is_empty() => rest = tail,
            _ => return false,
        }
    }
    rest.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_align_offsets() {
        let parent = Span::new("ABC你好", 2, 2);
        let spans = align(&parent, ["ABC", "你", "好"]).unwrap();

        assert_eq!(spans.len(), 3);
        assert_eq!(spans[1].text(), "你");
        assert_eq!(spans[1].byte_offset, 5);
        assert_eq!(spans[1].char_offset, 5);
        assert_eq!(spans[2].byte_offset, 8);
        assert_eq!(spans[2].char_offset, 6);
    }

    #[test]
    fn test_align_rejects_gap() {
        let parent = Span::root("你好吗");
        match align(&parent, ["你", "吗"]) {
            Err(CoreError::Misaligned { char_offset, piece }) => {
                assert_eq!(char_offset, 1);
                assert_eq!(piece, "吗");
            }
            other => panic!("Expected Misaligned, got {other:?}"),
        }
    }

    #[test]
    fn test_align_rejects_short_cover() {
        let parent = Span::root("你好吗");
        assert_eq!(
            align(&parent, ["你", "好"]),
            Err(CoreError::IncompleteCoverage {
                covered: 2,
                total: 3
            })
        );
    }

    #[test]
    fn test_align_rejects_empty_piece() {
        let parent = Span::root("你好");
        assert!(matches!(
            align(&parent, ["你", "", "好"]),
            Err(CoreError::EmptyPiece { char_offset: 1 })
        ));
    }

    #[test]
    fn test_reconstructs() {
        let spans = vec![Span::new("你", 0, 0), Span::new("好", 3, 1)];
        assert!(reconstructs("你好", &spans));
        assert!(!reconstructs("你好吗", &spans));
        assert!(reconstructs("", &[]));
    }

    proptest! {
        #[test]
        fn prop_char_pieces_always_align(text in "\\PC{0,40}") {
            let parent = Span::root(&text);
            let pieces: Vec<&str> = text
                .char_indices()
                .map(|(i, ch)| &text[i..i + ch.len_utf8()])
                .collect();
            let spans = align(&parent, pieces).unwrap();
            prop_assert!(reconstructs(&text, &spans));
            prop_assert_eq!(spans.len(), text.chars().count());
        }
    }
}
