//! Plain text output formatter

use super::{is_blank, OutputFormatter, VisibilityPolicy};
use anyhow::Result;
use hanzi_api::SegmentDto;
use std::io::Write;

/// Plain text formatter - one segment per line, input lines separated by a
/// blank line
pub struct TextFormatter<W: Write> {
    writer: W,
    policy: VisibilityPolicy,
    lines: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, policy: VisibilityPolicy) -> Self {
        Self {
            writer,
            policy,
            lines: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_line(&mut self, _source: &str, _line: usize, segments: &[SegmentDto]) -> Result<()> {
        if self.lines > 0 {
            writeln!(self.writer)?;
        }
        self.lines += 1;

        for segment in segments.iter().filter(|segment| !is_blank(segment)) {
            match segment.romanization() {
                Some(pinyin) if self.policy.shows(segment) => {
                    writeln!(self.writer, "{}\t{}", segment.segment, pinyin)?
                }
                _ => writeln!(self.writer, "{}", segment.segment)?,
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::tests::segment;

    fn render(policy: VisibilityPolicy, lines: &[Vec<SegmentDto>]) -> String {
        let mut formatter = TextFormatter::new(Vec::new(), policy);
        for (i, segments) in lines.iter().enumerate() {
            formatter.format_line("<arg>", i + 1, segments).unwrap();
        }
        formatter.finish().unwrap();
        String::from_utf8(formatter.writer).unwrap()
    }

    #[test]
    fn test_hidden_segments_lose_pinyin() {
        let output = render(
            VisibilityPolicy::Lenient,
            &[vec![
                segment("我", &["wo3"], false, false),
                segment(" ", &[], false, false),
                segment("好", &["hao3", "hao4"], true, true),
                segment("ABC", &[], false, false),
            ]],
        );
        assert_eq!(output, "我\n好\thao3/hao4\nABC\n");
    }

    #[test]
    fn test_strict_policy() {
        let line = vec![segment("你好", &["ni3 hao3"], true, false)];
        assert_eq!(render(VisibilityPolicy::Lenient, &[line.clone()]), "你好\tni3 hao3\n");
        assert_eq!(render(VisibilityPolicy::Strict, &[line]), "你好\n");
    }

    #[test]
    fn test_lines_are_separated() {
        let output = render(
            VisibilityPolicy::Lenient,
            &[
                vec![segment("你", &["ni3"], true, true)],
                vec![segment("好", &["hao3"], true, true)],
            ],
        );
        assert_eq!(output, "你\tni3\n\n好\thao3\n");
    }
}
