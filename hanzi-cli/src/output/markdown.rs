//! Markdown output formatter

use super::{is_blank, OutputFormatter, VisibilityPolicy};
use anyhow::Result;
use hanzi_api::SegmentDto;
use std::io::Write;

/// Markdown formatter - outputs each line as a table of segments
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    policy: VisibilityPolicy,
    segment_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, policy: VisibilityPolicy) -> Self {
        Self {
            writer,
            policy,
            segment_count: 0,
        }
    }
}

fn escape(cell: &str) -> String {
    cell.replace('|', "\\|")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_line(&mut self, source: &str, line: usize, segments: &[SegmentDto]) -> Result<()> {
        writeln!(self.writer, "### {source}:{line}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Segment | Pinyin | Visible |")?;
        writeln!(self.writer, "|---------|--------|---------|")?;

        for segment in segments.iter().filter(|segment| !is_blank(segment)) {
            self.segment_count += 1;
            let shown = self.policy.shows(segment);
            let pinyin = segment
                .romanization()
                .filter(|_| shown)
                .unwrap_or_default();
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                escape(&segment.segment),
                escape(&pinyin),
                if shown { "yes" } else { "no" }
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total segments: {}*", self.segment_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
