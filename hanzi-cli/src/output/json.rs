//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use hanzi_api::SegmentDto;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs every segmented line as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    lines: Vec<LineData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct LineData {
    /// Where the line came from
    pub source: String,
    /// 1-based line number within the source
    pub line: usize,
    /// Segments in input order
    pub segments: Vec<SegmentDto>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            lines: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_line(&mut self, source: &str, line: usize, segments: &[SegmentDto]) -> Result<()> {
        self.lines.push(LineData {
            source: source.to_string(),
            line,
            segments: segments.to_vec(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.lines)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.lines)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
