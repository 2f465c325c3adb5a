//! Output formatting module

use anyhow::Result;
use hanzi_api::SegmentDto;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format the segments of one input line
    fn format_line(&mut self, source: &str, line: usize, segments: &[SegmentDto]) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One segment per line, pinyin after a tab when shown
    Text,
    /// JSON array of segmented lines
    Json,
    /// Markdown table per line
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(format!("unknown output format `{other}`")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        };
        f.write_str(name)
    }
}

/// Which visibility flag decides whether pinyin is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisibilityPolicy {
    /// Hide only segments whose every lexeme is blacklisted
    #[default]
    Lenient,
    /// Also hide segments whose characters are all blacklisted
    Strict,
}

impl VisibilityPolicy {
    /// Check if the pinyin of `segment` should be shown
    pub fn shows(self, segment: &SegmentDto) -> bool {
        match self {
            VisibilityPolicy::Lenient => segment.is_visible,
            VisibilityPolicy::Strict => segment.strict_visible,
        }
    }
}

/// Build the formatter for `format` writing to `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    policy: VisibilityPolicy,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, policy)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, policy)),
    }
}

/// Whitespace-only segments carry nothing worth a row of output
pub(crate) fn is_blank(segment: &SegmentDto) -> bool {
    segment.segment.trim().is_empty()
}
