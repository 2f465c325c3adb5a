//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::{Context, Result};
use hanzi_api::Input;

/// Text to segment, tagged with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// File path, `<arg>` or `<stdin>`
    pub source: String,
    /// Full text
    pub text: String,
}

impl Document {
    /// Non-blank lines with their 1-based line numbers
    pub fn lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.text
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line))
            .filter(|(_, line)| !line.trim().is_empty())
    }
}

/// Collect documents from a text argument, file patterns, or stdin
///
/// The text argument wins over patterns; with neither, stdin is read.
pub fn read_documents(text: Option<&str>, patterns: &[String]) -> Result<Vec<Document>> {
    if let Some(text) = text {
        return Ok(vec![Document {
            source: "<arg>".to_string(),
            text: text.to_string(),
        }]);
    }

    if patterns.is_empty() {
        let text = Input::from_reader(std::io::stdin())
            .read_text()
            .context("Failed to read stdin")?;
        return Ok(vec![Document {
            source: "<stdin>".to_string(),
            text,
        }]);
    }

    resolve_patterns(patterns)?
        .into_iter()
        .map(|path| -> Result<Document> {
            Ok(Document {
                text: FileReader::read_text(&path)?,
                source: path.display().to_string(),
            })
        })
        .collect()
}
