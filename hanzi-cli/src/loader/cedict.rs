//! CC-CEDICT dictionary loading
//!
//! Each entry line reads `TRAD SIMP [pin1 yin1] /definition/definition/`.
//! Lines starting with `#` are comments. Romanization keeps tone numbers;
//! only the `u:` spelling of ü is normalised to `v`.

use crate::error::CliError;
use anyhow::{Context, Result};
use hanzi_api::{CollectionId, Lexeme, LexemeId, MemoryLexicon};
use regex::Regex;
use std::fs;
use std::path::Path;

/// One parsed dictionary entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CedictEntry {
    /// Traditional form
    pub traditional: String,
    /// Simplified form
    pub simplified: String,
    /// Normalised romanization
    pub pinyin: String,
    /// English definitions
    pub definitions: Vec<String>,
}

/// Line parser for CC-CEDICT files
#[derive(Debug, Clone)]
pub struct CedictParser {
    line: Regex,
}

impl CedictParser {
    /// Create a parser
    pub fn new() -> Result<Self> {
        let line = Regex::new(r"^(\S+)\s+(\S+)\s+\[([^\]]*)\]\s+/(.*)/\s*$")
            .context("Failed to compile dictionary pattern")?;
        Ok(Self { line })
    }

    /// Parse one line, `None` for comments and blank lines
    pub fn parse_line(&self, line_number: usize, line: &str) -> Result<Option<CedictEntry>> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let captures = self
            .line
            .captures(trimmed)
            .ok_or_else(|| CliError::InvalidDictionaryLine {
                line: line_number,
                content: trimmed.to_string(),
            })?;

        Ok(Some(CedictEntry {
            traditional: captures[1].to_string(),
            simplified: captures[2].to_string(),
            pinyin: normalize_pinyin(&captures[3]),
            definitions: captures[4]
                .split('/')
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string)
                .collect(),
        }))
    }

    /// Parse a whole file body, keeping each entry's line number
    pub fn parse_text(&self, text: &str) -> Result<Vec<(usize, CedictEntry)>> {
        let mut entries = Vec::new();
        for (index, line) in text.lines().enumerate() {
            if let Some(entry) = self.parse_line(index + 1, line)? {
                entries.push((index + 1, entry));
            }
        }
        Ok(entries)
    }
}

/// Replace the `u:` spelling of ü with `v`
pub fn normalize_pinyin(pinyin: &str) -> String {
    pinyin.trim().replace("u:", "v").replace("U:", "V")
}

/// Summary of one loaded dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryStats {
    /// Collection the entries joined
    pub collection: CollectionId,
    /// Number of lexemes inserted
    pub lexemes: usize,
}

/// Load a dictionary file into `lexicon`
///
/// Ids are `<source>:<line>` where `<source>` is the file stem, and every
/// entry also joins a collection named `<source>`.
pub fn load_dictionary(path: &Path, lexicon: &mut MemoryLexicon) -> Result<DictionaryStats> {
    let source = source_name(path)?;
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dictionary: {}", path.display()))?;

    let parser = CedictParser::new()?;
    let entries = parser
        .parse_text(&text)
        .with_context(|| format!("Failed to parse dictionary: {}", path.display()))?;

    let collection = CollectionId::new(source.as_str());
    let mut lexemes = 0;
    for (line, entry) in entries {
        let id = LexemeId::new(format!("{source}:{line}"));
        let lexeme = Lexeme::new(
            id.clone(),
            Some(entry.simplified.as_str()),
            Some(entry.traditional.as_str()),
            Some(entry.pinyin.as_str()),
        )
        .with_context(|| format!("{}:{line}", path.display()))?;
        lexicon.insert(lexeme);
        lexicon.add_to_collection(&collection, &id);
        lexemes += 1;
    }

    log::info!("Loaded {lexemes} lexemes from {}", path.display());
    Ok(DictionaryStats {
        collection,
        lexemes,
    })
}

fn source_name(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            CliError::ConfigError(format!("cannot name dictionary {}", path.display())).into()
        })
}
