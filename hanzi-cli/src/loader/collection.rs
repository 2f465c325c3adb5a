//! Collection list loading
//!
//! A collection file holds one word per line as `SC#TC`. Either side may be
//! blank but not both; a line without `#` is a simplified form only.

use crate::error::CliError;
use anyhow::{Context, Result};
use hanzi_api::{CollectionId, MemoryLexicon};
use std::fs;
use std::path::Path;

const DELIMITER: char = '#';

/// One word of a collection list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionWord {
    /// Simplified form
    pub simplified: Option<String>,
    /// Traditional form
    pub traditional: Option<String>,
}

/// Parse one line, `None` for blank lines
pub fn parse_word(line_number: usize, line: &str) -> Result<Option<CollectionWord>> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let (simplified, traditional) = line.split_once(DELIMITER).unwrap_or((line, ""));
    let word = CollectionWord {
        simplified: non_empty(simplified),
        traditional: non_empty(traditional),
    };
    if word.simplified.is_none() && word.traditional.is_none() {
        return Err(CliError::InvalidCollectionLine {
            line: line_number,
            content: line.to_string(),
        }
        .into());
    }
    Ok(Some(word))
}

fn non_empty(form: &str) -> Option<String> {
    let form = form.trim();
    (!form.is_empty()).then(|| form.to_string())
}

/// Summary of one loaded collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionStats {
    /// Words listed in the file
    pub words: usize,
    /// Lexemes that joined the collection
    pub members: usize,
    /// Words with no lexeme in the lexicon
    pub unmatched: usize,
}

/// Add every lexeme matching a listed word to collection `name`
pub fn load_collection(
    name: &str,
    path: &Path,
    lexicon: &mut MemoryLexicon,
) -> Result<CollectionStats> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read collection: {}", path.display()))?;
    let collection = CollectionId::new(name);

    let mut stats = CollectionStats {
        words: 0,
        members: 0,
        unmatched: 0,
    };
    for (index, line) in text.lines().enumerate() {
        let Some(word) = parse_word(index + 1, line)
            .with_context(|| format!("Failed to parse collection: {}", path.display()))?
        else {
            continue;
        };
        stats.words += 1;

        let ids =
            lexicon.ids_matching_forms(word.simplified.as_deref(), word.traditional.as_deref());
        if ids.is_empty() {
            log::debug!("Collection {name}: no lexeme for {line:?}");
            stats.unmatched += 1;
        }
        for id in &ids {
            if lexicon.add_to_collection(&collection, id) {
                stats.members += 1;
            }
        }
    }

    log::info!(
        "Collection {name}: {} words, {} lexemes, {} unmatched",
        stats.words,
        stats.members,
        stats.unmatched
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanzi_api::Lexeme;
    use tempfile::TempDir;

    #[test]
    fn test_parse_word() {
        let word = parse_word(1, "国家#國家").unwrap().unwrap();
        assert_eq!(word.simplified.as_deref(), Some("国家"));
        assert_eq!(word.traditional.as_deref(), Some("國家"));

        let word = parse_word(1, "#國").unwrap().unwrap();
        assert_eq!(word.simplified, None);

        let word = parse_word(1, " 你好 ").unwrap().unwrap();
        assert_eq!(word.simplified.as_deref(), Some("你好"));
        assert_eq!(word.traditional, None);

        assert_eq!(parse_word(1, "  ").unwrap(), None);
        assert!(parse_word(4, " # ").is_err());
    }

    #[test]
    fn test_load_collection() {
        let mut lexicon = MemoryLexicon::new();
        lexicon.insert(Lexeme::new("1", Some("国"), Some("國"), Some("guo2")).unwrap());
        lexicon.insert(Lexeme::new("2", Some("好"), None, Some("hao3")).unwrap());
        lexicon.insert(Lexeme::new("3", Some("好"), None, Some("hao4")).unwrap());

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hsk1.txt");
        fs::write(&path, "#國\n好#\n\n猫#貓\n").unwrap();

        let stats = load_collection("hsk1", &path, &mut lexicon).unwrap();
        assert_eq!(
            stats,
            CollectionStats {
                words: 3,
                members: 3,
                unmatched: 1,
            }
        );
        assert!(lexicon
            .collection_ids()
            .contains(&&CollectionId::new("hsk1")));
    }
}
