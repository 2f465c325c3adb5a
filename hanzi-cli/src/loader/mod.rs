//! Lexicon loading from dictionary and collection files

pub mod cedict;
pub mod collection;

pub use cedict::{load_dictionary, CedictEntry, CedictParser, DictionaryStats};
pub use collection::{load_collection, CollectionStats, CollectionWord};

use crate::config::CollectionSource;
use crate::error::CliError;
use crate::progress::ProgressReporter;
use anyhow::Result;
use hanzi_api::MemoryLexicon;
use std::path::PathBuf;

/// Files that make up a lexicon
#[derive(Debug, Clone, Default)]
pub struct LexiconSources {
    /// CC-CEDICT dictionaries, loaded first
    pub dictionaries: Vec<PathBuf>,
    /// Collections, matched against the loaded dictionaries
    pub collections: Vec<CollectionSource>,
}

impl LexiconSources {
    /// Load every source into a fresh lexicon
    pub fn load(&self, progress: &mut ProgressReporter) -> Result<MemoryLexicon> {
        if self.dictionaries.is_empty() {
            return Err(CliError::ConfigError(
                "no dictionary given; pass --dictionary or set [lexicon].dictionaries".to_string(),
            )
            .into());
        }

        let mut lexicon = MemoryLexicon::new();
        progress.init_files((self.dictionaries.len() + self.collections.len()) as u64);

        for path in &self.dictionaries {
            if !path.is_file() {
                return Err(CliError::FileNotFound(path.display().to_string()).into());
            }
            let stats = load_dictionary(path, &mut lexicon)?;
            progress.file_completed(&format!("{} ({} lexemes)", path.display(), stats.lexemes));
        }
        for source in &self.collections {
            if !source.path.is_file() {
                return Err(CliError::FileNotFound(source.path.display().to_string()).into());
            }
            let stats = load_collection(&source.name, &source.path, &mut lexicon)?;
            progress.file_completed(&format!("{} ({} lexemes)", source.name, stats.members));
        }

        progress.finish();
        Ok(lexicon)
    }
}
