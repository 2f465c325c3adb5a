//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use hanzi_api::{AlignmentMode, Config};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Segmentation configuration
    #[serde(default)]
    pub segmentation: SegmentationConfig,

    /// Lexicon sources
    #[serde(default)]
    pub lexicon: LexiconConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Segmentation-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SegmentationConfig {
    /// What to do when the repair cutter loses characters
    pub alignment_mode: AlignmentMode,

    /// Maximum characters per input line
    pub char_limit: usize,

    /// Let jieba guess unknown words with its HMM
    pub hmm: bool,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            alignment_mode: AlignmentMode::Graceful,
            char_limit: hanzi_engine::CHAR_LIMIT,
            hmm: true,
        }
    }
}

/// Dictionaries and collections to load
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct LexiconConfig {
    /// CC-CEDICT formatted dictionary files
    pub dictionaries: Vec<PathBuf>,

    /// Named word lists
    pub collections: Vec<CollectionSource>,
}

/// A named collection file
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct CollectionSource {
    /// Collection id used in blacklist selectors
    pub name: String,

    /// File with one `SC#TC` word per line
    pub path: PathBuf,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Hide segments whose characters are all individually blacklisted
    pub strict_visibility: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
            strict_visibility: false,
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    ///
    /// Relative lexicon paths are resolved against the file's directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut config: CliConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        if let Some(base) = path.parent() {
            config.lexicon.rebase(base);
        }
        Ok(config)
    }

    /// Load `path` if given, otherwise the defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Check settings that serde cannot
    pub fn validate(&self) -> Result<()> {
        self.api_config()?;
        self.default_format()?;

        for collection in &self.lexicon.collections {
            if collection.name.trim().is_empty() {
                return Err(CliError::ConfigError(format!(
                    "collection at {} has an empty name",
                    collection.path.display()
                ))
                .into());
            }
        }
        Ok(())
    }

    /// Default output format
    pub fn default_format(&self) -> Result<OutputFormat> {
        self.output.default_format.parse::<OutputFormat>().map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format `{}`",
                self.output.default_format
            ))
            .into()
        })
    }

    /// API configuration for these segmentation settings
    pub fn api_config(&self) -> Result<Config> {
        Config::builder()
            .char_limit(self.segmentation.char_limit)
            .alignment_mode(self.segmentation.alignment_mode)
            .hmm(self.segmentation.hmm)
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}

impl LexiconConfig {
    fn rebase(&mut self, base: &Path) {
        for path in &mut self.dictionaries {
            *path = rebased(base, path);
        }
        for collection in &mut self.collections {
            collection.path = rebased(base, &collection.path);
        }
    }
}

fn rebased(base: &Path, path: &Path) -> PathBuf {
    if path.is_relative() {
        base.join(path)
    } else {
        path.to_path_buf()
    }
}
