//! CLI command implementations

use crate::config::{CliConfig, CollectionSource};
use crate::loader::LexiconSources;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use hanzi_api::{Config, SegmentProcessor};
use hanzi_engine::LexiconPort;
use std::path::PathBuf;
use std::sync::Arc;

pub mod generate_config;
pub mod lookup;
pub mod segment;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Segment Chinese text and attach pinyin
    Segment(segment::SegmentArgs),

    /// Look up every lexeme written as a word
    Lookup(lookup::LookupArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List the collections a lexicon defines
    Collections(LexiconArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Segment(args) => args.execute(),
            Commands::Lookup(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Formats => {
                println!("Available output formats:");
                println!("  text      - One segment per line, pinyin after a tab");
                println!("  json      - JSON array of segmented lines");
                println!("  markdown  - Markdown table per line");
                Ok(())
            }
            ListCommands::Collections(lexicon) => {
                let config = lexicon.load_config()?;
                let loaded = lexicon
                    .sources(&config)
                    .load(&mut ProgressReporter::new(true))?;
                println!("Available collections:");
                for collection in loaded.collection_ids() {
                    let members = loaded.collection_len(collection);
                    println!("  {:<12} {members} lexemes", collection.to_string());
                }
                Ok(())
            }
        }
    }
}

/// Lexicon options shared by the commands that need a dictionary
#[derive(Debug, Clone, Default, Args)]
pub struct LexiconArgs {
    /// CC-CEDICT dictionary file (repeatable)
    #[arg(short = 'd', long = "dictionary", value_name = "FILE")]
    pub dictionaries: Vec<PathBuf>,

    /// Named collection file as NAME=FILE (repeatable)
    #[arg(long = "collection", value_name = "NAME=FILE", value_parser = parse_collection)]
    pub collections: Vec<CollectionSource>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "HANZI_CONFIG")]
    pub config: Option<PathBuf>,
}

impl LexiconArgs {
    /// Load and validate the configuration file, if any
    pub fn load_config(&self) -> Result<CliConfig> {
        let config = CliConfig::load(self.config.as_deref())?;
        config.validate()?;
        Ok(config)
    }

    /// Configured sources followed by the ones given on the command line
    pub fn sources(&self, config: &CliConfig) -> LexiconSources {
        LexiconSources {
            dictionaries: config
                .lexicon
                .dictionaries
                .iter()
                .chain(&self.dictionaries)
                .cloned()
                .collect(),
            collections: config
                .lexicon
                .collections
                .iter()
                .chain(&self.collections)
                .cloned()
                .collect(),
        }
    }

    /// Load the lexicon and wrap it in a processor
    pub fn processor(
        &self,
        config: &CliConfig,
        api_config: Config,
        quiet: bool,
    ) -> Result<SegmentProcessor> {
        let mut progress = ProgressReporter::new(quiet);
        let lexicon: Arc<dyn LexiconPort> = Arc::new(self.sources(config).load(&mut progress)?);
        SegmentProcessor::with_config(lexicon, api_config).context("Failed to build segmenter")
    }
}

fn parse_collection(value: &str) -> std::result::Result<CollectionSource, String> {
    let (name, path) = value
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=FILE, got `{value}`"))?;
    let name = name.trim();
    if name.is_empty() || path.trim().is_empty() {
        return Err(format!("expected NAME=FILE, got `{value}`"));
    }
    Ok(CollectionSource {
        name: name.to_string(),
        path: PathBuf::from(path.trim()),
    })
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        // A second init in the same process keeps the first logger
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}

/// Single-threaded runtime for driving the async segmenter
pub fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_collection() {
        let source = parse_collection("hsk1=lists/hsk1.txt").unwrap();
        assert_eq!(source.name, "hsk1");
        assert_eq!(source.path, PathBuf::from("lists/hsk1.txt"));

        assert!(parse_collection("hsk1").is_err());
        assert!(parse_collection("=hsk1.txt").is_err());
        assert!(parse_collection("hsk1=").is_err());
    }

    #[test]
    fn test_sources_put_config_first() {
        let mut config = CliConfig::default();
        config.lexicon.dictionaries.push(PathBuf::from("configured.u8"));
        let args = LexiconArgs {
            dictionaries: vec![PathBuf::from("given.u8")],
            ..LexiconArgs::default()
        };

        let sources = args.sources(&config);
        assert_eq!(
            sources.dictionaries,
            vec![PathBuf::from("configured.u8"), PathBuf::from("given.u8")]
        );
        assert!(sources.collections.is_empty());
    }

    #[test]
    fn test_list_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Formats,
        };
        let debug_str = format!("{list_cmd:?}");
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Formats"));
    }

    #[test]
    fn test_list_formats_runs() {
        assert!(ListCommands::Formats.execute().is_ok());
    }
}
