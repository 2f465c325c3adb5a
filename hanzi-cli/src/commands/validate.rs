//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match CliConfig::from_file(&self.config).and_then(|config| {
            config.validate()?;
            Ok(config)
        }) {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!("  Alignment mode: {:?}", config.segmentation.alignment_mode);
                println!("  Character limit: {}", config.segmentation.char_limit);
                println!("  Dictionaries: {}", config.lexicon.dictionaries.len());
                println!("  Collections: {}", config.lexicon.collections.len());
                for path in config
                    .lexicon
                    .dictionaries
                    .iter()
                    .chain(config.lexicon.collections.iter().map(|c| &c.path))
                    .filter(|path| !path.is_file())
                {
                    println!("  Warning: {} does not exist", path.display());
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {e:#}"))
            }
        }
    }
}
