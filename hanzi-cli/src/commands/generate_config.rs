//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists; pass --force to overwrite it",
                self.output.display()
            );
        }

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Point [lexicon].dictionaries at a CC-CEDICT file");
        println!("2. Validate your configuration:");
        println!("   hanzi validate -c {}", self.output.display());
        println!("3. Use it for segmentation:");
        println!("   hanzi segment -c {} 你好世界", self.output.display());

        Ok(())
    }
}

/// Commented configuration with every default spelled out
pub const TEMPLATE: &str = r#"# hanzi configuration
#
# Relative paths are resolved against the directory of this file.

[segmentation]
# "graceful" keeps going when the repair cutter loses characters,
# "strict" fails the request instead
alignment_mode = "graceful"

# Maximum characters per input line
char_limit = 1000

# Let the general cutter guess words missing from its dictionary
hmm = true

[lexicon]
# CC-CEDICT formatted files; each also becomes a collection named after
# the file stem
dictionaries = [
    # "cedict_ts.u8",
]

# Word lists with one SC#TC entry per line
# [[lexicon.collections]]
# name = "hsk1"
# path = "lists/hsk1.txt"

[output]
# text, json or markdown
default_format = "text"

# Pretty print JSON output
pretty_json = true

# Hide segments whose characters are all blacklisted one by one
strict_visibility = false
"#;
