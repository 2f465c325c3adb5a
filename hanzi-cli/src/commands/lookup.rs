//! Lookup command implementation

use super::{init_logging, runtime, LexiconArgs};
use anyhow::Result;
use clap::Args;

/// Arguments for the lookup command
#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Word in simplified or traditional characters
    #[arg(value_name = "WORD")]
    pub word: String,

    #[command(flatten)]
    pub lexicon: LexiconArgs,

    /// Print JSON instead of tab-separated columns
    #[arg(long)]
    pub json: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl LookupArgs {
    /// Execute the lookup command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, false);

        let config = self.lexicon.load_config()?;
        let processor = self.lexicon.processor(&config, config.api_config()?, true)?;
        let lexemes = runtime()?.block_on(processor.lookup(&self.word))?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&lexemes)?);
            return Ok(());
        }
        if lexemes.is_empty() {
            println!("No lexeme found for {}", self.word);
            return Ok(());
        }
        for lexeme in &lexemes {
            println!(
                "{}\t{}\t{}\t{}",
                lexeme.id,
                lexeme.zh_sc.as_deref().unwrap_or("-"),
                lexeme.zh_tc.as_deref().unwrap_or("-"),
                lexeme.pinyin.as_deref().unwrap_or("-"),
            );
        }
        Ok(())
    }
}
