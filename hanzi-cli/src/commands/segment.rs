//! Segment command implementation

use super::{init_logging, runtime, LexiconArgs};
use crate::input::read_documents;
use crate::output::{create_formatter, OutputFormat, VisibilityPolicy};
use anyhow::{Context, Result};
use clap::Args;
use hanzi_api::AlignmentMode;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Text to segment (default: --input files, then stdin)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", conflicts_with = "text")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Comma-separated collection ids whose lexemes are hidden
    #[arg(long, value_name = "IDS")]
    pub blacklist_collection: Option<String>,

    /// Comma-separated lexeme ids to hide
    #[arg(long, value_name = "IDS")]
    pub blacklist_lexeme: Option<String>,

    /// Fail instead of recovering when the repair cutter loses characters
    #[arg(long)]
    pub strict: bool,

    /// Also hide segments whose characters are all blacklisted
    #[arg(long)]
    pub strict_visibility: bool,

    #[command(flatten)]
    pub lexicon: LexiconArgs,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting segmentation");
        log::debug!("Arguments: {self:?}");

        let mut config = self.lexicon.load_config()?;
        if self.strict {
            config.segmentation.alignment_mode = AlignmentMode::Strict;
        }
        let format = match self.format {
            Some(format) => format,
            None => config.default_format()?,
        };
        let policy = if self.strict_visibility || config.output.strict_visibility {
            VisibilityPolicy::Strict
        } else {
            VisibilityPolicy::Lenient
        };

        let documents = read_documents(self.text.as_deref(), &self.input)?;
        let processor = self
            .lexicon
            .processor(&config, config.api_config()?, self.quiet)?;

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter = create_formatter(format, writer, policy, config.output.pretty_json);

        let mut lines = 0;
        runtime()?.block_on(async {
            for document in &documents {
                for (number, line) in document.lines() {
                    let segments = processor
                        .get_segments(
                            line,
                            self.blacklist_collection.as_deref(),
                            self.blacklist_lexeme.as_deref(),
                        )
                        .await
                        .with_context(|| format!("Failed to segment {}:{number}", document.source))?;
                    formatter.format_line(&document.source, number, &segments)?;
                    lines += 1;
                }
            }
            formatter.finish()
        })?;

        log::info!("Segmented {lines} lines from {} sources", documents.len());
        Ok(())
    }
}
