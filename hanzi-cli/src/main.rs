//! hanzi command-line entry point

use clap::Parser;
use hanzi_cli::commands::Commands;

/// Segment Chinese text and attach pinyin to the words a learner has not
/// blacklisted
#[derive(Debug, Parser)]
#[command(name = "hanzi", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    Cli::parse().command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_segment() {
        let cli = Cli::try_parse_from([
            "hanzi",
            "segment",
            "你好",
            "-d",
            "cedict.u8",
            "--collection",
            "hsk1=hsk1.txt",
            "--blacklist-collection",
            "hsk1",
        ])
        .unwrap();

        match cli.command {
            Commands::Segment(args) => {
                assert_eq!(args.text.as_deref(), Some("你好"));
                assert_eq!(args.lexicon.collections[0].name, "hsk1");
                assert_eq!(args.blacklist_collection.as_deref(), Some("hsk1"));
            }
            other => panic!("Expected segment, got {other:?}"),
        }
    }

    #[test]
    fn test_text_conflicts_with_input() {
        assert!(Cli::try_parse_from(["hanzi", "segment", "你好", "-i", "a.txt"]).is_err());
    }
}
