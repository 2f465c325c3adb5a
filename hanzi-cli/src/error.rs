//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Dictionary line that is not `TRAD SIMP [pinyin] /definitions/`
    InvalidDictionaryLine {
        /// 1-based line number
        line: usize,
        /// Offending line
        content: String,
    },
    /// Collection line with neither a simplified nor a traditional form
    InvalidCollectionLine {
        /// 1-based line number
        line: usize,
        /// Offending line
        content: String,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::InvalidDictionaryLine { line, content } => {
                write!(f, "Invalid dictionary entry on line {line}: {content}")
            }
            CliError::InvalidCollectionLine { line, content } => {
                write!(f, "Invalid collection entry on line {line}: {content:?}")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
