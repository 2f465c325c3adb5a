//! hanzi CLI library
//!
//! This library provides the command-line interface for the hanzi-memo
//! segmentation pipeline: lexicon loading from CC-CEDICT and collection
//! files, input resolution, and text/JSON/Markdown output.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod loader;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
