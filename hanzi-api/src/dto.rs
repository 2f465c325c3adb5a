//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use hanzi_core::{LexemeProjection, Segment};
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Input source for segmentation
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Reader (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(Box<dyn Read + Send>),
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the text content from the input
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path).map_err(ApiError::Io),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer).map_err(ApiError::Io)?;
                Ok(buffer)
            }
        }
    }
}

/// One segmentation request, shaped like the HTTP query it serves
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentRequest {
    /// Text to segment
    pub zh: String,
    /// Comma-separated collection ids to hide
    #[cfg_attr(feature = "serde", serde(default))]
    pub blacklist_collection: Option<String>,
    /// Comma-separated lexeme ids to hide
    #[cfg_attr(feature = "serde", serde(default))]
    pub blacklist_lexeme: Option<String>,
}

impl SegmentRequest {
    /// Request for `zh` with no blacklist
    pub fn new(zh: impl Into<String>) -> Self {
        Self {
            zh: zh.into(),
            ..Self::default()
        }
    }

    /// Hide the lexemes of these collections
    pub fn blacklist_collection(mut self, selector: impl Into<String>) -> Self {
        self.blacklist_collection = Some(selector.into());
        self
    }

    /// Hide these lexemes
    pub fn blacklist_lexeme(mut self, selector: impl Into<String>) -> Self {
        self.blacklist_lexeme = Some(selector.into());
        self
    }
}

/// Lexeme attached to a segment
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LexemeDto {
    /// Lexeme id
    pub id: String,
    /// Simplified form
    pub zh_sc: Option<String>,
    /// Traditional form
    pub zh_tc: Option<String>,
    /// Romanization
    pub pinyin: Option<String>,
}

impl From<LexemeProjection> for LexemeDto {
    fn from(projection: LexemeProjection) -> Self {
        Self {
            id: projection.id.to_string(),
            zh_sc: projection.simplified,
            zh_tc: projection.traditional,
            pinyin: projection.romanization,
        }
    }
}

/// Segment as returned to callers
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentDto {
    /// Segment text
    pub segment: String,
    /// Matched lexemes, empty when unmatched
    pub pinyin: Vec<LexemeDto>,
    /// Shown unless every matching lexeme is blacklisted
    pub is_visible: bool,
    /// Also hidden when every character is individually blacklisted
    pub strict_visible: bool,
}

impl From<Segment> for SegmentDto {
    fn from(segment: Segment) -> Self {
        Self {
            segment: segment.text,
            pinyin: segment.lexemes.into_iter().map(LexemeDto::from).collect(),
            is_visible: segment.is_visible,
            strict_visible: segment.strict_visible,
        }
    }
}

impl SegmentDto {
    /// Distinct romanizations of the matched lexemes joined by `/`
    pub fn romanization(&self) -> Option<String> {
        let mut readings: Vec<&str> = self
            .pinyin
            .iter()
            .filter_map(|lexeme| lexeme.pinyin.as_deref())
            .collect();
        readings.dedup();
        (!readings.is_empty()).then(|| readings.join("/"))
    }
}

/// Client-facing rejection of a request
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationError {
    /// Offending field
    pub field: String,
    /// What is wrong with it
    pub reason: String,
    /// Limit that was exceeded, if any
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub limit: Option<usize>,
}

impl ValidationError {
    /// `zh` is longer than `limit` characters
    pub fn character_limit(limit: usize) -> Self {
        Self {
            field: "zh".to_string(),
            reason: "character limit exceeded".to_string(),
            limit: Some(limit),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)?;
        if let Some(limit) = self.limit {
            write!(f, " (limit: {limit})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
