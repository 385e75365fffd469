//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use kiriwake_engine::Chunk;
use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Input source for processing
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Already-extracted text
    Text(String),
    /// File path; read as bytes and run through the extractor
    File(PathBuf),
    /// Raw document bytes
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(&text.len()).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
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

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the raw bytes of a non-text input
    pub fn read_bytes(self) -> Result<Vec<u8>> {
        match self {
            Input::Text(text) => Ok(text.into_bytes()),
            Input::File(path) => fs::read(&path).map_err(ApiError::Io),
            Input::Bytes(bytes) => Ok(bytes),
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer).map_err(ApiError::Io)?;
                Ok(buffer)
            }
        }
    }
}

/// A document to chunk: its input plus the identifier stamped on every chunk
#[derive(Debug)]
pub struct Document {
    /// Opaque identifier, e.g. the originating file name
    pub source: String,
    /// Where the content comes from
    pub input: Input,
}

impl Document {
    /// Create a document with an explicit source identifier
    pub fn new(source: impl Into<String>, input: Input) -> Self {
        Self {
            source: source.into(),
            input,
        }
    }

    /// Create a document from text
    pub fn from_text(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(source, Input::from_text(text))
    }

    /// Create a document from a file; the source is the file name
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let source = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::new(source, Input::from_file(path))
    }
}

/// Processing metadata
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Source identifier of the document
    pub source: String,
    /// Bytes of extracted text
    pub total_bytes: usize,
    /// Characters of extracted text
    pub total_chars: usize,
    /// Number of chunks emitted
    pub chunk_count: usize,
    /// Characters covered by chunks; the rest were skipped gaps
    pub chunked_chars: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// What the extractor reported (encoding, byte count, ...)
    pub extraction: BTreeMap<String, String>,
}

/// Complete output with chunks and metadata
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Chunks in scan order
    pub chunks: Vec<Chunk>,
    /// Processing metadata
    pub metadata: Metadata,
}

#[cfg(feature = "serde")]
impl Output {
    /// The chunk array as compact JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.chunks)?)
    }

    /// The chunk array as indented JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.chunks)?)
    }
}
