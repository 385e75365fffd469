//! Public API for kiriwake semantic text chunking
//!
//! This crate provides the document-level boundary: resolve an input, extract
//! its text, segment it under a budget and report the chunks.
//!
//! ```rust
//! use kiriwake_api::{DocumentChunker, Document};
//!
//! let chunker = DocumentChunker::new().unwrap();
//! let output = chunker
//!     .process(Document::from_text("notes.md", "# Title\nBody text."))
//!     .unwrap();
//!
//! assert_eq!(output.chunks[0].content, "# Title\n");
//! assert_eq!(output.metadata.chunk_count, 2);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;
pub mod extract;

use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{Document, Input, Metadata, Output};
pub use error::{ApiError, Result};
pub use extract::{Extraction, PlainTextExtractor, TextExtractor};
pub use kiriwake_engine::{CancelToken, Category, Chunk, ChunkMetadata, Limits, Segmenter};

/// Main entry point for chunking documents
///
/// Holds only immutable state; one chunker can serve many documents
/// concurrently.
#[derive(Clone)]
pub struct DocumentChunker {
    segmenter: Segmenter,
    extractor: Arc<dyn TextExtractor>,
    config: Config,
}

impl std::fmt::Debug for DocumentChunker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentChunker")
            .field("extractor", &self.extractor.name())
            .field("config", &self.config)
            .finish()
    }
}

impl DocumentChunker {
    /// Create a chunker with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a chunker with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let extractor = config.extractor()?;
        Self::with_extractor(config, Arc::new(extractor))
    }

    /// Create a chunker backed by an external text extractor
    pub fn with_extractor(config: Config, extractor: Arc<dyn TextExtractor>) -> Result<Self> {
        let segmenter = Segmenter::new(config.limits().clone())?;
        Ok(Self {
            segmenter,
            extractor,
            config,
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Chunk one document
    pub fn process(&self, document: Document) -> Result<Output> {
        self.run(document, None)
    }

    /// Chunk one document, aborting when `token` is cancelled
    pub fn process_with_token(&self, document: Document, token: CancelToken) -> Result<Output> {
        self.run(document, Some(token))
    }

    /// Process text directly (convenience method)
    pub fn process_text(&self, source: &str, text: &str) -> Result<Output> {
        self.process(Document::from_text(source, text))
    }

    fn run(&self, document: Document, token: Option<CancelToken>) -> Result<Output> {
        let start = Instant::now();
        let Document { source, input } = document;

        // Already-extracted text skips the extractor
        let (text, extraction) = match input {
            Input::Text(text) => {
                if text.is_empty() {
                    return Err(ApiError::InputMissing { document: source });
                }
                (text, Default::default())
            }
            other => {
                let bytes = other.read_bytes()?;
                if bytes.is_empty() {
                    return Err(ApiError::InputMissing { document: source });
                }
                let extraction = self.extractor.extract(&bytes)?;
                if extraction.text.is_empty() {
                    return Err(ApiError::ExtractionEmpty { document: source });
                }
                (extraction.text, extraction.metadata)
            }
        };

        let budget = self.config.scan_budget(token);
        let chunks = self
            .segmenter
            .segment_with_budget(&text, &source, &budget)?;

        let total_chars = text.chars().count();
        let chunked_chars = chunks.iter().map(|c| c.metadata.length).sum();
        let elapsed = start.elapsed();
        debug!(
            source = %source,
            extractor = self.extractor.name(),
            chunks = chunks.len(),
            total_chars,
            elapsed_ms = whole_millis(elapsed),
            "document chunked"
        );

        let metadata = Metadata {
            source,
            total_bytes: text.len(),
            total_chars,
            chunk_count: chunks.len(),
            chunked_chars,
            processing_time_ms: whole_millis(elapsed),
            extraction,
        };
        Ok(Output { chunks, metadata })
    }
}

/// Milliseconds in `d`, saturating at `u64::MAX`
fn whole_millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

// Convenience functions

/// Chunk text with default configuration
pub fn chunk_text(source: &str, text: &str) -> Result<Output> {
    DocumentChunker::new()?.process_text(source, text)
}

/// Chunk a file with default configuration
pub fn chunk_file<P: AsRef<std::path::Path>>(path: P) -> Result<Output> {
    DocumentChunker::new()?.process(Document::from_file(path))
}
