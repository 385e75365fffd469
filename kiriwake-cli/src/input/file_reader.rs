//! File reading utilities

use anyhow::{Context, Result};
use kiriwake_api::{Document, Input};
use std::fs;
use std::path::Path;

/// Reads files into documents for the chunker
pub struct FileReader;

impl FileReader {
    /// Read a file's bytes into a document named after the file
    ///
    /// `source` replaces the file name as the chunk source identifier.
    pub fn read_document(path: &Path, source: Option<&str>) -> Result<Document> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
        let mut document = Document::from_file(path);
        document.input = Input::from_bytes(bytes);
        if let Some(source) = source {
            document.source = source.to_string();
        }
        Ok(document)
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }
}
