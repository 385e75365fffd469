//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use kiriwake_api::Chunk;
use std::io::Write;

/// Markdown formatter - a numbered list of chunks under one heading per source
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    chunk_count: usize,
    current_source: Option<String>,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            chunk_count: 0,
            current_source: None,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_chunk(&mut self, chunk: &Chunk) -> Result<()> {
        if self.current_source.as_deref() != Some(chunk.metadata.source.as_str()) {
            if self.current_source.is_some() {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "## {}", chunk.metadata.source)?;
            writeln!(self.writer)?;
            self.current_source = Some(chunk.metadata.source.clone());
        }

        self.chunk_count += 1;
        let flattened: Vec<&str> = chunk.content.split_whitespace().collect();
        writeln!(
            self.writer,
            "{}. `{}` {}",
            chunk.metadata.index + 1,
            chunk.category,
            flattened.join(" ")
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total chunks: {}*", self.chunk_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
