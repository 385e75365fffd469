//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use kiriwake_api::Chunk;
use std::io::Write;

/// Plain text formatter - outputs trimmed chunk contents separated by a blank line
pub struct TextFormatter<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_chunk(&mut self, chunk: &Chunk) -> Result<()> {
        // Whitespace-only chunks carry no readable text
        if chunk.is_blank() {
            return Ok(());
        }
        if self.written > 0 {
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "{}", chunk.content.trim())?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
