//! Chunk assembly
//!
//! Wraps each committed match into a [`Chunk`] with its sequence index and
//! cumulative offset. Chunks are never reordered, merged or dropped.

use crate::chunk::{Chunk, ChunkMetadata};
use kiriwake_core::Match;

/// Numbers the match stream of one document
#[derive(Debug, Clone)]
pub struct ChunkAssembler {
    source: String,
    next_index: usize,
    next_offset: usize,
}

impl ChunkAssembler {
    /// Create an assembler that tags every chunk with `source`
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            next_index: 0,
            next_offset: 0,
        }
    }

    /// Number of chunks emitted so far
    pub fn emitted(&self) -> usize {
        self.next_index
    }

    /// Wrap the next match of `text`
    pub fn push(&mut self, text: &str, m: Match) -> Chunk {
        let content = m.as_str(text);
        let length = content.chars().count();
        let chunk = Chunk {
            content: content.to_owned(),
            metadata: ChunkMetadata {
                index: self.next_index,
                offset: self.next_offset,
                length,
                strip_length: content.trim().chars().count(),
                source: self.source.clone(),
            },
            category: m.category,
        };
        self.next_index += 1;
        self.next_offset += length;
        chunk
    }

    /// Wrap a whole match stream
    pub fn assemble(mut self, text: &str, matches: impl IntoIterator<Item = Match>) -> Vec<Chunk> {
        matches.into_iter().map(|m| self.push(text, m)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiriwake_core::Category;

    #[test]
    fn test_index_and_offset_accumulate() {
        let text = "# Title\n\nBody text.";
        let matches = [
            Match::new(0, 8, Category::Heading),
            // Byte 8 is a skipped gap
            Match::new(9, 19, Category::Sentence),
        ];
        let chunks = ChunkAssembler::new("doc.md").assemble(text, matches);

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].metadata.index, 0);
        assert_eq!(chunks[0].metadata.offset, 0);
        assert_eq!(chunks[0].metadata.length, 8);
        assert_eq!(chunks[0].metadata.strip_length, 7);
        assert_eq!(chunks[1].metadata.index, 1);
        // Cumulative, so the skipped newline is not counted
        assert_eq!(chunks[1].metadata.offset, 8);
        assert_eq!(chunks[1].metadata.source, "doc.md");
    }

    #[test]
    fn test_lengths_count_chars() {
        let text = "日本語の文です。";
        let mut assembler = ChunkAssembler::new("ja");
        let chunk = assembler.push(text, Match::new(0, text.len(), Category::Sentence));
        assert_eq!(chunk.metadata.length, 8);
        assert_eq!(chunk.next_offset(), 8);
        assert_eq!(assembler.emitted(), 1);
    }

    #[test]
    fn test_whitespace_only_chunk_has_zero_strip() {
        let text = "   \n";
        let chunk = ChunkAssembler::new("s").push(text, Match::new(0, 3, Category::Fallback));
        assert!(chunk.is_blank());
        assert_eq!(chunk.metadata.length, 3);
    }
}
