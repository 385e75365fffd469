//! The externally visible chunk record

use kiriwake_core::Category;

/// Positional bookkeeping attached to every chunk
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChunkMetadata {
    /// 0-based position in the chunk sequence
    pub index: usize,
    /// Sum of the lengths of all earlier chunks, in characters.
    ///
    /// Skipped gaps are not counted, so this equals the chunk's position in
    /// the source only when the scan skipped nothing before it.
    pub offset: usize,
    /// Characters in `content`
    pub length: usize,
    /// Characters in `content` with surrounding whitespace trimmed
    #[cfg_attr(feature = "serde", serde(rename = "strip"))]
    pub strip_length: usize,
    /// Caller-supplied document identifier
    pub source: String,
}

/// One bounded, recognized unit of text
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chunk {
    /// Matched text, verbatim
    #[cfg_attr(feature = "serde", serde(rename = "page_content"))]
    pub content: String,
    /// Positional metadata
    pub metadata: ChunkMetadata,
    /// Category that produced the chunk; in-process only
    #[cfg_attr(feature = "serde", serde(skip, default = "fallback_category"))]
    pub category: Category,
}

#[cfg(feature = "serde")]
fn fallback_category() -> Category {
    Category::Fallback
}

impl Chunk {
    /// Whether the chunk holds only whitespace
    pub fn is_blank(&self) -> bool {
        self.metadata.strip_length == 0
    }

    /// Offset just past this chunk in the cumulative numbering
    pub fn next_offset(&self) -> usize {
        self.metadata.offset + self.metadata.length
    }
}
