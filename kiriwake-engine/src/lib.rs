//! Scanning engine and chunk assembly for semantic text chunking
//!
//! The engine drives the `kiriwake-core` catalog over a text with a single
//! forward cursor, commits the first category that matches at each position,
//! and numbers the resulting spans into [`Chunk`]s.
//!
//! ```rust
//! use kiriwake_engine::Segmenter;
//!
//! let segmenter = Segmenter::default();
//! let chunks = segmenter.segment("# Title\n- item one\n- item two\n", "notes.md");
//!
//! assert_eq!(chunks.len(), 3);
//! assert_eq!(chunks[0].content, "# Title\n");
//! assert_eq!(chunks[1].metadata.offset, 8);
//! ```
//!
//! Scans can be bounded with a [`ScanBudget`]; running out of budget is an
//! error, never a truncated chunk list.

#![warn(missing_docs)]

pub mod assembler;
pub mod budget;
pub mod chunk;
pub mod error;
pub mod scanner;
pub mod segmenter;

pub use assembler::ChunkAssembler;
pub use budget::{CancelToken, ScanBudget};
pub use chunk::{Chunk, ChunkMetadata};
pub use error::{EngineError, ExhaustionReason, Result};
pub use scanner::{Matches, Step};
pub use segmenter::Segmenter;

// Re-export from core for convenience
pub use kiriwake_core::{Catalog, Category, Limits, Match};
