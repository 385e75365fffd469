//! Pattern catalog for semantic text chunking
//!
//! This crate defines the fourteen structural categories a document is cut
//! into (headings, list items, code blocks, tables, sentences and so on),
//! the caps that bound each of them, and one recognition rule per category.
//! Rules are explicit bounded scanners instead of a backtracking pattern, so
//! the work of any single attempt is capped by the [`Limits`] in force.
//!
//! The crate is pure: no I/O, no allocation on the recognition path, no
//! shared state. The scanning loop that drives the catalog lives in
//! `kiriwake-engine`.
//!
//! # Example
//!
//! ```rust
//! use kiriwake_core::{Category, Limits, Text};
//!
//! let limits = Limits::default();
//! let end = Category::Heading.recognize(Text::new("# Title\n"), 0, &limits);
//! assert_eq!(end, Some(8));
//! ```

pub mod catalog;
pub mod category;
pub mod error;
pub mod limits;
mod rules;
pub mod span;
pub mod terminator;
pub mod text;

pub use catalog::Catalog;
pub use category::Category;
pub use error::{CoreError, Result};
pub use limits::Limits;
pub use span::Match;
pub use text::Text;
