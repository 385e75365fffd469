//! Recognized spans

use crate::category::Category;

/// A span committed by the scanner: `start..end` in bytes, owned by one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Match {
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset just past the last character
    pub end: usize,
    /// Category whose rule produced the span
    pub category: Category,
}

impl Match {
    pub fn new(start: usize, end: usize, category: Category) -> Self {
        debug_assert!(start <= end, "match start {start} is past its end {end}");
        Self {
            start,
            end,
            category,
        }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The matched text, verbatim
    pub fn as_str<'a>(&self, text: &'a str) -> &'a str {
        text.get(self.start..self.end).unwrap_or("")
    }
}
