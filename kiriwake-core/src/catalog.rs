//! The pattern catalog: categories in priority order plus their caps

use crate::category::Category;
use crate::error::Result;
use crate::limits::Limits;
use crate::span::Match;
use crate::text::Text;

/// Immutable catalog shared by every scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    limits: Limits,
}

impl Catalog {
    /// Build a catalog after validating its caps
    pub fn new(limits: Limits) -> Result<Self> {
        limits.validate()?;
        Ok(Self { limits })
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Categories in the order they are tried
    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    /// Largest chunk any category can produce, in characters
    pub fn max_chunk_chars(&self) -> usize {
        Category::ALL
            .iter()
            .map(|category| category.max_chars(&self.limits))
            .max()
            .unwrap_or(0)
    }

    /// First category, in priority order, whose rule matches at `pos`
    pub fn match_at(&self, text: Text<'_>, pos: usize) -> Option<Match> {
        self.categories().iter().find_map(|&category| {
            category
                .recognize(text, pos, &self.limits)
                .map(|end| Match::new(pos, end, category))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_invalid_limits_rejected() {
        let limits = Limits {
            sentence: 0,
            ..Limits::default()
        };
        assert!(matches!(
            Catalog::new(limits),
            Err(CoreError::InvalidLimit { field: "sentence", .. })
        ));
    }

    #[test]
    fn test_priority_first_match_wins() {
        let catalog = Catalog::default();
        // Both a heading and a sentence; the heading is tried first
        let m = catalog.match_at(Text::new("# Hello.\n"), 0).unwrap();
        assert_eq!(m.category, Category::Heading);

        // A list bullet beats the sentence rule
        let m = catalog.match_at(Text::new("- item.\n"), 0).unwrap();
        assert_eq!(m.category, Category::ListItem);
    }

    #[test]
    fn test_line_break_matches_nothing() {
        let catalog = Catalog::default();
        assert!(catalog.match_at(Text::new("a\n\n"), 2).is_none());
    }

    #[test]
    fn test_max_chunk_chars_is_pipe_table() {
        let catalog = Catalog::default();
        assert_eq!(
            catalog.max_chunk_chars(),
            Category::Table.max_chars(catalog.limits())
        );
    }
}
