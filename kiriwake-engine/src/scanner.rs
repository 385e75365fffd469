//! The scanning loop
//!
//! A single forward cursor. At each position the catalog's categories are
//! tried in priority order and the first match is committed; the cursor then
//! jumps to its end. When nothing matches, the cursor moves one character and
//! that character becomes part of a gap.

use kiriwake_core::{Catalog, Match, Text};

/// Outcome of one cursor advancement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A category matched at the cursor
    Matched(Match),
    /// No category matched; this character was skipped
    Skipped(char),
    /// The cursor reached the end of the input
    Done,
}

/// Lazy stream of committed matches over one text
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    catalog: &'a Catalog,
    text: Text<'a>,
    pos: usize,
    steps: u64,
    skipped: usize,
}

impl<'a> Matches<'a> {
    pub(crate) fn new(catalog: &'a Catalog, text: &'a str) -> Self {
        Self {
            catalog,
            text: Text::new(text),
            pos: 0,
            steps: 0,
            skipped: 0,
        }
    }

    /// Advance the cursor once
    pub fn step(&mut self) -> Step {
        let Some(ch) = self.text.char_at(self.pos) else {
            return Step::Done;
        };
        self.steps += 1;

        match self.catalog.match_at(self.text, self.pos) {
            Some(m) => {
                debug_assert!(
                    self.text.char_count(m.start, m.end) <= m.category.max_chars(self.catalog.limits()),
                    "{} match exceeds its cap",
                    m.category
                );
                self.pos = m.end;
                Step::Matched(m)
            }
            None => {
                self.pos += ch.len_utf8();
                self.skipped += 1;
                Step::Skipped(ch)
            }
        }
    }

    /// Current cursor position in bytes
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Cursor advancements taken so far
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Characters skipped as gaps so far
    pub fn skipped_chars(&self) -> usize {
        self.skipped
    }
}

impl Iterator for Matches<'_> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        loop {
            match self.step() {
                Step::Matched(m) => return Some(m),
                Step::Skipped(_) => continue,
                Step::Done => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiriwake_core::Category;

    #[test]
    fn test_steps_report_gaps() {
        let catalog = Catalog::default();
        let mut matches = Matches::new(&catalog, "# A\n\n");

        match matches.step() {
            Step::Matched(m) => assert_eq!(m.category, Category::Heading),
            other => panic!("expected a heading, got {other:?}"),
        }
        assert_eq!(matches.step(), Step::Skipped('\n'));
        assert_eq!(matches.step(), Step::Done);
        assert_eq!(matches.steps(), 2);
        assert_eq!(matches.skipped_chars(), 1);
    }

    #[test]
    fn test_iterator_skips_gaps() {
        let catalog = Catalog::default();
        let found: Vec<_> = Matches::new(&catalog, "\n\n\nHello.").collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].start, 1);
    }

    #[test]
    fn test_empty_input() {
        let catalog = Catalog::default();
        assert_eq!(Matches::new(&catalog, "").next(), None);
    }
}
