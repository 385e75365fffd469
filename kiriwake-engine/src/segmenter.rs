//! Segmenter facade: scanning plus assembly

use crate::assembler::ChunkAssembler;
use crate::budget::ScanBudget;
use crate::chunk::Chunk;
use crate::error::{EngineError, Result};
use crate::scanner::{Matches, Step};
use kiriwake_core::{Catalog, Limits, Match};
use tracing::{debug, trace, warn};

/// Stateless segmenter; holds only its immutable catalog and is safe to share
/// across threads
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    catalog: Catalog,
}

impl Segmenter {
    /// Create a segmenter with validated caps
    pub fn new(limits: Limits) -> Result<Self> {
        Ok(Self {
            catalog: Catalog::new(limits)?,
        })
    }

    /// Create a segmenter over an existing catalog
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// The catalog in use
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Lazy match stream over `text`
    pub fn matches<'a>(&'a self, text: &'a str) -> Matches<'a> {
        Matches::new(&self.catalog, text)
    }

    /// Collect every match of `text`, checking `budget` before each cursor
    /// advancement. Exhaustion discards the partial result.
    pub fn scan(&self, text: &str, budget: &ScanBudget) -> Result<Vec<Match>> {
        let mut matches = self.matches(text);
        let mut found = Vec::new();
        let mut gap: Option<(usize, usize)> = None;

        loop {
            let at = matches.position();
            if at < text.len() {
                if let Err(err) = budget.check(matches.steps()) {
                    if let EngineError::Exhausted { steps, reason } = &err {
                        warn!(
                            steps,
                            %reason,
                            position = at,
                            bytes = text.len(),
                            "scan budget exhausted"
                        );
                    }
                    return Err(err);
                }
            }

            match matches.step() {
                Step::Matched(m) => {
                    if let Some((start, chars)) = gap.take() {
                        trace!(start, chars, "skipped gap");
                    }
                    found.push(m);
                }
                Step::Skipped(_) => {
                    let run = gap.get_or_insert((at, 0));
                    run.1 += 1;
                }
                Step::Done => break,
            }
        }
        if let Some((start, chars)) = gap {
            trace!(start, chars, "skipped gap");
        }

        debug!(
            matches = found.len(),
            skipped_chars = matches.skipped_chars(),
            steps = matches.steps(),
            bytes = text.len(),
            "scan complete"
        );
        Ok(found)
    }

    /// Segment `text` into chunks tagged with `source`, without limits
    pub fn segment(&self, text: &str, source: &str) -> Vec<Chunk> {
        ChunkAssembler::new(source).assemble(text, self.matches(text))
    }

    /// Segment `text` under `budget`
    pub fn segment_with_budget(
        &self,
        text: &str,
        source: &str,
        budget: &ScanBudget,
    ) -> Result<Vec<Chunk>> {
        let matches = self.scan(text, budget)?;
        Ok(ChunkAssembler::new(source).assemble(text, matches))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExhaustionReason;

    #[test]
    fn test_segment_matches_scan() {
        let segmenter = Segmenter::default();
        let text = "# Title\n\nFirst sentence. Second one!\n";
        let lazy = segmenter.segment(text, "a");
        let budgeted = segmenter
            .segment_with_budget(text, "a", &ScanBudget::unlimited())
            .unwrap();
        assert_eq!(lazy, budgeted);
    }

    #[test]
    fn test_step_limit_fails_without_partial_result() {
        let segmenter = Segmenter::default();
        let text = "One. Two. Three. Four.";
        let budget = ScanBudget::unlimited().with_max_steps(2);
        let err = segmenter.scan(text, &budget).unwrap_err();
        assert_eq!(
            err,
            EngineError::Exhausted {
                steps: 2,
                reason: ExhaustionReason::StepLimit
            }
        );
    }

    #[test]
    fn test_invalid_limits() {
        let limits = Limits {
            paragraph: 0,
            ..Limits::default()
        };
        assert!(matches!(Segmenter::new(limits), Err(EngineError::Core(_))));
    }

    #[test]
    fn test_segmenter_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Segmenter>();
    }
}
