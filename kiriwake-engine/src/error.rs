//! Engine error types

use kiriwake_core::CoreError;
use std::fmt;
use thiserror::Error;

/// Why a scan stopped before reaching the end of its input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExhaustionReason {
    /// The configured step limit was reached
    StepLimit,
    /// The deadline passed
    Deadline,
    /// The caller cancelled the scan
    Cancelled,
}

impl fmt::Display for ExhaustionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExhaustionReason::StepLimit => write!(f, "step limit reached"),
            ExhaustionReason::Deadline => write!(f, "deadline exceeded"),
            ExhaustionReason::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Engine-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Invalid catalog configuration
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// The scan ran out of budget; no partial result is returned
    #[error("scan exhausted after {steps} steps: {reason}")]
    Exhausted {
        /// Cursor advancements completed before stopping
        steps: u64,
        /// Which budget ran out
        reason: ExhaustionReason,
    },
}

impl EngineError {
    /// Whether retrying the same input with a larger budget may succeed
    pub fn is_exhausted(&self) -> bool {
        matches!(self, EngineError::Exhausted { .. })
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
