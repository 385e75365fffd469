//! Core error types (deterministic only)

use thiserror::Error;

/// Catalog construction errors (no I/O, no external failures)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A cap would make its category unmatchable or stall the scan
    #[error("invalid limit `{field}`: {reason}")]
    InvalidLimit {
        /// Name of the offending `Limits` field
        field: &'static str,
        /// What is wrong with its value
        reason: String,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
