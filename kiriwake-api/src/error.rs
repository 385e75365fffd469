//! API error types

use kiriwake_engine::{EngineError, ExhaustionReason};
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// No document bytes or text were supplied
    #[error("no input supplied for document '{document}'")]
    InputMissing {
        /// Source identifier of the document
        document: String,
    },

    /// Extraction produced no usable text
    #[error("text extraction produced no content for document '{document}'")]
    ExtractionEmpty {
        /// Source identifier of the document
        document: String,
    },

    /// The scan ran past its step or time budget
    #[error("resource exhausted after {steps} steps: {reason}")]
    ResourceExhausted {
        /// Cursor advancements completed before stopping
        steps: u64,
        /// Which budget ran out
        reason: ExhaustionReason,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Bytes could not be decoded as text
    #[error("invalid UTF-8 at byte {position}")]
    Decode {
        /// Offset of the first invalid byte
        position: usize,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl ApiError {
    /// Whether the caller may retry, possibly with a larger budget
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::ResourceExhausted { .. })
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Exhausted { steps, reason } => ApiError::ResourceExhausted { steps, reason },
            EngineError::Core(core) => ApiError::Config(core.to_string()),
        }
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
