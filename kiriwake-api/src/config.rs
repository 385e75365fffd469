//! High-level configuration API

use crate::error::{ApiError, Result};
use crate::extract::PlainTextExtractor;
use kiriwake_engine::{CancelToken, Limits, ScanBudget};
use std::time::Duration;

/// Default values for configuration
pub mod defaults {
    /// Encoding tried when document bytes are not valid UTF-8
    pub const FALLBACK_ENCODING: &str = "windows-1252";
}

/// High-level configuration for document chunking
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    limits: Limits,
    max_steps: Option<u64>,
    timeout: Option<Duration>,
    fallback_encoding: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            max_steps: None,
            timeout: None,
            fallback_encoding: Some(defaults::FALLBACK_ENCODING.to_string()),
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Length and nesting caps of the pattern catalog
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Maximum cursor advancements per document
    pub fn max_steps(&self) -> Option<u64> {
        self.max_steps
    }

    /// Wall-clock budget per document
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Encoding label used for non-UTF-8 bytes; `None` means strict UTF-8
    pub fn fallback_encoding(&self) -> Option<&str> {
        self.fallback_encoding.as_deref()
    }

    /// Budget for one scan, starting the timeout clock now
    pub fn scan_budget(&self, token: Option<CancelToken>) -> ScanBudget {
        let mut budget = ScanBudget::unlimited();
        if let Some(steps) = self.max_steps {
            budget = budget.with_max_steps(steps);
        }
        if let Some(timeout) = self.timeout {
            budget = budget.with_timeout(timeout);
        }
        if let Some(token) = token {
            budget = budget.with_cancel_token(token);
        }
        budget
    }

    pub(crate) fn extractor(&self) -> Result<PlainTextExtractor> {
        match &self.fallback_encoding {
            Some(label) => PlainTextExtractor::with_fallback(label),
            None => Ok(PlainTextExtractor::strict()),
        }
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Replace the catalog caps
    pub fn limits(mut self, limits: Limits) -> Self {
        self.config.limits = limits;
        self
    }

    /// Cap cursor advancements per document
    pub fn max_steps(mut self, steps: Option<u64>) -> Self {
        self.config.max_steps = steps;
        self
    }

    /// Cap wall-clock time per document
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the fallback encoding label
    pub fn fallback_encoding(mut self, label: impl Into<String>) -> Self {
        self.config.fallback_encoding = Some(label.into());
        self
    }

    /// Reject non-UTF-8 documents instead of falling back
    pub fn strict_utf8(mut self) -> Self {
        self.config.fallback_encoding = None;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let config = self.config;
        config
            .limits
            .validate()
            .map_err(|e| ApiError::Config(e.to_string()))?;
        if config.max_steps == Some(0) {
            return Err(ApiError::Config("max_steps must be at least 1".to_string()));
        }
        if config.timeout == Some(Duration::ZERO) {
            return Err(ApiError::Config("timeout must be non-zero".to_string()));
        }
        config.extractor()?;
        Ok(config)
    }
}
