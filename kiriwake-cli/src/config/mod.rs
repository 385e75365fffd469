//! Configuration module

use anyhow::{Context, Result};
use kiriwake_api::{config::defaults, Config, Limits};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Catalog caps
    #[serde(default)]
    pub limits: Limits,

    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Wall-clock budget per document in milliseconds
    pub timeout_ms: Option<u64>,

    /// Cursor advancements allowed per document
    pub max_steps: Option<u64>,

    /// Encoding tried when a file is not valid UTF-8
    pub fallback_encoding: String,

    /// Reject files that are not valid UTF-8
    pub strict_utf8: bool,

    /// Number of worker threads (0 = auto)
    pub threads: usize,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            timeout_ms: None,
            max_steps: None,
            fallback_encoding: defaults::FALLBACK_ENCODING.to_string(),
            strict_utf8: false,
            threads: 0,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse TOML configuration text
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Build the validated chunker configuration
    pub fn chunker_config(&self) -> Result<Config> {
        let mut builder = Config::builder()
            .limits(self.limits.clone())
            .max_steps(self.processing.max_steps)
            .timeout(self.processing.timeout_ms.map(Duration::from_millis));
        builder = if self.processing.strict_utf8 {
            builder.strict_utf8()
        } else {
            builder.fallback_encoding(self.processing.fallback_encoding.as_str())
        };
        Ok(builder.build()?)
    }

    /// Worker threads to use, resolving 0 to the CPU count
    pub fn worker_threads(&self) -> usize {
        match self.processing.threads {
            0 => num_cpus::get(),
            n => n,
        }
    }
}
