//! Validate command implementation

use crate::config::CliConfig;
use crate::output::OutputFormat;
use anyhow::Result;
use clap::{Args, ValueEnum};
use kiriwake_api::Segmenter;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match Self::check(&self.config) {
            Ok(max_chunk_chars) => {
                println!("✓ Configuration is valid!");
                println!("  Largest possible chunk: {max_chunk_chars} chars");
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }

    fn check(path: &std::path::Path) -> Result<usize> {
        let config = CliConfig::load(path)?;
        let chunker_config = config.chunker_config()?;
        OutputFormat::from_str(&config.output.format, true)
            .map_err(|_| anyhow::anyhow!("unknown output format: {}", config.output.format))?;
        let segmenter = Segmenter::new(chunker_config.limits().clone())?;
        Ok(segmenter.catalog().max_chunk_chars())
    }
}
