//! Generate config command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = self.generate_template()?;

        let Some(path) = &self.output else {
            print!("{template}");
            return Ok(());
        };
        if path.exists() && !self.force {
            return Err(CliError::ConfigError(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            ))
            .into());
        }

        fs::write(path, template)
            .with_context(|| format!("Failed to write to {}", path.display()))?;

        println!("✓ Configuration written to {}", path.display());
        println!();
        println!("Next steps:");
        println!("1. Edit the caps and budgets to suit your documents");
        println!("2. Validate your configuration:");
        println!("   kiriwake validate -c {}", path.display());
        println!("3. Use it for processing:");
        println!("   kiriwake process -i input.md -c {}", path.display());

        Ok(())
    }

    /// Default configuration as commented TOML
    fn generate_template(&self) -> Result<String> {
        let body = CliConfig::default().to_toml()?;
        Ok(format!(
            "# kiriwake configuration\n\
             #\n\
             # [limits] caps count characters; every chunk stays within them.\n\
             # [processing] timeout_ms and max_steps bound each document's scan;\n\
             # leave them unset for no budget. threads = 0 uses one per CPU.\n\
             \n{body}"
        ))
    }
}
