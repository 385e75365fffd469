//! List command implementation

use crate::config::CliConfig;
use crate::output::OutputFormat;
use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use kiriwake_api::{Category, Limits};
use std::io::{self, Write};
use std::path::PathBuf;

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List chunk categories in priority order with their size caps
    Categories {
        /// Read caps from this configuration file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Write the listing to `out`
    pub fn write_to(&self, out: &mut impl Write) -> Result<()> {
        match self {
            ListCommands::Categories { config } => {
                let limits = match config {
                    Some(path) => CliConfig::load(path)?.limits,
                    None => Limits::default(),
                };
                writeln!(out, "Categories (tried in order, first match wins):")?;
                for category in Category::ALL {
                    writeln!(
                        out,
                        "  {:>2}  {:<20} {:>5} chars  {}",
                        category.rank(),
                        category.name(),
                        category.max_chars(&limits),
                        category.description()
                    )?;
                }
            }
            ListCommands::Formats => {
                writeln!(out, "Output formats:")?;
                for format in OutputFormat::value_variants() {
                    if let Some(value) = format.to_possible_value() {
                        writeln!(
                            out,
                            "  {:<10} {}",
                            value.get_name(),
                            value.get_help().map(ToString::to_string).unwrap_or_default()
                        )?;
                    }
                }
            }
        }
        Ok(())
    }
}
