//! kiriwake command-line entry point

use anyhow::Result;
use clap::Parser;
use kiriwake_cli::commands::Commands;

/// Split documents into bounded, semantically coherent chunks
#[derive(Debug, Parser)]
#[command(name = "kiriwake", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    Cli::parse().command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
