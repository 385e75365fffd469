//! Process command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::OutputFormat;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use kiriwake_api::{DocumentChunker, Output};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Source identifier stamped on chunks (default: file name)
    #[arg(long, value_name = "ID")]
    pub source: Option<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "KIRIWAKE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of worker threads (0 = one per CPU)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Time budget per document in milliseconds
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Scan step budget per document
    #[arg(long, value_name = "N")]
    pub max_steps: Option<u64>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging();

        log::info!("Starting document chunking");
        log::debug!("Arguments: {:?}", self);

        let config = self.effective_config()?;
        let format = self.output_format(&config)?;
        let chunker = DocumentChunker::with_config(config.chunker_config()?)?;

        let files = resolve_patterns(&self.input)?;
        if self.source.is_some() && files.len() > 1 {
            return Err(CliError::ConfigError(
                "--source requires exactly one input file".to_string(),
            )
            .into());
        }
        let total_bytes = files
            .iter()
            .map(|path| FileReader::file_size(path))
            .sum::<Result<u64>>()?;
        log::info!("Chunking {} file(s), {} bytes", files.len(), total_bytes);

        let outputs = self.chunk_files(&chunker, &files, config.worker_threads())?;

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter = format.formatter(writer, config.output.pretty_json);
        for output in &outputs {
            for chunk in &output.chunks {
                formatter.format_chunk(chunk)?;
            }
        }
        formatter.finish()?;

        Ok(())
    }

    /// Chunk every file on a worker pool; results keep input order
    fn chunk_files(
        &self,
        chunker: &DocumentChunker,
        files: &[PathBuf],
        threads: usize,
    ) -> Result<Vec<Output>> {
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to start worker threads")?;

        let outputs = pool.install(|| {
            files
                .par_iter()
                .map(|path| -> Result<Output> {
                    let document = FileReader::read_document(path, self.source.as_deref())?;
                    let output = chunker
                        .process(document)
                        .with_context(|| format!("Failed to chunk {}", path.display()))?;
                    log::debug!(
                        "{}: {} chunks in {} ms",
                        path.display(),
                        output.metadata.chunk_count,
                        output.metadata.processing_time_ms
                    );
                    progress.file_completed(&path.display().to_string());
                    Ok(output)
                })
                .collect::<Result<Vec<_>>>()
        });

        progress.finish();
        outputs
    }

    /// Config file values with command-line overrides applied
    fn effective_config(&self) -> Result<CliConfig> {
        let mut config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        if let Some(threads) = self.threads {
            config.processing.threads = threads;
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.processing.timeout_ms = Some(timeout_ms);
        }
        if let Some(max_steps) = self.max_steps {
            config.processing.max_steps = Some(max_steps);
        }
        Ok(config)
    }

    fn output_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        match self.format {
            Some(format) => Ok(format),
            None => OutputFormat::from_str(&config.output.format, true).map_err(|_| {
                CliError::ConfigError(format!(
                    "unknown output format: {}",
                    config.output.format
                ))
                .into()
            }),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when run in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
