//! Command-line definition.

use crate::MuybridgeConfig;
use clap::Parser;
use muybridge_core::{MAX_CHAPTERS, RunConfig};
use muybridge_error::MuybridgeResult;
use std::path::PathBuf;
use std::time::Duration;

/// Muybridge - turn a concept into a short animated explainer video
#[derive(Parser, Debug)]
#[command(name = "muybridge")]
#[command(about = "Turn a concept into a short animated explainer video", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Concept to explain
    #[arg(short, long)]
    pub concept: String,

    /// Output file name; relative names land in the configured output directory
    #[arg(short, long, default_value = "output.mp4")]
    pub output: PathBuf,

    /// Number of chapters to render
    #[arg(
        short = 'n',
        long,
        default_value_t = MAX_CHAPTERS as u8,
        value_parser = clap::value_parser!(u8).range(1..=MAX_CHAPTERS as i64)
    )]
    pub chapters: u8,

    /// Repair attempts per chapter (defaults to the configured value)
    #[arg(short, long)]
    pub retries: Option<u32>,

    /// Render timeout in seconds (defaults to the configured value)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Assemble the run, letting flags override `settings`.
    ///
    /// # Errors
    ///
    /// Returns a [`muybridge_error::BuilderError`] when the concept is blank
    /// or the output name is empty.
    pub fn run_config(&self, settings: &MuybridgeConfig) -> MuybridgeResult<RunConfig> {
        let timeout = self
            .timeout
            .map(Duration::from_secs)
            .unwrap_or_else(|| settings.render_timeout());

        RunConfig::builder()
            .concept(self.concept.clone())
            .output(self.output.clone())
            .output_dir(settings.output.dir.clone())
            .chapter_count(usize::from(self.chapters))
            .max_retries(self.retries.unwrap_or(settings.output.max_retries))
            .render_timeout(timeout)
            .build()
    }
}
