//! Muybridge CLI binary.
//!
//! Generates one video for one concept and exits 0 on success, 1 otherwise.

use clap::Parser;
use muybridge::{Cli, MuybridgeConfig, MuybridgeResult, VideoGenerationResult};
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    muybridge::init_tracing(cli.verbose);

    match run(&cli).await {
        Ok(result) => {
            if let Err(e) = print_result(&cli, &result) {
                error!(error = %e, "Failed to print result");
                return ExitCode::FAILURE;
            }
            if *result.success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            error!(error = %e, "Run aborted before starting");
            eprintln!("Error: {}", e.diagnostic());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> MuybridgeResult<VideoGenerationResult> {
    let settings = MuybridgeConfig::load()?;
    let run_config = cli.run_config(&settings)?;
    let pipeline = settings.pipeline()?;

    info!(
        concept = %run_config.concept(),
        output = %run_config.output_path().display(),
        chapters = *run_config.chapter_count(),
        max_retries = *run_config.max_retries(),
        "Starting video generation"
    );

    Ok(pipeline.run(&run_config).await)
}

fn print_result(cli: &Cli, result: &VideoGenerationResult) -> MuybridgeResult<()> {
    if cli.json {
        println!("{}", muybridge::to_json(result)?);
    } else {
        print!("{}", muybridge::summary(result));
    }
    Ok(())
}
