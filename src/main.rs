// src/main.rs
mod app;
mod cli;
mod commands;
mod logging;

use artistsort_abbrev::config::Config;
use artistsort_abbrev::error::AppError;
use clap::Parser;
use cli::Args;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    commands::validate_args(&args)?;

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;

    // The guard must be kept alive for the duration of the program
    let (log_file_path, _guard) = logging::setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    app::run(&args, &config).await
}
