//! Strictly Sketch - terminal front end.

use anyhow::{Context, Result};
use clap::Parser;
use strictly_sketch::{AppConfig, Cli, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    // Log to a file; the terminal belongs to the UI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("creating log file {}", config.log_file().display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(frame_rate = config.frame_rate(), "Starting Strictly Sketch");
    tui::run_tui(&config).await
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::load_or_default(&cli.config)?;
    if let Some(frame_rate) = cli.frame_rate {
        config = config.with_frame_rate(frame_rate)?;
    }
    if let Some(log_file) = &cli.log_file {
        config = config.with_log_file(log_file.clone());
    }
    Ok(config)
}
