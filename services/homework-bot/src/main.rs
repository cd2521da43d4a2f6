//! Homework bot CLI
//!
//! Command-line interface for the review status notifier.

use std::path::PathBuf;

use clap::Parser;
use homework_bot::{load_config, logging, Config};
use tracing::Level;

#[derive(Parser)]
#[command(name = "homework-bot")]
#[command(about = "Forwards homework review status changes to Telegram")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log file path (overrides config file)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Seconds between polls (overrides config file)
    #[arg(long)]
    retry_period: Option<u64>,

    /// Log level
    #[arg(short, long, default_value = "debug", value_parser = parse_log_level)]
    log_level: Level,
}

fn parse_log_level(s: &str) -> Result<Level, String> {
    s.parse().map_err(|_| {
        format!(
            "Invalid log level: {}. Use: trace, debug, info, warn, error",
            s
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // A missing .env is fine, the variables may come from the real environment
    let dotenv = dotenvy::dotenv();

    let mut config = if let Some(config_path) = &args.config {
        load_config(config_path)?
    } else {
        Config::default()
    };

    if let Some(log_file) = args.log_file {
        config.log.file = log_file;
    }
    if let Some(retry_period) = args.retry_period {
        config.retry_period_seconds = retry_period;
    }

    logging::init(args.log_level, &config.log)?;

    tracing::debug!(
        "Parsed command line arguments: config={:?}, retry_period={:?}, log_level={:?}",
        args.config,
        args.retry_period,
        args.log_level
    );
    match dotenv {
        Ok(path) => tracing::debug!("Loaded environment from {:?}", path),
        Err(e) => tracing::debug!("No .env file loaded: {}", e),
    }

    config.resolve_secrets();
    tracing::debug!("Credentials: {:?}", config.credentials);

    tracing::info!("Starting homework bot");
    homework_bot::run(config).await?;

    Ok(())
}
