//! Homework bot - review status notifier
//!
//! Polls the homework status API, detects review status changes of the latest
//! submission, and forwards them to a Telegram chat.

pub mod config;
pub mod engine;
pub mod error;
pub mod io;
pub mod logging;
pub mod notifier;
pub mod practicum;
pub mod response;
pub mod status;
pub mod telegram;

pub use config::{check_tokens, load_config, Config};
pub use error::{BotError, Result};

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::config::missing_tokens;
use crate::engine::{current_epoch_secs, Engine};
use crate::io::ReqwestHttpClient;
use crate::notifier::Notifier;
use crate::practicum::PracticumClient;
use crate::telegram::TelegramNotifier;

/// Run the bot with the given configuration.
///
/// Fails before polling starts when any credential is missing; otherwise runs
/// until Ctrl-C.
pub async fn run(config: Config) -> Result<()> {
    if !check_tokens(&config.credentials) {
        let missing = missing_tokens(&config.credentials).join(", ");
        tracing::error!("CRITICAL: missing required environment variables: {}", missing);
        return Err(BotError::Config(format!(
            "Missing required environment variables: {}",
            missing
        )));
    }

    let http: Arc<dyn io::HttpClient> = Arc::new(ReqwestHttpClient::with_timeout(
        Duration::from_secs(config.request_timeout_seconds),
    )?);
    let cancel = CancellationToken::new();

    let client = PracticumClient::new(
        &config.endpoint,
        &config.credentials.practicum_token,
        Arc::clone(&http),
    );
    tracing::debug!(
        "Polling {} every {}s",
        client.endpoint(),
        config.retry_period_seconds
    );

    let notifier: Arc<dyn Notifier> = Arc::new(TelegramNotifier::new(
        &config.telegram_api_url,
        &config.credentials.telegram_token,
        &config.credentials.telegram_chat_id,
        Arc::clone(&http),
    ));

    let cursor = current_epoch_secs();
    let mut engine = Engine::new(
        client,
        notifier,
        Duration::from_secs(config.retry_period_seconds),
        cursor,
        cancel.clone(),
    );

    // Setup shutdown handler
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
            return;
        }
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    tracing::info!("Homework bot started at {}", cursor);

    // Blocks until cancelled
    engine.run().await;

    tracing::info!("Homework bot stopped");
    Ok(())
}
