//! Telegram Bot API notification client

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::io::HttpClient;
use crate::notifier::Notifier;

/// Subset of the Bot API reply envelope
#[derive(Debug, Deserialize)]
struct TelegramReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Sends messages to a single Telegram chat
pub struct TelegramNotifier {
    send_url: String,
    chat_id: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for TelegramNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramNotifier")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

impl TelegramNotifier {
    pub fn new(api_url: &str, bot_token: &str, chat_id: &str, http: Arc<dyn HttpClient>) -> Self {
        let send_url = format!(
            "{}/bot{}/sendMessage",
            api_url.trim_end_matches('/'),
            bot_token
        );

        tracing::debug!("Created TelegramNotifier for chat {}", chat_id);

        Self {
            send_url,
            chat_id: chat_id.to_string(),
            http,
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    fn type_name(&self) -> &str {
        "telegram"
    }

    async fn notify(&self, message: &str) -> crate::Result<()> {
        let params = [("chat_id", self.chat_id.as_str()), ("text", message)];

        tracing::debug!("Sending Telegram message to chat {}", self.chat_id);

        let response = self.http.post_form(&self.send_url, &params).await?;

        if response.status != 200 {
            return Err(crate::BotError::Delivery(format!(
                "Telegram API returned status {}: {}",
                response.status, response.body
            )));
        }

        let reply: TelegramReply = serde_json::from_str(&response.body).map_err(|e| {
            crate::BotError::Delivery(format!("Unreadable Telegram API reply: {}", e))
        })?;
        if !reply.ok {
            return Err(crate::BotError::Delivery(format!(
                "Telegram API rejected the message: {}",
                reply.description.unwrap_or_default()
            )));
        }

        tracing::debug!("Telegram message sent successfully");
        Ok(())
    }
}
