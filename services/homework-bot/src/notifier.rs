//! Notifier trait for delivering chat messages

use async_trait::async_trait;

/// Trait for sending notifications
#[async_trait]
pub trait Notifier: Send + Sync + std::fmt::Debug {
    /// Get the notifier type name (e.g. "telegram")
    fn type_name(&self) -> &str;

    /// Deliver a message
    async fn notify(&self, message: &str) -> crate::Result<()>;
}

/// Deliver `message`, logging instead of returning any failure.
///
/// Delivery problems must never stop the polling loop.
pub async fn send_message(notifier: &dyn Notifier, message: &str) {
    tracing::info!("Message ready to send: {}", message);
    match notifier.notify(message).await {
        Ok(()) => tracing::debug!("Sent message via '{}': {}", notifier.type_name(), message),
        Err(e) => tracing::error!(
            "Failed to send message via '{}': {}",
            notifier.type_name(),
            e
        ),
    }
}
