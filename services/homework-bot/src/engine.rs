//! Engine: polls the status API and forwards changes to the notifier

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tokio_util::sync::CancellationToken;

use crate::notifier::{send_message, Notifier};
use crate::practicum::PracticumClient;
use crate::response::{check_response, current_date};
use crate::status::parse_status;
use crate::BotError;

/// What a single successful poll did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// The API reported no homework changes since the cursor
    NoUpdate,
    /// A status message was handed to the notifier and the cursor moved
    Notified { message: String, cursor: i64 },
}

/// The engine owns the cursor and drives the poll, validate, parse, notify cycle
pub struct Engine {
    client: PracticumClient,
    notifier: Arc<dyn Notifier>,
    retry_period: Duration,
    cursor: i64,
    cancel: CancellationToken,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("client", &self.client)
            .field("notifier", &self.notifier)
            .field("retry_period", &self.retry_period)
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl Engine {
    pub fn new(
        client: PracticumClient,
        notifier: Arc<dyn Notifier>,
        retry_period: Duration,
        cursor: i64,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            client,
            notifier,
            retry_period,
            cursor,
            cancel,
        }
    }

    /// Timestamp the next request will ask for updates from
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Run one fetch, validate, parse, notify cycle.
    ///
    /// The cursor only moves when a homework record was parsed.
    pub async fn poll_once(&mut self) -> crate::Result<PollOutcome> {
        let answer = self.client.get_api_answer(self.cursor).await?;
        let homeworks = check_response(&answer)?;

        let Some(latest) = homeworks.first() else {
            tracing::debug!("No homework status update since {}", self.cursor);
            return Ok(PollOutcome::NoUpdate);
        };

        let message = parse_status(latest)?;
        let next_cursor = current_date(&answer)?;

        send_message(self.notifier.as_ref(), &message).await;
        self.cursor = next_cursor;

        Ok(PollOutcome::Notified {
            message,
            cursor: next_cursor,
        })
    }

    /// Run one cycle, reporting any failure to the chat
    pub async fn run_iteration(&mut self) {
        tracing::debug!("Starting iteration from {}", self.cursor);
        if let Err(e) = self.poll_once().await {
            tracing::error!("Iteration failed: {}", e);
            send_message(self.notifier.as_ref(), &failure_message(&e)).await;
        }
    }

    /// Poll forever, sleeping the retry period after every cycle.
    /// Returns when the cancellation token is triggered.
    pub async fn run(&mut self) {
        tracing::debug!("Engine started with cursor {}", self.cursor);
        loop {
            self.run_iteration().await;

            tokio::select! {
                _ = tokio::time::sleep(self.retry_period) => {}
                _ = self.cancel.cancelled() => {
                    tracing::debug!("Polling loop cancelled");
                    break;
                }
            }
        }
    }
}

/// Chat text reporting a failed iteration
pub fn failure_message(err: &BotError) -> String {
    format!("Произошла ошибка: {}", err)
}

pub fn current_epoch_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}
