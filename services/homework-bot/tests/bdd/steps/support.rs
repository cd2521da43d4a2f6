//! Test doubles shared by the step definitions

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use homework_bot::io::{HttpClient, HttpResponse};
use homework_bot::notifier::Notifier;
use homework_bot::BotError;
use tokio_util::sync::CancellationToken;

/// HTTP client that answers every GET with the same scripted reply
#[derive(Debug)]
pub struct ScriptedApi {
    reply: Result<HttpResponse, String>,
    gets: AtomicUsize,
}

impl ScriptedApi {
    pub fn replying(status: u16, body: &str) -> Self {
        Self {
            reply: Ok(HttpResponse {
                status,
                body: body.to_string(),
            }),
            gets: AtomicUsize::new(0),
        }
    }

    pub fn unreachable(reason: &str) -> Self {
        Self {
            reply: Err(reason.to_string()),
            gets: AtomicUsize::new(0),
        }
    }

    pub fn get_count(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl HttpClient for ScriptedApi {
    async fn get(
        &self,
        _url: &str,
        _headers: &[(&str, &str)],
        _query: &[(&str, &str)],
    ) -> homework_bot::Result<HttpResponse> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Ok(r) => Ok(r.clone()),
            Err(msg) => Err(BotError::Http(msg.clone())),
        }
    }

    async fn post_form(
        &self,
        _url: &str,
        _params: &[(&str, &str)],
    ) -> homework_bot::Result<HttpResponse> {
        Err(BotError::Http("unexpected POST".to_string()))
    }
}

/// Notifier that keeps every message it was asked to deliver
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    fail: bool,
    sent: Mutex<Vec<String>>,
    stop_after: Option<(usize, CancellationToken)>,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    /// Cancel `cancel` once `count` messages have been recorded
    pub fn stopping_after(count: usize, cancel: CancellationToken) -> Self {
        Self {
            stop_after: Some((count, cancel)),
            ..Default::default()
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Notifier for RecordingNotifier {
    fn type_name(&self) -> &str {
        "recording"
    }

    async fn notify(&self, message: &str) -> homework_bot::Result<()> {
        let recorded = {
            let mut sent = self.sent.lock().unwrap();
            sent.push(message.to_string());
            sent.len()
        };
        if let Some((count, cancel)) = &self.stop_after {
            if recorded >= *count {
                cancel.cancel();
            }
        }
        if self.fail {
            Err(BotError::Delivery("chat not found".to_string()))
        } else {
            Ok(())
        }
    }
}
