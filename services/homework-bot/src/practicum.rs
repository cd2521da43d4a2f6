//! Client for the homework status API

use std::sync::Arc;

use serde_json::Value;

use crate::io::HttpClient;
use crate::BotError;

/// Fetches homework statuses updated since a given timestamp
pub struct PracticumClient {
    endpoint: String,
    authorization: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl PracticumClient {
    pub fn new(endpoint: &str, token: &str, http: Arc<dyn HttpClient>) -> Self {
        tracing::debug!("Created PracticumClient for {}", endpoint);

        Self {
            endpoint: endpoint.to_string(),
            authorization: format!("OAuth {}", token),
            http,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Request the API answer for everything changed since `from_date`.
    ///
    /// The body is returned as decoded JSON without any shape checks.
    pub async fn get_api_answer(&self, from_date: i64) -> crate::Result<Value> {
        let from_date = from_date.to_string();
        tracing::info!("Requesting homework statuses from {}", self.endpoint);

        let response = self
            .http
            .get(
                &self.endpoint,
                &[("Authorization", self.authorization.as_str())],
                &[("from_date", from_date.as_str())],
            )
            .await
            .map_err(|e| match e {
                BotError::Http(msg) => BotError::Connection(msg),
                other => other,
            })?;

        if response.status != 200 {
            return Err(BotError::UnavailableEndpoint {
                endpoint: self.endpoint.clone(),
                status: response.status,
            });
        }

        serde_json::from_str(&response.body).map_err(|e| {
            BotError::MalformedResponse(format!("response body is not valid JSON: {}", e))
        })
    }
}
