//! Error types for the homework bot

/// Errors that can occur while polling and notifying
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("API request failed: {0}")]
    Connection(String),

    #[error("Endpoint {endpoint} is unavailable, status code {status}")]
    UnavailableEndpoint { endpoint: String, status: u16 },

    #[error("Malformed API response: {0}")]
    MalformedResponse(String),

    #[error("Missing field \"{0}\" in homework record")]
    MissingField(String),

    #[error("Unknown homework status: {0}")]
    UnknownStatus(String),

    #[error("Message delivery failed: {0}")]
    Delivery(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for homework bot operations
pub type Result<T> = std::result::Result<T, BotError>;
