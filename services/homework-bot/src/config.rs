//! Configuration types for the homework bot

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const PRACTICUM_TOKEN_VAR: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_telegram_api_url")]
    pub telegram_api_url: String,
    #[serde(default = "default_retry_period")]
    pub retry_period_seconds: u64,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    #[serde(default)]
    pub credentials: Credentials,
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            telegram_api_url: default_telegram_api_url(),
            retry_period_seconds: default_retry_period(),
            request_timeout_seconds: default_request_timeout(),
            credentials: Credentials::default(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// Overlay credentials from the process environment.
    ///
    /// Non-empty environment values win over whatever the config file holds.
    pub fn resolve_secrets(&mut self) {
        self.resolve_secrets_with(|name| std::env::var(name).ok());
    }

    /// Overlay credentials from an arbitrary variable lookup
    pub fn resolve_secrets_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let targets = [
            (PRACTICUM_TOKEN_VAR, &mut self.credentials.practicum_token),
            (TELEGRAM_TOKEN_VAR, &mut self.credentials.telegram_token),
            (TELEGRAM_CHAT_ID_VAR, &mut self.credentials.telegram_chat_id),
        ];
        for (name, slot) in targets {
            match lookup(name) {
                Some(value) if !value.is_empty() => {
                    tracing::debug!("Using {} from environment", name);
                    *slot = value;
                }
                _ => {}
            }
        }
    }
}

/// The three secrets the bot needs to run
#[derive(Clone, Default, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub practicum_token: String,
    #[serde(default)]
    pub telegram_token: String,
    #[serde(default)]
    pub telegram_chat_id: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("practicum_token", &redact(&self.practicum_token))
            .field("telegram_token", &redact(&self.telegram_token))
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() {
        "<unset>"
    } else {
        "<redacted>"
    }
}

/// Returns true iff every credential is non-empty
pub fn check_tokens(credentials: &Credentials) -> bool {
    [
        &credentials.practicum_token,
        &credentials.telegram_token,
        &credentials.telegram_chat_id,
    ]
    .iter()
    .all(|value| !value.is_empty())
}

/// Names of the environment variables whose credential is still empty
pub fn missing_tokens(credentials: &Credentials) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if credentials.practicum_token.is_empty() {
        missing.push(PRACTICUM_TOKEN_VAR);
    }
    if credentials.telegram_token.is_empty() {
        missing.push(TELEGRAM_TOKEN_VAR);
    }
    if credentials.telegram_chat_id.is_empty() {
        missing.push(TELEGRAM_CHAT_ID_VAR);
    }
    missing
}

/// Log file configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_file")]
    pub file: PathBuf,
    #[serde(default = "default_log_max_bytes")]
    pub max_bytes: u64,
    #[serde(default = "default_log_backups")]
    pub backups: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            max_bytes: default_log_max_bytes(),
            backups: default_log_backups(),
        }
    }
}

fn default_endpoint() -> String {
    "https://practicum.yandex.ru/api/user_api/homework_statuses/".to_string()
}

fn default_telegram_api_url() -> String {
    "https://api.telegram.org".to_string()
}

fn default_retry_period() -> u64 {
    600
}

fn default_request_timeout() -> u64 {
    30
}

fn default_log_file() -> PathBuf {
    PathBuf::from("logfile.log")
}

fn default_log_max_bytes() -> u64 {
    50_000_000
}

fn default_log_backups() -> usize {
    5
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::BotError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}
