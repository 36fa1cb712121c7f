use std::env;
use std::time::Duration;

use crate::error::AppError;

/// Outbound mail endpoint settings. An absent endpoint disables that kind of
/// message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyConfig {
    pub invite_endpoint: Option<String>,
    pub winner_endpoint: Option<String>,
    pub timeout: Duration,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            invite_endpoint: None,
            winner_endpoint: None,
            timeout: Duration::from_millis(5_000),
        }
    }
}

/// Process-wide settings read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Base of invitation links, e.g. `https://squares.example/`.
    pub public_base_url: String,
    /// Browser origins allowed by CORS.
    pub cors_origins: Vec<String>,
    pub notify: NotifyConfig,
}

/// Comma-separated origins; entries that are empty, `null` or not http(s)
/// are dropped.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(|s| s.trim_end_matches('/').to_string())
        .collect()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            public_base_url: "http://localhost:3000/".to_string(),
            cors_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
            notify: NotifyConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let port = match non_empty("BACKEND_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("BACKEND_PORT must be a port number, got '{raw}'"))
            })?,
            None => defaults.port,
        };

        let timeout = match non_empty("NOTIFY_TIMEOUT_MS") {
            Some(raw) => Duration::from_millis(raw.trim().parse::<u64>().map_err(|_| {
                AppError::config(format!(
                    "NOTIFY_TIMEOUT_MS must be a number of milliseconds, got '{raw}'"
                ))
            })?),
            None => defaults.notify.timeout,
        };

        Ok(Self {
            host: non_empty("BACKEND_HOST").unwrap_or(defaults.host),
            port,
            public_base_url: non_empty("PUBLIC_BASE_URL").unwrap_or(defaults.public_base_url),
            cors_origins: non_empty("CORS_ALLOWED_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .filter(|origins| !origins.is_empty())
                .unwrap_or(defaults.cors_origins),
            notify: NotifyConfig {
                invite_endpoint: non_empty("INVITE_EMAIL_ENDPOINT"),
                winner_endpoint: non_empty("WINNER_EMAIL_ENDPOINT"),
                timeout,
            },
        })
    }
}
