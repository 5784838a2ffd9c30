//! Service configuration from environment variables.

use std::env;

use tracing::info;

/// Developer origins of the static marketing site.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] =
    ["http://127.0.0.1:5500", "http://localhost:5500"];

pub struct ServerConfig {
    pub bind: String,
    pub database_url: String,
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            bind: load("SALTMERE_BIND", "127.0.0.1:5500"),
            database_url: load("SALTMERE_DB", "sqlite:saltmere.db"),
            allowed_origins: parse_origins(
                &env::var("SALTMERE_ALLOWED_ORIGINS").unwrap_or_default(),
            ),
        }
    }
}

fn load(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{} not set, using default: {}", key, default);
        default.to_string()
    })
}

/// Comma-separated origin list; empty input falls back to the defaults.
pub fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if origins.is_empty() {
        DEFAULT_ALLOWED_ORIGINS
            .iter()
            .map(|s| s.to_string())
            .collect()
    } else {
        origins
    }
}
