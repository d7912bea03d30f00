use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Process-wide client settings, read once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub backend_url: String,
    pub request_timeout: Duration,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend_url = lookup("BACKEND_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("REQUEST_TIMEOUT_SECS must be a whole number of seconds, got {:?}", raw))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            backend_url: normalize_url(&backend_url),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn with_backend_url(mut self, backend_url: &str) -> Self {
        self.backend_url = normalize_url(backend_url);
        self
    }
}

fn normalize_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
