use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Origin of the admin backend, e.g. `"http://localhost:5000"`.
    ///
    /// Prefer setting this via the `PORTAL_API_URL` environment variable;
    /// this config field is the fallback for deployments that cannot inject
    /// env vars at runtime. When neither is set the development default
    /// applies.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

impl ApiConfig {
    /// Resolve the backend origin with the `PORTAL_API_URL` env var taking
    /// priority over the config file field, then the development default.
    pub fn resolved_base_url(&self) -> String {
        std::env::var("PORTAL_API_URL")
            .ok()
            .filter(|s| !s.is_empty())
            .or_else(|| self.base_url.clone())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| default_base_url().to_string())
    }

    /// Per-request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// ---------------------------------------------------------------------------
// Serde defaults
// ---------------------------------------------------------------------------

pub fn default_base_url() -> &'static str {
    "http://localhost:5000"
}

pub fn default_timeout_secs() -> u64 {
    30
}
