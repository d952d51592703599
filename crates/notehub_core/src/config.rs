//! Environment-driven configuration for the backend API client.
//!
//! # Responsibility
//! - Resolve base URL, bearer token and request timeout from the process
//!   environment with safe defaults.
//!
//! # Invariants
//! - Configuration loading never fails; malformed values degrade to
//!   defaults with a warning.

use log::warn;
use std::time::Duration;

pub const ENV_API_URL: &str = "NOTEHUB_API_URL";
pub const ENV_API_TOKEN: &str = "NOTEHUB_API_TOKEN";
pub const ENV_API_TIMEOUT_SECS: &str = "NOTEHUB_API_TIMEOUT_SECS";

const DEFAULT_BASE_URL: &str = "https://notehub-public.goit.study/api";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for `HttpNoteApi`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backend root; trailing slashes are tolerated.
    pub base_url: String,
    /// Optional bearer token attached to every request.
    pub token: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    /// Reads configuration from the process environment.
    ///
    /// Missing variables fall back to defaults. A malformed or zero timeout
    /// is replaced by the default with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(value) = std::env::var(ENV_API_URL) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                config.base_url = trimmed.to_string();
            }
        }

        if let Ok(value) = std::env::var(ENV_API_TOKEN) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                config.token = Some(trimmed.to_string());
            }
        }

        if let Ok(value) = std::env::var(ENV_API_TIMEOUT_SECS) {
            match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => warn!(
                    "event=config_load module=config status=degraded field=timeout \
                     value={value} fallback={DEFAULT_TIMEOUT_SECS}"
                ),
            }
        }

        config
    }
}
