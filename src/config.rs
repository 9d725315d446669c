//! Configuration Module
//!
//! Build-time defaults and environment overrides.

use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

const REQUEST_TIMEOUT_SECS: u64 = 5;

/// Immutable app configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Load configuration from the environment
    pub fn from_env() -> Self {
        let api_base_url =
            std::env::var("MATCHDAY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self {
            api_base_url,
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }

    /// Configuration pointed at an explicit base URL
    pub fn with_base_url(url: &str) -> Self {
        Self {
            api_base_url: url.to_string(),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }
}
