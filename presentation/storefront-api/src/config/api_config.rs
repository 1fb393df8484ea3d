use std::env;
use std::time::Duration;

use tracing::warn;

/// Where the catalog API and its media files live.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub media_url: String,
    /// `None` lets requests wait indefinitely.
    pub timeout: Option<Duration>,
}

impl ApiConfig {
    /// Environment variables:
    /// - API_BASE_URL (default: "http://localhost:8000/api")
    /// - MEDIA_BASE_URL (default: "http://localhost:8000/media")
    /// - API_TIMEOUT_SECS: request timeout in seconds (default: unset)
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8000/api".to_string()),
            media_url: env::var("MEDIA_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8000/media".to_string()),
            timeout: parse_timeout(env::var("API_TIMEOUT_SECS").ok().as_deref()),
        }
    }
}

fn parse_timeout(raw: Option<&str>) -> Option<Duration> {
    let raw = raw.map(str::trim).filter(|value| !value.is_empty())?;
    match raw.parse::<u64>() {
        Ok(0) => None,
        Ok(seconds) => Some(Duration::from_secs(seconds)),
        Err(_) => {
            warn!("Ignoring invalid API_TIMEOUT_SECS value {:?}", raw);
            None
        }
    }
}
