use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use business::domain::catalog::errors::FetchError;
use business::domain::catalog::media::MediaRoot;

/// HTTP client for the catalog REST API.
pub struct ApiClient {
    client: Client,
    base_url: String,
    media: MediaRoot,
}

impl ApiClient {
    /// Requests wait indefinitely unless a `timeout` is given.
    pub fn new(
        base_url: impl Into<String>,
        media_root: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_default();

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            media: MediaRoot::new(media_root),
        }
    }

    pub fn media(&self) -> &MediaRoot {
        &self.media
    }

    /// Returns the absolute URL for an API path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GETs `path` and decodes the JSON body.
    pub async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.endpoint(path);
        debug!("GET {}", url);

        let result = self.get_json(&url).await;
        if let Err(err) = &result {
            error!(endpoint = %url, "API request failed: {}", err);
        }
        result
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self
            .client
            .get(url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|err| FetchError::network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| FetchError::network(err.to_string()))?;

        serde_json::from_slice(&body).map_err(|err| FetchError::decode(err.to_string()))
    }
}
