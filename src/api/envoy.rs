use tracing::debug;

use super::build_http_client;
use crate::error::AppError;
use crate::models::reading::Reading;

/// Client for the Envoy's unauthenticated local status endpoint.
pub struct EnvoyClient {
    client: reqwest::Client,
    base_url: String,
}

impl EnvoyClient {
    pub fn new(host: &str, port: u16) -> Result<Self, AppError> {
        Self::with_base_url(format!("http://{host}:{port}"))
    }

    /// Binds the client to an explicit base URL, so tests can point it at a
    /// mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, AppError> {
        Ok(Self {
            client: build_http_client()?,
            base_url: base_url.into(),
        })
    }

    /// Fetches and decodes the current production report.
    pub async fn production_report(&self) -> Result<Reading, AppError> {
        let url = format!("{}/production.json", self.base_url);
        debug!(%url, "fetching Envoy production report");

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
