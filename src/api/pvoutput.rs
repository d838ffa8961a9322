use tracing::debug;

use super::build_http_client;
use crate::error::AppError;
use crate::models::status::{format_watt_hours, StatusUpdate};

pub const DEFAULT_BASE_URL: &str = "http://pvoutput.org";

const PATH_ADD_STATUS: &str = "/service/r2/addstatus.jsp";

const HEADER_API_KEY: &str = "X-PVOutput-APIKey";
const HEADER_SYSTEM_ID: &str = "X-PVOutput-SystemID";

/// Client for the PVOutput.org Add Status service.
pub struct PvOutputClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    system_id: u32,
}

impl PvOutputClient {
    pub fn new(api_key: &str, system_id: u32) -> Result<Self, AppError> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key, system_id)
    }

    /// Binds the client to an explicit base URL, so tests can point it at a
    /// mock server.
    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: &str,
        system_id: u32,
    ) -> Result<Self, AppError> {
        Ok(Self {
            client: build_http_client()?,
            base_url: base_url.into(),
            api_key: api_key.to_string(),
            system_id,
        })
    }

    /// Uploads one status record. `c1=1` marks the energy values as
    /// cumulative lifetime totals, per the Add Status API.
    pub async fn add_status(&self, status: &StatusUpdate) -> Result<(), AppError> {
        let url = format!("{}{}", self.base_url, PATH_ADD_STATUS);
        debug!(date = %status.date, time = %status.time, "uploading status to PVOutput");

        self.client
            .get(&url)
            .query(&[
                ("d", status.date.as_str()),
                ("t", status.time.as_str()),
                ("v1", &format_watt_hours(status.generated_wh)),
                ("v3", &format_watt_hours(status.consumed_wh)),
                ("c1", "1"),
            ])
            .header(HEADER_API_KEY, &self.api_key)
            .header(HEADER_SYSTEM_ID, self.system_id.to_string())
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
