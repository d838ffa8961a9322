pub mod envoy;
pub mod pvoutput;

use std::time::Duration;

use crate::error::AppError;

fn build_http_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(15))
        .build()?)
}
