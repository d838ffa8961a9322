#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("No aggregate {0} meter in Envoy report")]
    MissingMeter(&'static str),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
