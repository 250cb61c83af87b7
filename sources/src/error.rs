use reqwest::StatusCode;
use thiserror::Error;

/// Custom error type for the access module, allow us to differentiate between errors.
///
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("bad parameter: {0}")]
    BadParam(String),
    #[error("store request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {0} fetching {1}")]
    Status(StatusCode, String),
    #[error("malformed store response: {0}")]
    Decoding(#[from] serde_json::Error),
}
