// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Failures talking to the activities API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed.
    #[error("network error: {0}")]
    Network(#[from] gloo_net::Error),

    /// Non-2xx answer. `detail` is the server's explanation when it sent one.
    #[error("HTTP {status}{}", detail.as_ref().map(|d| format!(": {d}")).unwrap_or_default())]
    Status { status: u16, detail: Option<String> },

    /// Body was not the JSON we expected.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}
