// src/error.rs
use reqwest::StatusCode;
use thiserror::Error;

/// Failures of a single call to the upstream completion API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("no upstream credential configured")]
    MissingCredential,

    #[error("upstream rejected the request with status {status}")]
    Rejected { status: StatusCode, body: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed upstream response: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl UpstreamError {
    /// True when the provider answered but refused the call, or the call could
    /// not be authenticated at all. Everything else is an unexpected failure.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::MissingCredential | Self::Rejected { .. })
    }
}
