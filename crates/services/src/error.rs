//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted while fetching questions from the trivia provider.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    #[error("trivia request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("trivia request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("trivia provider rejected the request (response_code {0})")]
    ProviderRejected(u32),
    #[error("malformed trivia response: {0}")]
    MalformedResponse(String),
}

impl FetchError {
    /// True for transport failures, non-success statuses and provider rejections.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Self::HttpStatus(_) | Self::Network(_) | Self::ProviderRejected(_)
        )
    }

    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedResponse(_))
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}
