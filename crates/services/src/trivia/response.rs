use quiz_core::QuestionDraft;
use serde::Deserialize;

use crate::error::FetchError;

/// Provider code for a successful response.
const CODE_SUCCESS: u32 = 0;
/// Provider code for "not enough questions for this query"; `results` is empty.
const CODE_NO_RESULTS: u32 = 1;

#[derive(Debug, Deserialize)]
struct ProviderResponse {
    #[serde(default)]
    response_code: Option<u32>,
    results: Vec<QuestionDraft>,
}

/// Parse a provider body into question drafts.
///
/// # Errors
///
/// Returns `FetchError::MalformedResponse` when `results` is missing or has the
/// wrong shape, and `FetchError::ProviderRejected` for provider codes other than
/// success or "no results".
pub fn parse_response(body: &str) -> Result<Vec<QuestionDraft>, FetchError> {
    let response: ProviderResponse = serde_json::from_str(body)?;

    match response.response_code {
        None | Some(CODE_SUCCESS | CODE_NO_RESULTS) => Ok(response.results),
        Some(code) => Err(FetchError::ProviderRejected(code)),
    }
}
