use async_trait::async_trait;
use quiz_core::QuestionDraft;
use reqwest::Client;

use crate::error::FetchError;
use crate::trivia::{QuestionSource, TriviaConfig, parse_response};

/// HTTP client for the trivia provider.
#[derive(Clone, Debug)]
pub struct TriviaClient {
    client: Client,
    config: TriviaConfig,
}

impl TriviaClient {
    #[must_use]
    pub fn new(config: TriviaConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &TriviaConfig {
        &self.config
    }
}

impl Default for TriviaClient {
    fn default() -> Self {
        Self::new(TriviaConfig::default())
    }
}

#[async_trait]
impl QuestionSource for TriviaClient {
    async fn fetch_drafts(&self) -> Result<Vec<QuestionDraft>, FetchError> {
        let url = self.config.endpoint();
        tracing::debug!(%url, amount = self.config.amount, "requesting trivia questions");

        let response = self
            .client
            .get(url)
            .query(&self.config.query())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status()));
        }

        // Read as text first so a bad body is reported as malformed, not as a transport error.
        let body = response.text().await?;
        parse_response(&body)
    }
}
