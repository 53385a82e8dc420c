use async_trait::async_trait;
use quiz_core::QuestionDraft;

use crate::error::FetchError;
use crate::trivia::parse_response;

/// Where raw questions come from.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch one batch of raw questions.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the source is unreachable or its data is malformed.
    async fn fetch_drafts(&self) -> Result<Vec<QuestionDraft>, FetchError>;
}

/// A fixed batch of questions, served from memory.
#[derive(Clone, Debug, Default)]
pub struct StaticQuestionSource {
    drafts: Vec<QuestionDraft>,
}

impl StaticQuestionSource {
    #[must_use]
    pub fn new(drafts: Vec<QuestionDraft>) -> Self {
        Self { drafts }
    }

    /// Build a source from a body in the provider's JSON shape.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` under the same rules as a live response.
    pub fn from_json(body: &str) -> Result<Self, FetchError> {
        parse_response(body).map(Self::new)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }
}

#[async_trait]
impl QuestionSource for StaticQuestionSource {
    async fn fetch_drafts(&self) -> Result<Vec<QuestionDraft>, FetchError> {
        Ok(self.drafts.clone())
    }
}
