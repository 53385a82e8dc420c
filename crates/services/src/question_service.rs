use std::sync::Arc;

use quiz_core::{Question, QuestionDraft};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use crate::error::FetchError;
use crate::trivia::QuestionSource;

/// Loads a quiz worth of questions and fixes each question's answer order.
#[derive(Clone)]
pub struct QuestionService {
    source: Arc<dyn QuestionSource>,
    seed: Option<u64>,
}

impl QuestionService {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self { source, seed: None }
    }

    /// Use a seeded RNG for answer shuffling so every load orders answers the same way.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Fetch questions and shuffle each question's answers.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` when the source fails. The error is logged here so
    /// callers only need to decide how to present it.
    pub async fn load_questions(&self) -> Result<Vec<Question>, FetchError> {
        let drafts = match self.source.fetch_drafts().await {
            Ok(drafts) => drafts,
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch questions");
                return Err(err);
            }
        };

        let questions = match self.seed {
            Some(seed) => shuffle_all(drafts, &mut StdRng::seed_from_u64(seed)),
            None => shuffle_all(drafts, &mut rand::rng()),
        };

        tracing::info!(count = questions.len(), "loaded quiz questions");
        Ok(questions)
    }
}

fn shuffle_all<R: Rng + ?Sized>(drafts: Vec<QuestionDraft>, rng: &mut R) -> Vec<Question> {
    drafts
        .into_iter()
        .map(|draft| draft.into_question(&mut *rng))
        .collect()
}
