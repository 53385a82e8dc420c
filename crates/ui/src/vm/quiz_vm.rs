use quiz_core::{Question, QuizSession, SubmitOutcome};
use services::FetchError;

use crate::views::ViewError;

/// Identifies one load attempt. Completions carrying an older ticket are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Pending(LoadTicket),
    Loaded,
    Failed(ViewError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    /// Index into the current question's answers, in display order.
    SelectAnswer(usize),
    Reset,
    Retry,
}

/// Owns the quiz session for one mounted widget.
///
/// Every mutation goes through here; views only read the projection built by
/// `map_quiz_screen`.
#[derive(Clone, Debug, Default)]
pub struct QuizVm {
    session: QuizSession,
    status: LoadStatus,
    generation: u64,
}

impl QuizVm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn status(&self) -> LoadStatus {
        self.status
    }

    /// Start a load attempt, superseding any attempt still in flight.
    ///
    /// Returns `None` once questions are loaded; a session is populated only once.
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if self.session.is_loaded() {
            tracing::debug!("questions already loaded; skipping fetch");
            return None;
        }

        self.generation += 1;
        let ticket = LoadTicket(self.generation);
        self.status = LoadStatus::Pending(ticket);
        Some(ticket)
    }

    /// Apply the outcome of a load attempt.
    ///
    /// A failed load leaves the session in `Loading` and records the error for
    /// the view. Returns `false` when the ticket is stale and nothing changed.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Question>, FetchError>,
    ) -> bool {
        if self.status != LoadStatus::Pending(ticket) {
            tracing::debug!(?ticket, status = ?self.status, "ignoring stale question load");
            return false;
        }

        match result {
            Ok(questions) => match self.session.load(questions) {
                Ok(phase) => {
                    tracing::info!(?phase, total = self.session.total(), "quiz ready");
                    self.status = LoadStatus::Loaded;
                    true
                }
                Err(err) => {
                    tracing::warn!(error = %err, "discarding duplicate question load");
                    self.status = LoadStatus::Loaded;
                    false
                }
            },
            Err(err) => {
                tracing::warn!(error = %err, "quiz questions unavailable");
                self.status = LoadStatus::Failed(ViewError::from(&err));
                true
            }
        }
    }

    #[must_use]
    pub fn can_retry(&self) -> bool {
        matches!(self.status, LoadStatus::Failed(_))
    }

    /// Answer the current question with the option at `index`.
    pub fn select_answer(&mut self, index: usize) -> SubmitOutcome {
        let is_correct = self
            .session
            .current_question()
            .and_then(|question| question.answers().get(index))
            .map(|answer| answer.is_correct());

        let Some(is_correct) = is_correct else {
            tracing::debug!(index, phase = ?self.session.phase(), "answer selection ignored");
            return SubmitOutcome::Ignored(self.session.phase());
        };

        self.session.submit_answer(is_correct)
    }

    pub fn reset(&mut self) {
        let phase = self.session.reset();
        tracing::debug!(?phase, "quiz reset");
    }
}
