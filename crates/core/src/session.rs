use crate::error::SessionError;
use crate::model::Question;

/// Lifecycle phase of a quiz play-through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum QuizPhase {
    #[default]
    Loading,
    InProgress,
    Finished,
}

/// Result of `QuizSession::submit_answer`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The answer was recorded and the session moved to the next position.
    Advanced { correct: bool, finished: bool },
    /// The session was not accepting answers; nothing changed.
    Ignored(QuizPhase),
}

impl SubmitOutcome {
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Advanced { .. })
    }
}

/// Snapshot of where a session stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionProgress {
    pub phase: QuizPhase,
    /// Zero-based index of the question being asked.
    pub current_index: usize,
    pub total: usize,
    pub score: usize,
}

impl SessionProgress {
    /// One-based position for display, clamped to `total`.
    #[must_use]
    pub fn position(&self) -> usize {
        (self.current_index + 1).min(self.total)
    }
}

/// In-memory record of one play-through.
///
/// Created empty in `Loading`, populated once by `load`, then driven only by
/// `submit_answer` and `reset`. Questions are never mutated after loading.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    score: usize,
    phase: QuizPhase,
}

impl QuizSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the session with the fetched questions.
    ///
    /// Moves to `InProgress`, or straight to `Finished` when `questions` is empty.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyLoaded` if the session left `Loading` already.
    pub fn load(&mut self, questions: Vec<Question>) -> Result<QuizPhase, SessionError> {
        if self.phase != QuizPhase::Loading {
            return Err(SessionError::AlreadyLoaded(self.phase));
        }

        self.questions = questions;
        self.current_index = 0;
        self.score = 0;
        self.phase = self.phase_for_index();
        Ok(self.phase)
    }

    /// Record an answer to the current question and advance.
    ///
    /// Only valid while `InProgress`; otherwise nothing changes.
    pub fn submit_answer(&mut self, is_correct: bool) -> SubmitOutcome {
        if self.phase != QuizPhase::InProgress {
            return SubmitOutcome::Ignored(self.phase);
        }

        if is_correct {
            self.score += 1;
        }
        self.current_index += 1;
        self.phase = self.phase_for_index();

        SubmitOutcome::Advanced {
            correct: is_correct,
            finished: self.phase == QuizPhase::Finished,
        }
    }

    /// Replay the same questions from the start.
    ///
    /// A session still `Loading` has nothing to replay and is left alone. An
    /// empty session stays `Finished`.
    pub fn reset(&mut self) -> QuizPhase {
        if self.phase == QuizPhase::Loading {
            return self.phase;
        }

        self.current_index = 0;
        self.score = 0;
        self.phase = self.phase_for_index();
        self.phase
    }

    fn phase_for_index(&self) -> QuizPhase {
        if self.current_index >= self.questions.len() {
            QuizPhase::Finished
        } else {
            QuizPhase::InProgress
        }
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.phase != QuizPhase::Loading
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.phase == QuizPhase::InProgress {
            self.questions.get(self.current_index)
        } else {
            None
        }
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            phase: self.phase,
            current_index: self.current_index,
            total: self.total(),
            score: self.score,
        }
    }
}
