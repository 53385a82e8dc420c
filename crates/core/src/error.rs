use thiserror::Error;

use crate::session::QuizPhase;

/// Errors emitted by `QuizSession` for calls that would break its lifecycle.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("session is already loaded (phase: {0:?})")]
    AlreadyLoaded(QuizPhase),
}
