#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod session;

pub use error::SessionError;
pub use model::{Answer, Question, QuestionDraft};
pub use session::{QuizPhase, QuizSession, SessionProgress, SubmitOutcome};
