mod question;

pub use question::{Answer, Question, QuestionDraft};
