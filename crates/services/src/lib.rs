#![forbid(unsafe_code)]

pub mod error;
pub mod question_service;
pub mod trivia;

pub use error::FetchError;
pub use question_service::QuestionService;
pub use trivia::{QuestionSource, StaticQuestionSource, TriviaClient, TriviaConfig};
