mod client;
mod config;
mod response;
mod source;

pub use client::TriviaClient;
pub use config::TriviaConfig;
pub use response::parse_response;
pub use source::{QuestionSource, StaticQuestionSource};
