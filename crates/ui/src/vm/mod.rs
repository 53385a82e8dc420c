mod quiz_vm;
mod screen_vm;
mod text_fmt;

pub use quiz_vm::{LoadStatus, LoadTicket, QuizIntent, QuizVm};
pub use screen_vm::{
    AnswerOptionVm, QuestionScreenVm, QuizScreen, ResultsScreenVm, map_quiz_screen,
};
pub use text_fmt::decode_entities;
