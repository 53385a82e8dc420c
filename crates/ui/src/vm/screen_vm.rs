use quiz_core::QuizPhase;

use crate::views::ViewError;
use crate::vm::{LoadStatus, QuizVm, decode_entities};

pub const LOADING_MESSAGE: &str = "Loading quiz questions, please wait...";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerOptionVm {
    pub index: usize,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionScreenVm {
    pub heading: String,
    pub prompt: String,
    pub answers: Vec<AnswerOptionVm>,
    pub score_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsScreenVm {
    pub score_label: String,
}

/// Everything the quiz widget can show, derived from `QuizVm` alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreen {
    Loading { message: &'static str },
    LoadFailed(ViewError),
    Empty,
    Question(QuestionScreenVm),
    Results(ResultsScreenVm),
}

#[must_use]
pub fn map_quiz_screen(vm: &QuizVm) -> QuizScreen {
    let session = vm.session();
    let progress = session.progress();

    match progress.phase {
        QuizPhase::Loading => match vm.status() {
            LoadStatus::Failed(err) => QuizScreen::LoadFailed(err),
            LoadStatus::Idle | LoadStatus::Pending(_) | LoadStatus::Loaded => {
                QuizScreen::Loading {
                    message: LOADING_MESSAGE,
                }
            }
        },
        _ if progress.total == 0 => QuizScreen::Empty,
        QuizPhase::InProgress => {
            let Some(question) = session.current_question() else {
                return QuizScreen::Empty;
            };
            let answers = question
                .answers()
                .iter()
                .enumerate()
                .map(|(index, answer)| AnswerOptionVm {
                    index,
                    label: decode_entities(answer.text()),
                })
                .collect();

            QuizScreen::Question(QuestionScreenVm {
                heading: format!("Question {}/{}", progress.position(), progress.total),
                prompt: decode_entities(question.prompt()),
                answers,
                score_label: format!("Score: {}", progress.score),
            })
        }
        QuizPhase::Finished => QuizScreen::Results(ResultsScreenVm {
            score_label: format!("You scored {} out of {}", progress.score, progress.total),
        }),
    }
}
