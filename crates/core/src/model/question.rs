use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

//
// ─── ANSWER ────────────────────────────────────────────────────────────────────
//

/// One selectable option of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    text: String,
    is_correct: bool,
}

impl Answer {
    #[must_use]
    pub fn new(text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            text: text.into(),
            is_correct,
        }
    }

    #[must_use]
    pub fn correct(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }

    #[must_use]
    pub fn incorrect(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A multiple-choice question with its answers in display order.
///
/// The prompt is kept exactly as the provider sent it, HTML entities included.
/// Decoding happens at the presentation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    prompt: String,
    answers: Vec<Answer>,
}

impl Question {
    /// Build a question whose answers are already in display order.
    #[must_use]
    pub fn new(prompt: impl Into<String>, answers: Vec<Answer>) -> Self {
        Self {
            prompt: prompt.into(),
            answers,
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Number of answers flagged correct. Well-formed provider data yields 1.
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.answers.iter().filter(|answer| answer.is_correct()).count()
    }
}

//
// ─── QUESTION DRAFT ────────────────────────────────────────────────────────────
//

/// Raw question as the trivia provider reports it.
///
/// Field names follow the provider's JSON; unknown fields (category,
/// difficulty, type) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    #[serde(rename = "question")]
    pub prompt: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

impl QuestionDraft {
    #[must_use]
    pub fn new(
        prompt: impl Into<String>,
        correct_answer: impl Into<String>,
        incorrect_answers: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            correct_answer: correct_answer.into(),
            incorrect_answers: incorrect_answers.into_iter().map(Into::into).collect(),
        }
    }

    /// Combine the incorrect answers with the correct one and fix their order
    /// with a uniform Fisher–Yates shuffle.
    pub fn into_question<R: Rng + ?Sized>(self, rng: &mut R) -> Question {
        let mut answers: Vec<Answer> = self
            .incorrect_answers
            .into_iter()
            .map(Answer::incorrect)
            .collect();
        answers.push(Answer::correct(self.correct_answer));
        answers.as_mut_slice().shuffle(rng);

        Question::new(self.prompt, answers)
    }
}
