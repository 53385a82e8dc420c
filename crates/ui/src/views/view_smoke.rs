use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use quiz_core::{QuestionDraft, QuizPhase};
use services::{FetchError, QuestionSource, StaticQuestionSource};

use super::test_harness::{ViewHarness, setup_view_harness};
use crate::vm::{LoadStatus, QuizIntent};

fn two_questions() -> Vec<QuestionDraft> {
    vec![
        QuestionDraft::new("Which Pok&eacute;mon is yellow?", "Pikachu", ["Bulbasaur", "Squirtle"]),
        QuestionDraft::new("Largest planet?", "Jupiter", ["Mars", "Venus"]),
    ]
}

async fn loaded_harness(source: Arc<dyn QuestionSource>) -> ViewHarness {
    let mut harness = setup_view_harness(source);
    harness.rebuild();
    harness.drive_async().await;
    harness
}

/// Index of the correct (or an incorrect) answer for the question on screen.
fn answer_index(harness: &ViewHarness, correct: bool) -> usize {
    let vm = harness.vm();
    vm.session()
        .current_question()
        .and_then(|question| {
            question
                .answers()
                .iter()
                .position(|answer| answer.is_correct() == correct)
        })
        .expect("question on screen")
}

struct MalformedSource;

#[async_trait::async_trait]
impl QuestionSource for MalformedSource {
    async fn fetch_drafts(&self) -> Result<Vec<QuestionDraft>, FetchError> {
        Err(FetchError::MalformedResponse("missing field `results`".to_string()))
    }
}

/// Fails the first fetch, then serves the given questions.
struct FlakySource {
    calls: AtomicUsize,
    drafts: Vec<QuestionDraft>,
}

#[async_trait::async_trait]
impl QuestionSource for FlakySource {
    async fn fetch_drafts(&self) -> Result<Vec<QuestionDraft>, FetchError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            return Err(FetchError::ProviderRejected(5));
        }
        Ok(self.drafts.clone())
    }
}

/// Never completes, so the widget stays on its loading screen.
struct PendingSource;

#[async_trait::async_trait]
impl QuestionSource for PendingSource {
    async fn fetch_drafts(&self) -> Result<Vec<QuestionDraft>, FetchError> {
        std::future::pending().await
    }
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_loading_state() {
    let harness = loaded_harness(Arc::new(PendingSource)).await;

    let html = harness.render();
    assert!(
        html.contains("Loading quiz questions, please wait..."),
        "missing loading message in {html}"
    );
    assert!(!html.contains("<button"), "loading screen must not be interactive: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let harness = loaded_harness(Arc::new(StaticQuestionSource::new(two_questions()))).await;

    let html = harness.render();
    assert!(html.contains("Question 1/2"), "missing position in {html}");
    assert!(html.contains("Which Pokémon is yellow?"), "prompt not decoded in {html}");
    assert!(!html.contains("&amp;eacute;"), "raw entity leaked into {html}");
    for label in ["Pikachu", "Bulbasaur", "Squirtle"] {
        assert!(html.contains(label), "missing answer {label} in {html}");
    }
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(html.contains("Created By Ismail Ahmed Shah"), "missing footer in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_plays_through_and_restarts() {
    let mut harness = loaded_harness(Arc::new(StaticQuestionSource::new(two_questions()))).await;

    let wrong = answer_index(&harness, false);
    harness.dispatch(QuizIntent::SelectAnswer(wrong));
    let html = harness.render();
    assert!(html.contains("Question 2/2"), "did not advance in {html}");
    assert!(html.contains("Score: 0"), "wrong answer scored in {html}");

    let right = answer_index(&harness, true);
    harness.dispatch(QuizIntent::SelectAnswer(right));
    let html = harness.render();
    assert!(html.contains("Quiz Results"), "missing results in {html}");
    assert!(html.contains("You scored 1 out of 2"), "wrong final score in {html}");
    assert!(html.contains("Try Again"), "missing restart control in {html}");

    let questions_before = harness.vm().session().questions().to_vec();
    harness.dispatch(QuizIntent::Reset);
    let html = harness.render();
    assert!(html.contains("Question 1/2"), "reset did not restart in {html}");
    assert!(html.contains("Score: 0"), "reset kept score in {html}");

    let vm = harness.vm();
    assert_eq!(vm.session().phase(), QuizPhase::InProgress);
    assert_eq!(vm.session().questions(), questions_before.as_slice());
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_empty_state() {
    let harness = loaded_harness(Arc::new(StaticQuestionSource::new(Vec::new()))).await;

    let html = harness.render();
    assert!(html.contains("No questions available."), "missing empty state in {html}");
    assert!(!html.contains("Quiz Results"), "empty quiz shown as results in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_error_state() {
    let harness = loaded_harness(Arc::new(MalformedSource)).await;

    let html = harness.render();
    assert!(html.contains("Failed to load quiz questions."), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
    assert_eq!(harness.vm().session().phase(), QuizPhase::Loading);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_retry_recovers_from_failure() {
    let source = Arc::new(FlakySource {
        calls: AtomicUsize::new(0),
        drafts: two_questions(),
    });
    let mut harness = loaded_harness(source.clone()).await;
    assert!(matches!(harness.vm().status(), LoadStatus::Failed(_)));

    harness.dispatch(QuizIntent::Retry);
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Question 1/2"), "retry did not load questions in {html}");
    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_ignores_answers_after_finish() {
    let mut harness = loaded_harness(Arc::new(StaticQuestionSource::new(two_questions()))).await;
    harness.dispatch(QuizIntent::SelectAnswer(0));
    harness.dispatch(QuizIntent::SelectAnswer(0));
    let finished = harness.vm().session().progress();

    harness.dispatch(QuizIntent::SelectAnswer(0));
    harness.dispatch(QuizIntent::Retry);
    harness.drive_async().await;

    assert_eq!(harness.vm().session().progress(), finished);
    assert_eq!(harness.vm().status(), LoadStatus::Loaded);
}
