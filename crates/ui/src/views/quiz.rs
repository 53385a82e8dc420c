use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{AnswerOptionVm, QuizIntent, QuizScreen, QuizVm, map_quiz_screen};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let question_service = ctx.question_service();
    let vm = use_signal(QuizVm::new);

    // Scope-owned: Dioxus drops the task on unmount, and the ticket check drops
    // completions from superseded attempts.
    let loader = use_resource(move || {
        let question_service = question_service.clone();
        let mut vm = vm;

        async move {
            let Some(ticket) = vm.write().begin_load() else {
                return;
            };
            let result = question_service.load_questions().await;
            vm.write().finish_load(ticket, result);
        }
    });

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        let mut loader = loader;

        match intent {
            QuizIntent::SelectAnswer(index) => {
                vm.write().select_answer(index);
            }
            QuizIntent::Reset => vm.write().reset(),
            QuizIntent::Retry => {
                if vm.peek().can_retry() {
                    loader.restart();
                }
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let screen = map_quiz_screen(&vm.read());
    let error_title = ViewError::title();

    rsx! {
        div { class: "page quiz-page",
            match screen {
                QuizScreen::Loading { message } => rsx! {
                    div { class: "quiz-loading", role: "status",
                        div { class: "quiz-spinner", aria_hidden: "true" }
                        p { class: "quiz-loading__message", "{message}" }
                    }
                },
                QuizScreen::LoadFailed(err) => rsx! {
                    div { class: "quiz-card quiz-card--error", role: "alert",
                        h2 { class: "quiz-card__title", "{error_title}" }
                        p { "{err.message()}" }
                        button {
                            class: "quiz-button",
                            id: "quiz-retry",
                            r#type: "button",
                            onclick: move |_| dispatch_intent.call(QuizIntent::Retry),
                            "Retry"
                        }
                    }
                },
                QuizScreen::Empty => rsx! {
                    div { class: "quiz-card",
                        p { class: "quiz-empty", "No questions available." }
                    }
                },
                QuizScreen::Question(question) => rsx! {
                    div { class: "quiz-card",
                        h2 { class: "quiz-card__title", "{question.heading}" }
                        p { class: "quiz-card__prompt", "{question.prompt}" }
                        div { class: "quiz-answers",
                            for answer in question.answers {
                                AnswerButton {
                                    key: "{answer.index}",
                                    answer: answer.clone(),
                                    on_intent: dispatch_intent,
                                }
                            }
                        }
                        div { class: "quiz-score",
                            span { "{question.score_label}" }
                        }
                    }
                },
                QuizScreen::Results(results) => rsx! {
                    div { class: "quiz-card quiz-card--results",
                        h2 { class: "quiz-card__title", "Quiz Results" }
                        p { class: "quiz-results__score", "{results.score_label}" }
                        button {
                            class: "quiz-button",
                            id: "quiz-try-again",
                            r#type: "button",
                            onclick: move |_| dispatch_intent.call(QuizIntent::Reset),
                            "Try Again"
                        }
                    }
                },
            }
            footer { class: "quiz-footer", "Created By Ismail Ahmed Shah" }
        }
    }
}

#[component]
fn AnswerButton(answer: AnswerOptionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let index = answer.index;
    rsx! {
        button {
            class: "quiz-button quiz-answer",
            id: "quiz-answer-{index}",
            r#type: "button",
            onclick: move |_| on_intent.call(QuizIntent::SelectAnswer(index)),
            "{answer.label}"
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    vm: Rc<RefCell<Option<Signal<QuizVm>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, vm: Signal<QuizVm>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<QuizVm> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }
}
