use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{QuestionService, QuestionSource};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;
use crate::views::quiz::QuizTestHandles;
use crate::vm::{QuizIntent, QuizVm};

/// Seed used for every harness so answer order is reproducible.
pub const HARNESS_SEED: u64 = 7;

#[derive(Clone)]
struct TestApp {
    question_service: Arc<QuestionService>,
}

impl UiApp for TestApp {
    fn question_service(&self) -> Arc<QuestionService> {
        Arc::clone(&self.question_service)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Let spawned tasks (the question load) run, then re-render.
    pub async fn drive_async(&mut self) {
        for _ in 0..3 {
            let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    pub fn dispatch(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn vm(&self) -> QuizVm {
        let vm = self.handles.vm();
        self.dom.in_runtime(|| (*vm.peek()).clone())
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(source: Arc<dyn QuestionSource>) -> ViewHarness {
    let question_service = Arc::new(QuestionService::new(source).with_seed(HARNESS_SEED));
    let handles = QuizTestHandles::default();
    let app = Arc::new(TestApp { question_service });

    let dom = VirtualDom::new_with_props(
        QuizHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}
