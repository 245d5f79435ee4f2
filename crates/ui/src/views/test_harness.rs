use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::{Answer, Question, QuestionBank};
use services::QuizLoopService;

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;
use crate::views::quiz::QuizTestHandles;

struct TestApp {
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for TestApp {
    fn app_name(&self) -> &str {
        "Myth or Fact (test)"
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
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

    pub async fn drive_async(&mut self) {
        for _ in 0..3 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
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

/// Questions with prompts "Q0", "Q1", ... and the given answers.
pub fn bank(answers: &[Answer]) -> QuestionBank {
    let questions = answers
        .iter()
        .enumerate()
        .map(|(i, answer)| Question::new(format!("Q{i}"), *answer, format!("Because {i}")))
        .collect();
    QuestionBank::new(questions).expect("valid test bank")
}

pub fn setup_view_harness(bank: QuestionBank) -> ViewHarness {
    let quiz_loop = Arc::new(QuizLoopService::new(Arc::new(bank)));
    let handles = QuizTestHandles::default();

    let dom = VirtualDom::new_with_props(
        QuizHarness,
        ViewHarnessProps {
            app: Arc::new(TestApp { quiz_loop }),
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}
