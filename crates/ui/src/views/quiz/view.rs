use dioxus::document::eval;
use dioxus::prelude::*;
use tokio::sync::mpsc;

use services::{QuizDriver, QuizIntent, QuizUpdate};

use super::scripts::{FOCUS_ROOT_SCRIPT, cue_script};
use crate::context::AppContext;
use crate::vm::{AnswerButtonVm, QuizVm, intent_for_key};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_loop = ctx.quiz_loop();

    let session = use_hook(|| quiz_loop.start_session());
    let mut snapshot = use_signal(|| session.snapshot());

    // The driver owns the session from here on; the view only holds snapshots.
    let intents = use_hook(move || {
        let (tx, rx) = mpsc::unbounded_channel();
        let driver = QuizDriver::new((*quiz_loop).clone());
        spawn(async move {
            driver
                .run(session, rx, move |update: &QuizUpdate| {
                    if let Some(outcome) = update.transition.cue() {
                        let _ = eval(&cue_script(outcome));
                    }
                    snapshot.set(update.snapshot.clone());
                })
                .await;
        });
        tx
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(intents.clone());
            }
        }
    }

    let dispatch = use_callback(move |intent: QuizIntent| {
        if intents.send(intent).is_err() {
            tracing::warn!(?intent, "quiz driver is gone; dropping intent");
        }
    });

    use_effect(move || {
        let _ = eval(FOCUS_ROOT_SCRIPT);
    });

    let on_key = move |evt: KeyboardEvent| {
        let ended = snapshot.read().ended;
        let key = evt.data.key().to_string();
        if let Some(intent) = intent_for_key(&key, ended) {
            evt.prevent_default();
            dispatch.call(intent);
        }
    };

    let vm = QuizVm::from(&*snapshot.read());
    let progress_style = format!("width: {}%;", vm.progress_percent);

    rsx! {
        div { class: "page quiz-page", id: "quiz-root", tabindex: "0", onkeydown: on_key,
            if !vm.ended {
                header { class: "quiz-timer", id: "quiz-timer", "{vm.timer_label}" }
            }

            div { class: "quiz-score", id: "quiz-score", "{vm.score_label}" }

            if !vm.ended {
                div {
                    class: "quiz-progress",
                    role: "progressbar",
                    aria_valuemin: "0",
                    aria_valuemax: "100",
                    aria_valuenow: "{vm.progress_percent}",
                    aria_label: "{vm.progress_label}",
                    div { class: "quiz-progress__bar", style: "{progress_style}" }
                }
            }

            if let Some(verdict) = vm.verdict {
                FinalCard { verdict, on_intent: dispatch }
            } else {
                QuestionCard { vm: vm.clone(), on_intent: dispatch }
            }
        }
    }
}

#[component]
fn QuestionCard(vm: QuizVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        section { class: "quiz-card",
            p { class: "quiz-card__prompt", id: "quiz-prompt", "{vm.prompt}" }

            div { class: "quiz-card__answers",
                for button in vm.answers {
                    AnswerButton { key: "{button.id}", button, on_intent }
                }
            }

            if let Some(feedback) = vm.feedback.clone() {
                div { class: "quiz-card__feedback",
                    p { class: "{feedback.class}", "{feedback.text}" }
                    p { class: "quiz-card__explanation", "{feedback.explanation}" }
                }
            }

            button {
                class: "quiz-next",
                id: "quiz-next",
                r#type: "button",
                aria_label: "Next question",
                disabled: !vm.next_enabled,
                onclick: move |_| on_intent.call(QuizIntent::Next),
                "→"
            }
        }
    }
}

#[component]
fn AnswerButton(button: AnswerButtonVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let class = format!("quiz-answer {}", button.tone.class());
    let answer = button.answer;

    rsx! {
        button {
            class: "{class}",
            id: "{button.id}",
            r#type: "button",
            disabled: button.disabled,
            onclick: move |_| on_intent.call(QuizIntent::Select(answer)),
            "{button.label}"
        }
    }
}

#[component]
fn FinalCard(verdict: &'static str, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        section { class: "quiz-card quiz-card--final",
            div { class: "quiz-celebrate", aria_hidden: "true", "🎉 ☕ 🎉" }
            p { class: "quiz-card__verdict", id: "quiz-verdict", "{verdict}" }
            button {
                class: "quiz-restart",
                id: "quiz-restart",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Restart),
                "↻ Play Again"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    intents: Rc<RefCell<Option<mpsc::UnboundedSender<QuizIntent>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, intents: mpsc::UnboundedSender<QuizIntent>) {
        *self.intents.borrow_mut() = Some(intents);
    }

    pub(crate) fn send(&self, intent: QuizIntent) {
        self.intents
            .borrow()
            .as_ref()
            .expect("quiz intents registered")
            .send(intent)
            .expect("quiz driver running");
    }
}
