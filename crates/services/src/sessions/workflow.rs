use std::sync::Arc;

use quiz_core::model::{Answer, QuestionBank};
use quiz_core::{QuizSession, Transition};

/// Discrete player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(Answer),
    Next,
    Restart,
}

/// Starts sessions over a shared question bank and routes events into them.
#[derive(Clone, Debug)]
pub struct QuizLoopService {
    bank: Arc<QuestionBank>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self { bank }
    }

    #[must_use]
    pub fn bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    /// Start a fresh session at the first question.
    #[must_use]
    pub fn start_session(&self) -> QuizSession {
        tracing::debug!(questions = self.bank.len(), "starting quiz session");
        QuizSession::new(self.bank())
    }

    /// Apply a player intent to `session`.
    pub fn apply(&self, session: &mut QuizSession, intent: QuizIntent) -> Transition {
        let transition = match intent {
            QuizIntent::Select(choice) => session.select_answer(choice),
            QuizIntent::Next => session.request_next(),
            QuizIntent::Restart => session.restart(),
        };
        log_transition(session, transition, Some(intent));
        transition
    }

    /// Apply one elapsed second to `session`.
    pub fn tick(&self, session: &mut QuizSession) -> Transition {
        let transition = session.tick();
        log_transition(session, transition, None);
        transition
    }
}

fn log_transition(session: &QuizSession, transition: Transition, intent: Option<QuizIntent>) {
    let state = session.state();
    match transition {
        Transition::Ignored => {
            if let Some(intent) = intent {
                tracing::debug!(?intent, index = state.current_index(), "intent ignored");
            }
        }
        Transition::Ticked { remaining_seconds } => {
            tracing::trace!(remaining_seconds, "tick");
        }
        Transition::Answered(outcome) => {
            tracing::debug!(
                index = state.current_index(),
                ?outcome,
                score = state.score(),
                "answer recorded"
            );
        }
        Transition::Advanced { index, timed_out } => {
            tracing::debug!(index, timed_out, "advanced to next question");
        }
        Transition::Ended { timed_out } => {
            tracing::info!(
                score = state.score(),
                total = session.total(),
                verdict = ?session.final_verdict(),
                timed_out,
                "quiz finished"
            );
        }
        Transition::Restarted => {
            tracing::info!("quiz restarted");
        }
    }
}
