use crate::model::Answer;
use crate::session::Outcome;

/// Seconds allowed per question.
pub const TIMER_DURATION_SECS: u32 = 10;

/// Mutable state of one quiz run.
///
/// Only `QuizSession` mutates it. A restart replaces it wholesale with
/// [`SessionState::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub(crate) current_index: usize,
    pub(crate) remaining_seconds: u32,
    pub(crate) selected_answer: Option<Answer>,
    pub(crate) score: usize,
    pub(crate) ended: bool,
    pub(crate) last_outcome: Option<Outcome>,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_index: 0,
            remaining_seconds: TIMER_DURATION_SECS,
            selected_answer: None,
            score: 0,
            ended: false,
            last_outcome: None,
        }
    }

    /// Index of the question being asked; equals the bank length once ended.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<Answer> {
        self.selected_answer
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Outcome of the most recent accepted answer in this run.
    ///
    /// Survives advancing to the next question; cleared only by a restart.
    #[must_use]
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
