use crate::model::Answer;
use crate::session::{Outcome, Verdict};

/// Owned copy of the session, taken after a transition.
///
/// Carries everything needed to redraw the quiz screen without access to the
/// controller itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub current_index: usize,
    pub total: usize,
    pub remaining_seconds: u32,
    pub score: usize,
    pub selected_answer: Option<Answer>,
    /// Outcome of the selection for the current question.
    pub outcome: Option<Outcome>,
    /// Outcome of the most recent answer in the run, kept across questions.
    pub last_outcome: Option<Outcome>,
    pub correct_answer: Option<Answer>,
    pub prompt: Option<String>,
    pub explanation: Option<String>,
    pub ended: bool,
    pub verdict: Option<Verdict>,
}

impl SessionSnapshot {
    #[must_use]
    pub fn has_answered(&self) -> bool {
        self.selected_answer.is_some()
    }

    /// `current_index / total`, in `0.0..=1.0`.
    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.current_index as f64 / self.total as f64
    }
}
