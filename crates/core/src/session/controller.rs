use std::sync::Arc;

use crate::model::{Answer, Question, QuestionBank};
use crate::session::{SessionSnapshot, SessionState, TIMER_DURATION_SECS, Verdict};

//
// ─── OUTCOME ──────────────────────────────────────────────────────────────────
//

/// Classification of an accepted answer. Also names the cue to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

impl Outcome {
    #[must_use]
    pub fn from_correct(correct: bool) -> Self {
        if correct {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        }
    }

    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, Outcome::Correct)
    }
}

//
// ─── TRANSITION ───────────────────────────────────────────────────────────────
//

/// What a controller operation did to the session.
///
/// Illegal calls yield `Ignored` and leave the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Ignored,
    Ticked { remaining_seconds: u32 },
    Answered(Outcome),
    Advanced { index: usize, timed_out: bool },
    Ended { timed_out: bool },
    Restarted,
}

impl Transition {
    #[must_use]
    pub fn is_ignored(self) -> bool {
        matches!(self, Transition::Ignored)
    }

    /// The cue the presentation layer should play, if any.
    #[must_use]
    pub fn cue(self) -> Option<Outcome> {
        match self {
            Transition::Answered(outcome) => Some(outcome),
            _ => None,
        }
    }
}

//
// ─── SESSION ──────────────────────────────────────────────────────────────────
//

/// Quiz session controller.
///
/// Owns the [`SessionState`] of one run over a shared [`QuestionBank`] and
/// exposes the transitions of the quiz. Scheduling the per-second tick is
/// left to the host; `tick` is a plain state transition.
#[derive(Debug, Clone)]
pub struct QuizSession {
    bank: Arc<QuestionBank>,
    state: SessionState,
}

impl QuizSession {
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self {
            bank,
            state: SessionState::new(),
        }
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Number of questions in the run.
    #[must_use]
    pub fn total(&self) -> usize {
        self.bank.len()
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.state.ended
    }

    /// The question being asked, or `None` once the quiz has ended.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.state.ended {
            return None;
        }
        self.bank.get(self.state.current_index)
    }

    /// Outcome of the answer selected for the current question, if any.
    #[must_use]
    pub fn current_outcome(&self) -> Option<Outcome> {
        let question = self.current_question()?;
        let choice = self.state.selected_answer?;
        Some(Outcome::from_correct(question.is_correct(choice)))
    }

    /// One elapsed second.
    ///
    /// Counts the timer down and, when it reaches zero, moves on as if the
    /// player had run out of time. Runs whether or not an answer is selected.
    pub fn tick(&mut self) -> Transition {
        if self.state.ended {
            return Transition::Ignored;
        }

        self.state.remaining_seconds = self.state.remaining_seconds.saturating_sub(1);
        if self.state.remaining_seconds == 0 {
            return self.advance_inner(self.state.current_index, true);
        }

        Transition::Ticked {
            remaining_seconds: self.state.remaining_seconds,
        }
    }

    /// Record the player's answer for the current question.
    ///
    /// Only the first selection per question counts; later ones are ignored.
    /// The countdown keeps running after a selection.
    pub fn select_answer(&mut self, choice: Answer) -> Transition {
        if self.state.ended || self.state.selected_answer.is_some() {
            return Transition::Ignored;
        }
        let Some(question) = self.bank.get(self.state.current_index) else {
            return Transition::Ignored;
        };

        let outcome = Outcome::from_correct(question.is_correct(choice));
        self.state.selected_answer = Some(choice);
        self.state.last_outcome = Some(outcome);
        if outcome.is_correct() {
            self.state.score += 1;
        }

        Transition::Answered(outcome)
    }

    /// Move past the current question unconditionally.
    pub fn advance(&mut self) -> Transition {
        self.advance_from(self.state.current_index)
    }

    /// Move past question `index`, if it is still the current one.
    ///
    /// A request for an index the session has already left is a no-op, so a
    /// duplicated or late timeout can never skip a question.
    pub fn advance_from(&mut self, index: usize) -> Transition {
        self.advance_inner(index, false)
    }

    /// The player's "next question" request. Requires an answer first.
    pub fn request_next(&mut self) -> Transition {
        if self.state.selected_answer.is_none() {
            return Transition::Ignored;
        }
        self.advance()
    }

    pub fn restart(&mut self) -> Transition {
        self.state = SessionState::new();
        Transition::Restarted
    }

    #[must_use]
    pub fn final_verdict(&self) -> Verdict {
        Verdict::for_score(self.state.score, self.bank.len())
    }

    /// Owned view of everything the presentation layer renders.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let question = self.current_question();
        SessionSnapshot {
            current_index: self.state.current_index,
            total: self.bank.len(),
            remaining_seconds: self.state.remaining_seconds,
            score: self.state.score,
            selected_answer: self.state.selected_answer,
            outcome: self.current_outcome(),
            last_outcome: self.state.last_outcome,
            correct_answer: question.map(Question::answer),
            prompt: question.map(|q| q.prompt().to_string()),
            explanation: question.map(|q| q.explanation().to_string()),
            ended: self.state.ended,
            verdict: self.state.ended.then(|| self.final_verdict()),
        }
    }

    fn advance_inner(&mut self, index: usize, timed_out: bool) -> Transition {
        if self.state.ended || index != self.state.current_index {
            return Transition::Ignored;
        }

        self.state.selected_answer = None;
        self.state.remaining_seconds = TIMER_DURATION_SECS;

        let next = self.state.current_index + 1;
        if next < self.bank.len() {
            self.state.current_index = next;
            Transition::Advanced {
                index: next,
                timed_out,
            }
        } else {
            self.state.current_index = self.bank.len();
            self.state.ended = true;
            Transition::Ended { timed_out }
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn bank(answers: &[Answer]) -> Arc<QuestionBank> {
        let questions = answers
            .iter()
            .enumerate()
            .map(|(i, answer)| Question::new(format!("Q{i}"), *answer, format!("E{i}")))
            .collect();
        Arc::new(QuestionBank::new(questions).unwrap())
    }

    fn session(n: usize) -> QuizSession {
        QuizSession::new(bank(&vec![Answer::Fact; n]))
    }

    #[test]
    fn fresh_session_starts_at_zero() {
        for n in 1..=5 {
            let session = session(n);
            assert_eq!(session.state(), &SessionState::new());
            assert_eq!(session.state().score(), 0);
            assert_eq!(session.state().current_index(), 0);
            assert!(!session.is_ended());
            assert_eq!(session.state().remaining_seconds(), TIMER_DURATION_SECS);
        }
    }

    #[test]
    fn second_selection_is_ignored() {
        let mut session = session(2);
        assert_eq!(
            session.select_answer(Answer::Fact),
            Transition::Answered(Outcome::Correct)
        );
        let before = session.state().clone();

        assert_eq!(session.select_answer(Answer::Myth), Transition::Ignored);
        assert_eq!(session.select_answer(Answer::Fact), Transition::Ignored);
        assert_eq!(session.state(), &before);
        assert_eq!(session.state().score(), 1);
    }

    #[test]
    fn score_counts_first_accepted_answers() {
        let answers = [Answer::Myth, Answer::Fact, Answer::Fact, Answer::Myth];
        let picks = [Answer::Myth, Answer::Myth, Answer::Fact, Answer::Fact];
        let mut session = QuizSession::new(bank(&answers));

        for pick in picks {
            session.select_answer(pick);
            // A late change of mind must not count.
            session.select_answer(if pick == Answer::Myth {
                Answer::Fact
            } else {
                Answer::Myth
            });
            session.request_next();
        }

        assert!(session.is_ended());
        assert_eq!(session.state().score(), 2);
    }

    #[test]
    fn advancing_n_times_ends_the_quiz() {
        let n = 4;
        let mut session = session(n);
        for _ in 0..n - 1 {
            session.advance();
        }
        assert!(!session.is_ended());
        assert_eq!(session.state().current_index(), n - 1);

        assert_eq!(session.advance(), Transition::Ended { timed_out: false });
        assert!(session.is_ended());
        assert_eq!(session.state().current_index(), n);
        assert!(session.current_question().is_none());
        assert_eq!(session.advance(), Transition::Ignored);
    }

    #[test]
    fn full_countdown_triggers_one_timeout_advance() {
        let mut session = session(3);
        let mut advances = 0;
        for _ in 0..TIMER_DURATION_SECS {
            match session.tick() {
                Transition::Advanced { timed_out: true, .. } => advances += 1,
                Transition::Ticked { .. } => {}
                other => panic!("unexpected transition {other:?}"),
            }
        }

        assert_eq!(advances, 1);
        assert_eq!(session.state().current_index(), 1);
        assert_eq!(session.state().remaining_seconds(), TIMER_DURATION_SECS);
    }

    #[test]
    fn timer_keeps_running_after_an_answer() {
        let mut session = session(2);
        session.select_answer(Answer::Fact);
        assert_eq!(
            session.tick(),
            Transition::Ticked {
                remaining_seconds: TIMER_DURATION_SECS - 1
            }
        );

        for _ in 1..TIMER_DURATION_SECS {
            session.tick();
        }
        assert_eq!(session.state().current_index(), 1);
        assert_eq!(session.state().selected_answer(), None);
        assert_eq!(session.state().score(), 1);
    }

    #[test]
    fn timeout_on_last_question_ends_quiz() {
        let mut session = session(1);
        for _ in 0..TIMER_DURATION_SECS - 1 {
            session.tick();
        }
        assert_eq!(session.tick(), Transition::Ended { timed_out: true });
        assert_eq!(session.tick(), Transition::Ignored);
        assert_eq!(session.state().remaining_seconds(), TIMER_DURATION_SECS);
    }

    #[test]
    fn next_requires_an_answer() {
        let mut session = session(2);
        assert_eq!(session.request_next(), Transition::Ignored);
        assert_eq!(session.state().current_index(), 0);

        session.select_answer(Answer::Myth);
        assert_eq!(
            session.request_next(),
            Transition::Advanced {
                index: 1,
                timed_out: false
            }
        );
    }

    #[test]
    fn stale_advance_is_ignored() {
        let mut session = session(3);
        assert!(!session.advance_from(0).is_ignored());
        assert_eq!(session.advance_from(0), Transition::Ignored);
        assert_eq!(session.state().current_index(), 1);
        assert_eq!(session.advance_from(5), Transition::Ignored);
    }

    #[test]
    fn two_question_scenario_ends_with_try_again() {
        let mut session = QuizSession::new(bank(&[Answer::Myth, Answer::Fact]));

        assert_eq!(
            session.select_answer(Answer::Myth),
            Transition::Answered(Outcome::Correct)
        );
        session.advance();
        assert_eq!(
            session.select_answer(Answer::Myth),
            Transition::Answered(Outcome::Incorrect)
        );
        session.advance();

        assert_eq!(session.state().score(), 1);
        assert!(session.is_ended());
        assert_eq!(session.final_verdict(), Verdict::TryAgain);
    }

    #[test]
    fn restart_from_end_returns_initial_state() {
        let mut session = session(2);
        session.select_answer(Answer::Fact);
        session.advance();
        session.select_answer(Answer::Fact);
        session.advance();
        assert!(session.is_ended());
        assert_eq!(session.state().score(), 2);

        assert_eq!(session.restart(), Transition::Restarted);
        assert_eq!(session.state(), &SessionState::new());
        assert_eq!(session.state().last_outcome(), None);
    }

    #[test]
    fn last_outcome_survives_advance() {
        let mut session = session(3);
        session.select_answer(Answer::Myth);
        session.advance();

        assert_eq!(session.current_outcome(), None);
        assert_eq!(session.state().last_outcome(), Some(Outcome::Incorrect));
    }

    #[test]
    fn snapshot_reflects_current_question() {
        let mut session = QuizSession::new(bank(&[Answer::Myth, Answer::Fact]));
        session.select_answer(Answer::Fact);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.prompt.as_deref(), Some("Q0"));
        assert_eq!(snapshot.explanation.as_deref(), Some("E0"));
        assert_eq!(snapshot.correct_answer, Some(Answer::Myth));
        assert_eq!(snapshot.outcome, Some(Outcome::Incorrect));
        assert_eq!(snapshot.verdict, None);
        assert!((snapshot.progress_fraction() - 0.0).abs() < f64::EPSILON);

        session.advance();
        session.advance();
        let snapshot = session.snapshot();
        assert!(snapshot.ended);
        assert_eq!(snapshot.prompt, None);
        assert_eq!(snapshot.verdict, Some(Verdict::TryAgain));
        assert!((snapshot.progress_fraction() - 1.0).abs() < f64::EPSILON);
    }
}
