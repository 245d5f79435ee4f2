#![forbid(unsafe_code)]

pub mod model;
pub mod session;

pub use session::{
    Outcome, QuizSession, SessionSnapshot, SessionState, TIMER_DURATION_SECS, Transition,
    Verdict,
};
