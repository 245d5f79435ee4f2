mod controller;
mod snapshot;
mod state;
mod verdict;

pub use controller::{Outcome, QuizSession, Transition};
pub use snapshot::SessionSnapshot;
pub use state::{SessionState, TIMER_DURATION_SECS};
pub use verdict::Verdict;
