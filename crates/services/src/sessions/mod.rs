mod driver;
mod workflow;

// Public API of the quiz session subsystem.
pub use driver::{QuizDriver, QuizUpdate};
pub use workflow::{QuizIntent, QuizLoopService};
