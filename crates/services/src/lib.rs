#![forbid(unsafe_code)]

pub mod bank;
pub mod error;
pub mod sessions;
pub mod timer;

pub use bank::{BUILTIN_QUESTIONS, load_builtin, load_from_path, parse_bank};
pub use error::BankLoadError;
pub use timer::{TICK_PERIOD, Tick, TickTimer, TimerHandle};

pub use sessions::{QuizDriver, QuizIntent, QuizLoopService, QuizUpdate};
