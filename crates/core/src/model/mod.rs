mod answer;
mod bank;
mod question;

pub use answer::Answer;
pub use bank::{QuestionBank, QuestionBankError};
pub use question::Question;
