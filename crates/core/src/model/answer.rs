use serde::{Deserialize, Serialize};
use std::fmt;

//
// ─── ANSWER ───────────────────────────────────────────────────────────────────
//

/// The two possible answers to every question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Answer {
    /// The statement is false.
    Myth,
    /// The statement is true.
    Fact,
}

impl Answer {
    /// Both answers in display order.
    pub const ALL: [Answer; 2] = [Answer::Myth, Answer::Fact];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Answer::Myth => "Myth",
            Answer::Fact => "Fact",
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
