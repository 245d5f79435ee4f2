use serde::{Deserialize, Serialize};

use crate::model::Answer;

/// A single myth-or-fact statement with its correct answer.
///
/// The serialized form uses the field names of the bundled question files:
/// `{ "question": ..., "answer": "Myth" | "Fact", "explanation": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    prompt: String,
    answer: Answer,
    explanation: String,
}

impl Question {
    #[must_use]
    pub fn new(prompt: impl Into<String>, answer: Answer, explanation: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer,
            explanation: explanation.into(),
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn answer(&self) -> Answer {
        self.answer
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn is_correct(&self, choice: Answer) -> bool {
        self.answer == choice
    }
}
