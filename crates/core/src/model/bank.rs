use thiserror::Error;

use crate::model::Question;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionBankError {
    #[error("question bank must contain at least one question")]
    Empty,

    #[error("question {index} has an empty prompt")]
    BlankPrompt { index: usize },

    #[error("question {index} has an empty explanation")]
    BlankExplanation { index: usize },
}

//
// ─── QUESTION BANK ────────────────────────────────────────────────────────────
//

/// Ordered, non-empty, immutable list of questions.
///
/// Order is the order in which questions are asked; it is never shuffled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Validate and wrap an ordered list of questions.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::Empty` if `questions` is empty, or a
    /// `Blank*` variant naming the first question with missing text.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionBankError> {
        if questions.is_empty() {
            return Err(QuestionBankError::Empty);
        }

        for (index, question) in questions.iter().enumerate() {
            if question.prompt().trim().is_empty() {
                return Err(QuestionBankError::BlankPrompt { index });
            }
            if question.explanation().trim().is_empty() {
                return Err(QuestionBankError::BlankExplanation { index });
            }
        }

        Ok(Self { questions })
    }

    /// Number of questions, always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always `false`; a bank holds at least one question.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}
