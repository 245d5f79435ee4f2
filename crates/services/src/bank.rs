use std::path::Path;

use quiz_core::model::{Question, QuestionBank};

use crate::error::BankLoadError;

/// The question set compiled into the binary.
pub const BUILTIN_QUESTIONS: &str = include_str!("../data/questions.json");

/// Parse a JSON array of questions, keeping file order.
///
/// # Errors
///
/// Returns `BankLoadError::Parse` for malformed JSON and
/// `BankLoadError::Invalid` when the list fails bank validation.
pub fn parse_bank(json: &str) -> Result<QuestionBank, BankLoadError> {
    let questions: Vec<Question> = serde_json::from_str(json)?;
    Ok(QuestionBank::new(questions)?)
}

/// Load the built-in question set.
///
/// # Errors
///
/// Only fails if the bundled file is broken.
pub fn load_builtin() -> Result<QuestionBank, BankLoadError> {
    parse_bank(BUILTIN_QUESTIONS)
}

/// Load a question set from a JSON file.
///
/// # Errors
///
/// Returns `BankLoadError::Read` if the file cannot be read, otherwise the
/// errors of [`parse_bank`].
pub fn load_from_path(path: &Path) -> Result<QuestionBank, BankLoadError> {
    let json = std::fs::read_to_string(path).map_err(|source| BankLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let bank = parse_bank(&json)?;
    tracing::info!(path = %path.display(), questions = bank.len(), "loaded question bank");
    Ok(bank)
}
