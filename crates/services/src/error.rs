//! Shared error types for the services crate.

use std::path::PathBuf;

use quiz_core::model::QuestionBankError;
use thiserror::Error;

/// Errors emitted while loading a question bank.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankLoadError {
    #[error("failed to read question file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("question file is not valid JSON")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] QuestionBankError),
}
