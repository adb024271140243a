//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown question: {0}")]
    UnknownQuestion(String),

    #[error("Question '{question}' expects {expected} answer")]
    AnswerTypeMismatch {
        question: String,
        expected: &'static str,
    },

    #[error("'{value}' is not an option of question '{question}'")]
    InvalidOption { question: String, value: String },

    #[error("Unknown language: {0}. Valid: en, es")]
    UnknownLanguage(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

impl DomainError {
    /// Check if this error was caused by an answer that does not fit its question
    pub fn is_invalid_answer(&self) -> bool {
        matches!(
            self,
            DomainError::AnswerTypeMismatch { .. } | DomainError::InvalidOption { .. }
        )
    }
}
