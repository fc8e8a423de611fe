//! Engine error types.
//!
//! Submissions and toggles are user-correctable events, so these errors carry
//! enough detail for a host to explain the rejection. Neither variant leaves
//! a partially updated answer sequence behind.

use thiserror::Error;

/// A submitted answer was rejected before weights were recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The answer text was empty.
    #[error("answer text must not be empty")]
    EmptyText,

    /// The grade is not one of the four known grades.
    #[error("unknown grade: {0} (expected TRUE, PARTIALLY_TRUE, PARTIALLY_FALSE or FALSE)")]
    UnknownGrade(String),
}

/// Errors raised while applying an event to the answer store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The submitted answer failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A toggle referenced an answer that does not exist.
    #[error("answer {index} not found ({len} answers)")]
    AnswerNotFound { index: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_converts_into_store_error() {
        let err: StoreError = ValidationError::EmptyText.into();
        assert_eq!(err, StoreError::Validation(ValidationError::EmptyText));
        assert_eq!(err.to_string(), "answer text must not be empty");
    }

    #[test]
    fn not_found_message() {
        let err = StoreError::AnswerNotFound { index: 3, len: 2 };
        assert_eq!(err.to_string(), "answer 3 not found (2 answers)");
    }
}
