//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown question id: {0}")]
    UnknownQuestion(String),

    #[error("Catalog contains no questions")]
    EmptyCatalog,
}

impl DomainError {
    /// Check if this error refers to an unknown question id
    pub fn is_unknown_question(&self) -> bool {
        matches!(self, DomainError::UnknownQuestion(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_question_display() {
        let error = DomainError::UnknownQuestion("favorite_airline".to_string());
        assert_eq!(error.to_string(), "Unknown question id: favorite_airline");
    }

    #[test]
    fn test_is_unknown_question_check() {
        assert!(DomainError::UnknownQuestion("x".to_string()).is_unknown_question());
        assert!(!DomainError::EmptyCatalog.is_unknown_question());
    }
}
