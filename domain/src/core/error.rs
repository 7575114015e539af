//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// The extraction functions themselves are total and never return these;
/// they surface only when a caller builds a value object from untrusted
/// input (e.g. reading records back from a sink).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question id: {0:?} (expected lowercase hex)")]
    InvalidQuestionId(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_question_id_display() {
        let error = DomainError::InvalidQuestionId("XYZ".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid question id: \"XYZ\" (expected lowercase hex)"
        );
    }
}
