//! Question identifier value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identifier of a single question (Value Object)
///
/// A non-empty lowercase hex token. It doubles as the persistence key, so a
/// record can only be constructed once an id has been found.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuestionId(String);

impl QuestionId {
    /// Try to create an id, returning None if it is empty or not lowercase hex
    pub fn try_new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if !value.is_empty() && value.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for QuestionId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s).ok_or_else(|| DomainError::InvalidQuestionId(s.to_string()))
    }
}

impl TryFrom<String> for QuestionId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<QuestionId> for String {
    fn from(id: QuestionId) -> Self {
        id.0
    }
}

impl AsRef<str> for QuestionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_valid() {
        let id = QuestionId::try_new("ab12").unwrap();
        assert_eq!(id.as_str(), "ab12");
        assert_eq!(id.to_string(), "ab12");
    }

    #[test]
    fn test_try_new_rejects_empty() {
        assert!(QuestionId::try_new("").is_none());
    }

    #[test]
    fn test_try_new_rejects_non_hex() {
        assert!(QuestionId::try_new("AB12").is_none());
        assert!(QuestionId::try_new("xyz").is_none());
        assert!(QuestionId::try_new("ab 12").is_none());
    }

    #[test]
    fn test_from_str_error() {
        let err = "nope".parse::<QuestionId>().unwrap_err();
        assert_eq!(err, DomainError::InvalidQuestionId("nope".to_string()));
    }

    #[test]
    fn test_serde_as_plain_string() {
        let id = QuestionId::try_new("0f3c").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"0f3c\"");

        let parsed: QuestionId = serde_json::from_str("\"0f3c\"").unwrap();
        assert_eq!(parsed, id);

        assert!(serde_json::from_str::<QuestionId>("\"\"").is_err());
    }
}
