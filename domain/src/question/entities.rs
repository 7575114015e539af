//! Question entity
//!
//! A [`Question`] is built once per detected block and never changed by the
//! core afterwards. Fields are private; the builder methods are only used
//! while the record is being assembled.
//!
//! # Defaults
//!
//! Missing fields fall back to two different sentinels, and callers must
//! keep them apart:
//!
//! | Field | Missing value |
//! |-------|---------------|
//! | `test`, `domain`, `skill` | [`UNKNOWN_LABEL`] |
//! | `difficulty`, `correct_answer`, `rationale`, `passage`, `prompt` | `""` |
//!
//! An empty `difficulty` means "unset" and is not equal to `"Unknown"`.

use super::value_objects::QuestionId;
use serde::{Deserialize, Serialize};

/// Label used for `test`, `domain` and `skill` when their markers are absent.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// One labeled answer choice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    /// Option letter, `A` through `D`
    pub value: String,
    /// Display text in the form `"{value}. {rest}"`
    pub text: String,
}

impl QuestionOption {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }
}

/// A structured exam question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    id: QuestionId,
    test: String,
    domain: String,
    skill: String,
    difficulty: String,
    passage: String,
    prompt: String,
    options: Vec<QuestionOption>,
    correct_answer: String,
    rationale: String,
}

impl Question {
    /// Create a question with every field at its documented default
    pub fn new(id: QuestionId) -> Self {
        Self {
            id,
            test: UNKNOWN_LABEL.to_string(),
            domain: UNKNOWN_LABEL.to_string(),
            skill: UNKNOWN_LABEL.to_string(),
            difficulty: String::new(),
            passage: String::new(),
            prompt: String::new(),
            options: Vec::new(),
            correct_answer: String::new(),
            rationale: String::new(),
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_test(mut self, test: impl Into<String>) -> Self {
        self.test = test.into();
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skill = skill.into();
        self
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = difficulty.into();
        self
    }

    pub fn with_passage(mut self, passage: impl Into<String>) -> Self {
        self.passage = passage.into();
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Set the options, dropping entries whose letter is empty
    pub fn with_options(mut self, options: Vec<QuestionOption>) -> Self {
        self.options = options.into_iter().filter(|o| !o.value.is_empty()).collect();
        self
    }

    pub fn with_correct_answer(mut self, answer: impl Into<String>) -> Self {
        self.correct_answer = answer.into();
        self
    }

    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = rationale.into();
        self
    }

    // ==================== Accessors ====================

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn test(&self) -> &str {
        &self.test
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn skill(&self) -> &str {
        &self.skill
    }

    pub fn difficulty(&self) -> &str {
        &self.difficulty
    }

    pub fn passage(&self) -> &str {
        &self.passage
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[QuestionOption] {
        &self.options
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    pub fn rationale(&self) -> &str {
        &self.rationale
    }

    // ==================== Queries ====================

    /// Difficulty, or None when unset
    pub fn difficulty_label(&self) -> Option<&str> {
        (!self.difficulty.is_empty()).then_some(self.difficulty.as_str())
    }

    pub fn has_correct_answer(&self) -> bool {
        !self.correct_answer.is_empty()
    }

    /// The option whose letter matches the correct answer, if both exist
    pub fn correct_option(&self) -> Option<&QuestionOption> {
        if !self.has_correct_answer() {
            return None;
        }
        self.options.iter().find(|o| o.value == self.correct_answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> QuestionId {
        QuestionId::try_new(s).unwrap()
    }

    #[test]
    fn test_new_uses_asymmetric_defaults() {
        let q = Question::new(id("ab12"));
        assert_eq!(q.test(), UNKNOWN_LABEL);
        assert_eq!(q.domain(), UNKNOWN_LABEL);
        assert_eq!(q.skill(), UNKNOWN_LABEL);
        assert_eq!(q.difficulty(), "");
        assert_ne!(q.difficulty(), UNKNOWN_LABEL);
        assert!(q.difficulty_label().is_none());
        assert!(!q.has_correct_answer());
    }

    #[test]
    fn test_with_options_drops_empty_letters() {
        let q = Question::new(id("ab12")).with_options(vec![
            QuestionOption::new("A", "A. one"),
            QuestionOption::new("", ". stray"),
            QuestionOption::new("B", "B. two"),
        ]);
        let values: Vec<_> = q.options().iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["A", "B"]);
    }

    #[test]
    fn test_correct_option_lookup() {
        let q = Question::new(id("ab12"))
            .with_options(vec![
                QuestionOption::new("A", "A. one"),
                QuestionOption::new("B", "B. two"),
            ])
            .with_correct_answer("B");
        assert_eq!(q.correct_option().map(|o| o.text.as_str()), Some("B. two"));

        let missing = Question::new(id("ab12")).with_correct_answer("C");
        assert!(missing.correct_option().is_none());
    }

    #[test]
    fn test_serialize_camel_case_keys() {
        let q = Question::new(id("ab12")).with_correct_answer("C");
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["id"], "ab12");
        assert_eq!(json["correctAnswer"], "C");
        assert_eq!(json["difficulty"], "");
        assert_eq!(json["test"], "Unknown");
    }

    #[test]
    fn test_deserialize_round_trip() {
        let q = Question::new(id("ab12")).with_prompt("What is X?");
        let json = serde_json::to_string(&q).unwrap();
        let back: Question = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);
    }
}
