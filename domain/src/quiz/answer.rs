//! Answer values and the response set

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single answer to a quiz question (Value Object)
///
/// Serialized untagged so a [`ResponseSet`] round-trips as a flat JSON
/// object: `{"stairs": true, "bathroom": "tub_shower"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Yes/no answer to a boolean question
    Bool(bool),
    /// Option value of a single-choice question
    Choice(String),
    /// Option values of a multiple-choice question
    Choices(Vec<String>),
}

impl AnswerValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AnswerValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_choice(&self) -> Option<&str> {
        match self {
            AnswerValue::Choice(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_choices(&self) -> Option<&[String]> {
        match self {
            AnswerValue::Choices(values) => Some(values),
            _ => None,
        }
    }

    /// Whether this answer includes the given option value
    ///
    /// A single choice includes only itself; booleans include nothing.
    pub fn includes(&self, value: &str) -> bool {
        match self {
            AnswerValue::Bool(_) => false,
            AnswerValue::Choice(choice) => choice == value,
            AnswerValue::Choices(choices) => choices.iter().any(|c| c == value),
        }
    }
}

impl std::fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerValue::Bool(true) => write!(f, "yes"),
            AnswerValue::Bool(false) => write!(f, "no"),
            AnswerValue::Choice(value) => write!(f, "{}", value),
            AnswerValue::Choices(values) => write!(f, "{}", values.join(", ")),
        }
    }
}

impl From<bool> for AnswerValue {
    fn from(b: bool) -> Self {
        AnswerValue::Bool(b)
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        AnswerValue::Choice(s.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        AnswerValue::Choice(s)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(values: Vec<String>) -> Self {
        AnswerValue::Choices(values)
    }
}

/// The user's current quiz answers, keyed by question id
///
/// Absent keys mean "unanswered". Keys for questions that no longer exist
/// are kept as-is and never referenced by current triggers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet {
    answers: BTreeMap<String, AnswerValue>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.answers.get(question_id)
    }

    /// Upsert one answer, returning the previous one if any
    pub fn insert(
        &mut self,
        question_id: impl Into<String>,
        value: impl Into<AnswerValue>,
    ) -> Option<AnswerValue> {
        self.answers.insert(question_id.into(), value.into())
    }

    pub fn remove(&mut self, question_id: &str) -> Option<AnswerValue> {
        self.answers.remove(question_id)
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    pub fn is_answered(&self, question_id: &str) -> bool {
        self.answers.contains_key(question_id)
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.answers.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<AnswerValue>> FromIterator<(K, V)> for ResponseSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            answers: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_json_shape() {
        let mut responses = ResponseSet::new();
        responses.insert("stairs", true);
        responses.insert("bathroom", "tub_shower");

        let json = serde_json::to_string(&responses).unwrap();
        assert_eq!(json, r#"{"bathroom":"tub_shower","stairs":true}"#);
    }

    #[test]
    fn test_deserialize_mixed_values() {
        let responses: ResponseSet =
            serde_json::from_str(r#"{"falls":false,"bathroom":"roll_in_shower","rooms":["a","b"]}"#)
                .unwrap();

        assert_eq!(responses.get("falls"), Some(&AnswerValue::Bool(false)));
        assert_eq!(
            responses.get("bathroom").and_then(|a| a.as_choice()),
            Some("roll_in_shower")
        );
        assert_eq!(responses.get("rooms").and_then(|a| a.as_choices()).map(|c| c.len()), Some(2));
    }

    #[test]
    fn test_insert_overwrites() {
        let mut responses = ResponseSet::new();
        assert!(responses.insert("stairs", true).is_none());
        assert_eq!(responses.insert("stairs", false), Some(AnswerValue::Bool(true)));
        assert_eq!(responses.len(), 1);
    }

    #[test]
    fn test_includes() {
        assert!(AnswerValue::from("tub_shower").includes("tub_shower"));
        assert!(!AnswerValue::from(true).includes("true"));
        let many = AnswerValue::from(vec!["kitchen".to_string(), "bath".to_string()]);
        assert!(many.includes("bath"));
        assert!(!many.includes("garage"));
    }

    #[test]
    fn test_display() {
        assert_eq!(AnswerValue::Bool(true).to_string(), "yes");
        assert_eq!(AnswerValue::Bool(false).to_string(), "no");
        assert_eq!(AnswerValue::from("walk_in_shower").to_string(), "walk_in_shower");
    }
}
