//! Quiz question entity

use super::answer::AnswerValue;
use crate::core::error::DomainError;
use crate::core::language::{Language, LocalizedText};
use serde::{Deserialize, Serialize};

/// One selectable option of a choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// Stored answer value (stable across languages)
    pub value: String,
    pub label: LocalizedText,
}

impl ChoiceOption {
    pub fn new(value: impl Into<String>, label: LocalizedText) -> Self {
        Self {
            value: value.into(),
            label,
        }
    }
}

/// Answer type of a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "options", rename_all = "kebab-case")]
pub enum QuestionKind {
    Boolean,
    SingleChoice(Vec<ChoiceOption>),
    MultipleChoice(Vec<ChoiceOption>),
}

impl QuestionKind {
    /// Short description of the expected answer, used in error messages
    pub fn expected(&self) -> &'static str {
        match self {
            QuestionKind::Boolean => "a yes/no",
            QuestionKind::SingleChoice(_) => "a single-choice",
            QuestionKind::MultipleChoice(_) => "a multiple-choice",
        }
    }

    pub fn options(&self) -> &[ChoiceOption] {
        match self {
            QuestionKind::Boolean => &[],
            QuestionKind::SingleChoice(options) | QuestionKind::MultipleChoice(options) => options,
        }
    }
}

/// A quiz question (Entity)
///
/// Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub text: LocalizedText,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

impl QuizQuestion {
    pub fn boolean(id: impl Into<String>, text: LocalizedText) -> Self {
        Self {
            id: id.into(),
            text,
            kind: QuestionKind::Boolean,
        }
    }

    pub fn single_choice(
        id: impl Into<String>,
        text: LocalizedText,
        options: Vec<ChoiceOption>,
    ) -> Self {
        Self {
            id: id.into(),
            text,
            kind: QuestionKind::SingleChoice(options),
        }
    }

    pub fn multiple_choice(
        id: impl Into<String>,
        text: LocalizedText,
        options: Vec<ChoiceOption>,
    ) -> Self {
        Self {
            id: id.into(),
            text,
            kind: QuestionKind::MultipleChoice(options),
        }
    }

    pub fn prompt(&self, language: Language) -> &str {
        self.text.get(language)
    }

    pub fn option(&self, value: &str) -> Option<&ChoiceOption> {
        self.kind.options().iter().find(|o| o.value == value)
    }

    /// Check that an answer fits this question's declared type
    pub fn validate(&self, answer: &AnswerValue) -> Result<(), DomainError> {
        let mismatch = || DomainError::AnswerTypeMismatch {
            question: self.id.clone(),
            expected: self.kind.expected(),
        };

        match (&self.kind, answer) {
            (QuestionKind::Boolean, AnswerValue::Bool(_)) => Ok(()),
            (QuestionKind::SingleChoice(_), AnswerValue::Choice(value)) => {
                self.require_option(value)
            }
            (QuestionKind::MultipleChoice(_), AnswerValue::Choices(values)) => {
                values.iter().try_for_each(|v| self.require_option(v))
            }
            _ => Err(mismatch()),
        }
    }

    fn require_option(&self, value: &str) -> Result<(), DomainError> {
        if self.option(value).is_some() {
            Ok(())
        } else {
            Err(DomainError::InvalidOption {
                question: self.id.clone(),
                value: value.to_string(),
            })
        }
    }

    /// Parse free-form user input into an answer for this question
    ///
    /// Booleans accept yes/no in either language (`y`, `si`, `true`, ...).
    /// Choice options may be given by value or by 1-based position;
    /// multiple-choice input is comma separated.
    pub fn parse_answer(&self, input: &str) -> Result<AnswerValue, DomainError> {
        let input = input.trim();
        let answer = match &self.kind {
            QuestionKind::Boolean => match input.to_lowercase().as_str() {
                "y" | "yes" | "true" | "s" | "si" | "sí" => AnswerValue::Bool(true),
                "n" | "no" | "false" => AnswerValue::Bool(false),
                _ => {
                    return Err(DomainError::AnswerTypeMismatch {
                        question: self.id.clone(),
                        expected: self.kind.expected(),
                    });
                }
            },
            QuestionKind::SingleChoice(_) => AnswerValue::Choice(self.resolve_option(input)?),
            QuestionKind::MultipleChoice(_) => AnswerValue::Choices(
                input
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(|s| self.resolve_option(s))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
        };
        self.validate(&answer)?;
        Ok(answer)
    }

    fn resolve_option(&self, input: &str) -> Result<String, DomainError> {
        let options = self.kind.options();
        if let Ok(position) = input.parse::<usize>()
            && let Some(option) = position.checked_sub(1).and_then(|i| options.get(i))
        {
            return Ok(option.value.clone());
        }
        self.require_option(input)?;
        Ok(input.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bathroom() -> QuizQuestion {
        QuizQuestion::single_choice(
            "bathroom",
            LocalizedText::new("Bathroom?", "¿Baño?"),
            vec![
                ChoiceOption::new("tub_shower", LocalizedText::new("Tub", "Bañera")),
                ChoiceOption::new("roll_in_shower", LocalizedText::new("Roll-in", "Sin escalón")),
            ],
        )
    }

    fn stairs() -> QuizQuestion {
        QuizQuestion::boolean("stairs", LocalizedText::new("Stairs?", "¿Escaleras?"))
    }

    #[test]
    fn test_validate_boolean() {
        assert!(stairs().validate(&AnswerValue::Bool(true)).is_ok());
        assert_eq!(
            stairs().validate(&AnswerValue::from("yes")),
            Err(DomainError::AnswerTypeMismatch {
                question: "stairs".to_string(),
                expected: "a yes/no",
            })
        );
    }

    #[test]
    fn test_validate_single_choice() {
        let q = bathroom();
        assert!(q.validate(&AnswerValue::from("tub_shower")).is_ok());
        assert!(matches!(
            q.validate(&AnswerValue::from("sauna")),
            Err(DomainError::InvalidOption { .. })
        ));
        assert!(q.validate(&AnswerValue::Bool(true)).is_err());
    }

    #[test]
    fn test_parse_boolean_in_both_languages() {
        let q = stairs();
        assert_eq!(q.parse_answer("Y").unwrap(), AnswerValue::Bool(true));
        assert_eq!(q.parse_answer("sí").unwrap(), AnswerValue::Bool(true));
        assert_eq!(q.parse_answer("no").unwrap(), AnswerValue::Bool(false));
        assert!(q.parse_answer("maybe").is_err());
    }

    #[test]
    fn test_parse_choice_by_position_or_value() {
        let q = bathroom();
        assert_eq!(q.parse_answer("2").unwrap(), AnswerValue::from("roll_in_shower"));
        assert_eq!(q.parse_answer("tub_shower").unwrap(), AnswerValue::from("tub_shower"));
        assert!(q.parse_answer("3").is_err());
        assert!(q.parse_answer("0").is_err());
    }

    #[test]
    fn test_parse_multiple_choice() {
        let q = QuizQuestion::multiple_choice(
            "rooms",
            LocalizedText::new("Rooms?", "¿Cuartos?"),
            vec![
                ChoiceOption::new("kitchen", LocalizedText::new("Kitchen", "Cocina")),
                ChoiceOption::new("garage", LocalizedText::new("Garage", "Garaje")),
            ],
        );
        assert_eq!(
            q.parse_answer("1, garage").unwrap(),
            AnswerValue::Choices(vec!["kitchen".to_string(), "garage".to_string()])
        );
        assert!(q.parse_answer("kitchen,attic").is_err());
    }

    #[test]
    fn test_question_serializes_with_type_tag() {
        let json = serde_json::to_value(stairs()).unwrap();
        assert_eq!(json["type"], "boolean");
        let json = serde_json::to_value(bathroom()).unwrap();
        assert_eq!(json["type"], "single-choice");
        assert_eq!(json["options"][0]["value"], "tub_shower");
    }
}
