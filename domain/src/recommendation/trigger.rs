//! Trigger predicates for recommendation rules
//!
//! A [`Trigger`] is a small boolean expression over a [`ResponseSet`].
//! Evaluation is pure: it only reads the responses and never fails.
//! A comparison against an unanswered question is `false`, so
//! `Not(Equals(..))` holds when the question was skipped.

use crate::quiz::answer::{AnswerValue, ResponseSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Boolean condition deciding whether a recommendation applies
///
/// # Example
///
/// ```
/// use aah_domain::recommendation::Trigger;
/// use aah_domain::ResponseSet;
///
/// let trigger = Trigger::any([
///     Trigger::is_true("falls"),
///     Trigger::not_equals("bathroom", "roll_in_shower"),
/// ]);
///
/// let responses: ResponseSet = [("bathroom", "roll_in_shower")].into_iter().collect();
/// assert!(!trigger.evaluate(&responses));
///
/// // An unanswered bathroom question is "not roll-in"
/// assert!(trigger.evaluate(&ResponseSet::new()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Trigger {
    /// Boolean question answered "yes"
    IsTrue { question: String },
    /// Answer equals the given value
    Equals { question: String, value: AnswerValue },
    /// Choice answer includes the given option value
    Includes { question: String, value: String },
    Not { trigger: Box<Trigger> },
    /// Every inner trigger holds (true when empty)
    All { triggers: Vec<Trigger> },
    /// At least one inner trigger holds (false when empty)
    Any { triggers: Vec<Trigger> },
}

impl Trigger {
    pub fn is_true(question: impl Into<String>) -> Self {
        Trigger::IsTrue {
            question: question.into(),
        }
    }

    pub fn equals(question: impl Into<String>, value: impl Into<AnswerValue>) -> Self {
        Trigger::Equals {
            question: question.into(),
            value: value.into(),
        }
    }

    pub fn not_equals(question: impl Into<String>, value: impl Into<AnswerValue>) -> Self {
        Trigger::negate(Trigger::equals(question, value))
    }

    pub fn includes(question: impl Into<String>, value: impl Into<String>) -> Self {
        Trigger::Includes {
            question: question.into(),
            value: value.into(),
        }
    }

    pub fn negate(trigger: Trigger) -> Self {
        Trigger::Not {
            trigger: Box::new(trigger),
        }
    }

    pub fn all(triggers: impl IntoIterator<Item = Trigger>) -> Self {
        Trigger::All {
            triggers: triggers.into_iter().collect(),
        }
    }

    pub fn any(triggers: impl IntoIterator<Item = Trigger>) -> Self {
        Trigger::Any {
            triggers: triggers.into_iter().collect(),
        }
    }

    /// Evaluate against a set of responses
    pub fn evaluate(&self, responses: &ResponseSet) -> bool {
        match self {
            Trigger::IsTrue { question } => {
                responses.get(question).and_then(AnswerValue::as_bool) == Some(true)
            }
            Trigger::Equals { question, value } => responses.get(question) == Some(value),
            Trigger::Includes { question, value } => responses
                .get(question)
                .is_some_and(|answer| answer.includes(value)),
            Trigger::Not { trigger } => !trigger.evaluate(responses),
            Trigger::All { triggers } => triggers.iter().all(|t| t.evaluate(responses)),
            Trigger::Any { triggers } => triggers.iter().any(|t| t.evaluate(responses)),
        }
    }

    /// Question ids this trigger reads
    pub fn questions(&self) -> BTreeSet<&str> {
        let mut ids = BTreeSet::new();
        self.collect_questions(&mut ids);
        ids
    }

    fn collect_questions<'a>(&'a self, ids: &mut BTreeSet<&'a str>) {
        match self {
            Trigger::IsTrue { question }
            | Trigger::Equals { question, .. }
            | Trigger::Includes { question, .. } => {
                ids.insert(question);
            }
            Trigger::Not { trigger } => trigger.collect_questions(ids),
            Trigger::All { triggers } | Trigger::Any { triggers } => {
                for t in triggers {
                    t.collect_questions(ids);
                }
            }
        }
    }
}

impl std::fmt::Display for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trigger::IsTrue { question } => write!(f, "{} = yes", question),
            Trigger::Equals { question, value } => write!(f, "{} = {}", question, value),
            Trigger::Includes { question, value } => write!(f, "{} includes {}", question, value),
            Trigger::Not { trigger } => match trigger.as_ref() {
                Trigger::Equals { question, value } => write!(f, "{} != {}", question, value),
                inner => write!(f, "not ({})", inner),
            },
            Trigger::All { triggers } => write_joined(f, triggers, " and "),
            Trigger::Any { triggers } => write_joined(f, triggers, " or "),
        }
    }
}

fn write_joined(
    f: &mut std::fmt::Formatter<'_>,
    triggers: &[Trigger],
    separator: &str,
) -> std::fmt::Result {
    for (i, t) in triggers.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        match t {
            Trigger::All { .. } | Trigger::Any { .. } => write!(f, "({})", t)?,
            _ => write!(f, "{}", t)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn responses(pairs: &[(&str, AnswerValue)]) -> ResponseSet {
        pairs.iter().cloned().collect()
    }

    #[test]
    fn test_is_true() {
        let trigger = Trigger::is_true("stairs");
        assert!(trigger.evaluate(&responses(&[("stairs", true.into())])));
        assert!(!trigger.evaluate(&responses(&[("stairs", false.into())])));
        assert!(!trigger.evaluate(&ResponseSet::new()));
    }

    #[test]
    fn test_is_true_ignores_mismatched_type() {
        let trigger = Trigger::is_true("stairs");
        assert!(!trigger.evaluate(&responses(&[("stairs", "true".into())])));
    }

    #[test]
    fn test_equals_unanswered_is_false() {
        let trigger = Trigger::equals("bathroom", "tub_shower");
        assert!(!trigger.evaluate(&ResponseSet::new()));
        assert!(trigger.evaluate(&responses(&[("bathroom", "tub_shower".into())])));
    }

    #[test]
    fn test_not_equals_unanswered_is_true() {
        let trigger = Trigger::not_equals("bathroom", "roll_in_shower");
        assert!(trigger.evaluate(&ResponseSet::new()));
        assert!(!trigger.evaluate(&responses(&[("bathroom", "roll_in_shower".into())])));
    }

    #[test]
    fn test_includes() {
        let trigger = Trigger::includes("rooms", "kitchen");
        let many: AnswerValue = vec!["garage".to_string(), "kitchen".to_string()].into();
        assert!(trigger.evaluate(&responses(&[("rooms", many)])));
        assert!(!trigger.evaluate(&ResponseSet::new()));
    }

    #[test]
    fn test_empty_combinators() {
        assert!(Trigger::all([]).evaluate(&ResponseSet::new()));
        assert!(!Trigger::any([]).evaluate(&ResponseSet::new()));
    }

    #[test]
    fn test_evaluate_does_not_mutate() {
        let r = responses(&[("falls", true.into())]);
        let before = r.clone();
        Trigger::any([Trigger::is_true("falls"), Trigger::is_true("stairs")]).evaluate(&r);
        assert_eq!(r, before);
    }

    #[test]
    fn test_questions() {
        let trigger = Trigger::any([
            Trigger::equals("bathroom", "tub_shower"),
            Trigger::equals("bathroom", "walk_in_shower"),
            Trigger::is_true("falls"),
        ]);
        let ids: Vec<&str> = trigger.questions().into_iter().collect();
        assert_eq!(ids, vec!["bathroom", "falls"]);
    }

    #[test]
    fn test_display() {
        let trigger = Trigger::any([
            Trigger::is_true("falls"),
            Trigger::not_equals("bathroom", "roll_in_shower"),
        ]);
        assert_eq!(trigger.to_string(), "falls = yes or bathroom != roll_in_shower");
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_value(Trigger::is_true("stairs")).unwrap();
        assert_eq!(json, serde_json::json!({"op": "is_true", "question": "stairs"}));
    }
}
