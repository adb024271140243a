//! Built-in catalogs
//!
//! All catalogs are immutable data built once at startup. [`Catalog`]
//! bundles them so a session can be handed a single value.

mod guidance;
mod questions;
mod recommendations;
mod resources;

pub use guidance::professional_guidance;
pub use questions::quiz_questions;
pub use recommendations::{plan_goal, recommendations};
pub use resources::resources;

use crate::guidance::ProfessionalGuidance;
use crate::quiz::question::QuizQuestion;
use crate::recommendation::rule::RecommendationRule;
use crate::resource::record::ResourceRecord;
use std::collections::HashSet;
use thiserror::Error;

/// A consistency problem in a catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    #[error("question id '{0}' is defined more than once")]
    DuplicateQuestion(String),

    #[error("recommendation id '{0}' is defined more than once")]
    DuplicateRecommendation(String),

    #[error("resource id '{0}' is defined more than once")]
    DuplicateResource(String),

    #[error("recommendation '{rule}' reads undefined question '{question}'")]
    UnknownTriggerQuestion { rule: String, question: String },
}

/// Every catalog a session reads from
#[derive(Debug, Clone)]
pub struct Catalog {
    pub questions: Vec<QuizQuestion>,
    pub recommendations: Vec<RecommendationRule>,
    pub resources: Vec<ResourceRecord>,
    pub guidance: Vec<ProfessionalGuidance>,
}

impl Catalog {
    /// The catalog shipped with the application
    pub fn builtin() -> Self {
        Self {
            questions: quiz_questions(),
            recommendations: recommendations(),
            resources: resources(),
            guidance: professional_guidance(),
        }
    }

    pub fn question(&self, id: &str) -> Option<&QuizQuestion> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Check id uniqueness and that every trigger reads a defined question
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();

        let mut seen = HashSet::new();
        for q in &self.questions {
            if !seen.insert(q.id.as_str()) {
                issues.push(CatalogIssue::DuplicateQuestion(q.id.clone()));
            }
        }
        let question_ids = seen;

        let mut seen = HashSet::new();
        for rule in &self.recommendations {
            if !seen.insert(rule.id.as_str()) {
                issues.push(CatalogIssue::DuplicateRecommendation(rule.id.clone()));
            }
            for question in rule.trigger.questions() {
                if !question_ids.contains(question) {
                    issues.push(CatalogIssue::UnknownTriggerQuestion {
                        rule: rule.id.clone(),
                        question: question.to_string(),
                    });
                }
            }
        }

        let mut seen = HashSet::new();
        for resource in &self.resources {
            if !seen.insert(resource.id.as_str()) {
                issues.push(CatalogIssue::DuplicateResource(resource.id.clone()));
            }
        }

        issues
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::trigger::Trigger;

    #[test]
    fn test_builtin_catalog_is_consistent() {
        assert!(Catalog::builtin().validate().is_empty());
    }

    #[test]
    fn test_builtin_sizes_and_order() {
        let catalog = Catalog::builtin();
        let question_ids: Vec<&str> = catalog.questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(
            question_ids,
            vec!["stairs", "falls", "bathroom", "lighting", "flooring", "entryway"]
        );
        assert_eq!(catalog.recommendations.len(), 6);
        assert_eq!(catalog.resources.len(), 4);
        assert_eq!(catalog.guidance.len(), 2);
    }

    #[test]
    fn test_question_lookup() {
        let catalog = Catalog::builtin();
        assert!(catalog.question("bathroom").is_some());
        assert!(catalog.question("pets").is_none());
    }

    #[test]
    fn test_validate_reports_unknown_question_and_duplicates() {
        let mut catalog = Catalog::builtin();
        let mut rule = catalog.recommendations[0].clone();
        rule.trigger = Trigger::is_true("pool");
        catalog.recommendations.push(rule);

        let issues = catalog.validate();
        assert!(issues.contains(&CatalogIssue::DuplicateRecommendation(
            "remove_rugs".to_string()
        )));
        assert!(issues.contains(&CatalogIssue::UnknownTriggerQuestion {
            rule: "remove_rugs".to_string(),
            question: "pool".to_string(),
        }));
    }
}
