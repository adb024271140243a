//! Build Report use case.
//!
//! Matches the user's answers against the recommendation catalog and
//! resolves everything into one language, ready for display. An empty
//! recommendation list is a normal outcome ("nothing urgent"), not an error.

use aah_domain::{
    Catalog, CostTier, Language, ProfessionalGuidance, RecommendationCategory, RecommendationRule,
    ResponseSet, match_recommendations, plan_goal,
};
use serde::Serialize;
use tracing::debug;

/// One applicable recommendation, localized
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: RecommendationCategory,
    pub cost: CostTier,
    pub cost_label: String,
}

impl RecommendationEntry {
    pub fn from_rule(rule: &RecommendationRule, language: Language) -> Self {
        Self {
            id: rule.id.clone(),
            title: rule.title.get(language).to_string(),
            description: rule.description.get(language).to_string(),
            category: rule.category,
            cost: rule.cost,
            cost_label: rule.cost.label(language).to_string(),
        }
    }
}

/// Professional guidance, localized
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuidanceEntry {
    pub id: String,
    pub role: String,
    pub description: String,
    pub when_to_call: String,
    pub what_to_ask: Vec<String>,
}

impl GuidanceEntry {
    pub fn from_guidance(guidance: &ProfessionalGuidance, language: Language) -> Self {
        Self {
            id: guidance.id.clone(),
            role: guidance.role.get(language).to_string(),
            description: guidance.description.get(language).to_string(),
            when_to_call: guidance.when_to_call.get(language).to_string(),
            what_to_ask: guidance.what_to_ask.get(language).to_vec(),
        }
    }
}

/// The personalized safety report
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub language: Language,
    /// Answers given to currently defined questions
    pub answered: usize,
    pub total_questions: usize,
    pub recommendations: Vec<RecommendationEntry>,
    pub guidance: Vec<GuidanceEntry>,
}

impl Report {
    pub fn has_recommendations(&self) -> bool {
        !self.recommendations.is_empty()
    }
}

/// One numbered action in the plan
#[derive(Debug, Clone, Serialize)]
pub struct PlanItem {
    /// 1-based position; lower numbers come first in the catalog
    pub number: usize,
    #[serde(flatten)]
    pub entry: RecommendationEntry,
}

/// A "who to contact" line: the role, when to call, and the first question to ask
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanContact {
    pub role: String,
    pub when_to_call: String,
    pub ask: Option<String>,
}

impl PlanContact {
    fn from_guidance(guidance: &ProfessionalGuidance, language: Language) -> Self {
        Self {
            role: guidance.role.get(language).to_string(),
            when_to_call: guidance.when_to_call.get(language).to_string(),
            ask: guidance.what_to_ask.get(language).first().cloned(),
        }
    }
}

/// The printable action plan
///
/// Items are the report's recommendations, numbered in the same order.
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub language: Language,
    pub goal: String,
    pub items: Vec<PlanItem>,
    pub contacts: Vec<PlanContact>,
}

impl Plan {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

/// Use case for building the report and plan views
pub struct BuildReportUseCase<'a> {
    catalog: &'a Catalog,
}

impl<'a> BuildReportUseCase<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Build the full report: matched recommendations plus professional guidance
    pub fn execute(&self, responses: &ResponseSet, language: Language) -> Report {
        let matched = match_recommendations(responses, &self.catalog.recommendations);
        let answered = self
            .catalog
            .questions
            .iter()
            .filter(|q| responses.is_answered(&q.id))
            .count();
        debug!(
            answered,
            matched = matched.len(),
            "Built recommendation report"
        );

        Report {
            language,
            answered,
            total_questions: self.catalog.questions.len(),
            recommendations: matched
                .into_iter()
                .map(|rule| RecommendationEntry::from_rule(rule, language))
                .collect(),
            guidance: self
                .catalog
                .guidance
                .iter()
                .map(|g| GuidanceEntry::from_guidance(g, language))
                .collect(),
        }
    }

    /// Build the plan: matched recommendations numbered in priority order
    pub fn plan(&self, responses: &ResponseSet, language: Language) -> Plan {
        let matched = match_recommendations(responses, &self.catalog.recommendations);
        Plan {
            language,
            goal: plan_goal().get(language).to_string(),
            items: matched
                .into_iter()
                .enumerate()
                .map(|(i, rule)| PlanItem {
                    number: i + 1,
                    entry: RecommendationEntry::from_rule(rule, language),
                })
                .collect(),
            contacts: self
                .catalog
                .guidance
                .iter()
                .map(|g| PlanContact::from_guidance(g, language))
                .collect(),
        }
    }
}
