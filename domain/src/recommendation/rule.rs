//! Recommendation rule entity and its classification value objects

use super::trigger::Trigger;
use crate::core::error::DomainError;
use crate::core::language::{Language, LocalizedText};
use crate::quiz::answer::ResponseSet;
use serde::{Deserialize, Serialize};

/// Who can carry out a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RecommendationCategory {
    #[serde(rename = "DIY")]
    Diy,
    #[serde(rename = "Low-Cost")]
    LowCost,
    Professional,
}

impl RecommendationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationCategory::Diy => "DIY",
            RecommendationCategory::LowCost => "Low-Cost",
            RecommendationCategory::Professional => "Professional",
        }
    }
}

impl std::fmt::Display for RecommendationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RecommendationCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "diy" => Ok(RecommendationCategory::Diy),
            "lowcost" => Ok(RecommendationCategory::LowCost),
            "professional" | "pro" => Ok(RecommendationCategory::Professional),
            _ => Err(DomainError::UnknownCategory(s.to_string())),
        }
    }
}

/// Rough cost of a recommendation
///
/// Ordered from cheapest to most expensive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostTier {
    Low,
    Medium,
    High,
}

impl CostTier {
    /// Dollar-sign badge (`$`, `$$`, `$$$`)
    pub fn symbol(&self) -> &'static str {
        match self {
            CostTier::Low => "$",
            CostTier::Medium => "$$",
            CostTier::High => "$$$",
        }
    }

    /// Localized price range label
    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (CostTier::Low, Language::En) => "Low Cost (<$50)",
            (CostTier::Low, Language::Es) => "Bajo Costo (<$50)",
            (CostTier::Medium, Language::En) => "Medium ($50-$500)",
            (CostTier::Medium, Language::Es) => "Medio ($50-$500)",
            (CostTier::High, Language::En) => "Investment (>$500)",
            (CostTier::High, Language::Es) => "Inversión (>$500)",
        }
    }
}

impl std::fmt::Display for CostTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A home-safety recommendation with the condition under which it applies (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRule {
    pub id: String,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub category: RecommendationCategory,
    pub cost: CostTier,
    pub trigger: Trigger,
}

impl RecommendationRule {
    pub fn new(
        id: impl Into<String>,
        title: LocalizedText,
        description: LocalizedText,
        category: RecommendationCategory,
        cost: CostTier,
        trigger: Trigger,
    ) -> Self {
        Self {
            id: id.into(),
            title,
            description,
            category,
            cost,
            trigger,
        }
    }

    /// Whether this rule applies to the given responses
    pub fn applies_to(&self, responses: &ResponseSet) -> bool {
        self.trigger.evaluate(responses)
    }
}
