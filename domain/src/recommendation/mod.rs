//! Recommendation domain
//!
//! A recommendation applies when its [`Trigger`] holds for the user's
//! [`ResponseSet`](crate::quiz::ResponseSet). Matching is a single ordered
//! pass over the catalog:
//!
//! ```text
//! ResponseSet ──▶ match_recommendations(catalog) ──▶ [rule, rule, …]  (catalog order)
//! ```

pub mod matcher;
pub mod rule;
pub mod trigger;

pub use matcher::match_recommendations;
pub use rule::{CostTier, RecommendationCategory, RecommendationRule};
pub use trigger::Trigger;
