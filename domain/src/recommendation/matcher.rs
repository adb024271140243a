//! Recommendation matching
//!
//! Maps a [`ResponseSet`] to the rules of a catalog whose trigger holds.
//! Catalog order is display priority, so results keep it.

use super::rule::RecommendationRule;
use crate::quiz::answer::ResponseSet;
use std::collections::HashSet;

/// Select the rules that apply to `responses`, in catalog order
///
/// The result is a subsequence of `catalog`. A rule id appears at most once;
/// a repeated id later in the catalog is skipped.
pub fn match_recommendations<'a>(
    responses: &ResponseSet,
    catalog: &'a [RecommendationRule],
) -> Vec<&'a RecommendationRule> {
    let mut seen = HashSet::new();
    catalog
        .iter()
        .filter(|rule| rule.applies_to(responses))
        .filter(|rule| seen.insert(rule.id.as_str()))
        .collect()
}
