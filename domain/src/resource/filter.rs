//! Resource directory search

use super::record::{ResourceCategory, ResourceRecord};

/// Filter the resource catalog by free-text query and optional category
///
/// A record matches when the query is empty, its name contains the query
/// (case-insensitive), or one of its postal codes contains the query; and,
/// when `category` is given, its category equals it. Catalog order is kept.
pub fn filter_resources<'a>(
    query: &str,
    category: Option<ResourceCategory>,
    catalog: &'a [ResourceRecord],
) -> Vec<&'a ResourceRecord> {
    catalog
        .iter()
        .filter(|record| category.is_none_or(|c| record.category == c))
        .filter(|record| record.matches_query(query))
        .collect()
}
