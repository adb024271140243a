//! Search Resources use case.
//!
//! Filters the resource directory by name/postal code and category and
//! localizes the matching records.

use aah_domain::{
    Catalog, ContactInfo, Language, ResourceCategory, ResourceRecord, filter_resources,
};
use serde::Serialize;
use tracing::debug;

/// Input for the [`SearchResourcesUseCase`].
#[derive(Debug, Clone, Default)]
pub struct SearchResourcesInput {
    /// Free text matched against names and postal codes (empty matches all)
    pub query: String,
    pub category: Option<ResourceCategory>,
}

impl SearchResourcesInput {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: ResourceCategory) -> Self {
        self.category = Some(category);
        self
    }
}

/// A matching resource, localized
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceEntry {
    pub id: String,
    pub name: String,
    pub category: ResourceCategory,
    pub description: String,
    pub contact: ContactInfo,
    pub postal_codes: Vec<String>,
    pub verified: bool,
}

impl ResourceEntry {
    pub fn from_record(record: &ResourceRecord, language: Language) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            category: record.category,
            description: record.description.get(language).to_string(),
            contact: record.contact.clone(),
            postal_codes: record.postal_codes.clone(),
            verified: record.verified,
        }
    }

    /// First `n` postal codes and whether more were left out
    pub fn service_area_preview(&self, n: usize) -> (&[String], bool) {
        let shown = &self.postal_codes[..self.postal_codes.len().min(n)];
        (shown, self.postal_codes.len() > n)
    }
}

/// Use case for searching the resource directory
pub struct SearchResourcesUseCase<'a> {
    catalog: &'a Catalog,
}

impl<'a> SearchResourcesUseCase<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn execute(&self, input: &SearchResourcesInput, language: Language) -> Vec<ResourceEntry> {
        let matches = filter_resources(&input.query, input.category, &self.catalog.resources);
        debug!(
            query = %input.query,
            category = ?input.category,
            matches = matches.len(),
            "Searched resources"
        );
        matches
            .into_iter()
            .map(|record| ResourceEntry::from_record(record, language))
            .collect()
    }
}
