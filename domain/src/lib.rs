//! Domain layer for the Aging at Home Hub
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on storage or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Quiz
//!
//! A short, fixed list of home-safety questions. Answers are collected into a
//! [`ResponseSet`] keyed by question id; unanswered questions are simply absent.
//!
//! ## Recommendations
//!
//! Each [`RecommendationRule`] carries a [`Trigger`] expression. Matching a
//! response set against the rule catalog yields the applicable rules in
//! catalog (priority) order.
//!
//! ## Resources
//!
//! A static directory of local organizations, searchable by name or postal
//! code and filterable by [`ResourceCategory`].

pub mod catalog;
pub mod config;
pub mod core;
pub mod guidance;
pub mod quiz;
pub mod recommendation;
pub mod resource;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogIssue, plan_goal};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{
    error::DomainError,
    language::{Language, LocalizedList, LocalizedText},
};
pub use guidance::ProfessionalGuidance;
pub use quiz::{
    AnswerValue, ChoiceOption, FlowError, QuestionKind, QuizProgress, QuizQuestion, QuizState,
    ResponseSet,
};
pub use recommendation::{
    CostTier, RecommendationCategory, RecommendationRule, Trigger, match_recommendations,
};
pub use resource::{ContactInfo, ResourceCategory, ResourceRecord, filter_resources};
