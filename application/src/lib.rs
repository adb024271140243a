//! Application layer for the Aging at Home Hub
//!
//! This crate contains use cases, port definitions, and the session state
//! container. It depends only on the domain layer.

pub mod ports;
pub mod session;
pub mod store;
pub mod use_cases;

// Re-export commonly used types
pub use ports::local_storage::{LocalStorage, MemoryStorage, StorageError};
pub use session::Session;
pub use store::{LANGUAGE_KEY, LanguagePreference, QUIZ_KEY, ResponseStore, StoreError};
pub use use_cases::build_report::{
    BuildReportUseCase, GuidanceEntry, Plan, PlanContact, PlanItem, RecommendationEntry, Report,
};
pub use use_cases::quiz_flow::{QuizFlowController, QuizFlowError, record_answer};
pub use use_cases::search_resources::{
    ResourceEntry, SearchResourcesInput, SearchResourcesUseCase,
};
