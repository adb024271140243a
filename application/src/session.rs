//! User session
//!
//! Everything one user's visit reads and writes: the catalogs, the language
//! preference and the quiz answers. Built once by the entry point and passed
//! to the presentation layer; there is no global state.

use crate::ports::local_storage::{LocalStorage, StorageError};
use crate::store::{LanguagePreference, ResponseStore, StoreError};
use crate::use_cases::build_report::{BuildReportUseCase, GuidanceEntry, Plan, Report};
use crate::use_cases::quiz_flow::{QuizFlowController, QuizFlowError, record_answer};
use crate::use_cases::search_resources::{
    ResourceEntry, SearchResourcesInput, SearchResourcesUseCase,
};
use aah_domain::{AnswerValue, Catalog, Language};
use std::sync::Arc;
use tracing::info;

/// State container for one user
pub struct Session {
    catalog: Catalog,
    language: LanguagePreference,
    responses: ResponseStore,
}

impl Session {
    /// Open a session, restoring whatever the storage holds
    pub fn open(storage: Arc<dyn LocalStorage>, catalog: Catalog, default_language: Language) -> Self {
        let language = LanguagePreference::load(storage.clone(), default_language);
        let responses = ResponseStore::load(storage);
        Self {
            catalog,
            language,
            responses,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn language(&self) -> Language {
        self.language.get()
    }

    pub fn set_language(&mut self, language: Language) -> Result<(), StorageError> {
        info!(language = %language, "Language changed");
        self.language.set(language)
    }

    pub fn responses(&self) -> &ResponseStore {
        &self.responses
    }

    /// Start the quiz from the first question
    pub fn quiz(&mut self) -> QuizFlowController<'_> {
        QuizFlowController::new(&self.catalog.questions, &mut self.responses)
    }

    /// Record a single answer outside the interactive flow
    pub fn answer(&mut self, question_id: &str, value: AnswerValue) -> Result<(), QuizFlowError> {
        record_answer(&self.catalog.questions, &mut self.responses, question_id, value)
    }

    /// Parse and record a single answer given as text
    pub fn answer_input(&mut self, question_id: &str, input: &str) -> Result<(), QuizFlowError> {
        let question = self
            .catalog
            .question(question_id)
            .ok_or_else(|| aah_domain::DomainError::UnknownQuestion(question_id.to_string()))?;
        let value = question.parse_answer(input)?;
        self.answer(question_id, value)
    }

    /// Forget all quiz answers
    pub fn reset(&mut self) -> Result<(), StoreError> {
        info!("Quiz reset");
        self.responses.clear()
    }

    pub fn report(&self) -> Report {
        BuildReportUseCase::new(&self.catalog).execute(self.responses.get(), self.language())
    }

    pub fn plan(&self) -> Plan {
        BuildReportUseCase::new(&self.catalog).plan(self.responses.get(), self.language())
    }

    pub fn resources(&self, input: &SearchResourcesInput) -> Vec<ResourceEntry> {
        SearchResourcesUseCase::new(&self.catalog).execute(input, self.language())
    }

    pub fn guidance(&self) -> Vec<GuidanceEntry> {
        self.catalog
            .guidance
            .iter()
            .map(|g| GuidanceEntry::from_guidance(g, self.language()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::local_storage::MemoryStorage;

    fn open(storage: Arc<dyn LocalStorage>) -> Session {
        Session::open(storage, Catalog::builtin(), Language::En)
    }

    #[test]
    fn test_session_restores_language_and_answers() {
        let storage: Arc<dyn LocalStorage> = Arc::new(MemoryStorage::new());
        {
            let mut session = open(storage.clone());
            session.set_language(Language::Es).unwrap();
            session.answer("stairs", true.into()).unwrap();
        }

        let session = open(storage);
        assert_eq!(session.language(), Language::Es);
        assert_eq!(session.report().recommendations[0].title, "Agregue pasamanos dobles");
    }

    #[test]
    fn test_answer_input_and_reset() {
        let storage: Arc<dyn LocalStorage> = Arc::new(MemoryStorage::new());
        let mut session = open(storage.clone());
        session.answer_input("bathroom", "walk_in_shower").unwrap();
        assert!(session.answer_input("bathroom", "sauna").is_err());
        assert_eq!(session.responses().get().len(), 1);

        session.reset().unwrap();
        assert!(open(storage).responses().get().is_empty());
    }

    #[test]
    fn test_quiz_writes_through_session() {
        let mut session = open(Arc::new(MemoryStorage::new()));
        {
            let mut quiz = session.quiz();
            quiz.answer(false).unwrap();
            quiz.answer(true).unwrap();
        }
        let ids: Vec<String> = session.report().recommendations.into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["grab_bars", "shower_chair"]);
    }

    #[test]
    fn test_guidance_follows_language() {
        let mut session = open(Arc::new(MemoryStorage::new()));
        assert_eq!(session.guidance()[1].what_to_ask[0], "Are you CAPS certified?");
        session.set_language(Language::Es).unwrap();
        assert_eq!(session.guidance()[1].what_to_ask[0], "¿Está certificado por CAPS?");
    }
}
