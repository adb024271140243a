//! Quiz flow controller.
//!
//! Walks the user through the questions in order and records each answer in
//! the [`ResponseStore`]. Answers are checked against the question's type
//! before they are written; a rejected answer leaves both the store and the
//! position unchanged.
//!
//! Questions may be skipped, and `back` allows revisiting earlier ones, so
//! the controller never requires earlier questions to be answered first.

use crate::store::response_store::{ResponseStore, StoreError};
use aah_domain::{
    AnswerValue, DomainError, FlowError, QuizProgress, QuizQuestion, QuizState,
};
use thiserror::Error;
use tracing::{debug, info};

/// Errors from driving the quiz
#[derive(Error, Debug)]
pub enum QuizFlowError {
    #[error(transparent)]
    InvalidAnswer(#[from] DomainError),

    #[error(transparent)]
    Flow(#[from] FlowError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Validate an answer against its question and write it to the store
///
/// Shared by the interactive flow and one-off answers from the command line.
pub fn record_answer(
    questions: &[QuizQuestion],
    store: &mut ResponseStore,
    question_id: &str,
    value: AnswerValue,
) -> Result<(), QuizFlowError> {
    let question = questions
        .iter()
        .find(|q| q.id == question_id)
        .ok_or_else(|| DomainError::UnknownQuestion(question_id.to_string()))?;
    question.validate(&value)?;
    store.set(question_id, value)?;
    Ok(())
}

/// Drives one pass through the quiz
pub struct QuizFlowController<'a> {
    questions: &'a [QuizQuestion],
    store: &'a mut ResponseStore,
    progress: QuizProgress,
}

impl<'a> QuizFlowController<'a> {
    /// Start at the first question
    pub fn new(questions: &'a [QuizQuestion], store: &'a mut ResponseStore) -> Self {
        Self {
            progress: QuizProgress::new(questions.len()),
            questions,
            store,
        }
    }

    pub fn state(&self) -> QuizState {
        self.progress.state()
    }

    pub fn progress(&self) -> &QuizProgress {
        &self.progress
    }

    /// The question being shown, if any
    pub fn current_question(&self) -> Option<&'a QuizQuestion> {
        let questions = self.questions;
        self.progress.current_index().map(|i| &questions[i])
    }

    /// The stored answer to the question being shown
    pub fn current_answer(&self) -> Option<&AnswerValue> {
        self.current_question()
            .and_then(|q| self.store.answer(&q.id))
    }

    pub fn store(&self) -> &ResponseStore {
        self.store
    }

    /// Answer the current question and move on
    pub fn answer(&mut self, value: impl Into<AnswerValue>) -> Result<QuizState, QuizFlowError> {
        let question = self
            .current_question()
            .ok_or(FlowError::NotAnswering(self.state()))?;
        record_answer(self.questions, self.store, &question.id, value.into())?;
        self.advance()
    }

    /// Parse free-form input for the current question, then answer it
    pub fn answer_input(&mut self, input: &str) -> Result<QuizState, QuizFlowError> {
        let question = self
            .current_question()
            .ok_or(FlowError::NotAnswering(self.state()))?;
        let value = question.parse_answer(input)?;
        self.answer(value)
    }

    /// Move on without answering
    pub fn skip(&mut self) -> Result<QuizState, QuizFlowError> {
        if let Some(question) = self.current_question() {
            debug!(question = %question.id, "Skipping question");
        }
        self.advance()
    }

    /// Go back one question (or exit from the first)
    pub fn back(&mut self) -> Result<QuizState, QuizFlowError> {
        let state = self.progress.back()?;
        debug!(state = %state, "Quiz moved back");
        Ok(state)
    }

    fn advance(&mut self) -> Result<QuizState, QuizFlowError> {
        let state = self.progress.advance()?;
        if state == QuizState::Complete {
            info!(answered = self.store.get().len(), "Quiz complete");
        }
        Ok(state)
    }
}
