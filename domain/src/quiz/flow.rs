//! Quiz flow state machine
//!
//! ```text
//!            answer/skip            answer/skip (last)
//!  Question(0) ──────▶ Question(1) ─ … ─▶ Question(N-1) ──────▶ Complete
//!      │  ◀────────────    back            ◀──────────────────    │
//!      │ back                                       back          │
//!      ▼                                                          │
//!    Exited                                                       │
//! ```
//!
//! `back` from `Complete` returns to the last question so its answer can be
//! revised. `Exited` is terminal.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Position within the quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizState {
    /// Showing the question at this index
    Question(usize),
    /// All questions passed; results can be shown
    Complete,
    /// User backed out of the first question
    Exited,
}

impl std::fmt::Display for QuizState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizState::Question(i) => write!(f, "question {}", i + 1),
            QuizState::Complete => write!(f, "complete"),
            QuizState::Exited => write!(f, "exited"),
        }
    }
}

/// Transition errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowError {
    #[error("No question to answer: quiz is {0}")]
    NotAnswering(QuizState),

    #[error("Quiz was exited")]
    Exited,
}

/// Cursor over a fixed number of questions (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    state: QuizState,
    total: usize,
}

impl QuizProgress {
    /// Start at the first question (or `Complete` when there are none)
    pub fn new(total: usize) -> Self {
        let state = if total == 0 {
            QuizState::Complete
        } else {
            QuizState::Question(0)
        };
        Self { state, total }
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            QuizState::Question(i) => Some(i),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state == QuizState::Complete
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index() == Some(self.total.saturating_sub(1))
    }

    /// Move past the current question
    pub fn advance(&mut self) -> Result<QuizState, FlowError> {
        let QuizState::Question(i) = self.state else {
            return Err(FlowError::NotAnswering(self.state));
        };
        self.state = if i + 1 >= self.total {
            QuizState::Complete
        } else {
            QuizState::Question(i + 1)
        };
        Ok(self.state)
    }

    /// Step back one question
    pub fn back(&mut self) -> Result<QuizState, FlowError> {
        self.state = match self.state {
            QuizState::Question(0) => QuizState::Exited,
            QuizState::Question(i) => QuizState::Question(i - 1),
            QuizState::Complete if self.total == 0 => QuizState::Exited,
            QuizState::Complete => QuizState::Question(self.total - 1),
            QuizState::Exited => return Err(FlowError::Exited),
        };
        Ok(self.state)
    }

    /// Progress through the quiz as a percentage, rounded to nearest
    /// (current question counts as reached)
    pub fn percent(&self) -> u8 {
        match self.state {
            QuizState::Question(i) => (((i + 1) * 200 / self.total + 1) / 2) as u8,
            QuizState::Complete => 100,
            QuizState::Exited => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let progress = QuizProgress::new(6);
        assert_eq!(progress.state(), QuizState::Question(0));
        assert_eq!(progress.total(), 6);
    }

    #[test]
    fn test_empty_quiz_is_complete() {
        let mut progress = QuizProgress::new(0);
        assert!(progress.is_complete());
        assert_eq!(progress.back(), Ok(QuizState::Exited));
    }

    #[test]
    fn test_advance_to_complete() {
        let mut progress = QuizProgress::new(2);
        assert_eq!(progress.advance(), Ok(QuizState::Question(1)));
        assert!(progress.is_last_question());
        assert_eq!(progress.advance(), Ok(QuizState::Complete));
        assert_eq!(
            progress.advance(),
            Err(FlowError::NotAnswering(QuizState::Complete))
        );
    }

    #[test]
    fn test_back_from_first_exits() {
        let mut progress = QuizProgress::new(3);
        assert_eq!(progress.back(), Ok(QuizState::Exited));
        assert_eq!(progress.back(), Err(FlowError::Exited));
        assert_eq!(
            progress.advance(),
            Err(FlowError::NotAnswering(QuizState::Exited))
        );
    }

    #[test]
    fn test_back_from_complete_returns_to_last_question() {
        let mut progress = QuizProgress::new(2);
        progress.advance().unwrap();
        progress.advance().unwrap();
        assert_eq!(progress.back(), Ok(QuizState::Question(1)));
        assert_eq!(progress.back(), Ok(QuizState::Question(0)));
    }

    #[test]
    fn test_percent_rounds_to_nearest() {
        let mut progress = QuizProgress::new(6);
        // 1/6 = 16.67%
        assert_eq!(progress.percent(), 17);
        progress.advance().unwrap();
        assert_eq!(progress.percent(), 33);
        progress.advance().unwrap();
        assert_eq!(progress.percent(), 50);
        progress.advance().unwrap();
        assert_eq!(progress.percent(), 67);
        progress.advance().unwrap();
        progress.advance().unwrap();
        assert_eq!(progress.percent(), 100);
        progress.advance().unwrap();
        assert_eq!(progress.percent(), 100);

        assert_eq!(QuizProgress::new(3).percent(), 33);
    }
}
