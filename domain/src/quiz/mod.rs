//! Quiz domain
//!
//! - [`question::QuizQuestion`] — a boolean or choice question
//! - [`answer::ResponseSet`] — the user's answers keyed by question id
//! - [`flow::QuizProgress`] — forward/back state machine over the questions

pub mod answer;
pub mod flow;
pub mod question;

pub use answer::{AnswerValue, ResponseSet};
pub use flow::{FlowError, QuizProgress, QuizState};
pub use question::{ChoiceOption, QuestionKind, QuizQuestion};
