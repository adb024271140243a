//! Interactive quiz

pub mod repl;

pub use repl::{QuizCommand, QuizRepl, ReplError, ReplStep, apply_command};
