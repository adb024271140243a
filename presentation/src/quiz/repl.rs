//! Interactive quiz REPL
//!
//! Shows one question at a time and reads answers with reedline. Every
//! accepted answer is written to storage immediately, so quitting midway
//! keeps what was answered so far.

use crate::i18n::t;
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::{ProgressReporter, SimpleProgress};
use aah_application::{QuizFlowController, QuizFlowError, Session};
use aah_domain::{Language, QuizState};
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use thiserror::Error;
use tracing::debug;

/// Errors that end the REPL
#[derive(Error, Debug)]
pub enum ReplError {
    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Quiz(#[from] QuizFlowError),
}

/// One line of user input, interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizCommand {
    /// Anything that is not a command is an answer to the current question
    Answer(String),
    Skip,
    Back,
    Help,
    Quit,
}

impl QuizCommand {
    /// Interpret a line; blank lines yield `None`
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let command = match line.to_lowercase().as_str() {
            "skip" | "next" | ":skip" | ":next" => QuizCommand::Skip,
            "back" | ":back" | "b" => QuizCommand::Back,
            "help" | ":help" | "?" | "h" => QuizCommand::Help,
            "quit" | "exit" | ":quit" | ":q" | "q" => QuizCommand::Quit,
            _ => QuizCommand::Answer(line.to_string()),
        };
        Some(command)
    }
}

/// What the REPL should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplStep {
    /// Show whatever the quiz is on now
    Continue(QuizState),
    ShowHelp,
    Quit,
}

/// Apply a command to the quiz
///
/// Invalid answers come back as errors and leave the quiz where it was.
pub fn apply_command(
    quiz: &mut QuizFlowController<'_>,
    command: QuizCommand,
) -> Result<ReplStep, QuizFlowError> {
    let step = match command {
        QuizCommand::Answer(input) => ReplStep::Continue(quiz.answer_input(&input)?),
        QuizCommand::Skip => ReplStep::Continue(quiz.skip()?),
        QuizCommand::Back => ReplStep::Continue(quiz.back()?),
        QuizCommand::Help => ReplStep::ShowHelp,
        QuizCommand::Quit => ReplStep::Quit,
    };
    Ok(step)
}

/// Interactive quiz session
pub struct QuizRepl<'s> {
    session: &'s mut Session,
    show_progress: bool,
}

impl<'s> QuizRepl<'s> {
    pub fn new(session: &'s mut Session) -> Self {
        Self {
            session,
            show_progress: true,
        }
    }

    /// Set whether to draw the progress bar
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run the quiz until it completes, exits or the user quits
    ///
    /// Prints the report when the last question is passed.
    pub fn run(self) -> Result<QuizState, ReplError> {
        let language = self.session.language();
        let mut editor = Reedline::create();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic(t("nav.quiz", language).to_string()),
            DefaultPromptSegment::Empty,
        );

        Self::print_welcome(language);

        let final_state = {
            let mut quiz = self.session.quiz();
            let total = quiz.progress().total();
            let reporter = if self.show_progress {
                ProgressReporter::new(total, language)
            } else {
                ProgressReporter::hidden(total, language)
            };

            loop {
                let Some(question) = quiz.current_question() else {
                    break quiz.state();
                };
                reporter.update(quiz.progress());
                println!(
                    "{}",
                    ConsoleFormatter::format_question(
                        question,
                        quiz.progress(),
                        quiz.current_answer(),
                        language
                    )
                );
                if !self.show_progress {
                    println!("{}", SimpleProgress::line(quiz.progress(), language).dimmed());
                }

                let line = match editor.read_line(&prompt)? {
                    Signal::Success(line) => line,
                    // Ctrl-C / Ctrl-D
                    _ => break quiz.state(),
                };
                let Some(command) = QuizCommand::parse(&line) else {
                    continue;
                };
                debug!(command = ?command, "Quiz input");

                match apply_command(&mut quiz, command) {
                    Ok(ReplStep::Continue(_)) => {}
                    Ok(ReplStep::ShowHelp) => println!("{}", t("quiz.help", language).dimmed()),
                    Ok(ReplStep::Quit) => break quiz.state(),
                    Err(QuizFlowError::InvalidAnswer(e)) => {
                        println!("{} {}", format!("{}:", t("quiz.invalid", language)).red(), e);
                        println!("{}", t("quiz.help", language).dimmed());
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        };

        match final_state {
            QuizState::Complete => {
                println!("\n{}", t("quiz.see_results", language).green().bold());
                println!("{}", ConsoleFormatter::format_report(&self.session.report()));
            }
            QuizState::Exited => println!("{}", t("quiz.exited", language)),
            QuizState::Question(_) => println!("{}", t("quiz.paused", language)),
        }

        Ok(final_state)
    }

    fn print_welcome(language: Language) {
        println!();
        println!("{}", t("app.title", language).cyan().bold());
        println!("{}", t("quiz.help", language).dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aah_application::MemoryStorage;
    use aah_domain::{AnswerValue, Catalog};
    use std::sync::Arc;

    fn session() -> Session {
        Session::open(Arc::new(MemoryStorage::new()), Catalog::builtin(), Language::En)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(QuizCommand::parse("   "), None);
        assert_eq!(QuizCommand::parse("Skip"), Some(QuizCommand::Skip));
        assert_eq!(QuizCommand::parse("next"), Some(QuizCommand::Skip));
        assert_eq!(QuizCommand::parse("back"), Some(QuizCommand::Back));
        assert_eq!(QuizCommand::parse("?"), Some(QuizCommand::Help));
        assert_eq!(QuizCommand::parse("quit"), Some(QuizCommand::Quit));
        assert_eq!(
            QuizCommand::parse(" y "),
            Some(QuizCommand::Answer("y".to_string()))
        );
        // "n" answers "no", it is not a navigation command
        assert_eq!(
            QuizCommand::parse("n"),
            Some(QuizCommand::Answer("n".to_string()))
        );
    }

    #[test]
    fn test_apply_answers_and_navigation() {
        let mut session = session();
        {
            let mut quiz = session.quiz();
            let step = apply_command(&mut quiz, QuizCommand::Answer("y".into())).unwrap();
            assert_eq!(step, ReplStep::Continue(QuizState::Question(1)));

            let step = apply_command(&mut quiz, QuizCommand::Skip).unwrap();
            assert_eq!(step, ReplStep::Continue(QuizState::Question(2)));

            let step = apply_command(&mut quiz, QuizCommand::Back).unwrap();
            assert_eq!(step, ReplStep::Continue(QuizState::Question(1)));

            assert_eq!(
                apply_command(&mut quiz, QuizCommand::Quit).unwrap(),
                ReplStep::Quit
            );
        }
        assert_eq!(
            session.responses().get().get("stairs"),
            Some(&AnswerValue::Bool(true))
        );
        assert_eq!(session.responses().get().len(), 1);
    }

    #[test]
    fn test_invalid_answer_keeps_position() {
        let mut session = session();
        let mut quiz = session.quiz();
        let err = apply_command(&mut quiz, QuizCommand::Answer("maybe".into())).unwrap_err();
        assert!(matches!(err, QuizFlowError::InvalidAnswer(ref e) if e.is_invalid_answer()));
        assert_eq!(quiz.state(), QuizState::Question(0));
    }

    #[test]
    fn test_back_from_first_question_exits() {
        let mut session = session();
        let mut quiz = session.quiz();
        let step = apply_command(&mut quiz, QuizCommand::Back).unwrap();
        assert_eq!(step, ReplStep::Continue(QuizState::Exited));
        assert!(matches!(
            apply_command(&mut quiz, QuizCommand::Skip),
            Err(QuizFlowError::Flow(_))
        ));
    }

    #[test]
    fn test_choice_by_number() {
        let mut session = session();
        {
            let mut quiz = session.quiz();
            apply_command(&mut quiz, QuizCommand::Skip).unwrap();
            apply_command(&mut quiz, QuizCommand::Skip).unwrap();
            apply_command(&mut quiz, QuizCommand::Answer("3".into())).unwrap();
        }
        assert_eq!(
            session.responses().get().get("bathroom"),
            Some(&AnswerValue::Choice("roll_in_shower".into()))
        );
    }
}
