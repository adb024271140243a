//! Progress reporting for the interactive quiz

use crate::i18n::t;
use aah_domain::{Language, QuizProgress, QuizState};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Shows quiz progress with an indicatif bar
pub struct ProgressReporter {
    bar: ProgressBar,
    language: Language,
}

impl ProgressReporter {
    pub fn new(total: usize, language: Language) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(Self::quiz_style());
        Self::with_bar(bar, language)
    }

    /// A reporter that draws nothing (non-interactive output, tests)
    pub fn hidden(total: usize, language: Language) -> Self {
        let bar = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::hidden());
        Self::with_bar(bar, language)
    }

    fn with_bar(bar: ProgressBar, language: Language) -> Self {
        bar.set_prefix(t("nav.quiz", language).to_string());
        Self { bar, language }
    }

    fn quiz_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    /// Move the bar to the current quiz position
    pub fn update(&self, progress: &QuizProgress) {
        let position = match progress.state() {
            QuizState::Question(i) => i as u64 + 1,
            QuizState::Complete => progress.total() as u64,
            QuizState::Exited => 0,
        };
        self.bar.set_position(position);
        self.bar.set_message(format!("{}%", progress.percent()));
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn finish(&self, progress: &QuizProgress) {
        self.update(progress);
        let message = match progress.state() {
            QuizState::Complete => format!("{} {}", "v".green(), t("quiz.see_results", self.language)),
            _ => format!("{}%", progress.percent()),
        };
        self.bar.finish_with_message(message);
    }
}

/// Plain one-line progress for terminals where a bar is unwanted
pub struct SimpleProgress;

impl SimpleProgress {
    pub fn line(progress: &QuizProgress, language: Language) -> String {
        match progress.current_index() {
            Some(i) => format!(
                "{} {} {} {} ({}%)",
                t("quiz.question", language),
                i + 1,
                t("quiz.of", language),
                progress.total(),
                progress.percent()
            ),
            None => format!("{}%", progress.percent()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_reporter_tracks_position() {
        let mut progress = QuizProgress::new(4);
        let reporter = ProgressReporter::hidden(4, Language::En);

        reporter.update(&progress);
        assert_eq!(reporter.position(), 1);

        progress.advance().unwrap();
        progress.advance().unwrap();
        reporter.update(&progress);
        assert_eq!(reporter.position(), 3);

        progress.advance().unwrap();
        progress.advance().unwrap();
        reporter.finish(&progress);
        assert_eq!(reporter.position(), 4);
    }

    #[test]
    fn test_simple_progress_line() {
        let mut progress = QuizProgress::new(4);
        progress.advance().unwrap();
        assert_eq!(SimpleProgress::line(&progress, Language::En), "Question 2 of 4 (50%)");
        assert_eq!(SimpleProgress::line(&progress, Language::Es), "Pregunta 2 de 4 (50%)");

        progress.advance().unwrap();
        progress.advance().unwrap();
        progress.advance().unwrap();
        assert_eq!(SimpleProgress::line(&progress, Language::En), "100%");
    }
}
