//! Presentation layer for the Aging at Home Hub
//!
//! This crate contains CLI definitions, the UI string table, output
//! formatters, the quiz progress bar and the interactive quiz REPL.

pub mod cli;
pub mod config;
pub mod i18n;
pub mod output;
pub mod progress;
pub mod quiz;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use i18n::t;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use quiz::{QuizRepl, ReplError};
