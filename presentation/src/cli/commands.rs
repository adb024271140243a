//! CLI command definitions

use aah_domain::{Language, ResourceCategory};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Localized, human-readable text
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for aah_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => aah_domain::OutputFormat::Text,
            OutputFormat::Json => aah_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for aging-at-home
#[derive(Parser, Debug)]
#[command(name = "aging-at-home")]
#[command(author, version, about = "Home safety self-assessment for aging in place")]
#[command(long_about = r#"
Aging at Home Hub asks a few questions about your home and turns the answers
into a personalized safety report, an action plan and a list of trusted
local resources. Everything stays on this computer.

Your answers and language choice are saved between runs in a local storage
file (see --storage).

Configuration files are loaded from (in priority order):
1. AAH_* environment variables (e.g. AAH_LANGUAGE__DEFAULT=es)
2. --config <path>     Explicit config file
3. ./aah.toml          Project-level config
4. ~/.config/aging-at-home/config.toml   Global config

Example:
  aging-at-home quiz
  aging-at-home answer bathroom walk_in_shower
  aging-at-home report --output json
  aging-at-home resources --query 926 --category safety
  aging-at-home --lang es plan
"#)]
pub struct Cli {
    /// Command to run (defaults to the interactive quiz)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Language for this run (also saved as the preference)
    #[arg(long, global = true, value_name = "LANG", value_parser = parse_language)]
    pub lang: Option<Language>,

    /// Path to the local storage file
    #[arg(long, global = true, value_name = "PATH")]
    pub storage: Option<PathBuf>,

    /// Keep answers in memory only; nothing is written to disk
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Take the safety quiz interactively
    Quiz,

    /// Answer a single question (yes/no, option value or option number)
    Answer {
        /// Question id (see `questions`)
        question: String,
        /// Answer; separate several options with commas
        value: String,
    },

    /// List the questions and your current answers
    Questions {
        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,
    },

    /// Show your personalized safety report
    Report {
        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,
    },

    /// Show recommendations as an action plan grouped by category
    Plan {
        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,
    },

    /// Search trusted local resources
    Resources {
        /// Match against names and postal codes
        #[arg(short = 'q', long)]
        query: Option<String>,
        /// Safety, Funding, Contractor or Support
        #[arg(short, long, value_parser = parse_category)]
        category: Option<ResourceCategory>,
        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,
    },

    /// Who to ask for professional help, and what to ask them
    Guidance {
        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,
    },

    /// Show or set the language preference
    Lang {
        #[arg(value_parser = parse_language)]
        language: Option<Language>,
    },

    /// Clear all quiz answers
    Reset,
}

impl Command {
    /// Output format requested on the command line, if the command has one
    pub fn output(&self) -> Option<OutputFormat> {
        match self {
            Command::Questions { output }
            | Command::Report { output }
            | Command::Plan { output }
            | Command::Resources { output, .. }
            | Command::Guidance { output } => *output,
            Command::Quiz | Command::Answer { .. } | Command::Lang { .. } | Command::Reset => None,
        }
    }
}

fn parse_language(s: &str) -> Result<Language, String> {
    s.parse().map_err(|e: aah_domain::DomainError| e.to_string())
}

fn parse_category(s: &str) -> Result<ResourceCategory, String> {
    s.parse().map_err(|e: aah_domain::DomainError| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_none() {
        let cli = Cli::try_parse_from(["aging-at-home"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["aging-at-home", "report", "--lang", "ES", "-vv", "-o", "json"])
            .unwrap();
        assert_eq!(cli.lang, Some(Language::Es));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.command.unwrap().output(), Some(OutputFormat::Json));
    }

    #[test]
    fn test_resources_filters() {
        let cli = Cli::try_parse_from([
            "aging-at-home",
            "resources",
            "-q",
            "926",
            "--category",
            "safety",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Resources {
                query: Some("926".to_string()),
                category: Some(ResourceCategory::Safety),
                output: None,
            })
        );
    }

    #[test]
    fn test_rejects_unknown_values() {
        assert!(Cli::try_parse_from(["aging-at-home", "lang", "fr"]).is_err());
        assert!(Cli::try_parse_from(["aging-at-home", "resources", "-c", "food"]).is_err());
    }

    #[test]
    fn test_answer_positional_args() {
        let cli = Cli::try_parse_from(["aging-at-home", "answer", "stairs", "yes"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Answer {
                question: "stairs".to_string(),
                value: "yes".to_string(),
            })
        );
    }
}
