//! CLI entrypoint for the Aging at Home Hub
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use aah_application::{LocalStorage, MemoryStorage, SearchResourcesInput, Session};
use aah_domain::{Catalog, Language, OutputFormat, Severity};
use aah_infrastructure::{ConfigLoader, FileConfig, FileLocalStorage, FileLoggingConfig};
use aah_presentation::{
    Cli, Command, ConsoleFormatter, OutputConfig, QuizRepl, ReplConfig, t,
};
use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use colored::Colorize;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    // Kept alive until exit so buffered log lines are flushed
    let _log_guard = init_logging(cli.verbose, &config.logging)?;

    info!("Starting Aging at Home Hub");
    report_config_issues(&config)?;

    let output = OutputConfig {
        format: config.output.default_format(),
        color: config.output.use_color(cli.no_color),
    };
    if !output.color {
        colored::control::set_override(false);
    }
    let repl = ReplConfig {
        show_progress: !cli.quiet,
    };

    let catalog = Catalog::builtin();
    let issues = catalog.validate();
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("{} {}", "error:".red().bold(), issue);
        }
        bail!("Built-in catalog is inconsistent ({} issues)", issues.len());
    }

    // === Dependency Injection ===
    // Storage adapter: memory for --ephemeral, otherwise the JSON file
    let storage: Arc<dyn LocalStorage> = if cli.ephemeral || config.storage.ephemeral {
        info!("Using in-memory storage");
        Arc::new(MemoryStorage::new())
    } else {
        let path = cli
            .storage
            .clone()
            .or_else(|| config.storage.path.clone())
            .or_else(FileLocalStorage::default_path)
            .context("Could not determine a local storage location; pass --storage <PATH>")?;
        info!(path = ?path, "Using local storage file");
        Arc::new(FileLocalStorage::open(path))
    };

    let (default_language, _) = config.language.parse_default();
    let mut session = Session::open(storage, catalog, default_language);
    if let Some(language) = cli.lang {
        session.set_language(language)?;
    }

    let command = cli.command.unwrap_or(Command::Quiz);
    let format = output.resolve(command.output());
    let lang = session.language();

    match command {
        Command::Quiz => {
            QuizRepl::new(&mut session)
                .with_progress(repl.show_progress)
                .run()?;
        }
        Command::Answer { question, value } => {
            session
                .answer_input(&question, &value)
                .with_context(|| format!("Could not record answer for '{}'", question))?;
            let saved = session.catalog().question(&question).and_then(|q| {
                session
                    .responses()
                    .answer(&q.id)
                    .map(|a| ConsoleFormatter::answer_label(q, a, lang))
            });
            println!(
                "{} {}: {} = {}",
                "v".green(),
                t("quiz.saved", lang),
                question,
                saved.unwrap_or(value)
            );
        }
        Command::Questions { .. } => match format {
            OutputFormat::Text => println!(
                "{}",
                ConsoleFormatter::format_questions(
                    &session.catalog().questions,
                    session.responses().get(),
                    lang
                )
            ),
            OutputFormat::Json => {
                println!("{}", ConsoleFormatter::format_json(session.responses().get()))
            }
        },
        Command::Report { .. } => {
            let report = session.report();
            match format {
                OutputFormat::Text => println!("{}", ConsoleFormatter::format_report(&report)),
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&report)),
            }
        }
        Command::Plan { .. } => {
            let plan = session.plan();
            match format {
                OutputFormat::Text => println!("{}", ConsoleFormatter::format_plan(&plan)),
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&plan)),
            }
        }
        Command::Resources {
            query, category, ..
        } => {
            let input = SearchResourcesInput {
                query: query.unwrap_or_default(),
                category,
            };
            let results = session.resources(&input);
            match format {
                OutputFormat::Text => {
                    println!("{}", ConsoleFormatter::format_resources(&results, lang))
                }
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&results)),
            }
        }
        Command::Guidance { .. } => {
            let guidance = session.guidance();
            match format {
                OutputFormat::Text => {
                    println!("{}", ConsoleFormatter::format_guidance(&guidance, lang))
                }
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&guidance)),
            }
        }
        Command::Lang { language } => match language {
            Some(language) => {
                session.set_language(language)?;
                println!(
                    "{} {} {}",
                    "v".green(),
                    t("lang.changed", language),
                    language.native_name()
                );
            }
            None => print_language(lang),
        },
        Command::Reset => {
            session.reset()?;
            println!("{} {}", "v".green(), t("quiz.reset", lang));
        }
    }

    Ok(())
}

/// Initialize logging based on verbosity level and the `[logging]` section
///
/// Logs go to stderr unless a log file is configured.
fn init_logging(verbose: u8, logging: &FileLoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => logging
            .filter
            .as_deref()
            .and_then(|f| EnvFilter::try_new(f).ok())
            .unwrap_or_else(|| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = logging.file.as_ref().filter(|p| !p.as_os_str().is_empty()) else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("Log file path has no file name: {}", path.display()))?;
    std::fs::create_dir_all(directory)
        .with_context(|| format!("Failed to create log directory {}", directory.display()))?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

/// Print configuration issues; errors abort startup
fn report_config_issues(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    let mut errors = 0;
    for issue in &issues {
        match issue.severity {
            Severity::Error => {
                errors += 1;
                eprintln!("{} {}", "error:".red().bold(), issue.message);
            }
            Severity::Warning => {
                warn!(message = %issue.message, "Configuration warning");
                eprintln!("{} {}", "warning:".yellow().bold(), issue.message);
            }
        }
    }
    if errors > 0 {
        bail!("Invalid configuration ({} errors)", errors);
    }
    Ok(())
}

fn print_language(language: Language) {
    println!(
        "{}: {} ({})",
        t("lang.current", language).cyan().bold(),
        language.native_name(),
        language.code()
    );
    let others: Vec<&str> = Language::ALL
        .iter()
        .filter(|l| **l != language)
        .map(|l| l.code())
        .collect();
    println!("  aging-at-home lang <{}>", others.join("|"));
}
