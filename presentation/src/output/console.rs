//! Console output formatter for reports, plans and the resource directory

use crate::i18n::t;
use aah_application::{GuidanceEntry, Plan, Report, ResourceEntry};
use aah_domain::{
    AnswerValue, Language, QuizProgress, QuizQuestion, RecommendationCategory, ResponseSet,
};
use colored::Colorize;
use serde::Serialize;

/// Number of postal codes shown per resource before eliding the rest
const SERVICE_AREA_PREVIEW: usize = 3;

/// Formats session views for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the personalized safety report
    pub fn format_report(report: &Report) -> String {
        let lang = report.language;
        let mut output = String::new();

        output.push_str(&Self::header(t("report.title", lang)));
        output.push('\n');
        output.push_str(&format!(
            "{} {}/{}\n",
            format!("{}:", t("report.answered", lang)).cyan().bold(),
            report.answered,
            report.total_questions
        ));

        if report.has_recommendations() {
            for rec in &report.recommendations {
                output.push_str(&format!(
                    "\n{} {}\n",
                    format!("── {} ──", rec.title).yellow().bold(),
                    format!("[{}]", rec.cost_label).dimmed()
                ));
                output.push_str(&format!("{}\n", Self::indent(&rec.description, "  ")));
                if rec.category == RecommendationCategory::Professional {
                    output.push_str(&format!(
                        "  {} {}\n",
                        "→".green(),
                        t("report.find_help", lang).green()
                    ));
                }
            }
        } else {
            output.push_str(&format!(
                "\n{}\n{}\n",
                t("report.great_news", lang).green().bold(),
                t("report.no_recommendations", lang)
            ));
        }

        if !report.guidance.is_empty() {
            output.push_str(&Self::section_header(t("report.who_to_ask", lang)));
            output.push_str(&Self::guidance_body(&report.guidance, lang));
        }

        output.push_str(&format!(
            "\n{} {}\n",
            t("report.next_step", lang).bold(),
            format!("aging-at-home plan  ({})", t("report.create_plan", lang)).cyan()
        ));
        output.push_str(&Self::footer());

        output
    }

    /// Format the action plan: goal, numbered actions, then who to contact
    pub fn format_plan(plan: &Plan) -> String {
        let lang = plan.language;
        let mut output = String::new();

        output.push_str(&Self::header(t("plan.title", lang)));
        output.push('\n');
        output.push_str(&format!("{}\n", t("plan.subtitle", lang).dimmed()));
        output.push_str(&format!(
            "\n{} {}\n",
            t("plan.goal", lang).green().bold(),
            plan.goal
        ));

        output.push_str(&Self::section_header(&format!(
            "{} ({})",
            t("plan.priority", lang),
            plan.item_count()
        )));
        if plan.is_empty() {
            output.push_str(&format!("{}\n", t("plan.empty", lang).italic()));
        }
        for item in &plan.items {
            output.push_str(&format!(
                "\n{:>2}. {} {}\n",
                item.number,
                item.entry.title.yellow().bold(),
                format!("[{}]", item.entry.category).dimmed()
            ));
            output.push_str(&format!("{}\n", Self::indent(&item.entry.description, "    ")));
            output.push_str(&format!(
                "    {} {}\n",
                t("plan.cost", lang).dimmed(),
                item.entry.cost_label
            ));
        }

        if !plan.contacts.is_empty() {
            output.push_str(&Self::section_header(t("plan.contacts", lang)));
            for contact in &plan.contacts {
                output.push_str(&format!(
                    "\n{}\n{}\n",
                    contact.role.yellow().bold(),
                    Self::indent(&contact.when_to_call, "  ")
                ));
                if let Some(ask) = &contact.ask {
                    output.push_str(&format!("  {} \"{}\"\n", t("plan.ask", lang).cyan(), ask));
                }
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format resource search results
    pub fn format_resources(resources: &[ResourceEntry], lang: Language) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(t("resources.title", lang)));
        output.push('\n');

        if resources.is_empty() {
            output.push_str(&format!("\n{}\n", t("resources.none", lang).yellow()));
        }

        for resource in resources {
            let verified = if resource.verified {
                format!(" {}", format!("✓ {}", t("resources.verified", lang)).green())
            } else {
                String::new()
            };
            output.push_str(&format!(
                "\n{} {}{}\n",
                resource.name.bold(),
                format!("[{}]", resource.category).cyan(),
                verified
            ));
            output.push_str(&format!("{}\n", Self::indent(&resource.description, "  ")));

            let contact = [
                ("resources.phone", resource.contact.phone.as_deref()),
                ("resources.email", resource.contact.email.as_deref()),
                ("resources.website", resource.contact.website.as_deref()),
                ("resources.address", resource.contact.address.as_deref()),
            ];
            for (key, value) in contact {
                if let Some(value) = value {
                    output.push_str(&format!("  {}: {}\n", t(key, lang).dimmed(), value));
                }
            }

            let (shown, more) = resource.service_area_preview(SERVICE_AREA_PREVIEW);
            if !shown.is_empty() {
                output.push_str(&format!(
                    "  {} {}{}\n",
                    t("resources.serves", lang).dimmed(),
                    shown.join(", "),
                    if more { "..." } else { "" }
                ));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format the professional guidance list
    pub fn format_guidance(guidance: &[GuidanceEntry], lang: Language) -> String {
        let mut output = String::new();
        output.push_str(&Self::header(t("report.who_to_ask", lang)));
        output.push('\n');
        output.push_str(&Self::guidance_body(guidance, lang));
        output.push_str(&Self::footer());
        output
    }

    /// List every question with its current answer
    pub fn format_questions(
        questions: &[QuizQuestion],
        responses: &ResponseSet,
        lang: Language,
    ) -> String {
        let mut output = String::new();
        output.push_str(&Self::header(t("nav.quiz", lang)));
        output.push('\n');

        for (i, question) in questions.iter().enumerate() {
            let answer = responses
                .get(&question.id)
                .map(|a| Self::answer_label(question, a, lang).green().to_string())
                .unwrap_or_else(|| t("quiz.unanswered", lang).dimmed().to_string());
            output.push_str(&format!(
                "\n{} {}\n  {}\n  → {}\n",
                format!("{}.", i + 1).cyan().bold(),
                question.id.dimmed(),
                question.prompt(lang),
                answer
            ));
        }

        output
    }

    /// Format one quiz step: position, prompt, options and current answer
    pub fn format_question(
        question: &QuizQuestion,
        progress: &QuizProgress,
        current: Option<&AnswerValue>,
        lang: Language,
    ) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{}\n{}\n",
            format!(
                "{} {} {} {}",
                t("quiz.question", lang),
                progress.current_index().unwrap_or_default() + 1,
                t("quiz.of", lang),
                progress.total()
            )
            .cyan()
            .bold(),
            question.prompt(lang).bold()
        ));

        let options = question.kind.options();
        if options.is_empty() {
            output.push_str(&format!(
                "  [y] {}   [n] {}\n",
                t("quiz.yes", lang),
                t("quiz.no", lang)
            ));
        } else {
            for (i, option) in options.iter().enumerate() {
                let selected = current.is_some_and(|a| a.includes(&option.value));
                let marker = if selected { "●".green() } else { "○".normal() };
                output.push_str(&format!(
                    "  {} {}. {}\n",
                    marker,
                    i + 1,
                    option.label.get(lang)
                ));
            }
        }

        if let Some(answer) = current {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{}:", t("quiz.current", lang)).dimmed(),
                Self::answer_label(question, answer, lang).green()
            ));
        }

        // Answering the last question leads to the report
        let next = if progress.is_last_question() {
            t("quiz.see_results", lang)
        } else {
            t("btn.next", lang)
        };
        output.push_str(&format!("  {} {}\n", "→".dimmed(), next.dimmed()));

        output
    }

    /// Human-readable label of an answer in the given language
    pub fn answer_label(question: &QuizQuestion, answer: &AnswerValue, lang: Language) -> String {
        let label = |value: &str| {
            question
                .option(value)
                .map(|o| o.label.get(lang).to_string())
                .unwrap_or_else(|| value.to_string())
        };
        match answer {
            AnswerValue::Bool(true) => t("quiz.yes", lang).to_string(),
            AnswerValue::Bool(false) => t("quiz.no", lang).to_string(),
            AnswerValue::Choice(value) => label(value),
            AnswerValue::Choices(values) => values
                .iter()
                .map(|v| label(v))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// Format any serializable view as JSON
    pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn guidance_body(guidance: &[GuidanceEntry], lang: Language) -> String {
        let mut output = String::new();
        for guide in guidance {
            output.push_str(&format!(
                "\n{}\n{}\n",
                format!("── {} ──", guide.role).yellow().bold(),
                Self::indent(&guide.description, "  ")
            ));
            output.push_str(&format!(
                "  {} {}\n",
                t("report.when_to_call", lang).cyan(),
                guide.when_to_call
            ));
            if !guide.what_to_ask.is_empty() {
                output.push_str(&format!("  {}\n", t("report.key_questions", lang).cyan()));
                for question in &guide.what_to_ask {
                    output.push_str(&format!("    * {}\n", question));
                }
            }
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
