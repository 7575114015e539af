//! Console output formatter for import reports

use colored::Colorize;
use exam_extract_application::{DocumentReport, DocumentStatus, ImportReport};
use exam_extract_domain::{Question, truncate};

/// Width of prompts and option texts in the question listing
const PREVIEW_WIDTH: usize = 72;

/// Formats import reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format per-document results followed by the run totals
    pub fn format_summary(report: &ImportReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Import Summary"));
        output.push('\n');

        if report.documents.is_empty() {
            output.push_str(&format!("\n{}\n", "No documents found.".yellow()));
        }

        for document in &report.documents {
            output.push_str(&Self::document_line(document));
            output.push('\n');
        }

        output.push_str(&Self::section_header("Totals"));
        output.push_str(&format!(
            "  {:<16} {}\n",
            "Documents:",
            report.documents.len()
        ));
        output.push_str(&format!(
            "  {:<16} {}\n",
            "Questions:",
            report.question_count().to_string().bold()
        ));

        let skipped = report.skipped_blocks();
        if skipped > 0 {
            output.push_str(&format!(
                "  {:<16} {}\n",
                "Skipped blocks:",
                skipped.to_string().yellow()
            ));
        }

        let failed = report.documents_with_status(DocumentStatus::Failed);
        if failed > 0 {
            output.push_str(&format!(
                "  {:<16} {}\n",
                "Failed reads:",
                failed.to_string().red()
            ));
        }

        output.push_str(&format!("  {:<16} {}\n", "Uploaded:", Self::upload_status(report)));
        output.push_str(&Self::footer());

        output
    }

    /// Format every parsed question as a short entry
    pub fn format_questions(report: &ImportReport) -> String {
        if report.questions.is_empty() {
            return format!("{}\n", "No questions parsed.".yellow());
        }

        let mut output = String::new();
        for question in &report.questions {
            output.push_str(&Self::question_entry(question));
            output.push('\n');
        }
        output.push_str(&format!(
            "{} {}\n",
            report.question_count().to_string().bold(),
            "questions".dimmed()
        ));
        output
    }

    /// Format as JSON
    pub fn format_json(report: &ImportReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    fn document_line(document: &DocumentReport) -> String {
        match document.status {
            DocumentStatus::Parsed => {
                let mut line = format!(
                    "  {} {} {}",
                    "v".green(),
                    document.name.bold(),
                    format!(
                        "({} questions from {} blocks)",
                        document.question_count, document.block_count
                    )
                    .dimmed()
                );
                if document.skipped_blocks > 0 {
                    line.push_str(&format!(
                        " {}",
                        format!("{} skipped", document.skipped_blocks).yellow()
                    ));
                }
                line
            }
            DocumentStatus::NoBlocks => format!(
                "  {} {} {}",
                "!".yellow(),
                document.name.bold(),
                "(no question blocks found)".yellow()
            ),
            DocumentStatus::Failed => format!(
                "  {} {} {}",
                "x".red(),
                document.name.bold(),
                document.error.as_deref().unwrap_or("read failed").red()
            ),
        }
    }

    fn upload_status(report: &ImportReport) -> String {
        match report.uploaded {
            Some(written) => written.to_string().green().to_string(),
            None if report.dry_run => "skipped (dry run)".dimmed().to_string(),
            None => "nothing to upload".dimmed().to_string(),
        }
    }

    fn question_entry(question: &Question) -> String {
        let mut entry = format!(
            "{} {}\n",
            question.id().as_str().cyan().bold(),
            format!(
                "{} / {} / {}",
                question.test(),
                question.domain(),
                question.skill()
            )
            .dimmed()
        );

        if let Some(difficulty) = question.difficulty_label() {
            entry.push_str(&format!("  {} {}\n", "Difficulty:".dimmed(), difficulty));
        }

        let prompt = if question.prompt().is_empty() {
            "(no prompt)".to_string()
        } else {
            truncate(question.prompt(), PREVIEW_WIDTH)
        };
        entry.push_str(&format!("  {}\n", prompt));

        for option in question.options() {
            let marker = if option.value == question.correct_answer() {
                "*".green().bold().to_string()
            } else {
                " ".to_string()
            };
            // Option text already carries its "X. " label
            entry.push_str(&format!(
                "   {}{}\n",
                marker,
                truncate(&option.text, PREVIEW_WIDTH)
            ));
        }

        if !question.has_correct_answer() {
            entry.push_str(&format!("  {}\n", "no correct answer found".yellow()));
        }

        entry
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }
}
