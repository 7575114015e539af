//! Progress reporting for import runs

use colored::Colorize;
use exam_extract_application::ImportProgressNotifier;
use exam_extract_domain::DocumentExtraction;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports progress during an import with a progress bar over documents
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
    upload_spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
            upload_spinner: Mutex::new(None),
        }
    }

    fn document_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn advance(&self, message: String) {
        if let Ok(guard) = self.bar.lock()
            && let Some(pb) = guard.as_ref()
        {
            pb.set_message(message);
            pb.inc(1);
            if pb.position() >= pb.length().unwrap_or(0) {
                pb.finish_with_message(format!("{}", "documents read".green()));
            }
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportProgressNotifier for ProgressReporter {
    fn on_import_start(&self, total_documents: usize) {
        let pb = ProgressBar::new(total_documents as u64);
        pb.set_style(Self::document_style());
        pb.set_prefix("Parsing");
        pb.set_message("Starting...");

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_document_complete(&self, extraction: &DocumentExtraction) {
        let status = if extraction.is_empty() {
            format!("{} {}", "!".yellow(), extraction.source)
        } else {
            format!(
                "{} {} ({})",
                "v".green(),
                extraction.source,
                extraction.question_count()
            )
        };
        self.advance(status);
    }

    fn on_document_failed(&self, name: &str, _error: &str) {
        self.advance(format!("{} {}", "x".red(), name));
    }

    fn on_upload_start(&self, total_questions: usize) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(Self::spinner_style());
        spinner.set_prefix("Uploading");
        spinner.set_message(format!("{} questions", total_questions));
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));

        if let Ok(mut slot) = self.upload_spinner.lock() {
            *slot = Some(spinner);
        }
    }

    fn on_upload_complete(&self, written: usize) {
        if let Ok(mut slot) = self.upload_spinner.lock()
            && let Some(spinner) = slot.take()
        {
            spinner.finish_with_message(format!("{} {} questions written", "v".green(), written));
        }
    }
}

/// Simple text-based progress (no fancy UI)
///
/// Writes to stderr so stdout stays clean for the report.
pub struct SimpleProgress;

impl ImportProgressNotifier for SimpleProgress {
    fn on_import_start(&self, total_documents: usize) {
        eprintln!(
            "{} {} ({} documents)",
            "->".cyan(),
            "Parsing".bold(),
            total_documents
        );
    }

    fn on_document_complete(&self, extraction: &DocumentExtraction) {
        if extraction.is_empty() {
            eprintln!("  {} {} (no question blocks)", "!".yellow(), extraction.source);
        } else {
            eprintln!(
                "  {} {} ({} questions)",
                "v".green(),
                extraction.source,
                extraction.question_count()
            );
        }
    }

    fn on_document_failed(&self, name: &str, error: &str) {
        eprintln!("  {} {} ({})", "x".red(), name, error);
    }

    fn on_upload_start(&self, total_questions: usize) {
        eprintln!(
            "{} {} ({} questions)",
            "->".cyan(),
            "Uploading".bold(),
            total_questions
        );
    }

    fn on_upload_complete(&self, written: usize) {
        eprintln!("  {} {} written", "v".green(), written);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extraction(name: &str, block_count: usize) -> DocumentExtraction {
        DocumentExtraction {
            source: name.to_string(),
            block_count,
            questions: Vec::new(),
            skipped_blocks: block_count,
        }
    }

    #[test]
    fn test_reporter_advances_per_document() {
        let reporter = ProgressReporter::new();
        reporter.on_import_start(3);
        reporter.on_document_complete(&extraction("a.txt", 2));
        reporter.on_document_failed("b.txt", "unreadable");

        let bar = reporter.bar.lock().unwrap();
        let pb = bar.as_ref().unwrap();
        assert_eq!(pb.position(), 2);
        assert!(!pb.is_finished());
    }

    #[test]
    fn test_reporter_finishes_after_last_document() {
        let reporter = ProgressReporter::new();
        reporter.on_import_start(1);
        reporter.on_document_complete(&extraction("a.txt", 0));

        assert!(reporter.bar.lock().unwrap().as_ref().unwrap().is_finished());
    }

    #[test]
    fn test_upload_spinner_is_cleared_on_complete() {
        let reporter = ProgressReporter::new();
        reporter.on_upload_start(5);
        reporter.on_upload_complete(5);

        assert!(reporter.upload_spinner.lock().unwrap().is_none());
    }

    #[test]
    fn test_callbacks_before_start_are_ignored() {
        let reporter = ProgressReporter::new();
        reporter.on_document_complete(&extraction("a.txt", 1));
        reporter.on_upload_complete(0);
        assert!(reporter.bar.lock().unwrap().is_none());
    }
}
