//! Progress notification port
//!
//! Defines the interface for reporting progress during an import run.

use exam_extract_domain::DocumentExtraction;

/// Callback for progress updates during an import
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain lines, nothing).
pub trait ImportProgressNotifier: Send + Sync {
    /// Called once the source has listed its documents
    fn on_import_start(&self, total_documents: usize);

    /// Called when a document has been parsed
    fn on_document_complete(&self, extraction: &DocumentExtraction);

    /// Called when a document could not be read
    fn on_document_failed(&self, name: &str, error: &str);

    /// Called before records are handed to the sink
    fn on_upload_start(&self, _total_questions: usize) {}

    /// Called after the sink accepted the records
    fn on_upload_complete(&self, _written: usize) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoImportProgress;

impl ImportProgressNotifier for NoImportProgress {
    fn on_import_start(&self, _total_documents: usize) {}
    fn on_document_complete(&self, _extraction: &DocumentExtraction) {}
    fn on_document_failed(&self, _name: &str, _error: &str) {}
}
