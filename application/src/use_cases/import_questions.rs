//! Import Questions use case.
//!
//! Pulls the text of every document from a [`DocumentSourcePort`], runs the
//! extraction core over each one, and upserts the resulting records into a
//! [`QuestionSinkPort`].
//!
//! Failures are soft wherever the data allows it:
//!
//! - a document that cannot be read is logged and skipped
//! - a document without question delimiters is logged and skipped
//! - a block without an id is counted and skipped
//! - zero parsed questions means the sink is never called
//!
//! Only listing the source, writing the sink, and cancellation end a run
//! with an error.

use crate::config::ImportParams;
use crate::ports::document_source::{DocumentRef, DocumentSourcePort, SourceError};
use crate::ports::import_logger::{ImportEvent, ImportEventLogger, NoImportLogger};
use crate::ports::progress::ImportProgressNotifier;
use crate::ports::question_sink::{QuestionSinkPort, SinkError};
use exam_extract_domain::{DocumentExtraction, Question, extract_document, truncate};
use futures::StreamExt;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Errors that end an import run.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Document source error: {0}")]
    Source(#[from] SourceError),

    #[error("Question sink error: {0}")]
    Sink(#[from] SinkError),

    #[error("Import cancelled")]
    Cancelled,
}

impl ImportError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ImportError::Cancelled)
    }
}

/// What happened to one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// Split into blocks and parsed (possibly with skipped blocks)
    Parsed,
    /// No `Question ID` delimiter was found
    NoBlocks,
    /// The source could not read the document
    Failed,
}

/// Per-document line of an [`ImportReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentReport {
    pub name: String,
    pub status: DocumentStatus,
    pub block_count: usize,
    pub question_count: usize,
    pub skipped_blocks: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DocumentReport {
    fn from_extraction(extraction: &DocumentExtraction) -> Self {
        Self {
            name: extraction.source.clone(),
            status: if extraction.is_empty() {
                DocumentStatus::NoBlocks
            } else {
                DocumentStatus::Parsed
            },
            block_count: extraction.block_count,
            question_count: extraction.question_count(),
            skipped_blocks: extraction.skipped_blocks,
            error: None,
        }
    }

    fn failed(name: &str, error: String) -> Self {
        Self {
            name: name.to_string(),
            status: DocumentStatus::Failed,
            block_count: 0,
            question_count: 0,
            skipped_blocks: 0,
            error: Some(error),
        }
    }
}

/// Result of an import run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportReport {
    /// One entry per listed document, in source order
    pub documents: Vec<DocumentReport>,
    /// Every parsed question, in document order
    pub questions: Vec<Question>,
    /// Records written by the sink; `None` when the sink was not called
    pub uploaded: Option<usize>,
    /// The run was a dry run
    pub dry_run: bool,
}

impl ImportReport {
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn documents_with_status(&self, status: DocumentStatus) -> usize {
        self.documents.iter().filter(|d| d.status == status).count()
    }

    pub fn skipped_blocks(&self) -> usize {
        self.documents.iter().map(|d| d.skipped_blocks).sum()
    }
}

/// Use case for importing questions from a document source into a sink.
pub struct ImportQuestionsUseCase {
    source: Arc<dyn DocumentSourcePort>,
    sink: Arc<dyn QuestionSinkPort>,
    event_logger: Arc<dyn ImportEventLogger>,
    cancellation_token: Option<CancellationToken>,
}

impl ImportQuestionsUseCase {
    pub fn new(source: Arc<dyn DocumentSourcePort>, sink: Arc<dyn QuestionSinkPort>) -> Self {
        Self {
            source,
            sink,
            event_logger: Arc::new(NoImportLogger),
            cancellation_token: None,
        }
    }

    /// Create with an import event logger.
    pub fn with_event_logger(mut self, logger: Arc<dyn ImportEventLogger>) -> Self {
        self.event_logger = logger;
        self
    }

    /// Create with a cancellation token, checked between documents.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    fn check_cancelled(&self) -> Result<(), ImportError> {
        match &self.cancellation_token {
            Some(token) if token.is_cancelled() => Err(ImportError::Cancelled),
            _ => Ok(()),
        }
    }

    /// Run the import with progress callbacks.
    pub async fn execute(
        &self,
        params: &ImportParams,
        progress: &dyn ImportProgressNotifier,
    ) -> Result<ImportReport, ImportError> {
        info!("Starting question import from {}", self.source.describe());

        let documents = self.source.list_documents().await?;
        let mut report = ImportReport {
            dry_run: params.dry_run,
            ..Default::default()
        };

        if documents.is_empty() {
            warn!(
                "No documents found in {}. Nothing to import.",
                self.source.describe()
            );
            return Ok(report);
        }

        progress.on_import_start(documents.len());
        debug!(
            "Reading {} documents with up to {} concurrent reads",
            documents.len(),
            params.read_concurrency()
        );

        // Reads may overlap; results still arrive in listing order.
        let mut reads = futures::stream::iter(documents.iter().map(|document| async move {
            (document, self.source.read_document(document).await)
        }))
        .buffered(params.read_concurrency());

        while let Some((document, result)) = reads.next().await {
            self.check_cancelled()?;

            match result {
                Ok(source_document) => {
                    let extraction = extract_document(&source_document);
                    self.record_extraction(&extraction, report.questions.len());
                    progress.on_document_complete(&extraction);
                    report.documents.push(DocumentReport::from_extraction(&extraction));
                    report.questions.extend(extraction.questions);
                }
                Err(e) => {
                    self.record_failure(document, &e);
                    progress.on_document_failed(&document.name, &e.to_string());
                    report
                        .documents
                        .push(DocumentReport::failed(&document.name, e.to_string()));
                }
            }
        }

        self.check_cancelled()?;

        if report.questions.is_empty() {
            warn!("No questions were successfully parsed. Nothing will be uploaded.");
            return Ok(report);
        }

        if params.dry_run {
            info!(
                "Dry run: skipping upload of {} questions",
                report.question_count()
            );
            return Ok(report);
        }

        info!(
            "Uploading {} questions to {}",
            report.question_count(),
            self.sink.describe()
        );
        progress.on_upload_start(report.question_count());

        let written = self.sink.upsert_all(&report.questions).await?;

        info!("Successfully uploaded {} questions", written);
        progress.on_upload_complete(written);
        self.event_logger.log(ImportEvent::new(
            "upload_complete",
            json!({
                "destination": self.sink.describe(),
                "questions": report.question_count(),
                "written": written,
            }),
        ));

        report.uploaded = Some(written);
        Ok(report)
    }

    fn record_extraction(&self, extraction: &DocumentExtraction, parsed_before: usize) {
        if extraction.is_empty() {
            warn!(
                "Could not split document {} into question blocks. It may have an unexpected format.",
                extraction.source
            );
            self.event_logger.log(ImportEvent::new(
                "document_without_blocks",
                json!({ "document": extraction.source }),
            ));
            return;
        }

        if extraction.skipped_blocks > 0 {
            warn!(
                "Skipped {} block(s) without a question id in {}",
                extraction.skipped_blocks, extraction.source
            );
        }

        for question in &extraction.questions {
            debug!(
                "Parsed question {}: {}",
                question.id(),
                truncate(question.prompt(), 80)
            );
        }

        info!(
            "Parsed {} questions from {} ({} total)",
            extraction.question_count(),
            extraction.source,
            parsed_before + extraction.question_count()
        );
        self.event_logger.log(ImportEvent::new(
            "document_parsed",
            json!({
                "document": extraction.source,
                "blocks": extraction.block_count,
                "questions": extraction.question_count(),
                "skipped_blocks": extraction.skipped_blocks,
                "ids": extraction
                    .questions
                    .iter()
                    .map(|q| q.id().as_str())
                    .collect::<Vec<_>>(),
            }),
        ));
    }

    fn record_failure(&self, document: &DocumentRef, error: &SourceError) {
        error!("Error processing document {}: {}", document.name, error);
        self.event_logger.log(ImportEvent::new(
            "document_failed",
            json!({
                "document": document.name,
                "location": document.location,
                "error": error.to_string(),
            }),
        ));
    }
}
