//! Application layer for exam-extract
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ImportParams;
pub use ports::{
    document_source::{DocumentRef, DocumentSourcePort, SourceError},
    import_logger::{ImportEvent, ImportEventLogger, NoImportLogger},
    progress::{ImportProgressNotifier, NoImportProgress},
    question_sink::{QuestionSinkPort, SinkError},
};
pub use use_cases::import_questions::{
    DocumentReport, DocumentStatus, ImportError, ImportQuestionsUseCase, ImportReport,
};
