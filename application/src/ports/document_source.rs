//! Document source port
//!
//! Defines the interface for obtaining the plain text of source documents.
//! Decoding the binary document format happens before this boundary; an
//! adapter only has to hand back one string per document.

use async_trait::async_trait;
use exam_extract_domain::SourceDocument;
use thiserror::Error;

/// Handle to one document the source can read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    /// Display name (usually the file name)
    pub name: String,
    /// Adapter-specific location (path, key, ...)
    pub location: String,
}

impl DocumentRef {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }
}

/// Errors raised by a document source
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Source not found: {0}")]
    NotFound(String),

    #[error("Failed to list documents: {0}")]
    List(String),

    #[error("Failed to read {name}: {message}")]
    Read { name: String, message: String },
}

/// Port for document text sources
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait DocumentSourcePort: Send + Sync {
    /// Human-readable description of where documents come from
    fn describe(&self) -> String;

    /// Enumerate the documents available, in processing order
    async fn list_documents(&self) -> Result<Vec<DocumentRef>, SourceError>;

    /// Read one document's extracted text
    async fn read_document(&self, document: &DocumentRef) -> Result<SourceDocument, SourceError>;
}
