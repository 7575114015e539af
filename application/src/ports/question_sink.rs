//! Question sink port
//!
//! Defines the interface for persisting parsed questions. Records are
//! upserted keyed by their id; when two records share an id the later one
//! wins.

use async_trait::async_trait;
use exam_extract_domain::Question;
use thiserror::Error;

/// Errors raised by a question sink
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Failed to load existing records from {path}: {message}")]
    Load { path: String, message: String },

    #[error("Failed to write records to {path}: {message}")]
    Write { path: String, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Port for question persistence
#[async_trait]
pub trait QuestionSinkPort: Send + Sync {
    /// Human-readable description of the destination
    fn describe(&self) -> String;

    /// Upsert every record keyed by id, returning how many were written.
    ///
    /// Callers only pass records that carry an id; the domain type makes an
    /// id-less record unrepresentable.
    async fn upsert_all(&self, questions: &[Question]) -> Result<usize, SinkError>;
}
