//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod document_source;
pub mod import_logger;
pub mod progress;
pub mod question_sink;
