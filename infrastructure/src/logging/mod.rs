//! Logging infrastructure: structured import event logging.
//!
//! Provides [`JsonlImportLogger`], a JSONL file writer that implements
//! the [`ImportEventLogger`](exam_extract_application::ImportEventLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlImportLogger;
