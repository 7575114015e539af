//! Infrastructure layer for exam-extract
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod sink;
pub mod source;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileImportConfig, FileOutputConfig,
    FileOutputFormat, FileSinkConfig, FileSourceConfig,
};
pub use logging::JsonlImportLogger;
pub use sink::JsonFileQuestionSink;
pub use source::TextDirectorySource;
