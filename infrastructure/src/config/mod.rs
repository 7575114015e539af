//! Configuration file loading for exam-extract
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `EXAM_EXTRACT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./exam-extract.toml` or `./.exam-extract.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/exam-extract/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileImportConfig, FileOutputConfig, FileOutputFormat,
    FileSinkConfig, FileSourceConfig,
};
pub use loader::ConfigLoader;
