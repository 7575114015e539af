//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section is optional; missing keys fall back to the defaults below.
//!
//! ```toml
//! [source]
//! dir = "./documents"
//! extensions = ["txt"]
//!
//! [import]
//! dry_run = false
//! max_concurrent_reads = 4
//!
//! [sink]
//! path = "./questions.json"
//!
//! [output]
//! format = "summary"
//! color = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("source.extensions cannot be empty")]
    NoExtensions,

    #[error("source.extensions contains an empty entry")]
    EmptyExtension,

    #[error("import.max_concurrent_reads cannot be 0")]
    ZeroConcurrency,

    #[error("sink.path cannot be empty")]
    EmptySinkPath,
}

/// Raw source configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSourceConfig {
    /// Directory scanned for document text files
    pub dir: PathBuf,
    /// File extensions (without the dot) that count as documents
    pub extensions: Vec<String>,
}

impl Default for FileSourceConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./documents"),
            extensions: vec!["txt".to_string()],
        }
    }
}

/// Raw import configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileImportConfig {
    /// Parse only, never write to the sink
    pub dry_run: bool,
    /// Upper bound on documents read at the same time
    pub max_concurrent_reads: usize,
}

impl Default for FileImportConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            max_concurrent_reads: 4,
        }
    }
}

/// Raw sink configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSinkConfig {
    /// JSON collection file records are upserted into
    pub path: PathBuf,
}

impl Default for FileSinkConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./questions.json"),
        }
    }
}

/// How results are printed once an import finishes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOutputFormat {
    /// Per-document table and totals
    #[default]
    Summary,
    /// One short entry per parsed question
    Questions,
    /// The full report as JSON
    Json,
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format
    pub format: Option<FileOutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Complete file configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Where documents come from
    pub source: FileSourceConfig,
    /// Import behavior
    pub import: FileImportConfig,
    /// Where records go
    pub sink: FileSinkConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration, returning every issue found
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.source.extensions.is_empty() {
            issues.push(ConfigValidationError::NoExtensions);
        } else if self.source.extensions.iter().any(|e| e.trim().is_empty()) {
            issues.push(ConfigValidationError::EmptyExtension);
        }

        if self.import.max_concurrent_reads == 0 {
            issues.push(ConfigValidationError::ZeroConcurrency);
        }

        if self.sink.path.as_os_str().is_empty() {
            issues.push(ConfigValidationError::EmptySinkPath);
        }

        issues
    }
}
