//! Import parameters for the import use case.
//!
//! [`ImportParams`] groups the static parameters that control one run of
//! [`ImportQuestionsUseCase`](crate::use_cases::import_questions::ImportQuestionsUseCase).
//! These are application-layer concerns, not extraction policy.

use serde::{Deserialize, Serialize};

/// Import run control parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportParams {
    /// Parse and report, but never call the question sink.
    pub dry_run: bool,
    /// Maximum number of documents read from the source at the same time.
    pub max_concurrent_reads: usize,
}

impl Default for ImportParams {
    fn default() -> Self {
        Self {
            dry_run: false,
            max_concurrent_reads: 4,
        }
    }
}

impl ImportParams {
    // ==================== Builder Methods ====================

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Zero is treated as one.
    pub fn with_max_concurrent_reads(mut self, max: usize) -> Self {
        self.max_concurrent_reads = max.max(1);
        self
    }

    /// Effective read concurrency, never below one.
    pub fn read_concurrency(&self) -> usize {
        self.max_concurrent_reads.max(1)
    }
}
