//! Source documents and per-document extraction results.

use crate::question::Question;
use serde::{Deserialize, Serialize};

/// One document's extracted plain text (Value Object)
///
/// The text source collaborator produces these; by the time a
/// `SourceDocument` exists the binary format has already been decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    /// File name or other label, kept for log traceability
    pub name: String,
    /// The full extracted text
    pub text: String,
}

impl SourceDocument {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Outcome of running the extraction core over one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentExtraction {
    /// Name of the document this came from
    pub source: String,
    /// Number of blocks the splitter produced
    pub block_count: usize,
    /// Questions parsed from blocks that yielded an id, in document order
    pub questions: Vec<Question>,
    /// Blocks discarded because no id could be extracted
    pub skipped_blocks: usize,
}

impl DocumentExtraction {
    /// True when the splitter found no question delimiters at all
    pub fn is_empty(&self) -> bool {
        self.block_count == 0
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}
