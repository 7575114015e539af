//! Whole-document extraction: split, then parse every block.

use super::blocks::split_into_blocks;
use super::fields::parse_block;
use crate::document::{DocumentExtraction, SourceDocument};

/// Run the extraction core over one document.
///
/// Blocks that yield no id are counted in `skipped_blocks` rather than
/// returned; a document without delimiters comes back with
/// `block_count == 0`.
pub fn extract_document(document: &SourceDocument) -> DocumentExtraction {
    let blocks = split_into_blocks(&document.text);
    let block_count = blocks.len();
    let questions: Vec<_> = blocks
        .iter()
        .filter_map(|block| parse_block(&block.text))
        .collect();

    DocumentExtraction {
        source: document.name.clone(),
        block_count,
        skipped_blocks: block_count - questions.len(),
        questions,
    }
}
