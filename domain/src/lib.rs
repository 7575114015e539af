//! Domain layer for exam-extract
//!
//! This crate contains the question records and the text extraction core.
//! It has no dependencies on infrastructure or presentation concerns and
//! performs no I/O: every function here is a pure transformation of text.
//!
//! # Core Concepts
//!
//! ## Extraction pipeline
//!
//! Document text flows through three layers, leaves first:
//!
//! - **Section extraction**: text between a start marker and the nearest of
//!   several end markers ([`extract_section`])
//! - **Block splitting**: one `(id, block)` pair per `Question ID <hex>`
//!   delimiter ([`split_into_blocks`])
//! - **Field parsing**: every field of one block ([`parse_block`])
//!
//! ## Soft failures
//!
//! Nothing in the core is fatal. A block without an id yields no
//! [`Question`]; a document without delimiters yields no blocks. Callers
//! decide how to report either case.

pub mod core;
pub mod document;
pub mod extraction;
pub mod question;

// Re-export commonly used types
pub use core::{
    error::DomainError,
    string::{collapse_whitespace, truncate},
};
pub use document::{DocumentExtraction, SourceDocument};
pub use extraction::{
    RawBlock, SectionRule, extract_document, extract_first_section, extract_section, parse_block,
    split_into_blocks,
};
pub use question::{Question, QuestionId, QuestionOption, UNKNOWN_LABEL};
