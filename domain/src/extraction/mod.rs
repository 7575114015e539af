//! Text extraction core.
//!
//! Pure functions that turn one document's extracted text into
//! [`Question`](crate::question::Question) records. No I/O, no shared state:
//! the same input always yields the same output, so documents may be
//! processed concurrently without any synchronization.
//!
//! # Pipeline
//!
//! | Step | Function | Output |
//! |------|----------|--------|
//! | Segment document | [`split_into_blocks`] | `Vec<RawBlock>` |
//! | Parse each block | [`parse_block`] | `Option<Question>` |
//! | Both, with counts | [`extract_document`] | `DocumentExtraction` |
//!
//! [`extract_section`] is the shared primitive for marker-bounded fields.

pub mod blocks;
pub mod document;
pub mod fields;
pub mod section;

pub use blocks::{RawBlock, split_into_blocks};
pub use document::extract_document;
pub use fields::parse_block;
pub use section::{SectionRule, extract_first_section, extract_section};
