//! Question records produced by the extraction core.
//!
//! - [`QuestionId`]: validated lowercase hex identifier (value object)
//! - [`QuestionOption`]: one labeled answer choice
//! - [`Question`]: the unit of output, keyed by id for persistence

pub mod entities;
pub mod value_objects;

pub use entities::{Question, QuestionOption, UNKNOWN_LABEL};
pub use value_objects::QuestionId;
