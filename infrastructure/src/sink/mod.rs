//! Question sink adapters

mod json_file;

pub use json_file::JsonFileQuestionSink;
