//! Document source adapters

mod text_directory;

pub use text_directory::TextDirectorySource;
