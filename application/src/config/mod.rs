//! Application-level configuration.
//!
//! - [`ImportParams`]: import run control (dry run, read concurrency)

pub mod import_params;

pub use import_params::ImportParams;
