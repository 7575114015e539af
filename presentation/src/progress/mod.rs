//! Progress reporting during an import

pub mod reporter;
