//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: whitespace normalization and UTF-8 safe truncation

pub mod error;
pub mod string;
