//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level validation errors
//! - [`string`]: UTF-8 safe string helpers for messages and log previews

pub mod error;
pub mod string;
