//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: completion models offered by the provider
//! - [`question::Question`]: a validated, non-blank user input
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod question;
pub mod string;
