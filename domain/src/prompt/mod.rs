//! Completion request composition.
//!
//! - [`persona`]: the fixed instruction sent ahead of every question
//! - [`request::CompletionRequest`]: ordered messages + model identifier
//! - [`request::Completion`]: the choices returned by the provider

pub mod persona;
pub mod request;
