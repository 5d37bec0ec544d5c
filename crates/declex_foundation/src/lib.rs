//! Core types for the Declex extractor.
//!
//! This crate provides:
//! - [`Language`] - Identifiers for the supported source languages
//! - [`TypeTag`] - Language-neutral type tags for fields and return types
//! - [`Error`] - Rich error types with context
//! - [`Result`] - The shared result alias for all Declex operations

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod language;
pub mod types;

pub use error::{Error, ErrorContext, ErrorKind, ModelViolation, Result};
pub use language::Language;
pub use types::TypeTag;
