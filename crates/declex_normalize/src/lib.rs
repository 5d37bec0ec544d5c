//! Declaration normalization for the Declex extractor.
//!
//! Bridges the per-language frontends and the canonical model:
//! [`extract`] parses a source file and lowers the result in one call.
//! Normalization synthesizes what a language leaves implicit (fields
//! assigned but never declared, the memberwise constructor) and rejects
//! anything that would violate a model invariant.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod normalizer;
pub mod typemap;

pub use normalizer::{normalize_declaration, normalize_file};
pub use typemap::{tag_for_annotation, tag_for_literal};

use declex_foundation::{Language, Result};
use declex_frontend::Registry;
use declex_model::DeclarationModel;

/// Parses `source` as `language` and lowers it to a canonical model.
///
/// Pure per call: the same input always produces the same model, and a
/// failure leaves nothing behind.
///
/// # Errors
/// Returns an unsupported-language error for a language with no
/// frontend, a syntax error from the frontend, or a model error from
/// normalization.
pub fn extract(language: Language, source: &str) -> Result<DeclarationModel> {
    let raw = Registry::standard().parse(language, source)?;
    normalize_file(language, &raw)
}
