//! Integration tests for declaration normalization.
//!
//! Drives full source text through `extract` and checks the canonical
//! models that come out.

mod fields;
mod invariants;
