//! Declex - Cross-language type declaration extractor
//!
//! This crate re-exports all layers of the Declex system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: declex_compare    — Structural equivalence of canonical models
//! Layer 3: declex_normalize  — Raw declarations to the canonical model
//! Layer 2: declex_frontend   — Per-language parsing into raw declarations
//! Layer 1: declex_model      — The canonical declaration model + codec
//! Layer 0: declex_foundation — Core types (Language, TypeTag, Error)
//! ```

pub use declex_compare as compare;
pub use declex_foundation as foundation;
pub use declex_frontend as frontend;
pub use declex_model as model;
pub use declex_normalize as normalize;
