//! Per-language frontends for the Declex extractor.
//!
//! Each frontend turns raw source text into a sequence of
//! [`RawDeclaration`](raw::RawDeclaration) nodes specific to that
//! language's surface syntax. All frontends read through the shared
//! [`Source`](source::Source) lexeme cursor and are dispatched through
//! the immutable [`Registry`](registry::Registry).
//!
//! Frontends recognize declaration-level constructs only: type headers,
//! field sections, constructors, and method signatures. Bodies are
//! captured as opaque payloads, never interpreted.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod go;
pub mod javascript;
pub mod python;
pub mod raw;
pub mod registry;
pub mod source;
pub mod swift;

pub use raw::{
    RawAssignment, RawConstructor, RawDeclaration, RawField, RawKind, RawMethod, RawParameter,
};
pub use registry::{FrontendKind, Registry};
pub use source::{CommentStyle, Source, Span};
