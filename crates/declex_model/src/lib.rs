//! The canonical declaration model for Declex.
//!
//! Every frontend converges on this representation: a
//! [`DeclarationModel`] holds the ordered [`TypeDeclaration`]s extracted
//! from one source file, each owning its fields, constructors, and
//! methods. Models are created fresh per parse, immutable once
//! normalization completes, and serializable through [`codec`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod codec;
pub mod declaration;

pub use declaration::{
    Assignment, Constructor, DeclarationModel, Field, Method, Parameter, TypeDeclaration, TypeKind,
};
