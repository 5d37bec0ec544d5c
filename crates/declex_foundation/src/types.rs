//! Language-neutral type tags.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A language-neutral type tag.
///
/// Every declared type annotation normalizes to one of these tags; an
/// annotation the extractor cannot resolve becomes [`TypeTag::Unknown`]
/// rather than failing, keeping the extractor resilient to language
/// features outside its supported subset.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TypeTag {
    /// Text type.
    String,
    /// Integer type.
    Integer,
    /// Floating-point type.
    Float,
    /// Boolean type.
    Boolean,
    /// No value; the return type of a method without one.
    Unit,
    /// An annotation the extractor could not resolve, or none at all.
    Unknown,
}

impl TypeTag {
    /// Returns true if this tag is [`TypeTag::Unknown`].
    #[must_use]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Checks whether two tags are compatible, treating `Unknown` as a
    /// wildcard.
    ///
    /// Dynamically-typed frontends produce `Unknown` for untyped fields
    /// and parameters; such a tag is compatible with any concrete tag.
    #[must_use]
    pub fn compatible(self, other: Self) -> bool {
        self == other || self.is_unknown() || other.is_unknown()
    }
}

impl fmt::Debug for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Integer => write!(f, "integer"),
            Self::Float => write!(f, "float"),
            Self::Boolean => write!(f, "boolean"),
            Self::Unit => write!(f, "unit"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
