//! Divergence reporting.
//!
//! Comparison never stops at the first mismatch; it collects every
//! divergence so two models can be reconciled in one pass.

use declex_foundation::TypeTag;
use declex_model::TypeKind;

/// Which model a one-sided divergence refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// The first model passed to the comparison.
    Left,
    /// The second model passed to the comparison.
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// One structural divergence between two declarations or models.
#[derive(Clone, Debug, PartialEq)]
pub enum Diff {
    /// The declarations have different names.
    NameMismatch {
        /// Name on the left side.
        left: String,
        /// Name on the right side.
        right: String,
    },
    /// One is a class and the other a struct, under a configuration
    /// where that matters.
    KindMismatch {
        /// Kind on the left side.
        left: TypeKind,
        /// Kind on the right side.
        right: TypeKind,
    },
    /// A declaration exists in only one model.
    MissingDeclaration {
        /// Declaration name.
        name: String,
        /// The side the declaration is absent from.
        missing_from: Side,
    },
    /// A field exists in only one declaration.
    MissingField {
        /// Field name as spelled on the side that has it.
        name: String,
        /// The side the field is absent from.
        missing_from: Side,
    },
    /// A shared field has incompatible types.
    FieldTypeMismatch {
        /// Field name.
        name: String,
        /// Type on the left side.
        left: TypeTag,
        /// Type on the right side.
        right: TypeTag,
    },
    /// A shared field has a value source on one side only.
    ValueSourceMismatch {
        /// Field name.
        name: String,
    },
    /// A method exists in only one declaration.
    MissingMethod {
        /// Method name as spelled on the side that has it.
        name: String,
        /// Parameter count.
        arity: usize,
        /// The side the method is absent from.
        missing_from: Side,
    },
    /// A shared method has incompatible return types.
    ReturnTypeMismatch {
        /// Method name.
        name: String,
        /// Return type on the left side.
        left: TypeTag,
        /// Return type on the right side.
        right: TypeTag,
    },
    /// A shared method has a parameter with incompatible types.
    ParameterTypeMismatch {
        /// Method name.
        method: String,
        /// Parameter name as spelled on the left side.
        parameter: String,
        /// Type on the left side.
        left: TypeTag,
        /// Type on the right side.
        right: TypeTag,
    },
}

impl std::fmt::Display for Diff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameMismatch { left, right } => {
                write!(f, "declaration names differ: '{left}' vs '{right}'")
            }
            Self::KindMismatch { left, right } => {
                write!(f, "declaration kinds differ: {left} vs {right}")
            }
            Self::MissingDeclaration { name, missing_from } => {
                write!(f, "declaration '{name}' is missing from the {missing_from} model")
            }
            Self::MissingField { name, missing_from } => {
                write!(f, "field '{name}' is missing from the {missing_from} declaration")
            }
            Self::FieldTypeMismatch { name, left, right } => {
                write!(f, "field '{name}' has type {left} vs {right}")
            }
            Self::ValueSourceMismatch { name } => {
                write!(f, "field '{name}' has a value source on one side only")
            }
            Self::MissingMethod {
                name,
                arity,
                missing_from,
            } => {
                write!(
                    f,
                    "method '{name}/{arity}' is missing from the {missing_from} declaration"
                )
            }
            Self::ReturnTypeMismatch { name, left, right } => {
                write!(f, "method '{name}' returns {left} vs {right}")
            }
            Self::ParameterTypeMismatch {
                method,
                parameter,
                left,
                right,
            } => {
                write!(
                    f,
                    "method '{method}' parameter '{parameter}' has type {left} vs {right}"
                )
            }
        }
    }
}

/// The outcome of an equivalence comparison.
#[derive(Clone, Debug, PartialEq)]
pub enum EquivalenceResult {
    /// The two sides describe the same structure.
    Equivalent,
    /// The two sides diverge; every divergence is listed.
    Divergent(Vec<Diff>),
}

impl EquivalenceResult {
    /// Returns true if the comparison found no divergence.
    #[must_use]
    pub const fn is_equivalent(&self) -> bool {
        matches!(self, Self::Equivalent)
    }

    /// Returns the divergences, empty when equivalent.
    #[must_use]
    pub fn diffs(&self) -> &[Diff] {
        match self {
            Self::Equivalent => &[],
            Self::Divergent(diffs) => diffs,
        }
    }
}

impl From<Vec<Diff>> for EquivalenceResult {
    fn from(diffs: Vec<Diff>) -> Self {
        if diffs.is_empty() {
            Self::Equivalent
        } else {
            Self::Divergent(diffs)
        }
    }
}
