//! Error types for the Declex system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error as ThisError;

/// Result alias used throughout Declex.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Declex operations.
#[derive(Debug, ThisError)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a syntax error at a source position.
    #[must_use]
    pub fn syntax(message: impl Into<String>, line: u32, column: u32, context: String) -> Self {
        Self::new(ErrorKind::Syntax {
            message: message.into(),
            line,
            column,
            context,
        })
    }

    /// Creates a model invariant violation error.
    #[must_use]
    pub fn model(violation: ModelViolation) -> Self {
        Self::new(ErrorKind::Model(violation))
    }

    /// Creates an unsupported language error.
    #[must_use]
    pub fn unsupported_language(id: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedLanguage(id.into()))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization(message.into()))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Returns true if this is a syntax error.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self.kind, ErrorKind::Syntax { .. })
    }

    /// Returns true if this is a model invariant violation.
    #[must_use]
    pub const fn is_model(&self) -> bool {
        matches!(self.kind, ErrorKind::Model(_))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, ThisError)]
pub enum ErrorKind {
    /// Source text does not match the recognized declaration grammar.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        /// Description of the syntax error.
        message: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
        /// The source line where the error occurred.
        context: String,
    },

    /// A structurally parseable declaration violates a model invariant.
    #[error("model error: {0}")]
    Model(ModelViolation),

    /// The requested language has no registered frontend.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Serialization or deserialization of a model failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A file operation failed.
    #[error("io error: {0}")]
    Io(String),
}

/// Model invariant violations raised during normalization.
///
/// These signal a genuine mismatch between the source and the canonical
/// model shape. They are always surfaced, never silently defaulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelViolation {
    /// A field has no default value and is not assigned by any constructor.
    UnassignedField {
        /// The declaration containing the field.
        declaration: String,
        /// The uncovered field name.
        field: String,
    },
    /// A constructor parameter does not initialize any field.
    UnmatchedParameter {
        /// The declaration containing the constructor.
        declaration: String,
        /// The parameter with no matching field.
        parameter: String,
    },
    /// A constructor parameter initializes more than one field.
    AmbiguousAssignment {
        /// The declaration containing the constructor.
        declaration: String,
        /// The ambiguous parameter.
        parameter: String,
        /// The fields the parameter was assigned to.
        fields: Vec<String>,
    },
    /// Two declarations in one file share a name.
    DuplicateDeclaration {
        /// The duplicated declaration name.
        name: String,
    },
    /// A declaration was produced with an empty name.
    EmptyDeclarationName,
}

impl fmt::Display for ModelViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnassignedField { declaration, field } => {
                write!(
                    f,
                    "field {field} of {declaration} has no default and no constructor assignment"
                )
            }
            Self::UnmatchedParameter {
                declaration,
                parameter,
            } => {
                write!(
                    f,
                    "parameter {parameter} of {declaration} does not initialize any field"
                )
            }
            Self::AmbiguousAssignment {
                declaration,
                parameter,
                fields,
            } => {
                write!(
                    f,
                    "parameter {parameter} of {declaration} initializes multiple fields: {}",
                    fields.join(", ")
                )
            }
            Self::DuplicateDeclaration { name } => {
                write!(f, "duplicate declaration: {name}")
            }
            Self::EmptyDeclarationName => {
                write!(f, "declaration has an empty name")
            }
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Label for the input, typically a file name.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
    /// Column number in source.
    pub column: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source label.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let (Some(line), Some(col)) = (self.line, self.column) {
                write!(f, ":{line}:{col}")?;
            }
        }
        Ok(())
    }
}
