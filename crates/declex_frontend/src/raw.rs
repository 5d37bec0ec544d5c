//! Raw declaration nodes.
//!
//! Frontends emit these as-is from surface syntax. Type annotations and
//! initializers are kept as uninterpreted text; the normalizer owns all
//! interpretation. Bodies are carried verbatim and never parsed beyond
//! the receiver-assignment scan.

use crate::source::{self, Span};

/// Whether the surface syntax declared a class or a struct.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RawKind {
    /// Declared with a `class` keyword.
    Class,
    /// Declared with a `struct` keyword (or Go's `type ... struct`).
    Struct,
}

/// One type declaration as it appeared in source.
#[derive(Clone, Debug, PartialEq)]
pub struct RawDeclaration {
    /// Declared name.
    pub name: String,
    /// Class or struct.
    pub kind: RawKind,
    /// Names of supertypes, in declaration order.
    pub supertypes: Vec<String>,
    /// Explicitly declared fields.
    pub fields: Vec<RawField>,
    /// Explicitly declared constructors.
    pub constructors: Vec<RawConstructor>,
    /// Declared methods, constructors excluded.
    pub methods: Vec<RawMethod>,
    /// Where the declaration starts.
    pub span: Span,
}

impl RawDeclaration {
    /// Creates an empty declaration.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: RawKind, span: Span) -> Self {
        Self {
            name: name.into(),
            kind,
            supertypes: Vec::new(),
            fields: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
            span,
        }
    }
}

/// An explicitly declared field.
#[derive(Clone, Debug, PartialEq)]
pub struct RawField {
    /// Field name.
    pub name: String,
    /// Type annotation text, if the source carried one.
    pub annotation: Option<String>,
    /// Initializer text, if the source carried one.
    pub initializer: Option<String>,
    /// Where the field appears.
    pub span: Span,
}

/// A parameter of a constructor or method.
#[derive(Clone, Debug, PartialEq)]
pub struct RawParameter {
    /// Parameter name.
    pub name: String,
    /// Type annotation text, if the source carried one.
    pub annotation: Option<String>,
}

impl RawParameter {
    /// Creates a parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, annotation: Option<String>) -> Self {
        Self {
            name: name.into(),
            annotation,
        }
    }
}

/// One `receiver.field = value` statement found in a constructor body.
#[derive(Clone, Debug, PartialEq)]
pub struct RawAssignment {
    /// Field name on the left-hand side.
    pub field: String,
    /// Right-hand side text, trimmed.
    pub value: String,
}

/// An explicitly declared constructor.
#[derive(Clone, Debug, PartialEq)]
pub struct RawConstructor {
    /// Parameters in declaration order.
    pub parameters: Vec<RawParameter>,
    /// Receiver assignments found in the body.
    pub assignments: Vec<RawAssignment>,
    /// Body text, verbatim.
    pub body: String,
    /// Where the constructor appears.
    pub span: Span,
}

/// A declared method.
#[derive(Clone, Debug, PartialEq)]
pub struct RawMethod {
    /// Method name.
    pub name: String,
    /// Parameters in declaration order.
    pub parameters: Vec<RawParameter>,
    /// Return annotation text, if the source carried one.
    pub return_annotation: Option<String>,
    /// Body text, verbatim.
    pub body: String,
    /// Where the method appears.
    pub span: Span,
}

/// Scans a constructor body for `receiver.field = value` statements.
///
/// Statements are split on newlines and semicolons. Compound operators
/// (`+=`, `==`, and friends) are not assignments and are skipped, as is
/// anything whose left-hand side is not a plain `receiver.field`.
#[must_use]
pub fn extract_self_assignments(body: &str, receiver: &str) -> Vec<RawAssignment> {
    let mut assignments = Vec::new();
    for statement in body.split(['\n', ';']) {
        let statement = statement.trim();
        let Some(after_receiver) = statement.strip_prefix(receiver) else {
            continue;
        };
        let Some(after_dot) = after_receiver.strip_prefix('.') else {
            continue;
        };
        let Some((field, rest)) = take_identifier(after_dot) else {
            continue;
        };
        let rest = rest.trim_start();
        let Some(value) = rest.strip_prefix('=') else {
            continue;
        };
        // '==' is a comparison, not an assignment.
        if value.starts_with('=') {
            continue;
        }
        assignments.push(RawAssignment {
            field: field.to_string(),
            value: value.trim().to_string(),
        });
    }
    assignments
}

/// Splits `text` on `sep` at nesting depth zero, outside string literals.
pub(crate) fn split_top_level(text: &str, sep: char) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0usize;
    for (i, c) in text.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' | '`' => quote = Some(c),
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            _ if c == sep && depth == 0 => {
                pieces.push(&text[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    pieces.push(&text[start..]);
    pieces
}

/// Splits a leading identifier off `text`, returning it and the rest.
pub(crate) fn take_identifier(text: &str) -> Option<(&str, &str)> {
    let mut chars = text.char_indices();
    let (_, first) = chars.next()?;
    if !source::is_ident_start(first) {
        return None;
    }
    let end = chars
        .find(|&(_, c)| !source::is_ident_continue(c))
        .map_or(text.len(), |(i, _)| i);
    Some((&text[..end], &text[end..]))
}
