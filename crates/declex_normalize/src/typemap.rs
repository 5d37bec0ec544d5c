//! Mapping from surface type spellings and literals to type tags.
//!
//! Each language spells the primitive types differently; everything
//! outside the known spellings lowers to [`TypeTag::Unknown`], which
//! the comparator treats as compatible with anything.

use declex_foundation::{Language, TypeTag};

/// Maps a surface type annotation to a tag for the given language.
///
/// Leading pointer/reference sigils and trailing optional markers are
/// stripped first, so `*int`, `Int?`, and `String!` map like their
/// plain spellings.
#[must_use]
pub fn tag_for_annotation(language: Language, text: &str) -> TypeTag {
    let text = text
        .trim()
        .trim_start_matches(['*', '&'])
        .trim_end_matches(['?', '!'])
        .trim();
    match language {
        Language::JavaScript | Language::TypeScript => match text {
            "string" | "String" => TypeTag::String,
            "number" | "Number" => TypeTag::Float,
            "boolean" | "Boolean" => TypeTag::Boolean,
            "void" | "undefined" => TypeTag::Unit,
            _ => TypeTag::Unknown,
        },
        Language::Swift => match text {
            "String" | "Character" => TypeTag::String,
            "Int" | "Int8" | "Int16" | "Int32" | "Int64" | "UInt" | "UInt8" | "UInt16"
            | "UInt32" | "UInt64" => TypeTag::Integer,
            "Bool" => TypeTag::Boolean,
            "Double" | "Float" | "CGFloat" => TypeTag::Float,
            "Void" | "()" => TypeTag::Unit,
            _ => TypeTag::Unknown,
        },
        Language::Python => match text {
            "str" => TypeTag::String,
            "int" => TypeTag::Integer,
            "bool" => TypeTag::Boolean,
            "float" => TypeTag::Float,
            "None" => TypeTag::Unit,
            _ => TypeTag::Unknown,
        },
        Language::Go => match text {
            "string" => TypeTag::String,
            "int" | "int8" | "int16" | "int32" | "int64" | "uint" | "uint8" | "uint16"
            | "uint32" | "uint64" | "byte" | "rune" => TypeTag::Integer,
            "bool" => TypeTag::Boolean,
            "float32" | "float64" => TypeTag::Float,
            _ => TypeTag::Unknown,
        },
    }
}

/// Infers a tag from an initializer literal.
///
/// Only unambiguous literals infer a tag; any other expression stays
/// [`TypeTag::Unknown`].
#[must_use]
pub fn tag_for_literal(text: &str) -> TypeTag {
    let text = text.trim();
    if text.starts_with(['"', '\'', '`']) {
        return TypeTag::String;
    }
    match text {
        "true" | "false" | "True" | "False" => return TypeTag::Boolean,
        _ => {}
    }
    if text.parse::<i64>().is_ok() {
        return TypeTag::Integer;
    }
    if text.parse::<f64>().is_ok() {
        return TypeTag::Float;
    }
    TypeTag::Unknown
}

/// Returns true if `text` is a single plain identifier.
#[must_use]
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
