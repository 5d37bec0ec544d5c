//! Frontend for Swift `class` and `struct` declarations.
//!
//! Handles stored and computed properties, `init` declarations, and
//! `func` declarations, with access modifiers and attributes skipped.
//! Only `init` bodies are scanned, for `self.field = value` statements.

use declex_foundation::Result;

use crate::raw::{
    extract_self_assignments, RawConstructor, RawDeclaration, RawField, RawKind, RawMethod,
    RawParameter,
};
use crate::source::{CommentStyle, Source, Span};

const MODIFIERS: &[&str] = &[
    "public",
    "private",
    "internal",
    "fileprivate",
    "open",
    "final",
    "static",
    "override",
    "required",
    "convenience",
    "mutating",
    "lazy",
    "weak",
];

/// Parses every `class` and `struct` declaration in `source`.
///
/// # Errors
/// Returns a syntax error for a malformed declaration.
pub fn parse(source: &str) -> Result<Vec<RawDeclaration>> {
    let mut cursor = Source::new(source, CommentStyle::Slash);
    let mut declarations = Vec::new();
    loop {
        cursor.skip_trivia();
        if cursor.is_eof() {
            break;
        }
        if cursor.peek_is_ident_start() {
            let span = cursor.here();
            if cursor.eat_word("import") {
                cursor.skip_line();
            } else if cursor.eat_word("class") {
                declarations.push(parse_type(&mut cursor, RawKind::Class, span)?);
            } else if cursor.eat_word("struct") {
                declarations.push(parse_type(&mut cursor, RawKind::Struct, span)?);
            } else {
                // Modifiers like `public final` precede the keyword.
                cursor.eat_identifier();
            }
        } else if cursor.peek_is_quote() {
            cursor.skip_string();
        } else if cursor.peek() == Some('{') {
            cursor.read_balanced('{', '}')?;
        } else {
            cursor.advance();
        }
    }
    Ok(declarations)
}

fn parse_type(cursor: &mut Source<'_>, kind: RawKind, span: Span) -> Result<RawDeclaration> {
    cursor.skip_trivia();
    let Some(name) = cursor.eat_identifier() else {
        return Err(cursor.error("expected a type name"));
    };
    let mut declaration = RawDeclaration::new(name, kind, span);

    cursor.skip_trivia();
    if cursor.eat_char(':') {
        loop {
            cursor.skip_trivia();
            let Some(supertype) = cursor.eat_identifier() else {
                return Err(cursor.error("expected a supertype name"));
            };
            declaration.supertypes.push(supertype.to_string());
            cursor.skip_trivia();
            if !cursor.eat_char(',') {
                break;
            }
        }
    }

    cursor.skip_trivia();
    cursor.expect_char('{')?;
    let body_start = cursor.here();
    loop {
        cursor.skip_trivia();
        if cursor.eat_char('}') {
            break;
        }
        if cursor.is_eof() {
            return Err(cursor.error_at(body_start, "unterminated type body"));
        }
        parse_member(cursor, &mut declaration)?;
    }
    Ok(declaration)
}

fn parse_member(cursor: &mut Source<'_>, declaration: &mut RawDeclaration) -> Result<()> {
    let span = cursor.here();
    loop {
        cursor.skip_trivia();
        if cursor.eat_char('@') {
            cursor.eat_identifier();
            continue;
        }
        let mut skipped = false;
        for modifier in MODIFIERS {
            if cursor.eat_word(modifier) {
                skipped = true;
                break;
            }
        }
        if !skipped {
            break;
        }
    }

    if cursor.eat_word("var") || cursor.eat_word("let") {
        return parse_property(cursor, declaration, span);
    }
    if cursor.eat_word("init") {
        return parse_init(cursor, declaration, span);
    }
    if cursor.eat_word("func") {
        return parse_func(cursor, declaration, span);
    }
    // Nested types, subscripts, deinit, and the like are not modeled.
    // Consume through any block they carry so the type body stays
    // balanced.
    if cursor.peek_is_ident_start() {
        cursor.eat_identifier();
        cursor.read_value(&['{', '\n']);
        if cursor.peek() == Some('{') {
            cursor.read_balanced('{', '}')?;
        }
        return Ok(());
    }
    Err(cursor.error("expected a member declaration"))
}

fn parse_property(
    cursor: &mut Source<'_>,
    declaration: &mut RawDeclaration,
    span: Span,
) -> Result<()> {
    cursor.skip_trivia();
    let Some(name) = cursor.eat_identifier() else {
        return Err(cursor.error("expected a property name"));
    };
    cursor.skip_trivia();
    let annotation = if cursor.eat_char(':') {
        cursor.skip_trivia();
        let text = cursor.read_value(&['=', '\n', '{']);
        Some(text.to_string())
    } else {
        None
    };
    if cursor.peek() == Some('{') {
        // Computed property; the accessor block carries no stored state.
        cursor.read_balanced('{', '}')?;
        return Ok(());
    }
    cursor.skip_trivia();
    let initializer = if cursor.eat_char('=') {
        cursor.skip_trivia();
        Some(cursor.read_value(&['\n']).to_string())
    } else {
        None
    };
    declaration.fields.push(RawField {
        name: name.to_string(),
        annotation,
        initializer,
        span,
    });
    Ok(())
}

fn parse_init(
    cursor: &mut Source<'_>,
    declaration: &mut RawDeclaration,
    span: Span,
) -> Result<()> {
    cursor.eat_char('?');
    cursor.eat_char('!');
    cursor.skip_trivia();
    let parameters = parse_parameters(cursor)?;
    cursor.skip_trivia();
    let _ = cursor.eat_word("throws") || cursor.eat_word("rethrows");
    cursor.skip_trivia();
    let body = cursor.read_balanced('{', '}')?.to_string();
    let assignments = extract_self_assignments(&body, "self");
    declaration.constructors.push(RawConstructor {
        parameters,
        assignments,
        body,
        span,
    });
    Ok(())
}

fn parse_func(
    cursor: &mut Source<'_>,
    declaration: &mut RawDeclaration,
    span: Span,
) -> Result<()> {
    cursor.skip_trivia();
    let Some(name) = cursor.eat_identifier() else {
        return Err(cursor.error("expected a function name"));
    };
    cursor.skip_trivia();
    if cursor.peek() == Some('<') {
        cursor.read_balanced('<', '>')?;
        cursor.skip_trivia();
    }
    let parameters = parse_parameters(cursor)?;
    cursor.skip_trivia();
    let _ = cursor.eat_word("throws") || cursor.eat_word("rethrows");
    cursor.skip_trivia();
    let return_annotation = if cursor.eat_str("->") {
        cursor.skip_trivia();
        Some(cursor.read_value(&['{', '\n']).to_string())
    } else {
        None
    };
    cursor.skip_trivia();
    let body = cursor.read_balanced('{', '}')?.to_string();
    declaration.methods.push(RawMethod {
        name: name.to_string(),
        parameters,
        return_annotation,
        body,
        span,
    });
    Ok(())
}

/// Parses a parenthesized parameter list with Swift argument labels.
///
/// The internal name is the one init bodies assign from, so it wins
/// when a label is present. A `_` label is discarded the same way.
fn parse_parameters(cursor: &mut Source<'_>) -> Result<Vec<RawParameter>> {
    cursor.expect_char('(')?;
    let mut parameters = Vec::new();
    loop {
        cursor.skip_trivia();
        if cursor.eat_char(')') {
            break;
        }
        let Some(first) = cursor.eat_identifier() else {
            return Err(cursor.error("expected a parameter name"));
        };
        cursor.skip_trivia();
        let name = if cursor.peek_is_ident_start() {
            cursor.eat_identifier().unwrap_or(first)
        } else {
            first
        };
        cursor.skip_trivia();
        cursor.expect_char(':')?;
        cursor.skip_trivia();
        let annotation = cursor.read_value(&[',', ')', '=']).to_string();
        cursor.skip_trivia();
        if cursor.eat_char('=') {
            cursor.skip_trivia();
            cursor.read_value(&[',', ')']);
        }
        parameters.push(RawParameter::new(name, Some(annotation)));
        cursor.skip_trivia();
        cursor.eat_char(',');
    }
    Ok(parameters)
}
