//! Frontend for JavaScript and TypeScript `class` declarations.
//!
//! Handles `class Name extends Base` with field declarations, a
//! `constructor`, and methods. TypeScript annotations (`: type` on
//! fields, parameters, and returns, plus `implements` clauses and
//! visibility modifiers) parse as a superset. Method and constructor
//! bodies are captured verbatim; only the constructor body is scanned
//! for `this.field = value` statements.

use declex_foundation::Result;

use crate::raw::{
    extract_self_assignments, RawConstructor, RawDeclaration, RawField, RawKind, RawMethod,
    RawParameter,
};
use crate::source::{CommentStyle, Source, Span};

/// Parses every `class` declaration in `source`.
///
/// # Errors
/// Returns a syntax error for a malformed class body.
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
            if cursor.eat_word("class") {
                declarations.push(parse_class(&mut cursor, span)?);
            } else {
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

fn parse_class(cursor: &mut Source<'_>, span: Span) -> Result<RawDeclaration> {
    cursor.skip_trivia();
    let Some(name) = cursor.eat_identifier() else {
        return Err(cursor.error("expected class name"));
    };
    let mut declaration = RawDeclaration::new(name, RawKind::Class, span);

    cursor.skip_trivia();
    if cursor.eat_word("extends") {
        cursor.skip_trivia();
        declaration.supertypes.push(parse_dotted_name(cursor)?);
        cursor.skip_trivia();
    }
    if cursor.eat_word("implements") {
        loop {
            cursor.skip_trivia();
            declaration.supertypes.push(parse_dotted_name(cursor)?);
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
            return Err(cursor.error_at(body_start, "unterminated class body"));
        }
        if cursor.eat_char(';') {
            continue;
        }
        parse_member(cursor, &mut declaration)?;
    }
    Ok(declaration)
}

fn parse_dotted_name(cursor: &mut Source<'_>) -> Result<String> {
    let Some(first) = cursor.eat_identifier() else {
        return Err(cursor.error("expected a type name"));
    };
    let mut name = first.to_string();
    while cursor.eat_char('.') {
        let Some(next) = cursor.eat_identifier() else {
            return Err(cursor.error("expected a name after '.'"));
        };
        name.push('.');
        name.push_str(next);
    }
    Ok(name)
}

fn parse_member(cursor: &mut Source<'_>, declaration: &mut RawDeclaration) -> Result<()> {
    let span = cursor.here();
    loop {
        cursor.skip_trivia();
        let mut skipped = false;
        for modifier in ["static", "async", "public", "private", "protected", "readonly"] {
            if cursor.eat_word(modifier) {
                skipped = true;
                break;
            }
        }
        if !skipped {
            break;
        }
    }
    cursor.eat_char('#');
    let Some(mut name) = cursor.eat_identifier() else {
        return Err(cursor.error("expected a member name"));
    };
    cursor.skip_trivia();
    if (name == "get" || name == "set") && cursor.peek_is_ident_start() {
        if let Some(accessor) = cursor.eat_identifier() {
            name = accessor;
        }
        cursor.skip_trivia();
    }

    if cursor.peek() == Some('(') {
        let parameters = parse_parameters(cursor)?;
        cursor.skip_trivia();
        let return_annotation = if cursor.eat_char(':') {
            cursor.skip_trivia();
            Some(cursor.read_value(&['{']).to_string())
        } else {
            None
        };
        cursor.skip_trivia();
        let body = cursor.read_balanced('{', '}')?.to_string();
        if name == "constructor" {
            let assignments = extract_self_assignments(&body, "this");
            declaration.constructors.push(RawConstructor {
                parameters,
                assignments,
                body,
                span,
            });
        } else {
            declaration.methods.push(RawMethod {
                name: name.to_string(),
                parameters,
                return_annotation,
                body,
                span,
            });
        }
        return Ok(());
    }

    // Field declaration, with optional annotation and initializer.
    let annotation = if cursor.eat_char(':') {
        cursor.skip_trivia();
        Some(cursor.read_value(&['=', ';', '\n']).to_string())
    } else {
        None
    };
    cursor.skip_trivia();
    let initializer = if cursor.eat_char('=') {
        cursor.skip_trivia();
        Some(cursor.read_value(&[';', '\n']).to_string())
    } else {
        None
    };
    cursor.eat_char(';');
    declaration.fields.push(RawField {
        name: name.to_string(),
        annotation,
        initializer,
        span,
    });
    Ok(())
}

fn parse_parameters(cursor: &mut Source<'_>) -> Result<Vec<RawParameter>> {
    cursor.expect_char('(')?;
    let mut parameters = Vec::new();
    loop {
        cursor.skip_trivia();
        if cursor.eat_char(')') {
            break;
        }
        cursor.eat_str("...");
        cursor.skip_trivia();
        let Some(name) = cursor.eat_identifier() else {
            return Err(cursor.error("expected a parameter name"));
        };
        cursor.eat_char('?');
        cursor.skip_trivia();
        let annotation = if cursor.eat_char(':') {
            cursor.skip_trivia();
            Some(cursor.read_value(&[',', ')', '=']).to_string())
        } else {
            None
        };
        cursor.skip_trivia();
        if cursor.eat_char('=') {
            cursor.skip_trivia();
            cursor.read_value(&[',', ')']);
        }
        parameters.push(RawParameter::new(name, annotation));
        cursor.skip_trivia();
        cursor.eat_char(',');
    }
    Ok(parameters)
}
