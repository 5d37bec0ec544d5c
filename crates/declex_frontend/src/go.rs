//! Frontend for Go `type ... struct` declarations.
//!
//! Methods hang off a struct through receivers declared away from the
//! type, and the `NewX` free-function convention stands in for a
//! constructor, so the parse runs in two phases: collect every struct,
//! method, and candidate constructor, then attach the detached members
//! to their types by name. Constructor bodies are scanned for
//! composite-literal field assignments (`&Car{Brand: brand, ...}`).

use declex_foundation::Result;

use crate::raw::{
    split_top_level, take_identifier, RawAssignment, RawConstructor, RawDeclaration, RawField,
    RawKind, RawMethod, RawParameter,
};
use crate::source::{CommentStyle, Source, Span};

/// Parses every struct declaration in `source`, with detached methods
/// and `NewX` constructors attached to their structs.
///
/// # Errors
/// Returns a syntax error for a malformed type or function declaration.
pub fn parse(source: &str) -> Result<Vec<RawDeclaration>> {
    let mut cursor = Source::new(source, CommentStyle::Slash);
    let mut declarations: Vec<RawDeclaration> = Vec::new();
    let mut pending_methods: Vec<(String, RawMethod)> = Vec::new();
    let mut pending_constructors: Vec<(String, RawConstructor)> = Vec::new();

    loop {
        cursor.skip_trivia();
        if cursor.is_eof() {
            break;
        }
        if cursor.peek_is_ident_start() {
            let span = cursor.here();
            if cursor.eat_word("package") {
                cursor.skip_line();
            } else if cursor.eat_word("import") {
                cursor.skip_trivia();
                if cursor.peek() == Some('(') {
                    cursor.read_balanced('(', ')')?;
                } else {
                    cursor.skip_line();
                }
            } else if cursor.eat_word("type") {
                if let Some(declaration) = parse_type(&mut cursor, span)? {
                    declarations.push(declaration);
                }
            } else if cursor.eat_word("func") {
                parse_func(
                    &mut cursor,
                    span,
                    &mut pending_methods,
                    &mut pending_constructors,
                )?;
            } else {
                cursor.skip_line();
            }
        } else if cursor.peek_is_quote() {
            cursor.skip_string();
        } else {
            cursor.advance();
        }
    }

    for (type_name, method) in pending_methods {
        if let Some(declaration) = declarations.iter_mut().find(|d| d.name == type_name) {
            declaration.methods.push(method);
        }
    }
    for (type_name, constructor) in pending_constructors {
        if let Some(declaration) = declarations.iter_mut().find(|d| d.name == type_name) {
            declaration.constructors.push(constructor);
        }
    }
    Ok(declarations)
}

/// Parses one `type` declaration. Only structs produce a declaration;
/// interfaces and aliases are consumed and dropped.
fn parse_type(cursor: &mut Source<'_>, span: Span) -> Result<Option<RawDeclaration>> {
    cursor.skip_trivia();
    let Some(name) = cursor.eat_identifier() else {
        return Err(cursor.error("expected a type name"));
    };
    cursor.skip_trivia();
    if cursor.eat_word("struct") {
        cursor.skip_trivia();
        let body = cursor.read_balanced('{', '}')?;
        let mut declaration = RawDeclaration::new(name, RawKind::Struct, span);
        parse_struct_fields(body, span, &mut declaration);
        return Ok(Some(declaration));
    }
    if cursor.eat_word("interface") {
        cursor.skip_trivia();
        cursor.read_balanced('{', '}')?;
        return Ok(None);
    }
    cursor.skip_line();
    Ok(None)
}

/// Parses the lines of a struct body into fields and embedded types.
///
/// A line is either `Name Type`, a comma group `A, B Type` sharing the
/// trailing type, or a bare type name marking an embedded struct.
fn parse_struct_fields(body: &str, span: Span, declaration: &mut RawDeclaration) {
    for line in body.lines() {
        let mut line = line.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }
        if let Some(comment) = line.find("//") {
            line = line[..comment].trim_end();
        }
        if let Some(tag) = line.find('`') {
            line = line[..tag].trim_end();
        }
        let pieces = split_top_level(line, ',');
        let last = pieces.last().map_or("", |piece| piece.trim());
        // A leading '*' only appears on embedded pointer types.
        let embedded_pointer = last.starts_with('*');
        let Some((last_name, type_text)) = take_identifier(last.trim_start_matches('*')) else {
            continue;
        };
        let type_text = type_text.trim();
        if type_text.is_empty() && pieces.len() == 1 {
            declaration.supertypes.push(last_name.to_string());
            continue;
        }
        if embedded_pointer {
            continue;
        }
        if type_text.is_empty() {
            continue;
        }
        for piece in &pieces[..pieces.len() - 1] {
            if let Some((name, _)) = take_identifier(piece.trim()) {
                declaration.fields.push(RawField {
                    name: name.to_string(),
                    annotation: Some(type_text.to_string()),
                    initializer: None,
                    span,
                });
            }
        }
        declaration.fields.push(RawField {
            name: last_name.to_string(),
            annotation: Some(type_text.to_string()),
            initializer: None,
            span,
        });
    }
}

/// Parses one `func` declaration into either a pending method (when it
/// carries a receiver) or a pending constructor (the `NewX` convention).
fn parse_func(
    cursor: &mut Source<'_>,
    span: Span,
    pending_methods: &mut Vec<(String, RawMethod)>,
    pending_constructors: &mut Vec<(String, RawConstructor)>,
) -> Result<()> {
    cursor.skip_trivia();
    let receiver_type = if cursor.peek() == Some('(') {
        let receiver = cursor.read_balanced('(', ')')?;
        cursor.skip_trivia();
        last_identifier(receiver).map(str::to_string)
    } else {
        None
    };
    let Some(name) = cursor.eat_identifier() else {
        return Err(cursor.error("expected a function name"));
    };
    cursor.skip_trivia();
    let params_text = cursor.read_balanced('(', ')')?;
    let parameters = parse_go_parameters(params_text);
    cursor.skip_trivia();
    let return_annotation = parse_go_return(cursor)?;
    cursor.skip_trivia();
    let body = cursor.read_balanced('{', '}')?.to_string();

    if let Some(type_name) = receiver_type {
        pending_methods.push((
            type_name,
            RawMethod {
                name: name.to_string(),
                parameters,
                return_annotation,
                body,
                span,
            },
        ));
        return Ok(());
    }

    // Free function: `NewCar(...) *Car` is the constructor convention,
    // provided the stripped name appears in the return type.
    if let Some(type_name) = name.strip_prefix("New") {
        let returns_type = return_annotation.as_deref().is_some_and(|annotation| {
            annotation
                .replace(['(', ')', '*', '&', ','], " ")
                .split_whitespace()
                .any(|word| word == type_name)
        });
        if returns_type {
            let assignments = composite_assignments(&body, type_name);
            pending_constructors.push((
                type_name.to_string(),
                RawConstructor {
                    parameters,
                    assignments,
                    body,
                    span,
                },
            ));
        }
    }
    Ok(())
}

/// Parses a return clause: nothing, one type, or a parenthesized list.
fn parse_go_return(cursor: &mut Source<'_>) -> Result<Option<String>> {
    if cursor.peek() == Some('{') {
        return Ok(None);
    }
    if cursor.peek() == Some('(') {
        let inner = cursor.read_balanced('(', ')')?;
        return Ok(Some(inner.trim().to_string()));
    }
    let text = cursor.read_value(&['{', '\n']);
    if text.is_empty() {
        Ok(None)
    } else {
        Ok(Some(text.to_string()))
    }
}

/// Parses a Go parameter list, back-filling grouped parameters
/// (`brand, color string`) with the shared trailing type.
fn parse_go_parameters(text: &str) -> Vec<RawParameter> {
    let mut parameters: Vec<(String, Option<String>)> = Vec::new();
    for piece in split_top_level(text, ',') {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        match take_identifier(piece) {
            Some((name, rest)) if !rest.trim().is_empty() => {
                parameters.push((name.to_string(), Some(rest.trim().to_string())));
            }
            Some((name, _)) => parameters.push((name.to_string(), None)),
            None => {}
        }
    }
    // Right-to-left, an untyped name shares the next type to its right.
    let mut filled: Option<String> = None;
    for (_, annotation) in parameters.iter_mut().rev() {
        match annotation {
            Some(text) => filled = Some(text.clone()),
            None => *annotation = filled.clone(),
        }
    }
    parameters
        .into_iter()
        .map(|(name, annotation)| RawParameter::new(name, annotation))
        .collect()
}

/// Extracts `Field: value` entries from the first `TypeName{...}`
/// composite literal in a constructor body.
fn composite_assignments(body: &str, type_name: &str) -> Vec<RawAssignment> {
    let Some(inner) = find_composite_literal(body, type_name) else {
        return Vec::new();
    };
    let mut assignments = Vec::new();
    for piece in split_top_level(inner, ',') {
        let piece = piece.trim();
        let Some((field, rest)) = take_identifier(piece) else {
            continue;
        };
        let Some(value) = rest.trim_start().strip_prefix(':') else {
            continue;
        };
        assignments.push(RawAssignment {
            field: field.to_string(),
            value: value.trim().to_string(),
        });
    }
    assignments
}

/// Finds the brace body of the first `TypeName{` occurrence whose name
/// sits at an identifier boundary.
fn find_composite_literal<'a>(body: &'a str, type_name: &str) -> Option<&'a str> {
    let mut search_from = 0;
    while let Some(found) = body[search_from..].find(type_name) {
        let start = search_from + found;
        search_from = start + type_name.len();
        let bounded_before = body[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !crate::source::is_ident_continue(c));
        let after = body[start + type_name.len()..].trim_start();
        if bounded_before && after.starts_with('{') {
            return balanced_inner(after);
        }
    }
    None
}

/// Returns the text inside a leading balanced `{...}`.
fn balanced_inner(text: &str) -> Option<&str> {
    debug_assert!(text.starts_with('{'));
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
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
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[1..i]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Returns the last identifier in `text`, with any `*` stripped.
fn last_identifier(text: &str) -> Option<&str> {
    text.split(|c: char| !crate::source::is_ident_continue(c))
        .filter(|piece| !piece.is_empty())
        .next_back()
}
