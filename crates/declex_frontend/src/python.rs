//! Frontend for indentation-delimited `class` declarations.
//!
//! Works line by line: a class owns every following line indented
//! deeper than its header. Class-level assignments become fields,
//! `__init__` becomes the constructor, other `def`s become methods.
//! `self` receivers are dropped from parameter lists, and only the
//! `__init__` body is scanned for `self.field = value` statements.

use declex_foundation::Result;

use crate::raw::{
    extract_self_assignments, split_top_level, take_identifier, RawConstructor, RawDeclaration,
    RawField, RawKind, RawMethod, RawParameter,
};
use crate::source::{CommentStyle, Source, Span};

/// One logical line of source.
#[derive(Clone, Copy, Debug)]
struct Line<'src> {
    indent: usize,
    text: &'src str,
    span: Span,
}

/// Parses every `class` declaration in `source`.
///
/// # Errors
/// Returns a syntax error for a malformed class header or `def`.
pub fn parse(source: &str) -> Result<Vec<RawDeclaration>> {
    let lines = collect_lines(source);
    let mut declarations = Vec::new();
    let mut index = 0;
    while index < lines.len() {
        let line = lines[index];
        if let Some(header) = strip_keyword(line.text, "class") {
            let (declaration, consumed) = parse_class(header, &lines[index + 1..], line)?;
            declarations.push(declaration);
            index += 1 + consumed;
        } else {
            index += 1;
        }
    }
    Ok(declarations)
}

/// Reads the source into trimmed lines, dropping blanks and comments.
fn collect_lines(source: &str) -> Vec<Line<'_>> {
    let mut cursor = Source::new(source, CommentStyle::Hash);
    let mut lines = Vec::new();
    while !cursor.is_eof() {
        let (indent, text, span) = cursor.eat_indented_line();
        let text = strip_comment(text);
        if !text.is_empty() {
            lines.push(Line { indent, text, span });
        }
    }
    lines
}

/// Truncates a line at the first `#` outside a string literal.
fn strip_comment(text: &str) -> &str {
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
            '"' | '\'' => quote = Some(c),
            '#' => return text[..i].trim_end(),
            _ => {}
        }
    }
    text
}

/// Strips a leading keyword followed by whitespace, at a word boundary.
fn strip_keyword<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(keyword)?;
    if rest.starts_with(char::is_whitespace) {
        Some(rest.trim_start())
    } else {
        None
    }
}

/// Parses one class from its header text and the lines that follow it.
/// Returns the declaration and how many body lines were consumed.
fn parse_class<'src>(
    header: &'src str,
    rest: &[Line<'src>],
    header_line: Line<'src>,
) -> Result<(RawDeclaration, usize)> {
    let error = |message: &str| syntax_error(header_line, message);

    let Some((name, after_name)) = take_identifier(header) else {
        return Err(error("expected a class name"));
    };
    let mut declaration = RawDeclaration::new(name, RawKind::Class, header_line.span);

    let after_name = after_name.trim_start();
    let after_bases = if let Some(bases) = after_name.strip_prefix('(') {
        let Some(close) = bases.rfind(')') else {
            return Err(error("unterminated base class list"));
        };
        for base in split_top_level(&bases[..close], ',') {
            let base = base.trim();
            if !base.is_empty() {
                declaration.supertypes.push(base.to_string());
            }
        }
        bases[close + 1..].trim_start()
    } else {
        after_name
    };
    if !after_bases.starts_with(':') {
        return Err(error("expected ':' after class header"));
    }

    // The class body is every following line indented deeper than the
    // header. The first member fixes the body indent.
    let body_end = rest
        .iter()
        .position(|line| line.indent <= header_line.indent)
        .unwrap_or(rest.len());
    let body = &rest[..body_end];

    let mut index = 0;
    while index < body.len() {
        let line = body[index];
        if line.indent > body[0].indent {
            // Continuation of a construct we chose not to model.
            index += 1;
            continue;
        }
        if let Some(def_header) = strip_keyword(line.text, "def") {
            let (member, consumed) = parse_def(def_header, &body[index + 1..], line)?;
            match member {
                Member::Constructor(ctor) => declaration.constructors.push(ctor),
                Member::Method(method) => declaration.methods.push(method),
            }
            index += 1 + consumed;
            continue;
        }
        if line.text.starts_with('@') || is_docstring(line.text) {
            index += skip_docstring(line.text, &body[index + 1..]);
            index += 1;
            continue;
        }
        if let Some(field) = parse_field(line) {
            declaration.fields.push(field);
        }
        index += 1;
    }
    Ok((declaration, body_end))
}

fn is_docstring(text: &str) -> bool {
    text.starts_with("\"\"\"") || text.starts_with("'''")
}

/// Returns how many extra lines a docstring opened on `text` spans.
fn skip_docstring(text: &str, rest: &[Line<'_>]) -> usize {
    if !is_docstring(text) {
        return 0;
    }
    let fence = &text[..3];
    // A one-line docstring closes on its own line.
    if text.len() >= 6 && text.ends_with(fence) {
        return 0;
    }
    rest.iter()
        .position(|line| line.text.contains(fence))
        .map_or(rest.len(), |i| i + 1)
}

/// Parses a class-level `name = value` or `name: type = value` line.
fn parse_field(line: Line<'_>) -> Option<RawField> {
    let (name, rest) = take_identifier(line.text)?;
    let rest = rest.trim_start();
    let (annotation, rest) = if let Some(after_colon) = rest.strip_prefix(':') {
        match after_colon.find('=') {
            Some(eq) => (
                Some(after_colon[..eq].trim().to_string()),
                &after_colon[eq..],
            ),
            None => (Some(after_colon.trim().to_string()), ""),
        }
    } else {
        (None, rest)
    };
    let initializer = rest.strip_prefix('=').and_then(|value| {
        // '==' would be an expression statement, not a field.
        if value.starts_with('=') {
            None
        } else {
            Some(value.trim().to_string())
        }
    });
    if annotation.is_none() && initializer.is_none() {
        return None;
    }
    Some(RawField {
        name: name.to_string(),
        annotation,
        initializer,
        span: line.span,
    })
}

enum Member {
    Constructor(RawConstructor),
    Method(RawMethod),
}

/// Parses one `def` from its header text and the lines that follow it.
/// Returns the member and how many body lines were consumed.
fn parse_def<'src>(
    header: &'src str,
    rest: &[Line<'src>],
    def_line: Line<'src>,
) -> Result<(Member, usize)> {
    let error = |message: &str| syntax_error(def_line, message);

    let Some((name, after_name)) = take_identifier(header) else {
        return Err(error("expected a function name"));
    };
    let after_name = after_name.trim_start();
    let Some(params_text) = after_name.strip_prefix('(') else {
        return Err(error("expected '(' after function name"));
    };
    let Some(close) = matching_paren(params_text) else {
        return Err(error("unterminated parameter list"));
    };
    let after_params = params_text[close + 1..].trim_start();

    let return_annotation = after_params.strip_prefix("->").map(|annotation| {
        annotation
            .trim()
            .trim_end_matches(':')
            .trim()
            .to_string()
    });

    let mut parameters = Vec::new();
    for piece in split_top_level(&params_text[..close], ',') {
        let piece = piece.trim();
        let piece = piece
            .strip_prefix("**")
            .or_else(|| piece.strip_prefix('*'))
            .unwrap_or(piece);
        if piece.is_empty() || piece == "/" {
            continue;
        }
        let Some((param_name, param_rest)) = take_identifier(piece) else {
            continue;
        };
        if parameters.is_empty() && (param_name == "self" || param_name == "cls") {
            continue;
        }
        let param_rest = param_rest.trim_start();
        let annotation = param_rest.strip_prefix(':').map(|after_colon| {
            let after_colon = after_colon.trim();
            match after_colon.find('=') {
                Some(eq) => after_colon[..eq].trim().to_string(),
                None => after_colon.to_string(),
            }
        });
        parameters.push(RawParameter::new(param_name, annotation));
    }

    let body_end = rest
        .iter()
        .position(|line| line.indent <= def_line.indent)
        .unwrap_or(rest.len());
    let body = rest[..body_end]
        .iter()
        .map(|line| line.text)
        .collect::<Vec<_>>()
        .join("\n");

    let member = if name == "__init__" {
        let assignments = extract_self_assignments(&body, "self");
        Member::Constructor(RawConstructor {
            parameters,
            assignments,
            body,
            span: def_line.span,
        })
    } else {
        Member::Method(RawMethod {
            name: name.to_string(),
            parameters,
            return_annotation,
            body,
            span: def_line.span,
        })
    };
    Ok((member, body_end))
}

/// Finds the index of the `)` matching an already-consumed `(`.
fn matching_paren(text: &str) -> Option<usize> {
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
            '"' | '\'' => quote = Some(c),
            '(' | '[' | '{' => depth += 1,
            ')' if depth == 0 => return Some(i),
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    None
}

fn syntax_error(line: Line<'_>, message: &str) -> declex_foundation::Error {
    declex_foundation::Error::syntax(message, line.span.line, line.span.column, line.text.to_string())
}
