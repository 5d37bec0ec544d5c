//! The shared lexeme source.
//!
//! [`Source`] wraps the raw text of one file behind a cursor that tracks
//! byte offsets and line/column positions. Every frontend reads through
//! this type; none of them keeps any other state, so a failed parse of
//! one file can never leak into another.

use declex_foundation::{Error, Result};

/// A span of source text.
///
/// Tracks byte offsets and the line/column where the span starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Span {
    /// Byte offset where this span starts.
    pub start: usize,
    /// Byte offset where this span ends (exclusive).
    pub end: usize,
    /// 1-based line number where this span starts.
    pub line: u32,
    /// 1-based column number where this span starts.
    pub column: u32,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Creates a span covering the range from this span to another.
    #[must_use]
    pub const fn to(self, other: Self) -> Self {
        Self {
            start: self.start,
            end: other.end,
            line: self.line,
            column: self.column,
        }
    }

    /// Returns the text this span covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

/// The comment syntax a frontend expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommentStyle {
    /// `//` line comments and nestable `/* */` block comments.
    Slash,
    /// `#` line comments.
    Hash,
}

/// A cursor over the source text of one file.
///
/// Cheap to copy; frontends copy the cursor for lookahead.
#[derive(Clone, Copy)]
pub struct Source<'src> {
    /// The full source text.
    text: &'src str,
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
    /// Comment syntax skipped as trivia.
    comments: CommentStyle,
}

impl<'src> Source<'src> {
    /// Creates a cursor at the start of `text`.
    #[must_use]
    pub const fn new(text: &'src str, comments: CommentStyle) -> Self {
        Self {
            text,
            rest: text,
            position: 0,
            line: 1,
            column: 1,
            comments,
        }
    }

    /// Returns the full source text.
    #[must_use]
    pub const fn text(&self) -> &'src str {
        self.text
    }

    /// Returns the current byte offset.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns true if the cursor has consumed all input.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        self.rest.is_empty()
    }

    /// Peeks at the next character without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Peeks at the character `n` positions ahead.
    #[must_use]
    pub fn peek_at(&self, n: usize) -> Option<char> {
        self.rest.chars().nth(n)
    }

    /// Returns true if the next character can start an identifier.
    #[must_use]
    pub fn peek_is_ident_start(&self) -> bool {
        self.peek().is_some_and(is_ident_start)
    }

    /// Returns true if the next character opens a string literal.
    #[must_use]
    pub fn peek_is_quote(&self) -> bool {
        matches!(self.peek(), Some('"' | '\'' | '`'))
    }

    /// Returns a zero-width span at the cursor.
    #[must_use]
    pub const fn here(&self) -> Span {
        Span::new(self.position, self.position, self.line, self.column)
    }

    /// Advances past the next character.
    pub fn advance(&mut self) {
        if let Some(c) = self.peek() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Consumes `c` if it is the next character.
    pub fn eat_char(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the literal `s` if the input starts with it.
    pub fn eat_str(&mut self, s: &str) -> bool {
        if self.rest.starts_with(s) {
            for _ in s.chars() {
                self.advance();
            }
            true
        } else {
            false
        }
    }

    /// Consumes `word` if the input starts with it at a word boundary.
    pub fn eat_word(&mut self, word: &str) -> bool {
        if self.rest.starts_with(word)
            && !self.rest[word.len()..]
                .chars()
                .next()
                .is_some_and(is_ident_continue)
        {
            for _ in word.chars() {
                self.advance();
            }
            true
        } else {
            false
        }
    }

    /// Consumes and returns an identifier, if one starts here.
    pub fn eat_identifier(&mut self) -> Option<&'src str> {
        if !self.peek_is_ident_start() {
            return None;
        }
        let start = self.position;
        while self.peek().is_some_and(is_ident_continue) {
            self.advance();
        }
        Some(&self.text[start..self.position])
    }

    /// Consumes `c` or fails with a syntax error.
    ///
    /// # Errors
    /// Returns a syntax error naming the expected character.
    pub fn expect_char(&mut self, c: char) -> Result<()> {
        if self.eat_char(c) {
            Ok(())
        } else {
            Err(self.error(&format!("expected '{c}'")))
        }
    }

    /// Skips whitespace and comments.
    pub fn skip_trivia(&mut self) {
        loop {
            while self.peek().is_some_and(char::is_whitespace) {
                self.advance();
            }
            if !self.try_skip_comment() {
                break;
            }
        }
    }

    /// Skips one comment if the cursor sits on one.
    fn try_skip_comment(&mut self) -> bool {
        match self.comments {
            CommentStyle::Slash => {
                if self.rest.starts_with("//") {
                    self.skip_line();
                    true
                } else if self.rest.starts_with("/*") {
                    self.skip_block_comment();
                    true
                } else {
                    false
                }
            }
            CommentStyle::Hash => {
                if self.peek() == Some('#') {
                    self.skip_line();
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Skips to the start of the next line.
    pub fn skip_line(&mut self) {
        while let Some(c) = self.peek() {
            self.advance();
            if c == '\n' {
                break;
            }
        }
    }

    /// Skips a `/* */` comment, honoring nesting.
    fn skip_block_comment(&mut self) {
        debug_assert!(self.rest.starts_with("/*"));
        self.advance();
        self.advance();
        let mut depth = 1usize;
        while depth > 0 && !self.is_eof() {
            if self.rest.starts_with("/*") {
                depth += 1;
                self.advance();
                self.advance();
            } else if self.rest.starts_with("*/") {
                depth -= 1;
                self.advance();
                self.advance();
            } else {
                self.advance();
            }
        }
    }

    /// Skips a string literal, honoring backslash escapes.
    ///
    /// The cursor must sit on the opening quote. An unterminated literal
    /// consumes the rest of the input; the caller's grammar surfaces the
    /// failure when the enclosing block never closes.
    pub fn skip_string(&mut self) {
        let Some(quote) = self.peek() else { return };
        self.advance();
        while let Some(c) = self.peek() {
            if c == '\\' {
                self.advance();
                self.advance();
            } else if c == quote {
                self.advance();
                break;
            } else {
                self.advance();
            }
        }
    }

    /// Reads a balanced `open`..`close` block, returning the inner text.
    ///
    /// The cursor must sit on `open`; on return it sits past the matching
    /// `close`. String literals and comments inside the block are skipped
    /// so that delimiters inside them never unbalance the count.
    ///
    /// # Errors
    /// Returns a syntax error if the cursor is not on `open` or the block
    /// never closes.
    pub fn read_balanced(&mut self, open: char, close: char) -> Result<&'src str> {
        let start_span = self.here();
        if !self.eat_char(open) {
            return Err(self.error(&format!("expected '{open}'")));
        }
        let inner_start = self.position;
        let mut depth = 1usize;
        while depth > 0 {
            if self.is_eof() {
                return Err(self.error_at(start_span, &format!("unterminated '{open}' block")));
            }
            if self.peek_is_quote() {
                self.skip_string();
            } else if self.try_skip_comment() {
                // comment consumed
            } else if self.eat_char(open) {
                depth += 1;
            } else {
                let at_close = self.peek() == Some(close);
                if at_close {
                    depth -= 1;
                }
                if depth == 0 {
                    let inner = &self.text[inner_start..self.position];
                    self.advance();
                    return Ok(inner);
                }
                self.advance();
            }
        }
        unreachable!("loop exits by returning or erroring")
    }

    /// Reads forward until one of `stops` appears at nesting depth zero,
    /// returning the trimmed text consumed.
    ///
    /// Parentheses, brackets, and braces nest; string literals and
    /// comments are skipped. The stop character itself is not consumed.
    /// Include `'\n'` in `stops` to stop at end of line.
    pub fn read_value(&mut self, stops: &[char]) -> &'src str {
        let start = self.position;
        let mut depth = 0usize;
        while let Some(c) = self.peek() {
            if depth == 0 && stops.contains(&c) {
                break;
            }
            if self.peek_is_quote() {
                self.skip_string();
                continue;
            }
            if self.try_skip_comment() {
                continue;
            }
            match c {
                '(' | '[' | '{' => depth += 1,
                ')' | ']' | '}' => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                _ => {}
            }
            self.advance();
        }
        self.text[start..self.position].trim()
    }

    /// Consumes one full line, returning its indentation width and its
    /// content with surrounding whitespace trimmed.
    ///
    /// Tabs count as eight columns. Used by the indentation-delimited
    /// frontend, which works line by line.
    pub fn eat_indented_line(&mut self) -> (usize, &'src str, Span) {
        let span_start = self.here();
        let mut indent = 0usize;
        while let Some(c) = self.peek() {
            match c {
                ' ' => indent += 1,
                '\t' => indent += 8,
                _ => break,
            }
            self.advance();
        }
        let content_start = self.position;
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
        let content = self.text[content_start..self.position].trim_end();
        let span = span_start.to(self.here());
        self.advance(); // consume the newline, if any
        (indent, content, span)
    }

    /// Creates a syntax error at the current position.
    #[must_use]
    pub fn error(&self, message: &str) -> Error {
        self.error_at(self.here(), message)
    }

    /// Creates a syntax error at a specific span.
    #[must_use]
    pub fn error_at(&self, span: Span, message: &str) -> Error {
        Error::syntax(message, span.line, span.column, self.line_text_at(span.start))
    }

    /// Returns the full source line containing `offset`, for error
    /// messages.
    fn line_text_at(&self, offset: usize) -> String {
        let offset = offset.min(self.text.len());
        let line_start = self.text[..offset].rfind('\n').map_or(0, |i| i + 1);
        let line_end = self.text[offset..]
            .find('\n')
            .map_or(self.text.len(), |i| offset + i);
        self.text[line_start..line_end].to_string()
    }
}

/// Returns true if `c` can start an identifier.
#[must_use]
pub fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

/// Returns true if `c` can appear in an identifier (not at start).
#[must_use]
pub fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
