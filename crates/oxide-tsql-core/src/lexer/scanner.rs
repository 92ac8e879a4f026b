//! T-SQL scanner.

use std::cell::OnceCell;

use tracing::trace;

use super::chars::{is_digit, is_identifier_char, is_letter, is_whitespace};
use super::lines::LineIndex;
use super::{Span, Token, TokenFlags, TokenValue};
use crate::syntax::{Keyword, SyntaxKind};

/// Scanner configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannerOptions {
    /// Drop whitespace and comments instead of emitting them.
    pub skip_trivia: bool,
    /// Recognize `#name` as a temporary table.
    pub temp_tables: bool,
    /// Recognize `##name` as a shared temporary table.
    pub shared_temp_tables: bool,
    /// Scan every identifier-shaped run as a plain `Name`.
    pub skip_keyword_lookup: bool,
}

impl Default for ScannerOptions {
    fn default() -> Self {
        Self {
            skip_trivia: true,
            temp_tables: true,
            shared_temp_tables: true,
            skip_keyword_lookup: false,
        }
    }
}

/// A pull-based scanner over T-SQL source text.
///
/// The scanner never fails: malformed input becomes `Unknown` tokens or
/// tokens flagged [`TokenFlags::UNTERMINATED`]. Unterminated comments are
/// returned even when trivia is skipped so callers can report them.
#[derive(Debug)]
pub struct Scanner<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
    options: ScannerOptions,
    lines: OnceCell<LineIndex>,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner with default options.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ScannerOptions::default())
    }

    /// Creates a scanner with the given options.
    #[must_use]
    pub const fn with_options(input: &'a str, options: ScannerOptions) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
            options,
            lines: OnceCell::new(),
        }
    }

    /// Returns the source text.
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.input
    }

    /// Returns the scanner options.
    #[must_use]
    pub const fn options(&self) -> ScannerOptions {
        self.options
    }

    /// Returns the byte position just past the last scanned token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the start of the last scanned token.
    #[must_use]
    pub const fn token_start(&self) -> usize {
        self.start
    }

    fn line_index(&self) -> &LineIndex {
        self.lines.get_or_init(|| {
            let index = LineIndex::new(self.input);
            trace!(lines = index.line_count(), "built line index");
            index
        })
    }

    /// Returns the 1-based line of a byte offset.
    #[must_use]
    pub fn line_of(&self, offset: usize) -> usize {
        self.line_index().line_of(offset)
    }

    /// Returns the 1-based column of a byte offset.
    #[must_use]
    pub fn column_of(&self, offset: usize) -> usize {
        self.line_index().column_of(self.input, offset)
    }

    /// Returns the 1-based line of the current position.
    #[must_use]
    pub fn current_line(&self) -> usize {
        self.line_of(self.pos)
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consumes `expected` if it is the current character.
    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    /// Creates a span from start to current position.
    const fn make_span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    /// Creates a token with the current span.
    const fn make_token(&self, kind: SyntaxKind) -> Token {
        Token::new(kind, self.make_span())
    }

    /// Returns the next significant token and advances past it.
    ///
    /// At end of input this keeps returning `Eof` with an empty span at
    /// the end of the source.
    pub fn scan(&mut self) -> Token {
        loop {
            let token = self.scan_raw();
            let skip = self.options.skip_trivia
                && token.kind.is_trivia()
                && !token.flags.contains(TokenFlags::UNTERMINATED);
            if !skip {
                return token;
            }
        }
    }

    /// Scans every remaining token, including the final `Eof`.
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.scan();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    fn scan_raw(&mut self) -> Token {
        self.start = self.pos;

        let Some(c) = self.advance() else {
            return self.make_token(SyntaxKind::Eof);
        };

        match c {
            c if is_whitespace(c) => {
                self.advance_while(is_whitespace);
                self.make_token(SyntaxKind::Whitespace)
            }

            '(' => self.make_token(SyntaxKind::OpenParen),
            ')' => self.make_token(SyntaxKind::CloseParen),
            ',' => self.make_token(SyntaxKind::Comma),
            ';' => self.make_token(SyntaxKind::Semicolon),
            '.' => self.make_token(SyntaxKind::Dot),
            ':' => self.make_token(SyntaxKind::Colon),
            '~' => self.make_token(SyntaxKind::Tilde),
            '=' => self.make_token(SyntaxKind::Equal),

            '-' if self.peek() == Some('-') => self.scan_inline_comment(),
            '/' if self.peek() == Some('*') => self.scan_block_comment(),

            '+' => self.compound(SyntaxKind::Plus, SyntaxKind::PlusEqual),
            '-' => self.compound(SyntaxKind::Minus, SyntaxKind::MinusEqual),
            '*' => self.compound(SyntaxKind::Star, SyntaxKind::StarEqual),
            '/' => self.compound(SyntaxKind::Slash, SyntaxKind::SlashEqual),
            '%' => self.compound(SyntaxKind::Percent, SyntaxKind::PercentEqual),
            '&' => self.compound(SyntaxKind::Ampersand, SyntaxKind::AmpersandEqual),
            '|' => self.compound(SyntaxKind::Pipe, SyntaxKind::PipeEqual),
            '^' => self.compound(SyntaxKind::Caret, SyntaxKind::CaretEqual),

            '<' => {
                if self.eat('=') {
                    self.make_token(SyntaxKind::LessThanEqual)
                } else if self.eat('>') {
                    self.make_token(SyntaxKind::LessGreater)
                } else {
                    self.make_token(SyntaxKind::LessThan)
                }
            }
            '>' => self.compound(SyntaxKind::GreaterThan, SyntaxKind::GreaterThanEqual),
            '!' => {
                if self.eat('=') {
                    self.make_token(SyntaxKind::NotEqual)
                } else if self.eat('<') {
                    self.make_token(SyntaxKind::NotLessThan)
                } else if self.eat('>') {
                    self.make_token(SyntaxKind::NotGreaterThan)
                } else {
                    self.make_token(SyntaxKind::Unknown)
                }
            }

            '\'' => self.scan_string(TokenFlags::NONE),
            'N' | 'n' if self.peek() == Some('\'') => {
                self.advance();
                self.scan_string(TokenFlags::NATIONAL)
            }
            '"' => self.scan_quoted_identifier('"', TokenFlags::QUOTED),
            '[' => self.scan_quoted_identifier(']', TokenFlags::BRACKETED),

            '@' => self.scan_variable(),
            '#' => self.scan_temp_table(),

            c if is_digit(c) => self.scan_number(),
            c if is_letter(c) => self.scan_name(),

            _ => self.make_token(SyntaxKind::Unknown),
        }
    }

    /// Finishes an operator that has an `=`-suffixed compound form.
    fn compound(&mut self, single: SyntaxKind, with_equal: SyntaxKind) -> Token {
        if self.eat('=') {
            self.make_token(with_equal)
        } else {
            self.make_token(single)
        }
    }

    fn scan_inline_comment(&mut self) -> Token {
        self.advance_while(|c| c != '\n');
        self.make_token(SyntaxKind::InlineComment)
    }

    /// Scans a block comment; comments nest.
    fn scan_block_comment(&mut self) -> Token {
        self.advance(); // *
        let mut depth = 1_usize;
        while depth > 0 {
            match self.advance() {
                Some('*') if self.eat('/') => depth -= 1,
                Some('/') if self.eat('*') => depth += 1,
                Some(_) => {}
                None => {
                    return self
                        .make_token(SyntaxKind::BlockComment)
                        .with_flags(TokenFlags::UNTERMINATED);
                }
            }
        }
        self.make_token(SyntaxKind::BlockComment)
    }

    /// Scans the body of a `'...'` literal; the opening quote is consumed.
    fn scan_string(&mut self, flags: TokenFlags) -> Token {
        let (value, terminated) = self.scan_delimited('\'');
        let token = self
            .make_token(SyntaxKind::StringLiteral)
            .with_value(TokenValue::Text(value))
            .with_flags(flags);
        if terminated {
            token
        } else {
            token.with_flags(TokenFlags::UNTERMINATED)
        }
    }

    fn scan_quoted_identifier(&mut self, close: char, flags: TokenFlags) -> Token {
        let (value, terminated) = self.scan_delimited(close);
        let token = self
            .make_token(SyntaxKind::QuotedIdentifier)
            .with_value(TokenValue::Text(value))
            .with_flags(flags);
        if terminated {
            token
        } else {
            token.with_flags(TokenFlags::UNTERMINATED)
        }
    }

    /// Reads up to the closing character, where a doubled closing
    /// character stands for itself. Returns the decoded text and whether
    /// the closing character was found.
    fn scan_delimited(&mut self, close: char) -> (String, bool) {
        let mut value = String::new();
        loop {
            match self.advance() {
                Some(c) if c == close => {
                    if self.eat(close) {
                        value.push(close);
                    } else {
                        return (value, true);
                    }
                }
                Some(c) => value.push(c),
                None => return (value, false),
            }
        }
    }

    /// Scans `@name` or `@@name`; the first `@` is consumed.
    fn scan_variable(&mut self) -> Token {
        let kind = if self.eat('@') {
            SyntaxKind::SystemVariable
        } else {
            SyntaxKind::LocalVariable
        };
        if !self.peek().is_some_and(|c| c != '@' && is_identifier_char(c)) {
            self.pos = self.start + 1;
            return self.make_token(SyntaxKind::Unknown);
        }
        self.advance_while(is_identifier_char);
        let text = &self.input[self.start..self.pos];
        self.make_token(kind)
            .with_value(TokenValue::Text(String::from(text)))
    }

    /// Scans `#name` or `##name`; the first `#` is consumed.
    fn scan_temp_table(&mut self) -> Token {
        let kind = if self.peek() == Some('#') {
            if !self.options.shared_temp_tables {
                return self.make_token(SyntaxKind::Unknown);
            }
            self.advance();
            SyntaxKind::SharedTempTable
        } else {
            if !self.options.temp_tables {
                return self.make_token(SyntaxKind::Unknown);
            }
            SyntaxKind::TempTable
        };
        if !self.peek().is_some_and(is_identifier_char) {
            self.pos = self.start + 1;
            return self.make_token(SyntaxKind::Unknown);
        }
        self.advance_while(is_identifier_char);
        let text = &self.input[self.start..self.pos];
        self.make_token(kind)
            .with_value(TokenValue::Text(String::from(text)))
    }

    /// Scans an integer or decimal number; the first digit is consumed.
    fn scan_number(&mut self) -> Token {
        self.advance_while(is_digit);
        if self.eat('.') {
            self.advance_while(is_digit);
        }

        let text = &self.input[self.start..self.pos];
        let token = self.make_token(SyntaxKind::NumericLiteral);
        match text.parse::<f64>() {
            Ok(n) => token.with_value(TokenValue::Number(n)),
            Err(_) => token,
        }
    }

    /// Scans a keyword or a possibly dotted name; the first letter is
    /// consumed.
    fn scan_name(&mut self) -> Token {
        loop {
            self.advance_while(is_identifier_char);
            if self.peek() == Some('.') && self.peek_next().is_some_and(is_identifier_char) {
                self.advance();
            } else {
                break;
            }
        }

        let text = &self.input[self.start..self.pos];
        let keyword = if self.options.skip_keyword_lookup {
            None
        } else {
            Keyword::from_str(text)
        };
        match keyword {
            Some(keyword) => self.make_token(SyntaxKind::Keyword(keyword)),
            None => self
                .make_token(SyntaxKind::Name)
                .with_value(TokenValue::Text(String::from(text))),
        }
    }
}
