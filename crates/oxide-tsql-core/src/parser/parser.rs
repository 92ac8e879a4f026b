//! T-SQL parser core: token handling, error reporting and statement
//! dispatch.
//!
//! Grammar productions live in the sibling `expression`, `select`,
//! `statement` and `ddl` modules as further `impl Parser` blocks.

use tracing::{debug, trace};

use super::error::{ParseError, ParseErrorKind};
use super::options::ParserOptions;
use crate::ast::{Identifier, Statement, MAX_IDENTIFIER_PARTS};
use crate::lexer::{Scanner, Span, Token, TokenFlags, EMPTY_TOKEN};
use crate::syntax::{Keyword, SyntaxKind};

/// Deepest nesting of statements, queries and expression operands the
/// parser accepts before failing.
pub const MAX_NESTING_DEPTH: usize = 32;

/// A recursive-descent parser over one T-SQL script.
///
/// The parser pulls tokens from a [`Scanner`] with one token of
/// lookahead and never backtracks. The first error aborts the parse.
pub struct Parser<'a> {
    pub(super) scanner: Scanner<'a>,
    pub(super) current: Token,
    /// End offset of the last consumed token.
    pub(super) prev_end: usize,
    pub(super) options: ParserOptions,
    /// Set at the start of input and after each `GO`; cleared when a
    /// statement begins.
    pub(super) at_batch_start: bool,
    /// Current nesting depth, bounded by [`MAX_NESTING_DEPTH`].
    depth: usize,
    errors: Vec<ParseError>,
    trivia: Vec<Token>,
    keywords: Vec<Token>,
}

impl<'a> Parser<'a> {
    /// Creates a parser with default options.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ParserOptions::default())
    }

    /// Creates a parser with the given options.
    #[must_use]
    pub fn with_options(input: &'a str, options: ParserOptions) -> Self {
        let scanner = Scanner::with_options(input, options.scanner_options());
        Self {
            scanner,
            current: EMPTY_TOKEN,
            prev_end: 0,
            options,
            at_batch_start: true,
            depth: 0,
            errors: Vec::new(),
            trivia: Vec::new(),
            keywords: Vec::new(),
        }
    }

    /// Returns the parser options.
    #[must_use]
    pub const fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Returns the errors reported so far.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Returns the whitespace and comment tokens seen so far. Empty unless
    /// trivia skipping is turned off.
    #[must_use]
    pub fn trivia(&self) -> &[Token] {
        &self.trivia
    }

    /// Returns every keyword token consumed so far, in source order.
    #[must_use]
    pub fn keywords(&self) -> &[Token] {
        &self.keywords
    }

    /// Parses the whole script.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered; no partial result is kept.
    pub fn parse(&mut self) -> Result<Vec<Statement>, ParseError> {
        match self.parse_script() {
            Ok(statements) => {
                debug!(statements = statements.len(), "parse complete");
                Ok(statements)
            }
            Err(error) => Err(self.report(error)),
        }
    }

    /// Parses the next statement, skipping leading semicolons.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` at end of input or if the statement is
    /// malformed.
    pub fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        let result = self.start().and_then(|()| {
            self.skip_semicolons()?;
            self.parse_statement_inner()
        });
        result.map_err(|error| self.report(error))
    }

    fn parse_script(&mut self) -> Result<Vec<Statement>, ParseError> {
        self.start()?;
        let mut statements = Vec::new();
        loop {
            self.skip_semicolons()?;
            if self.current.is_eof() {
                break;
            }
            statements.push(self.parse_statement_inner()?);
        }
        Ok(statements)
    }

    /// Loads the first token on first use.
    fn start(&mut self) -> Result<(), ParseError> {
        if self.current == EMPTY_TOKEN {
            self.current = self.next_token()?;
        }
        Ok(())
    }

    /// Parses one statement at the current nesting depth.
    pub(super) fn parse_statement_inner(&mut self) -> Result<Statement, ParseError> {
        self.nested(Self::dispatch_statement)
    }

    /// Dispatches on the current token.
    fn dispatch_statement(&mut self) -> Result<Statement, ParseError> {
        trace!(kind = %self.current.kind, offset = self.current.span.start, "statement");
        let batch_start = core::mem::replace(&mut self.at_batch_start, false);
        let statement = match self.current.kind {
            SyntaxKind::Keyword(keyword) => match keyword {
                Keyword::Go => Statement::Go(self.parse_go()?),
                Keyword::Declare => Statement::Declare(self.parse_declare()?),
                Keyword::Set => self.parse_set()?,
                Keyword::Use => Statement::Use(self.parse_use()?),
                Keyword::Select => Statement::Select(self.parse_select_statement()?),
                Keyword::Insert => Statement::Insert(self.parse_insert()?),
                Keyword::Delete => Statement::Delete(self.parse_delete()?),
                Keyword::Truncate => Statement::TruncateTable(self.parse_truncate()?),
                Keyword::Create | Keyword::Alter => self.parse_create_or_alter()?,
                Keyword::Drop => Statement::Drop(self.parse_drop()?),
                Keyword::Exec | Keyword::Execute => self.parse_execute()?,
                Keyword::While => Statement::While(self.parse_while()?),
                Keyword::If => Statement::If(self.parse_if()?),
                Keyword::Begin => Statement::Block(self.parse_block()?),
                Keyword::Goto => Statement::Goto(self.parse_goto()?),
                Keyword::Print => Statement::Print(self.parse_print()?),
                Keyword::Return => Statement::Return(self.parse_return()?),
                Keyword::Break => Statement::Break(self.parse_break()?),
                Keyword::Continue => Statement::Continue(self.parse_continue()?),
                _ => return Err(self.unrecognized_statement()),
            },
            SyntaxKind::Name => self.parse_label_or_call(batch_start)?,
            SyntaxKind::Eof => return Err(self.unexpected("statement")),
            _ => return Err(self.unrecognized_statement()),
        };
        Ok(statement)
    }

    fn unrecognized_statement(&self) -> ParseError {
        ParseError::new(
            ParseErrorKind::UnrecognizedStatement(self.current.kind),
            format!("Unrecognized statement starting with {}", self.current.kind),
            self.current.span,
        )
    }

    pub(super) fn skip_semicolons(&mut self) -> Result<(), ParseError> {
        while self.check(SyntaxKind::Semicolon) {
            self.advance()?;
        }
        Ok(())
    }

    /// Fills in position details and reports the error once.
    fn report(&mut self, mut error: ParseError) -> ParseError {
        error.line = self.scanner.line_of(error.span.start);
        error.col = self.scanner.column_of(error.span.start);
        error.file.clone_from(&self.options.path);
        debug!(
            line = error.line,
            col = error.col,
            kind = ?error.kind,
            "parse failed: {}",
            error.message
        );
        if let Some(callback) = &self.options.error {
            callback.call(&error.record());
        }
        self.errors.push(error.clone());
        error
    }

    /// Runs `parse` one nesting level deeper, failing once the depth
    /// limit is reached.
    pub(super) fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::unsupported(
                format!("nesting deeper than {MAX_NESTING_DEPTH} levels"),
                self.current.span,
            ));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    // Token primitives

    /// Pulls the next significant token from the scanner, collecting
    /// trivia and rejecting malformed tokens.
    fn next_token(&mut self) -> Result<Token, ParseError> {
        loop {
            let token = self.scanner.scan();
            if token.flags.contains(TokenFlags::UNTERMINATED) {
                return Err(ParseError::lexical(unterminated_message(token.kind), token.span));
            }
            if token.kind == SyntaxKind::Unknown {
                let text = token.span.slice(self.scanner.source());
                return Err(ParseError::lexical(
                    format!("Unexpected character '{text}'"),
                    token.span,
                ));
            }
            if token.kind.is_trivia() {
                self.trivia.push(token);
                continue;
            }
            return Ok(token);
        }
    }

    /// Consumes the current token and returns it.
    pub(super) fn advance(&mut self) -> Result<Token, ParseError> {
        let next = self.next_token()?;
        let token = core::mem::replace(&mut self.current, next);
        self.prev_end = token.span.end;
        if token.is_keyword() && self.options.collect_keywords {
            self.keywords.push(token.clone());
        }
        Ok(token)
    }

    /// Returns true if the current token is of the given kind.
    pub(super) fn check(&self, kind: SyntaxKind) -> bool {
        self.current.kind == kind
    }

    /// Returns true if the current token is the given keyword.
    pub(super) fn check_keyword(&self, keyword: Keyword) -> bool {
        self.current.kind == SyntaxKind::Keyword(keyword)
    }

    /// Returns true if the current token is a name spelled `word`
    /// (case-insensitive). Used for unreserved words such as `OUTPUT`.
    pub(super) fn check_word(&self, word: &str) -> bool {
        self.current.kind == SyntaxKind::Name
            && self
                .current
                .text()
                .is_some_and(|text| text.eq_ignore_ascii_case(word))
    }

    /// Consumes the current token if it is of the given kind.
    pub(super) fn optional(&mut self, kind: SyntaxKind) -> Result<bool, ParseError> {
        if self.check(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consumes the current token if it is the given keyword.
    pub(super) fn optional_keyword(&mut self, keyword: Keyword) -> Result<bool, ParseError> {
        self.optional(SyntaxKind::Keyword(keyword))
    }

    /// Consumes the current token if it is the unreserved word `word`.
    pub(super) fn optional_word(&mut self, word: &str) -> Result<bool, ParseError> {
        if self.check_word(word) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Expects a token of the given kind.
    pub(super) fn expect(&mut self, kind: SyntaxKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            self.advance()
        } else {
            Err(self.unexpected(&kind.to_string()))
        }
    }

    /// Expects a keyword.
    pub(super) fn expect_keyword(&mut self, keyword: Keyword) -> Result<Token, ParseError> {
        self.expect(SyntaxKind::Keyword(keyword))
    }

    /// Expects the unreserved word `word`.
    pub(super) fn expect_word(&mut self, word: &str) -> Result<Token, ParseError> {
        if self.check_word(word) {
            self.advance()
        } else {
            Err(self.unexpected(word))
        }
    }

    /// Builds an "unexpected token" error at the current token.
    pub(super) fn unexpected(&self, expected: &str) -> ParseError {
        ParseError::unexpected(expected, self.current.kind, self.current.span)
    }

    /// Fails unless `feature` is enabled.
    pub(super) fn require(&self, feature: &str, span: Span) -> Result<(), ParseError> {
        if self.options.supports(feature) {
            Ok(())
        } else {
            Err(ParseError::feature_disabled(feature, span))
        }
    }

    /// Returns the span from `start` to the end of the last consumed token.
    pub(super) const fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.prev_end)
    }

    // Names

    /// Returns true if the current token can start an identifier.
    pub(super) const fn at_identifier(&self) -> bool {
        self.current.kind.is_identifier_like()
    }

    /// Parses a possibly dotted identifier.
    pub(super) fn parse_identifier(&mut self) -> Result<Identifier, ParseError> {
        let (ident, star) = self.parse_name_path()?;
        match star {
            Some(span) => Err(ParseError::unexpected(
                "identifier",
                SyntaxKind::Star,
                span,
            )),
            None => Ok(ident),
        }
    }

    /// Parses a single-part identifier.
    pub(super) fn parse_simple_identifier(&mut self) -> Result<Identifier, ParseError> {
        let ident = self.parse_identifier()?;
        if ident.parts().len() > 1 {
            return Err(ParseError::new(
                ParseErrorKind::InvalidIdentifier,
                format!("Expected a simple name, found '{ident}'"),
                ident.span,
            ));
        }
        Ok(ident)
    }

    /// Parses a `@variable`.
    pub(super) fn parse_variable(&mut self) -> Result<Identifier, ParseError> {
        let token = self.expect(SyntaxKind::LocalVariable)?;
        Ok(single_part(&token))
    }

    /// Parses a dotted name, which may end in `.*`. Returns the name and
    /// the span of the trailing `*`, if present.
    pub(super) fn parse_name_path(&mut self) -> Result<(Identifier, Option<Span>), ParseError> {
        if !self.at_identifier() {
            return Err(self.unexpected("identifier"));
        }
        let token = self.advance()?;
        let mut ident = if token.kind == SyntaxKind::Name {
            let text = token.text().unwrap_or_default();
            let parts: Vec<String> = text.split('.').map(String::from).collect();
            Identifier::new(parts, token.span)
                .ok_or_else(|| too_many_parts(token.span))?
        } else {
            single_part(&token)
        };

        while self.check(SyntaxKind::Dot) {
            self.advance()?;
            if self.check(SyntaxKind::Star) {
                let star = self.advance()?;
                return Ok((ident, Some(star.span)));
            }
            if !matches!(
                self.current.kind,
                SyntaxKind::Name | SyntaxKind::QuotedIdentifier
            ) {
                return Err(self.unexpected("identifier"));
            }
            let (next, star) = self.parse_name_path()?;
            let span = ident.span.merge(next.span);
            ident = ident.join(next).ok_or_else(|| too_many_parts(span))?;
            if star.is_some() {
                return Ok((ident, star));
            }
        }
        Ok((ident, None))
    }

    /// Parses `name {, name}`.
    pub(super) fn parse_identifier_list(&mut self) -> Result<Vec<Identifier>, ParseError> {
        let mut idents = vec![self.parse_identifier()?];
        while self.optional(SyntaxKind::Comma)? {
            idents.push(self.parse_identifier()?);
        }
        Ok(idents)
    }

    /// Parses `( name {, name} )`.
    pub(super) fn parse_paren_identifier_list(&mut self) -> Result<Vec<Identifier>, ParseError> {
        self.expect(SyntaxKind::OpenParen)?;
        let idents = self.parse_identifier_list()?;
        self.expect(SyntaxKind::CloseParen)?;
        Ok(idents)
    }

    /// Parses a non-negative integer literal.
    pub(super) fn parse_unsigned(&mut self) -> Result<u32, ParseError> {
        if !self.check(SyntaxKind::NumericLiteral) {
            return Err(self.unexpected("integer"));
        }
        let token = self.advance()?;
        let text = token.span.slice(self.scanner.source());
        text.parse::<u32>().map_err(|_| invalid_integer(text, token.span))
    }

    /// Parses an integer literal with an optional sign.
    pub(super) fn parse_signed(&mut self) -> Result<i64, ParseError> {
        let start = self.current.span.start;
        let negative = if self.optional(SyntaxKind::Minus)? {
            true
        } else {
            self.optional(SyntaxKind::Plus)?;
            false
        };
        if !self.check(SyntaxKind::NumericLiteral) {
            return Err(self.unexpected("integer"));
        }
        let token = self.advance()?;
        let text = token.span.slice(self.scanner.source());
        let value = text
            .parse::<i64>()
            .map_err(|_| invalid_integer(text, self.span_from(start)))?;
        Ok(if negative { -value } else { value })
    }
}

/// Builds a one-part identifier from a variable, temp table or quoted
/// identifier token.
fn single_part(token: &Token) -> Identifier {
    Identifier::single(token.text().unwrap_or_default(), token.span)
}

fn too_many_parts(span: Span) -> ParseError {
    ParseError::new(
        ParseErrorKind::InvalidIdentifier,
        format!("Identifier has more than {MAX_IDENTIFIER_PARTS} parts"),
        span,
    )
}

fn invalid_integer(text: &str, span: Span) -> ParseError {
    ParseError::new(
        ParseErrorKind::InvalidLiteral,
        format!("Expected an integer, found '{text}'"),
        span,
    )
}

const fn unterminated_message(kind: SyntaxKind) -> &'static str {
    match kind {
        SyntaxKind::StringLiteral => "Unterminated string literal",
        SyntaxKind::QuotedIdentifier => "Unterminated quoted identifier",
        _ => "Unterminated comment",
    }
}
