//! Parser error types.

use serde::Serialize;

use crate::lexer::Span;
use crate::syntax::SyntaxKind;

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ParseErrorKind {
    /// Unterminated literal, identifier or comment, or a stray character.
    Lexical,
    /// A token other than the expected one.
    UnexpectedToken {
        /// Human-readable description of what was expected.
        expected: String,
        /// The token found instead.
        found: SyntaxKind,
    },
    /// Valid T-SQL this parser does not handle.
    Unsupported(String),
    /// A token that cannot start a statement.
    UnrecognizedStatement(SyntaxKind),
    /// Syntax gated behind a disabled capability.
    FeatureDisabled(String),
    /// An identifier with too many parts.
    InvalidIdentifier,
    /// A literal that could not be decoded.
    InvalidLiteral,
}

/// A parse error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} (line {line}, column {col})")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// The error message.
    pub message: String,
    /// The location of the error.
    pub span: Span,
    /// 1-based line of `span.start`.
    pub line: usize,
    /// 1-based column of `span.start`.
    pub col: usize,
    /// Source path, when known.
    pub file: Option<String>,
}

impl ParseError {
    /// Creates a new parse error. Line and column are filled in by the
    /// parser before the error is returned.
    #[must_use]
    pub fn new(kind: ParseErrorKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
            line: 0,
            col: 0,
            file: None,
        }
    }

    /// Creates an "unexpected token" error.
    #[must_use]
    pub fn unexpected(expected: impl Into<String>, found: SyntaxKind, span: Span) -> Self {
        let expected: String = expected.into();
        let message = if found == SyntaxKind::Eof {
            format!("Unexpected end of input: expected {expected}")
        } else {
            format!("Unexpected token: expected {expected}, found {found}")
        };
        Self::new(
            ParseErrorKind::UnexpectedToken { expected, found },
            message,
            span,
        )
    }

    /// Creates an error for syntax the parser does not handle.
    #[must_use]
    pub fn unsupported(construct: impl Into<String>, span: Span) -> Self {
        let construct: String = construct.into();
        let message = format!("Unsupported syntax: {construct}");
        Self::new(ParseErrorKind::Unsupported(construct), message, span)
    }

    /// Creates an error for syntax behind a disabled capability.
    #[must_use]
    pub fn feature_disabled(feature: &str, span: Span) -> Self {
        Self::new(
            ParseErrorKind::FeatureDisabled(String::from(feature)),
            format!("Syntax requires the '{feature}' feature, which is disabled"),
            span,
        )
    }

    /// Creates a lexical error.
    #[must_use]
    pub fn lexical(message: impl Into<String>, span: Span) -> Self {
        Self::new(ParseErrorKind::Lexical, message, span)
    }

    /// Returns the plain diagnostic record for this error.
    #[must_use]
    pub fn record(&self) -> ErrorRecord {
        ErrorRecord {
            file: self.file.clone(),
            line: self.line,
            col: self.col,
            message: self.message.clone(),
        }
    }
}

/// A diagnostic as handed to error callbacks and serialized for tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorRecord {
    /// Source path, when known.
    pub file: Option<String>,
    /// 1-based line.
    pub line: usize,
    /// 1-based column.
    pub col: usize,
    /// The error message.
    pub message: String,
}
