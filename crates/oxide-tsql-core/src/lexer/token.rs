//! Token types for the scanner.

use core::ops::{BitOr, BitOrAssign};

use serde::Serialize;

use super::Span;
use crate::syntax::{Keyword, SyntaxKind};

/// Decoded payload of a token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TokenValue {
    /// Value of a numeric literal.
    Number(f64),
    /// Decoded string literal, identifier or variable text.
    Text(String),
}

/// Lexical modifiers attached to a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct TokenFlags(u8);

impl TokenFlags {
    /// No modifiers.
    pub const NONE: Self = Self(0);
    /// Identifier written in double quotes.
    pub const QUOTED: Self = Self(1);
    /// Identifier written in square brackets.
    pub const BRACKETED: Self = Self(1 << 1);
    /// Unicode string literal (`N'...'`).
    pub const NATIONAL: Self = Self(1 << 2);
    /// Literal, identifier or comment that ran into the end of input.
    pub const UNTERMINATED: Self = Self(1 << 3);

    /// Returns true if every flag in `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns true if no flag is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the raw bits.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for TokenFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for TokenFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// A token with its span in the source code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    /// The kind of token.
    pub kind: SyntaxKind,
    /// The location in the source code.
    pub span: Span,
    /// Decoded payload, if any.
    pub value: Option<TokenValue>,
    /// Lexical modifiers.
    pub flags: TokenFlags,
}

/// Sentinel for "no token scanned yet".
pub const EMPTY_TOKEN: Token = Token::empty();

impl Token {
    /// Creates a new token without a payload.
    #[must_use]
    pub const fn new(kind: SyntaxKind, span: Span) -> Self {
        Self {
            kind,
            span,
            value: None,
            flags: TokenFlags::NONE,
        }
    }

    /// Returns the "no token yet" sentinel.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(SyntaxKind::Unknown, Span::new(0, 0))
    }

    /// Attaches a payload.
    #[must_use]
    pub fn with_value(mut self, value: TokenValue) -> Self {
        self.value = Some(value);
        self
    }

    /// Adds lexical flags.
    #[must_use]
    pub fn with_flags(mut self, flags: TokenFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, SyntaxKind::Eof)
    }

    /// Returns true if this is a keyword.
    #[must_use]
    pub const fn is_keyword(&self) -> bool {
        self.kind.is_keyword()
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        self.kind.as_keyword()
    }

    /// Returns the text payload, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            Some(TokenValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Returns the numeric payload, if any.
    #[must_use]
    pub const fn number(&self) -> Option<f64> {
        match &self.value {
            Some(TokenValue::Number(n)) => Some(*n),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_eof() {
        let eof = Token::new(SyntaxKind::Eof, Span::new(0, 0));
        let select = Token::new(SyntaxKind::Keyword(Keyword::Select), Span::new(0, 6));
        assert!(eof.is_eof());
        assert!(!select.is_eof());
    }

    #[test]
    fn test_token_as_keyword() {
        let select = Token::new(SyntaxKind::Keyword(Keyword::Select), Span::new(0, 6));
        let plus = Token::new(SyntaxKind::Plus, Span::new(0, 1));
        assert_eq!(select.as_keyword(), Some(Keyword::Select));
        assert_eq!(plus.as_keyword(), None);
    }

    #[test]
    fn test_empty_token() {
        assert_eq!(EMPTY_TOKEN.kind, SyntaxKind::Unknown);
        assert!(EMPTY_TOKEN.span.is_empty());
        assert_eq!(Token::empty(), EMPTY_TOKEN);
    }

    #[test]
    fn test_payload_accessors() {
        let name = Token::new(SyntaxKind::Name, Span::new(0, 3))
            .with_value(TokenValue::Text(String::from("foo")));
        let number = Token::new(SyntaxKind::NumericLiteral, Span::new(0, 2))
            .with_value(TokenValue::Number(42.0));
        assert_eq!(name.text(), Some("foo"));
        assert_eq!(name.number(), None);
        assert_eq!(number.number(), Some(42.0));
    }

    #[test]
    fn test_flags() {
        let flags = TokenFlags::QUOTED | TokenFlags::UNTERMINATED;
        assert!(flags.contains(TokenFlags::QUOTED));
        assert!(flags.contains(TokenFlags::UNTERMINATED));
        assert!(!flags.contains(TokenFlags::BRACKETED));
        assert!(TokenFlags::NONE.is_empty());
    }
}
