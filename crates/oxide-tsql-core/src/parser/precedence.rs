//! Operator precedence tiers for the expression ladder.

use crate::ast::{BinaryOperator, UnaryOperator};
use crate::syntax::{Keyword, SyntaxKind};

/// Precedence tiers, loosest first.
///
/// A leading sign binds looser than multiplication, so `-a * b` parses
/// as `-(a * b)`, while a sign inside an operand (`a * -b`) applies to
/// that operand only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    /// OR
    Or,
    /// AND
    And,
    /// Prefix NOT
    Not,
    /// Comparisons and the IS / BETWEEN / IN / LIKE predicates
    Comparison,
    /// `+ - & | ^`
    Additive,
    /// Leading `+` / `-`
    Sign,
    /// `* / %`
    Multiplicative,
}

impl Precedence {
    /// Returns the next tighter tier, or `None` below multiplication.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Or => Some(Self::And),
            Self::And => Some(Self::Not),
            Self::Not => Some(Self::Comparison),
            Self::Comparison => Some(Self::Additive),
            Self::Additive => Some(Self::Sign),
            Self::Sign => Some(Self::Multiplicative),
            Self::Multiplicative => None,
        }
    }
}

/// Returns the binary operator of `kind` if it belongs to `level`.
#[must_use]
pub const fn binary_operator_at(kind: SyntaxKind, level: Precedence) -> Option<BinaryOperator> {
    match BinaryOperator::from_kind(kind) {
        Some(op) if op.precedence() as u8 == level as u8 => Some(op),
        _ => None,
    }
}

/// Returns the prefix operator a token stands for.
#[must_use]
pub const fn token_to_unary_op(kind: SyntaxKind) -> Option<UnaryOperator> {
    match kind {
        SyntaxKind::Keyword(Keyword::Not) => Some(UnaryOperator::Not),
        SyntaxKind::Tilde => Some(UnaryOperator::BitwiseNot),
        SyntaxKind::Plus => Some(UnaryOperator::Plus),
        SyntaxKind::Minus => Some(UnaryOperator::Minus),
        _ => None,
    }
}
