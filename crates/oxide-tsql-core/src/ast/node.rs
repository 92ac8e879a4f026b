//! The common interface of AST nodes.

use crate::lexer::Span;
use crate::syntax::SyntaxKind;

/// Behavior shared by every syntax tree node.
pub trait SyntaxNode {
    /// Returns the source range covered by the node.
    fn span(&self) -> Span;

    /// Returns the kind tag of the node.
    fn kind(&self) -> SyntaxKind;
}

/// Implements [`SyntaxNode`] for structs with a `span` field and a fixed
/// kind.
macro_rules! impl_syntax_node {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl $crate::ast::SyntaxNode for $ty {
                fn span(&self) -> $crate::lexer::Span {
                    self.span
                }

                fn kind(&self) -> $crate::syntax::SyntaxKind {
                    $crate::syntax::SyntaxKind::$kind
                }
            }
        )*
    };
}

pub(crate) use impl_syntax_node;
