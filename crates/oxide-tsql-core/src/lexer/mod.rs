//! T-SQL lexer
//!
//! This module provides a hand-written, pull-based scanner that turns
//! source text into [`Token`]s one at a time.

pub mod chars;
mod lines;
mod scanner;
mod span;
mod token;

pub use lines::LineIndex;
pub use scanner::{Scanner, ScannerOptions};
pub use span::Span;
pub use token::{Token, TokenFlags, TokenValue, EMPTY_TOKEN};
