//! T-SQL parser
//!
//! A hand-written recursive descent parser with an explicit precedence
//! ladder for expressions. The parser keeps one token of lookahead and
//! never backtracks; where T-SQL needs more context (`a = b` as a column
//! alias, `name:` as a label) the leading identifier is read once and
//! handed down as a seed.

mod ddl;
mod error;
mod expression;
mod options;
mod parser;
mod precedence;
mod select;
mod statement;

pub use error::{ErrorRecord, ParseError, ParseErrorKind};
pub use options::{ErrorCallback, ParserOptions};
pub use parser::{Parser, MAX_NESTING_DEPTH};
pub use precedence::Precedence;
