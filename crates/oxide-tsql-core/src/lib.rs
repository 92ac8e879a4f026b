//! # oxide-tsql-core
//!
//! A recursive descent parser front-end for T-SQL scripts.
//!
//! This crate provides:
//! - A pull-based scanner with T-SQL lexical rules (bracketed identifiers,
//!   `N'...'` strings, `@variables`, `#temp` tables, nested comments)
//! - A typed syntax tree in which every node carries its source span
//! - A parser with an explicit precedence ladder and fail-fast errors that
//!   report line and column
//! - Feature sets that gate newer syntax by SQL Server edition
//!
//! ## Parsing a script
//!
//! ```rust
//! use oxide_tsql_core::ast::{SelectColumn, Statement};
//!
//! let statements = oxide_tsql_core::parse("SELECT a, b = c.d FROM t").unwrap();
//! let Statement::Select(select) = &statements[0] else {
//!     panic!("expected SELECT");
//! };
//! assert!(matches!(&select.columns[0], SelectColumn::Reference(id) if id.name() == "a"));
//! assert_eq!(select.columns[1].alias().unwrap().name(), "b");
//! ```
//!
//! ## Restricting syntax to an edition
//!
//! ```rust
//! use oxide_tsql_core::{FeatureSet, ParserOptions, ParseErrorKind};
//!
//! let features = FeatureSet::for_edition("sql-server", "2005").unwrap();
//! let options = ParserOptions::new().with_path("setup.sql").with_features(features);
//! let err = oxide_tsql_core::parse_with_options("DECLARE @x INT = 5", options).unwrap_err();
//!
//! assert!(matches!(err.kind, ParseErrorKind::FeatureDisabled(_)));
//! assert_eq!((err.line, err.col), (1, 17));
//! assert_eq!(err.file.as_deref(), Some("setup.sql"));
//! ```

pub mod ast;
pub mod dialect;
pub mod lexer;
pub mod parser;
pub mod syntax;

pub use ast::{Expr, Statement, SyntaxNode};
pub use dialect::{Dialect, FeatureSet, GenericDialect, SqlServer};
pub use lexer::{Scanner, ScannerOptions, Span, Token};
pub use parser::{
    ErrorRecord, ParseError, ParseErrorKind, Parser, ParserOptions, MAX_NESTING_DEPTH,
};
pub use syntax::{Keyword, SyntaxKind};

/// Parses a script with default options.
///
/// # Errors
///
/// Returns the first syntax error in the script.
pub fn parse(source: &str) -> Result<Vec<Statement>, ParseError> {
    Parser::new(source).parse()
}

/// Parses a script with the given options.
///
/// # Errors
///
/// Returns the first syntax error in the script.
pub fn parse_with_options(
    source: &str,
    options: ParserOptions,
) -> Result<Vec<Statement>, ParseError> {
    Parser::with_options(source, options).parse()
}
