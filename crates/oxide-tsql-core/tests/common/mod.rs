#![allow(dead_code)]

mod spans;

pub use spans::assert_spans_nested;

use oxide_tsql_core::ast::{Expr, SelectStatement, Statement};
use oxide_tsql_core::{ParseError, Parser};

/// Parses the first statement of `sql` and checks its spans.
pub fn parse(sql: &str) -> Statement {
    let statement = Parser::new(sql)
        .parse_statement()
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"));
    assert_spans_nested(sql, std::slice::from_ref(&statement));
    statement
}

/// Parses the whole script and checks the spans of every statement.
pub fn parse_all(sql: &str) -> Vec<Statement> {
    let statements = oxide_tsql_core::parse(sql)
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"));
    assert_spans_nested(sql, &statements);
    statements
}

pub fn parse_err(sql: &str) -> ParseError {
    Parser::new(sql)
        .parse()
        .expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_select(sql: &str) -> SelectStatement {
    match parse(sql) {
        Statement::Select(s) => s,
        other => panic!("Expected SELECT, got {other:?}"),
    }
}

/// Parses `expr` as the single column of `PRINT expr`.
pub fn parse_expr(expr: &str) -> Expr {
    match parse(&format!("PRINT {expr}")) {
        Statement::Print(p) => p.expression,
        other => panic!("Expected PRINT, got {other:?}"),
    }
}

/// Verifies that rendering an expression produces a fixed point:
/// the rendered text re-parses to a tree that renders identically.
pub fn round_trip_expr(expr: &str) {
    let rendered1 = parse_expr(expr).to_string();
    let rendered2 = parse_expr(&rendered1).to_string();
    assert_eq!(
        rendered1, rendered2,
        "Round-trip failed.\n  Input:    {expr}\n  First:    {rendered1}\n  Second:   {rendered2}"
    );
}

/// Same as [`round_trip_expr`] for whole SELECT statements.
pub fn round_trip(sql: &str) {
    let rendered1 = parse_select(sql).to_string();
    let rendered2 = parse_select(&rendered1).to_string();
    assert_eq!(
        rendered1, rendered2,
        "Round-trip failed.\n  Input:    {sql}\n  First:    {rendered1}\n  Second:   {rendered2}"
    );
}
