//! Tests for DECLARE, SET and USE.

mod common;
use common::*;

use oxide_tsql_core::ast::{
    AssignmentOperator, Expr, Literal, SetOptionValue, Statement, TableElement, TypeArgs,
};
use oxide_tsql_core::ParseErrorKind;

#[test]
fn declare_with_initializer() {
    let Statement::Declare(d) = parse("DECLARE @x INT = 5") else {
        panic!("Expected DECLARE");
    };
    let variables = d.variables();
    assert_eq!(variables.len(), 1);
    assert_eq!(variables[0].name.name(), "@x");
    assert_eq!(variables[0].data_type.base_name(), "INT");
    assert!(matches!(
        variables[0].initializer,
        Some(Expr::Literal {
            value: Literal::Number(n),
            ..
        }) if n == 5.0
    ));
    assert!(d.table().is_none());
}

#[test]
fn declare_several_variables() {
    let Statement::Declare(d) =
        parse("DECLARE @a AS NVARCHAR(max), @b DECIMAL(18, 4), @c dbo.Phone")
    else {
        panic!("Expected DECLARE");
    };
    let variables = d.variables();
    assert_eq!(variables.len(), 3);
    assert!(variables[0].has_as);
    assert_eq!(variables[0].data_type.args, TypeArgs::Max);
    assert!(!variables[1].has_as);
    assert_eq!(variables[1].data_type.args, TypeArgs::Two(18, 4));
    assert_eq!(variables[2].data_type.name.parts(), &["dbo", "Phone"]);
    assert!(variables.iter().all(|v| v.initializer.is_none()));
}

#[test]
fn declare_table_variable() {
    let Statement::Declare(d) = parse(
        "DECLARE @t TABLE (id INT PRIMARY KEY, name NVARCHAR(50) NOT NULL, INDEX ix_name (name))",
    ) else {
        panic!("Expected DECLARE");
    };
    assert!(d.variables().is_empty());
    let table = d.table().unwrap();
    assert_eq!(table.name.name(), "@t");
    assert_eq!(table.elements.len(), 3);
    assert!(table.elements[0].as_column().unwrap().primary_key);
    assert!(!table.elements[1].as_column().unwrap().is_nullable());
    assert!(matches!(table.elements[2], TableElement::Index(_)));
}

#[test]
fn declare_cursor_variable() {
    let Statement::Declare(d) = parse("DECLARE @c CURSOR") else {
        panic!("Expected DECLARE");
    };
    assert_eq!(d.variables()[0].data_type.base_name(), "CURSOR");
}

#[test]
fn declare_name_must_be_a_variable() {
    let err = parse_err("DECLARE total INT");
    assert!(matches!(err.kind, ParseErrorKind::UnexpectedToken { .. }));
}

#[test]
fn set_assignment_operators() {
    let cases = [
        ("=", AssignmentOperator::Assign),
        ("+=", AssignmentOperator::AddAssign),
        ("-=", AssignmentOperator::SubtractAssign),
        ("*=", AssignmentOperator::MultiplyAssign),
        ("/=", AssignmentOperator::DivideAssign),
        ("%=", AssignmentOperator::ModuloAssign),
        ("&=", AssignmentOperator::BitwiseAndAssign),
        ("|=", AssignmentOperator::BitwiseOrAssign),
        ("^=", AssignmentOperator::BitwiseXorAssign),
    ];
    for (text, expected) in cases {
        let sql = format!("SET @x {text} @x + 1");
        let Statement::Set(set) = parse(&sql) else {
            panic!("Expected SET for {sql}");
        };
        assert_eq!(set.op, expected, "{sql}");
        assert_eq!(set.target.name(), "@x");
    }
}

#[test]
fn set_requires_assignment_operator() {
    let err = parse_err("SET @x 1");
    assert!(err.message.contains("assignment operator"), "{}", err.message);
}

#[test]
fn set_session_options() {
    let Statement::SetOption(option) = parse("SET ANSI_NULLS ON") else {
        panic!("Expected SET option");
    };
    assert_eq!(option.options, vec!["ANSI_NULLS"]);
    assert_eq!(option.value, SetOptionValue::On);

    let Statement::SetOption(option) = parse("SET DATEFORMAT dmy") else {
        panic!("Expected SET option");
    };
    assert!(matches!(option.value, SetOptionValue::Value(Expr::Identifier(_))));

    let Statement::SetOption(option) = parse("SET ROWCOUNT 100") else {
        panic!("Expected SET option");
    };
    assert_eq!(option.options, vec!["ROWCOUNT"]);

    let Statement::SetOption(option) = parse("SET IDENTITY_INSERT #work ON") else {
        panic!("Expected SET option");
    };
    assert!(option.target.unwrap().is_temp_table());
}

#[test]
fn set_transaction_is_unsupported() {
    let err = parse_err("SET TRANSACTION ISOLATION LEVEL READ COMMITTED");
    assert!(matches!(err.kind, ParseErrorKind::Unsupported(_)));
}

#[test]
fn use_database() {
    let Statement::Use(u) = parse("USE [Sales DB]") else {
        panic!("Expected USE");
    };
    assert_eq!(u.database.parts(), &["Sales DB"]);
}
