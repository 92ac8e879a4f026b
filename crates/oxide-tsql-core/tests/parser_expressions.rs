//! Tests for the expression precedence ladder and primary expressions.

mod common;
use common::*;

use oxide_tsql_core::ast::{
    BinaryOperator, CastKind, Expr, InList, Literal, SyntaxNode, UnaryOperator,
};

fn binary(expr: &Expr) -> (&Expr, BinaryOperator, &Expr) {
    match expr {
        Expr::Binary {
            left, op, right, ..
        } => (left, *op, right),
        other => panic!("Expected binary expression, got {other:?}"),
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let e = parse_expr("1 + 2 * 3");
    let (left, op, right) = binary(&e);
    assert_eq!(op, BinaryOperator::Add);
    assert!(matches!(left, Expr::Literal { value: Literal::Number(n), .. } if *n == 1.0));
    assert_eq!(binary(right).1, BinaryOperator::Multiply);
}

#[test]
fn parentheses_override_precedence() {
    let e = parse_expr("(1 + 2) * 3");
    let (left, op, _) = binary(&e);
    assert_eq!(op, BinaryOperator::Multiply);
    let Expr::Paren { expr, .. } = left else {
        panic!("Expected parenthesized left operand");
    };
    assert_eq!(binary(expr).1, BinaryOperator::Add);
}

#[test]
fn additive_operators_are_left_associative() {
    let e = parse_expr("a - b + c");
    let (left, op, _) = binary(&e);
    assert_eq!(op, BinaryOperator::Add);
    assert_eq!(binary(left).1, BinaryOperator::Subtract);
}

#[test]
fn comparison_chain_nests_to_the_left() {
    let e = parse_expr("a = b = c");
    let (left, op, right) = binary(&e);
    assert_eq!(op, BinaryOperator::Equal);
    assert_eq!(binary(left).1, BinaryOperator::Equal);
    assert_eq!(right.as_identifier().unwrap().name(), "c");
}

#[test]
fn and_binds_tighter_than_or() {
    let e = parse_expr("a = 1 OR b = 2 AND c = 3");
    let (left, op, right) = binary(&e);
    assert_eq!(op, BinaryOperator::Or);
    assert_eq!(binary(left).1, BinaryOperator::Equal);
    assert_eq!(binary(right).1, BinaryOperator::And);
}

#[test]
fn not_applies_to_comparison() {
    let e = parse_expr("NOT a < 1 OR b > 2");
    let (left, op, _) = binary(&e);
    assert_eq!(op, BinaryOperator::Or);
    let Expr::Unary { op, operand, .. } = left else {
        panic!("Expected NOT");
    };
    assert_eq!(*op, UnaryOperator::Not);
    assert_eq!(binary(operand).1, BinaryOperator::LessThan);
}

#[test]
fn leading_sign_wraps_multiplicative_term() {
    let e = parse_expr("-a * b + c");
    let (left, op, _) = binary(&e);
    assert_eq!(op, BinaryOperator::Add);
    let Expr::Unary { op, operand, .. } = left else {
        panic!("Expected sign");
    };
    assert_eq!(*op, UnaryOperator::Minus);
    assert_eq!(binary(operand).1, BinaryOperator::Multiply);
}

#[test]
fn sign_inside_operand_applies_to_operand() {
    let e = parse_expr("a * -b");
    let (_, op, right) = binary(&e);
    assert_eq!(op, BinaryOperator::Multiply);
    assert!(matches!(
        right,
        Expr::Unary {
            op: UnaryOperator::Minus,
            ..
        }
    ));
}

#[test]
fn bitwise_not_binds_to_base() {
    let e = parse_expr("~flags & 4");
    let (left, op, _) = binary(&e);
    assert_eq!(op, BinaryOperator::BitwiseAnd);
    assert!(matches!(
        left,
        Expr::Unary {
            op: UnaryOperator::BitwiseNot,
            ..
        }
    ));
}

#[test]
fn not_equal_spellings() {
    assert_eq!(binary(&parse_expr("a <> b")).1, BinaryOperator::NotEqual);
    assert_eq!(binary(&parse_expr("a != b")).1, BinaryOperator::NotEqual);
    assert_eq!(binary(&parse_expr("a !< b")).1, BinaryOperator::NotLessThan);
}

#[test]
fn string_literals() {
    let e = parse_expr("N'it''s' + 'x'");
    let (left, _, right) = binary(&e);
    assert!(matches!(
        left,
        Expr::Literal {
            value: Literal::String { value, national: true },
            ..
        } if value == "it's"
    ));
    assert!(matches!(
        right,
        Expr::Literal {
            value: Literal::String { national: false, .. },
            ..
        }
    ));
}

#[test]
fn variables_and_dotted_names() {
    assert_eq!(parse_expr("@count").as_identifier().unwrap().name(), "@count");
    assert_eq!(
        parse_expr("@@ROWCOUNT").as_identifier().unwrap().name(),
        "@@ROWCOUNT"
    );
    assert_eq!(
        parse_expr("db.dbo.users").as_identifier().unwrap().parts(),
        &["db", "dbo", "users"]
    );
    assert_eq!(
        parse_expr("[order details].[unit price]")
            .as_identifier()
            .unwrap()
            .parts(),
        &["order details", "unit price"]
    );
}

#[test]
fn is_null_and_between() {
    assert!(matches!(
        parse_expr("a IS NOT NULL"),
        Expr::IsNull { negated: true, .. }
    ));
    let e = parse_expr("a NOT BETWEEN 1 AND 10 AND b = 2");
    let (left, op, _) = binary(&e);
    assert_eq!(op, BinaryOperator::And);
    assert!(matches!(left, Expr::Between { negated: true, .. }));
}

#[test]
fn in_list_and_subquery() {
    let Expr::In { list, negated, .. } = parse_expr("id IN (1, 2, 3)") else {
        panic!("Expected IN");
    };
    assert!(!negated);
    assert!(matches!(list, InList::Values(values) if values.len() == 3));

    let Expr::In { list, negated, .. } = parse_expr("id NOT IN (SELECT id FROM t)") else {
        panic!("Expected IN");
    };
    assert!(negated);
    assert!(matches!(list, InList::Subquery(_)));
}

#[test]
fn like_with_escape() {
    let Expr::Like {
        escape, negated, ..
    } = parse_expr("name NOT LIKE 'a!%%' ESCAPE '!'")
    else {
        panic!("Expected LIKE");
    };
    assert!(negated);
    assert!(escape.is_some());
}

#[test]
fn function_calls() {
    let Expr::Function(call) = parse_expr("COUNT(DISTINCT x)") else {
        panic!("Expected function");
    };
    assert!(call.distinct);
    assert_eq!(call.args.len(), 1);

    let Expr::Function(call) = parse_expr("dbo.fn_total(1, @x + 2)") else {
        panic!("Expected function");
    };
    assert_eq!(call.name.parts(), &["dbo", "fn_total"]);
    assert_eq!(call.args.len(), 2);

    let Expr::Function(call) = parse_expr("COUNT(*)") else {
        panic!("Expected function");
    };
    assert!(matches!(call.args[0], Expr::Wildcard { qualifier: None, .. }));
}

#[test]
fn window_function() {
    let Expr::Function(call) =
        parse_expr("ROW_NUMBER() OVER (PARTITION BY dept, team ORDER BY salary DESC)")
    else {
        panic!("Expected function");
    };
    assert!(call.args.is_empty());
    let over = call.over.unwrap();
    assert_eq!(over.partition_by.len(), 2);
    assert_eq!(over.order_by.len(), 1);
}

#[test]
fn keyword_functions() {
    let Expr::Function(call) = parse_expr("LEFT(name, 3)") else {
        panic!("Expected LEFT");
    };
    assert_eq!(call.name.name(), "LEFT");
    assert_eq!(call.args.len(), 2);

    assert!(matches!(parse_expr("COALESCE(a, b, 0)"), Expr::Function(_)));
    assert!(matches!(parse_expr("NULLIF(a, 0)"), Expr::Function(_)));

    let Expr::Function(call) = parse_expr("CURRENT_TIMESTAMP") else {
        panic!("Expected niladic function");
    };
    assert!(call.niladic);
}

#[test]
fn case_expressions() {
    let Expr::Case(case) =
        parse_expr("CASE WHEN a > 1 THEN 'big' WHEN a = 1 THEN 'one' ELSE 'small' END")
    else {
        panic!("Expected CASE");
    };
    assert!(case.operand.is_none());
    assert_eq!(case.when_clauses.len(), 2);
    assert!(case.else_result.is_some());

    let Expr::Case(case) = parse_expr("CASE status WHEN 1 THEN 'on' END") else {
        panic!("Expected CASE");
    };
    assert!(case.operand.is_some());
    assert!(case.else_result.is_none());
}

#[test]
fn cast_and_convert() {
    let Expr::Cast(cast) = parse_expr("CAST(price AS DECIMAL(10, 2))") else {
        panic!("Expected CAST");
    };
    assert_eq!(cast.kind, CastKind::Cast);
    assert_eq!(cast.data_type.base_name(), "DECIMAL");

    let Expr::Cast(cast) = parse_expr("CONVERT(VARCHAR(10), created, 120)") else {
        panic!("Expected CONVERT");
    };
    assert_eq!(cast.kind, CastKind::Convert);
    assert!(cast.style.is_some());

    let Expr::Cast(cast) = parse_expr("TRY_CONVERT(INT, '12')") else {
        panic!("Expected TRY_CONVERT");
    };
    assert_eq!(cast.kind, CastKind::TryConvert);
}

#[test]
fn exists_and_scalar_subquery() {
    assert!(matches!(
        parse_expr("EXISTS (SELECT 1 FROM t WHERE t.id = 1)"),
        Expr::Exists { .. }
    ));
    let e = parse_expr("(SELECT MAX(id) FROM t) + 1");
    let (left, _, _) = binary(&e);
    assert!(matches!(left, Expr::Subquery { .. }));
}

#[test]
fn expression_spans_cover_operands() {
    let e = parse_expr("a + b * c");
    assert_eq!(e.span().start, 6);
    assert_eq!(e.span().end, 15);
    let (_, _, right) = binary(&e);
    assert!(e.span().contains(right.span()));
}

#[test]
fn unsupported_expression_start() {
    let err = parse_err("PRINT FROM");
    assert!(err.message.starts_with("Unsupported syntax"));
}

#[test]
fn rendering_is_a_fixed_point() {
    round_trip_expr("1 + 2 * 3");
    round_trip_expr("(1 + 2) * 3");
    round_trip_expr("-a * b + c");
    round_trip_expr("a * - -b");
    round_trip_expr("NOT a = 1 AND b <> 2 OR c IS NULL");
    round_trip_expr("a NOT BETWEEN 1 AND 2");
    round_trip_expr("x IN (SELECT id FROM t WHERE y LIKE 'a%' ESCAPE '!')");
    round_trip_expr("CASE WHEN [order] > 1 THEN N'x' ELSE LEFT(name, 2) END");
    round_trip_expr("CONVERT(VARCHAR(max), @d, 120) + CAST(1 AS INT)");
    round_trip_expr("SUM(amount) OVER (PARTITION BY a ORDER BY b DESC)");
    round_trip_expr("CURRENT_TIMESTAMP");
}
