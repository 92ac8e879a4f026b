//! Tests for SELECT statements: column lists, sources, joins and clauses.

mod common;
use common::*;

use oxide_tsql_core::ast::{
    AliasStyle, Expr, JoinType, OrderDirection, SelectColumn, Statement, SyntaxNode,
    TableFactor,
};
use oxide_tsql_core::SyntaxKind;

#[test]
fn reference_and_alias_equals_columns() {
    let s = parse_select("SELECT a, b = c.d FROM t");
    assert_eq!(s.columns.len(), 2);
    let SelectColumn::Reference(a) = &s.columns[0] else {
        panic!("Expected reference");
    };
    assert_eq!(a.parts(), &["a"]);

    let SelectColumn::Expression(b) = &s.columns[1] else {
        panic!("Expected expression column");
    };
    assert_eq!(b.style, AliasStyle::AliasEqualsExpr);
    assert_eq!(b.alias.as_ref().unwrap().name(), "b");
    assert_eq!(b.expression.as_identifier().unwrap().parts(), &["c", "d"]);
}

#[test]
fn select_keyword_is_case_insensitive() {
    for sql in ["SELECT 1", "select 1", "SeLeCt 1"] {
        let statement = parse(sql);
        assert_eq!(statement.kind(), SyntaxKind::SelectStatement);
    }
}

#[test]
fn seeded_column_expressions() {
    let s = parse_select("SELECT price * qty AS total, dbo.fn(x) f, t.a + 1 FROM t");
    let styles: Vec<_> = s
        .columns
        .iter()
        .map(|c| match c {
            SelectColumn::Expression(col) => col.style,
            SelectColumn::Reference(_) => panic!("Expected expression column"),
        })
        .collect();
    assert_eq!(
        styles,
        vec![
            AliasStyle::ExprAsAlias,
            AliasStyle::ExprAlias,
            AliasStyle::ExprOnly
        ]
    );
    assert_eq!(s.columns[0].span().slice("SELECT price * qty AS total"), "price * qty AS total");
}

#[test]
fn qualified_wildcard_column() {
    let s = parse_select("SELECT u.*, o.id FROM users u JOIN orders o ON o.user_id = u.id");
    let SelectColumn::Expression(col) = &s.columns[0] else {
        panic!("Expected wildcard column");
    };
    let Expr::Wildcard { qualifier, .. } = &col.expression else {
        panic!("Expected wildcard");
    };
    assert_eq!(qualifier.as_ref().unwrap().name(), "u");
    assert!(matches!(&s.columns[1], SelectColumn::Reference(_)));
}

#[test]
fn variable_assignment_column() {
    let s = parse_select("SELECT @total = SUM(amount) FROM payments");
    assert_eq!(s.columns[0].alias().unwrap().name(), "@total");
}

#[test]
fn top_variants() {
    let top = parse_select("SELECT TOP 5 a FROM t").top.unwrap();
    assert!(!top.parenthesized);
    let top = parse_select("SELECT TOP (@n * 2) PERCENT a FROM t").top.unwrap();
    assert!(top.parenthesized);
    assert!(top.percent);
    assert!(matches!(top.value, Expr::Binary { .. }));
}

#[test]
fn all_join_types() {
    let s = parse_select(
        "SELECT * FROM a \
         JOIN b ON a.id = b.id \
         INNER JOIN c ON c.id = a.id \
         LEFT JOIN d ON d.id = a.id \
         RIGHT OUTER JOIN e ON e.id = a.id \
         FULL JOIN f ON f.id = a.id \
         CROSS JOIN g",
    );
    let from = s.from.unwrap();
    assert_eq!(from.sources.len(), 1);
    let types: Vec<_> = from.sources[0].joins.iter().map(|j| j.join_type).collect();
    assert_eq!(
        types,
        vec![
            JoinType::Inner,
            JoinType::ExplicitInner,
            JoinType::Left,
            JoinType::Right,
            JoinType::Full,
            JoinType::Cross
        ]
    );
}

#[test]
fn join_requires_on() {
    let err = parse_err("SELECT * FROM a JOIN b WHERE a.id = 1");
    assert!(err.message.contains("ON"), "{}", err.message);
}

#[test]
fn implicit_joins_and_sources() {
    let s = parse_select(
        "SELECT * FROM dbo.t1 AS x WITH (NOLOCK, HOLDLOCK), #tmp, @tv v, \
         dbo.fn_rows(1) r, (SELECT 1 AS n) d",
    );
    let sources = s.from.unwrap().sources;
    assert_eq!(sources.len(), 5);
    assert_eq!(sources[0].hints.len(), 2);
    assert!(matches!(&sources[1].factor, TableFactor::Named(t) if t.is_temp_table()));
    assert!(matches!(&sources[2].factor, TableFactor::Named(t) if t.is_variable()));
    assert!(matches!(sources[3].factor, TableFactor::Function(_)));
    assert!(matches!(sources[4].factor, TableFactor::Derived { .. }));
    assert_eq!(sources[4].alias.as_ref().unwrap().name(), "d");
}

#[test]
fn grouping_and_ordering() {
    let s = parse_select(
        "SELECT dept, COUNT(*) AS n FROM staff WHERE active = 1 \
         GROUP BY dept HAVING COUNT(*) > 5 ORDER BY n DESC, dept ASC",
    );
    assert_eq!(s.group_by.len(), 1);
    assert!(s.having.is_some());
    assert_eq!(s.order_by.len(), 2);
    assert_eq!(s.order_by[0].direction, Some(OrderDirection::Desc));
    assert_eq!(s.order_by[1].direction, Some(OrderDirection::Asc));
}

#[test]
fn select_into() {
    let s = parse_select("SELECT * INTO ##shared FROM t");
    assert_eq!(s.into.unwrap().target.name(), "##shared");
}

#[test]
fn union_chain_with_order_by() {
    let s = parse_select("SELECT a FROM t UNION SELECT b FROM u UNION ALL SELECT c FROM v ORDER BY 1");
    assert_eq!(s.unions.len(), 2);
    assert!(!s.unions[0].all);
    assert!(s.unions[1].all);
    assert!(s.unions.iter().all(|u| u.select.order_by.is_empty()));
    assert_eq!(s.order_by.len(), 1);
}

#[test]
fn statement_span_covers_clauses() {
    let sql = "SELECT a FROM t WHERE a > 1;";
    let statement = parse(sql);
    assert_eq!(statement.span().slice(sql), "SELECT a FROM t WHERE a > 1");
    let Statement::Select(s) = statement else {
        panic!("Expected SELECT");
    };
    let from = s.from.unwrap();
    assert!(s.span.contains(from.span));
    assert!(from.span.contains(from.sources[0].span));
}

#[test]
fn rendering_is_a_fixed_point() {
    round_trip("SELECT a, b = c.d, e + 1 AS f FROM t");
    round_trip("SELECT DISTINCT TOP (10) PERCENT u.*, o.total FROM dbo.users AS u LEFT JOIN orders o ON o.uid = u.id");
    round_trip("SELECT COUNT(*) n FROM t WITH (NOLOCK) WHERE x IN (1, 2) GROUP BY y HAVING COUNT(*) > 1");
    round_trip("SELECT a FROM t UNION ALL SELECT b FROM (SELECT b FROM u) AS d ORDER BY a DESC");
    round_trip("SELECT [select], [two words] FROM [my table] CROSS JOIN x");
}
