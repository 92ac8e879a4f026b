//! SELECT grammar: column lists, FROM sources, joins and trailing clauses.

use super::error::ParseError;
use super::parser::Parser;
use super::precedence::{binary_operator_at, Precedence};
use crate::ast::{
    AliasStyle, ColumnExpression, Expr, FromClause, Identifier, IntoClause, JoinType,
    JoinedTable, OrderByItem, OrderDirection, SelectColumn, SelectStatement, TableFactor,
    TableSource, TopClause, UnionClause,
};
use crate::syntax::{Keyword, SyntaxKind};

impl Parser<'_> {
    /// Parses a SELECT statement with its UNION arms and ORDER BY.
    pub(super) fn parse_select_statement(&mut self) -> Result<SelectStatement, ParseError> {
        self.nested(Self::parse_query)
    }

    fn parse_query(&mut self) -> Result<SelectStatement, ParseError> {
        let mut select = self.parse_select_body()?;

        while self.check_keyword(Keyword::Union) {
            let start = self.advance()?.span.start;
            let all = self.optional_keyword(Keyword::All)?;
            if !self.check_keyword(Keyword::Select) {
                return Err(self.unexpected("SELECT"));
            }
            let body = self.parse_select_body()?;
            select.unions.push(UnionClause {
                all,
                select: Box::new(body),
                span: self.span_from(start),
            });
        }

        if self.optional_keyword(Keyword::Order)? {
            self.expect_keyword(Keyword::By)?;
            select.order_by = self.parse_order_by_items()?;
        }

        select.span = self.span_from(select.span.start);
        Ok(select)
    }

    /// Parses one SELECT without UNION or ORDER BY.
    fn parse_select_body(&mut self) -> Result<SelectStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Select)?.span.start;

        let distinct = if self.optional_keyword(Keyword::Distinct)? {
            true
        } else {
            self.optional_keyword(Keyword::All)?;
            false
        };

        let top = if self.check_keyword(Keyword::Top) {
            Some(self.parse_top()?)
        } else {
            None
        };

        let columns = self.parse_select_columns()?;

        let into = if self.check_keyword(Keyword::Into) {
            let into_start = self.advance()?.span.start;
            let target = self.parse_identifier()?;
            Some(IntoClause {
                target,
                span: self.span_from(into_start),
            })
        } else {
            None
        };

        let from = if self.check_keyword(Keyword::From) {
            Some(self.parse_from_clause()?)
        } else {
            None
        };

        let where_clause = if self.optional_keyword(Keyword::Where)? {
            Some(self.parse_expression()?)
        } else {
            None
        };

        let group_by = if self.optional_keyword(Keyword::Group)? {
            self.expect_keyword(Keyword::By)?;
            self.parse_expression_list()?
        } else {
            Vec::new()
        };

        let having = if self.optional_keyword(Keyword::Having)? {
            Some(self.parse_expression()?)
        } else {
            None
        };

        Ok(SelectStatement {
            distinct,
            top,
            columns,
            into,
            from,
            where_clause,
            group_by,
            having,
            unions: Vec::new(),
            order_by: Vec::new(),
            span: self.span_from(start),
        })
    }

    /// Parses `TOP n [PERCENT]` or `TOP (expr) [PERCENT]`.
    pub(super) fn parse_top(&mut self) -> Result<TopClause, ParseError> {
        let start = self.expect_keyword(Keyword::Top)?.span.start;
        let (value, parenthesized) = if self.optional(SyntaxKind::OpenParen)? {
            let value = self.parse_expression()?;
            self.expect(SyntaxKind::CloseParen)?;
            (value, true)
        } else {
            (self.parse_primary()?, false)
        };
        let percent = self.optional_keyword(Keyword::Percent)?;
        Ok(TopClause {
            value,
            parenthesized,
            percent,
            span: self.span_from(start),
        })
    }

    fn parse_select_columns(&mut self) -> Result<Vec<SelectColumn>, ParseError> {
        let mut columns = vec![self.parse_select_column()?];
        while self.optional(SyntaxKind::Comma)? {
            columns.push(self.parse_select_column()?);
        }
        Ok(columns)
    }

    /// Parses one column. A leading name is read once and then either
    /// stands alone, names an `alias = expr` column, or seeds an
    /// expression.
    fn parse_select_column(&mut self) -> Result<SelectColumn, ParseError> {
        let start = self.current.span.start;
        if !self.at_identifier() {
            let expression = self.parse_additive_expression()?;
            return self.finish_column(expression, start);
        }

        let (ident, star) = self.parse_name_path()?;
        if star.is_some() {
            let expression = Expr::Wildcard {
                qualifier: Some(ident),
                span: self.span_from(start),
            };
            return self.finish_column(expression, start);
        }

        if self.check(SyntaxKind::Equal) && ident.parts().len() == 1 {
            self.advance()?;
            let expression = self.parse_additive_expression()?;
            return Ok(SelectColumn::Expression(ColumnExpression {
                expression,
                alias: Some(ident),
                style: AliasStyle::AliasEqualsExpr,
                span: self.span_from(start),
            }));
        }

        if self.continues_operand() {
            let expression = self.parse_level(Precedence::Additive, Some(ident))?;
            return self.finish_column(expression, start);
        }

        if self.check_keyword(Keyword::As) || self.at_bare_alias() {
            return self.finish_column(Expr::Identifier(ident), start);
        }

        Ok(SelectColumn::Reference(ident))
    }

    /// Returns true if the current token extends an operand into a larger
    /// additive expression.
    fn continues_operand(&self) -> bool {
        let kind = self.current.kind;
        kind == SyntaxKind::OpenParen
            || binary_operator_at(kind, Precedence::Additive).is_some()
            || binary_operator_at(kind, Precedence::Multiplicative).is_some()
    }

    fn at_bare_alias(&self) -> bool {
        matches!(
            self.current.kind,
            SyntaxKind::Name | SyntaxKind::QuotedIdentifier
        )
    }

    /// Reads the optional alias after a column expression.
    fn finish_column(&mut self, expression: Expr, start: usize) -> Result<SelectColumn, ParseError> {
        let (alias, style) = if self.optional_keyword(Keyword::As)? {
            (Some(self.parse_simple_identifier()?), AliasStyle::ExprAsAlias)
        } else if self.at_bare_alias() {
            (Some(self.parse_simple_identifier()?), AliasStyle::ExprAlias)
        } else {
            (None, AliasStyle::ExprOnly)
        };
        Ok(SelectColumn::Expression(ColumnExpression {
            expression,
            alias,
            style,
            span: self.span_from(start),
        }))
    }

    /// Parses `FROM source {, source}`.
    pub(super) fn parse_from_clause(&mut self) -> Result<FromClause, ParseError> {
        let start = self.expect_keyword(Keyword::From)?.span.start;
        let mut sources = vec![self.parse_table_source()?];
        while self.optional(SyntaxKind::Comma)? {
            sources.push(self.parse_table_source()?);
        }
        Ok(FromClause {
            sources,
            span: self.span_from(start),
        })
    }

    /// Parses a table source followed by any explicit joins.
    fn parse_table_source(&mut self) -> Result<TableSource, ParseError> {
        let start = self.current.span.start;
        let mut source = self.parse_table_primary()?;

        loop {
            let join_start = self.current.span.start;
            let Some(join_type) = self.parse_join_type()? else {
                break;
            };
            let joined = self.parse_table_primary()?;
            let on = if join_type == JoinType::Cross {
                None
            } else {
                self.expect_keyword(Keyword::On)?;
                Some(self.parse_expression()?)
            };
            source.joins.push(JoinedTable {
                join_type,
                source: joined,
                on,
                span: self.span_from(join_start),
            });
        }

        source.span = self.span_from(start);
        Ok(source)
    }

    /// Parses a join operator, if one is present.
    fn parse_join_type(&mut self) -> Result<Option<JoinType>, ParseError> {
        let join_type = match self.current.kind.as_keyword() {
            Some(Keyword::Join) => {
                self.advance()?;
                return Ok(Some(JoinType::Inner));
            }
            Some(Keyword::Inner) => JoinType::ExplicitInner,
            Some(Keyword::Left) => JoinType::Left,
            Some(Keyword::Right) => JoinType::Right,
            Some(Keyword::Full) => JoinType::Full,
            Some(Keyword::Cross) => JoinType::Cross,
            _ => return Ok(None),
        };
        let token = self.advance()?;
        if matches!(join_type, JoinType::Left | JoinType::Right | JoinType::Full) {
            self.optional_keyword(Keyword::Outer)?;
        }
        if self.check_word("APPLY") {
            return Err(ParseError::unsupported(
                format!("{} APPLY", token.kind),
                token.span.merge(self.current.span),
            ));
        }
        self.expect_keyword(Keyword::Join)?;
        Ok(Some(join_type))
    }

    /// Parses a table, function or derived table with alias and hints.
    fn parse_table_primary(&mut self) -> Result<TableSource, ParseError> {
        let start = self.current.span.start;
        let factor = if self.check(SyntaxKind::OpenParen) {
            let open = self.advance()?;
            if !self.check_keyword(Keyword::Select) {
                return Err(ParseError::unsupported("parenthesized table source", open.span));
            }
            let query = self.parse_select_statement()?;
            self.expect(SyntaxKind::CloseParen)?;
            TableFactor::Derived {
                query: Box::new(query),
                span: self.span_from(start),
            }
        } else if self.at_identifier() {
            let name = self.parse_identifier()?;
            if self.check(SyntaxKind::OpenParen) {
                TableFactor::Function(self.parse_function_call(name)?)
            } else {
                TableFactor::Named(name)
            }
        } else {
            return Err(self.unexpected("table name"));
        };

        let alias = if self.optional_keyword(Keyword::As)? || self.at_bare_alias() {
            Some(self.parse_simple_identifier()?)
        } else {
            None
        };

        let hints = if self.optional_keyword(Keyword::With)? {
            self.parse_table_hints()?
        } else {
            Vec::new()
        };

        Ok(TableSource {
            factor,
            alias,
            hints,
            joins: Vec::new(),
            span: self.span_from(start),
        })
    }

    /// Parses `( hint {, hint} )` after WITH.
    fn parse_table_hints(&mut self) -> Result<Vec<Identifier>, ParseError> {
        self.expect(SyntaxKind::OpenParen)?;
        let mut hints = Vec::new();
        loop {
            let hint = match self.current.kind {
                SyntaxKind::Name => self.parse_simple_identifier()?,
                SyntaxKind::Keyword(Keyword::Holdlock) => {
                    let token = self.advance()?;
                    Identifier::single(Keyword::Holdlock.as_str(), token.span)
                }
                _ => return Err(self.unexpected("table hint")),
            };
            hints.push(hint);
            if !self.optional(SyntaxKind::Comma)? {
                break;
            }
        }
        self.expect(SyntaxKind::CloseParen)?;
        Ok(hints)
    }

    /// Parses `expr [ASC | DESC] {, ...}`.
    pub(super) fn parse_order_by_items(&mut self) -> Result<Vec<OrderByItem>, ParseError> {
        let mut items = Vec::new();
        loop {
            let start = self.current.span.start;
            let expr = self.parse_expression()?;
            let direction = if self.optional_keyword(Keyword::Asc)? {
                Some(OrderDirection::Asc)
            } else if self.optional_keyword(Keyword::Desc)? {
                Some(OrderDirection::Desc)
            } else {
                None
            };
            items.push(OrderByItem {
                expr,
                direction,
                span: self.span_from(start),
            });
            if !self.optional(SyntaxKind::Comma)? {
                return Ok(items);
            }
        }
    }
}
