//! Expression grammar.
//!
//! Each precedence tier parses its operands at the next tighter tier, so
//! every binary level is left-associative and no level calls upward.
//! An identifier that was already consumed by the caller (a column or
//! argument that turned out to start an expression) can be passed down
//! as a seed and becomes the leftmost operand.

use super::error::{ParseError, ParseErrorKind};
use super::parser::Parser;
use super::precedence::{binary_operator_at, token_to_unary_op, Precedence};
use crate::ast::{
    CaseExpression, CastExpression, CastKind, Expr, FunctionCall, Identifier, InList, Literal,
    OverClause, SyntaxNode, UnaryOperator, WhenClause,
};
use crate::dialect::FeatureSet;
use crate::lexer::TokenFlags;
use crate::syntax::{Keyword, SyntaxKind};

impl Parser<'_> {
    /// Parses a full expression.
    pub(super) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_level(Precedence::Or, None)
    }

    /// Parses an expression without comparisons or logical operators.
    pub(super) fn parse_additive_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_level(Precedence::Additive, None)
    }

    /// Parses a literal, variable or other primary expression with no
    /// operators after it.
    pub(super) fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        self.parse_base(None)
    }

    /// Parses `expr {, expr}`.
    pub(super) fn parse_expression_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut exprs = vec![self.parse_expression()?];
        while self.optional(SyntaxKind::Comma)? {
            exprs.push(self.parse_expression()?);
        }
        Ok(exprs)
    }

    /// Parses an expression at `level` whose leftmost operand may be an
    /// identifier consumed by the caller.
    pub(super) fn parse_level(
        &mut self,
        level: Precedence,
        seed: Option<Identifier>,
    ) -> Result<Expr, ParseError> {
        match level {
            Precedence::Not => self.parse_not(seed),
            Precedence::Sign => self.parse_sign(seed),
            _ => self.parse_infix(level, seed),
        }
    }

    fn parse_tighter(
        &mut self,
        level: Precedence,
        seed: Option<Identifier>,
    ) -> Result<Expr, ParseError> {
        match level.next() {
            Some(next) => self.parse_level(next, seed),
            None => self.parse_base(seed),
        }
    }

    fn parse_infix(
        &mut self,
        level: Precedence,
        seed: Option<Identifier>,
    ) -> Result<Expr, ParseError> {
        let mut left = self.parse_tighter(level, seed)?;
        loop {
            if let Some(op) = binary_operator_at(self.current.kind, level) {
                self.advance()?;
                let right = self.parse_tighter(level, None)?;
                let span = left.span().merge(right.span());
                left = Expr::Binary {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                    span,
                };
            } else if level == Precedence::Comparison && self.at_predicate() {
                left = self.parse_predicate(left)?;
            } else {
                return Ok(left);
            }
        }
    }

    fn parse_not(&mut self, seed: Option<Identifier>) -> Result<Expr, ParseError> {
        if seed.is_none() && self.check_keyword(Keyword::Not) {
            let start = self.advance()?.span.start;
            let operand = self.nested(|parser| parser.parse_not(None))?;
            return Ok(Expr::Unary {
                op: UnaryOperator::Not,
                operand: Box::new(operand),
                span: self.span_from(start),
            });
        }
        self.parse_tighter(Precedence::Not, seed)
    }

    /// A leading sign applies to the whole multiplicative term after it.
    fn parse_sign(&mut self, seed: Option<Identifier>) -> Result<Expr, ParseError> {
        let op = match self.current.kind {
            SyntaxKind::Plus if seed.is_none() => UnaryOperator::Plus,
            SyntaxKind::Minus if seed.is_none() => UnaryOperator::Minus,
            _ => return self.parse_tighter(Precedence::Sign, seed),
        };
        let start = self.advance()?.span.start;
        let operand = self.parse_tighter(Precedence::Sign, None)?;
        Ok(Expr::Unary {
            op,
            operand: Box::new(operand),
            span: self.span_from(start),
        })
    }

    fn at_predicate(&self) -> bool {
        matches!(
            self.current.kind.as_keyword(),
            Some(Keyword::Is | Keyword::Not | Keyword::Between | Keyword::In | Keyword::Like)
        )
    }

    /// Parses `IS [NOT] NULL`, `[NOT] BETWEEN`, `[NOT] IN` or `[NOT] LIKE`
    /// applied to `left`.
    fn parse_predicate(&mut self, left: Expr) -> Result<Expr, ParseError> {
        let start = left.span().start;
        let expr = Box::new(left);

        if self.optional_keyword(Keyword::Is)? {
            let negated = self.optional_keyword(Keyword::Not)?;
            self.expect_keyword(Keyword::Null)?;
            return Ok(Expr::IsNull {
                expr,
                negated,
                span: self.span_from(start),
            });
        }

        let negated = self.optional_keyword(Keyword::Not)?;
        match self.current.kind {
            SyntaxKind::Keyword(Keyword::Between) => {
                self.advance()?;
                let low = self.parse_additive_expression()?;
                self.expect_keyword(Keyword::And)?;
                let high = self.parse_additive_expression()?;
                Ok(Expr::Between {
                    expr,
                    low: Box::new(low),
                    high: Box::new(high),
                    negated,
                    span: self.span_from(start),
                })
            }
            SyntaxKind::Keyword(Keyword::In) => {
                self.advance()?;
                self.expect(SyntaxKind::OpenParen)?;
                let list = if self.check_keyword(Keyword::Select) {
                    InList::Subquery(Box::new(self.parse_select_statement()?))
                } else {
                    InList::Values(self.parse_expression_list()?)
                };
                self.expect(SyntaxKind::CloseParen)?;
                Ok(Expr::In {
                    expr,
                    list,
                    negated,
                    span: self.span_from(start),
                })
            }
            SyntaxKind::Keyword(Keyword::Like) => {
                self.advance()?;
                let pattern = self.parse_additive_expression()?;
                let escape = if self.optional_keyword(Keyword::Escape)? {
                    Some(Box::new(self.parse_additive_expression()?))
                } else {
                    None
                };
                Ok(Expr::Like {
                    expr,
                    pattern: Box::new(pattern),
                    escape,
                    negated,
                    span: self.span_from(start),
                })
            }
            _ => Err(self.unexpected("BETWEEN, IN or LIKE")),
        }
    }

    /// Parses a primary expression.
    fn parse_base(&mut self, seed: Option<Identifier>) -> Result<Expr, ParseError> {
        self.nested(|parser| parser.parse_operand(seed))
    }

    fn parse_operand(&mut self, seed: Option<Identifier>) -> Result<Expr, ParseError> {
        if let Some(ident) = seed {
            return self.parse_identifier_expr(ident);
        }

        let start = self.current.span.start;
        match self.current.kind {
            SyntaxKind::NumericLiteral => {
                let token = self.advance()?;
                let value = token.number().ok_or_else(|| {
                    ParseError::new(
                        ParseErrorKind::InvalidLiteral,
                        "Invalid numeric literal",
                        token.span,
                    )
                })?;
                Ok(Expr::Literal {
                    value: Literal::Number(value),
                    span: token.span,
                })
            }
            SyntaxKind::StringLiteral => {
                let token = self.advance()?;
                let national = token.flags.contains(TokenFlags::NATIONAL);
                let value = String::from(token.text().unwrap_or_default());
                Ok(Expr::Literal {
                    value: Literal::String { value, national },
                    span: token.span,
                })
            }
            SyntaxKind::Keyword(Keyword::Null) => {
                let token = self.advance()?;
                Ok(Expr::Literal {
                    value: Literal::Null,
                    span: token.span,
                })
            }
            SyntaxKind::Tilde | SyntaxKind::Plus | SyntaxKind::Minus => {
                let token = self.advance()?;
                let op = token_to_unary_op(token.kind).unwrap_or(UnaryOperator::Minus);
                let operand = self.parse_base(None)?;
                Ok(Expr::Unary {
                    op,
                    operand: Box::new(operand),
                    span: self.span_from(start),
                })
            }
            SyntaxKind::OpenParen => self.parse_paren(),
            SyntaxKind::Star => {
                let token = self.advance()?;
                Ok(Expr::Wildcard {
                    qualifier: None,
                    span: token.span,
                })
            }
            kind if kind.is_identifier_like() => {
                let (ident, star) = self.parse_name_path()?;
                match star {
                    Some(_) => Ok(Expr::Wildcard {
                        qualifier: Some(ident),
                        span: self.span_from(start),
                    }),
                    None => self.parse_identifier_expr(ident),
                }
            }
            SyntaxKind::Keyword(Keyword::Case) => self.parse_case().map(Expr::Case),
            SyntaxKind::Keyword(Keyword::Cast) => self.parse_cast().map(Expr::Cast),
            SyntaxKind::Keyword(Keyword::Convert | Keyword::TryConvert) => {
                self.parse_convert().map(Expr::Cast)
            }
            SyntaxKind::Keyword(Keyword::Exists) => {
                self.advance()?;
                self.expect(SyntaxKind::OpenParen)?;
                if !self.check_keyword(Keyword::Select) {
                    return Err(self.unexpected("SELECT"));
                }
                let query = self.parse_select_statement()?;
                self.expect(SyntaxKind::CloseParen)?;
                Ok(Expr::Exists {
                    query: Box::new(query),
                    span: self.span_from(start),
                })
            }
            SyntaxKind::Keyword(keyword) if keyword.is_niladic_function() => {
                let token = self.advance()?;
                Ok(Expr::Function(FunctionCall {
                    name: Identifier::single(keyword.as_str(), token.span),
                    args: Vec::new(),
                    distinct: false,
                    niladic: true,
                    over: None,
                    span: token.span,
                }))
            }
            SyntaxKind::Keyword(keyword) if keyword.is_function_name() => {
                let token = self.advance()?;
                let name = Identifier::single(keyword.as_str(), token.span);
                if !self.check(SyntaxKind::OpenParen) {
                    return Err(self.unexpected("'('"));
                }
                self.parse_function_call(name).map(Expr::Function)
            }
            SyntaxKind::Eof => Err(self.unexpected("expression")),
            kind => Err(ParseError::unsupported(
                format!("expression starting with {kind}"),
                self.current.span,
            )),
        }
    }

    /// Finishes an identifier that may turn out to be a function name.
    fn parse_identifier_expr(&mut self, ident: Identifier) -> Result<Expr, ParseError> {
        if self.check(SyntaxKind::OpenParen) {
            self.parse_function_call(ident).map(Expr::Function)
        } else {
            Ok(Expr::Identifier(ident))
        }
    }

    /// Parses `( [DISTINCT] args ) [OVER (...)]` after a function name.
    pub(super) fn parse_function_call(
        &mut self,
        name: Identifier,
    ) -> Result<FunctionCall, ParseError> {
        let start = name.span.start;
        self.expect(SyntaxKind::OpenParen)?;

        let mut distinct = false;
        let mut args = Vec::new();
        if !self.check(SyntaxKind::CloseParen) {
            if self.optional_keyword(Keyword::Distinct)? {
                distinct = true;
            } else {
                self.optional_keyword(Keyword::All)?;
            }
            loop {
                args.push(self.parse_additive_expression()?);
                if !self.optional(SyntaxKind::Comma)? {
                    break;
                }
            }
        }
        self.expect(SyntaxKind::CloseParen)?;

        let over = if self.check_keyword(Keyword::Over) {
            Some(self.parse_over()?)
        } else {
            None
        };

        Ok(FunctionCall {
            name,
            args,
            distinct,
            niladic: false,
            over,
            span: self.span_from(start),
        })
    }

    fn parse_over(&mut self) -> Result<OverClause, ParseError> {
        let start = self.expect_keyword(Keyword::Over)?.span.start;
        self.expect(SyntaxKind::OpenParen)?;
        let partition_by = if self.optional_keyword(Keyword::Partition)? {
            self.expect_keyword(Keyword::By)?;
            self.parse_expression_list()?
        } else {
            Vec::new()
        };
        let order_by = if self.optional_keyword(Keyword::Order)? {
            self.expect_keyword(Keyword::By)?;
            self.parse_order_by_items()?
        } else {
            Vec::new()
        };
        self.expect(SyntaxKind::CloseParen)?;
        Ok(OverClause {
            partition_by,
            order_by,
            span: self.span_from(start),
        })
    }

    /// Parses `( expr )` or `( SELECT ... )`.
    fn parse_paren(&mut self) -> Result<Expr, ParseError> {
        let start = self.expect(SyntaxKind::OpenParen)?.span.start;
        if self.check_keyword(Keyword::Select) {
            let query = self.parse_select_statement()?;
            self.expect(SyntaxKind::CloseParen)?;
            return Ok(Expr::Subquery {
                query: Box::new(query),
                span: self.span_from(start),
            });
        }
        let expr = self.parse_expression()?;
        self.expect(SyntaxKind::CloseParen)?;
        Ok(Expr::Paren {
            expr: Box::new(expr),
            span: self.span_from(start),
        })
    }

    fn parse_case(&mut self) -> Result<CaseExpression, ParseError> {
        let start = self.expect_keyword(Keyword::Case)?.span.start;
        let operand = if self.check_keyword(Keyword::When) {
            None
        } else {
            Some(Box::new(self.parse_expression()?))
        };

        let mut when_clauses = Vec::new();
        loop {
            let when_start = self.expect_keyword(Keyword::When)?.span.start;
            let condition = self.parse_expression()?;
            self.expect_keyword(Keyword::Then)?;
            let result = self.parse_expression()?;
            when_clauses.push(WhenClause {
                condition,
                result,
                span: self.span_from(when_start),
            });
            if !self.check_keyword(Keyword::When) {
                break;
            }
        }

        let else_result = if self.optional_keyword(Keyword::Else)? {
            Some(Box::new(self.parse_expression()?))
        } else {
            None
        };
        self.expect_keyword(Keyword::End)?;

        Ok(CaseExpression {
            operand,
            when_clauses,
            else_result,
            span: self.span_from(start),
        })
    }

    /// Parses `CAST(expr AS type)`.
    fn parse_cast(&mut self) -> Result<CastExpression, ParseError> {
        let start = self.expect_keyword(Keyword::Cast)?.span.start;
        self.expect(SyntaxKind::OpenParen)?;
        let expr = self.parse_expression()?;
        self.expect_keyword(Keyword::As)?;
        let data_type = self.parse_data_type()?;
        self.expect(SyntaxKind::CloseParen)?;
        Ok(CastExpression {
            kind: CastKind::Cast,
            expr: Box::new(expr),
            data_type,
            style: None,
            span: self.span_from(start),
        })
    }

    /// Parses `CONVERT(type, expr [, style])` or its `TRY_CONVERT` form.
    fn parse_convert(&mut self) -> Result<CastExpression, ParseError> {
        let token = self.advance()?;
        let kind = if token.kind == SyntaxKind::Keyword(Keyword::TryConvert) {
            self.require(FeatureSet::TRY_CONVERT, token.span)?;
            CastKind::TryConvert
        } else {
            CastKind::Convert
        };
        self.expect(SyntaxKind::OpenParen)?;
        let data_type = self.parse_data_type()?;
        self.expect(SyntaxKind::Comma)?;
        let expr = self.parse_expression()?;
        let style = if self.optional(SyntaxKind::Comma)? {
            Some(Box::new(self.parse_expression()?))
        } else {
            None
        };
        self.expect(SyntaxKind::CloseParen)?;
        Ok(CastExpression {
            kind,
            expr: Box::new(expr),
            data_type,
            style,
            span: self.span_from(token.span.start),
        })
    }

    /// Returns true if the current token can begin an expression.
    pub(super) const fn at_expression_start(&self) -> bool {
        match self.current.kind {
            SyntaxKind::NumericLiteral
            | SyntaxKind::StringLiteral
            | SyntaxKind::OpenParen
            | SyntaxKind::Plus
            | SyntaxKind::Minus
            | SyntaxKind::Tilde
            | SyntaxKind::Keyword(
                Keyword::Null
                | Keyword::Not
                | Keyword::Case
                | Keyword::Cast
                | Keyword::Convert
                | Keyword::TryConvert
                | Keyword::Exists,
            ) => true,
            SyntaxKind::Keyword(keyword) => keyword.is_function_name(),
            kind => kind.is_identifier_like(),
        }
    }
}
