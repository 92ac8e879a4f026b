//! Statement productions: batches, variables, control flow, DML and EXEC.

use super::error::{ParseError, ParseErrorKind};
use super::parser::Parser;
use super::precedence::Precedence;
use crate::ast::{
    AssignmentOperator, BreakStatement, ContinueStatement, DeclareBody, DeclareStatement,
    DeleteStatement, ExecuteArgument, ExecuteAs, ExecuteFlags, ExecuteProcedureStatement,
    ExecuteStringStatement, Expr, GoStatement, GotoStatement, Identifier, IfStatement,
    InsertSource, InsertStatement, LabelStatement, PrintStatement, ReturnStatement,
    SetOptionStatement, SetOptionValue, SetStatement, Statement, StatementBlock,
    TableDeclaration, TruncateTableStatement, UseDatabaseStatement, VariableDeclaration,
    WhileStatement,
};
use crate::dialect::FeatureSet;
use crate::lexer::Token;
use crate::syntax::{Keyword, SyntaxKind};

impl Parser<'_> {
    /// Parses `GO [count]` and opens a new batch.
    pub(super) fn parse_go(&mut self) -> Result<GoStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Go)?.span.start;
        let count = if self.check(SyntaxKind::NumericLiteral) {
            Some(self.parse_unsigned()?)
        } else {
            None
        };
        self.at_batch_start = true;
        Ok(GoStatement {
            count,
            span: self.span_from(start),
        })
    }

    /// Parses `DECLARE @var [AS] type [= expr] {, ...}` or
    /// `DECLARE @var [AS] TABLE (elements)`.
    pub(super) fn parse_declare(&mut self) -> Result<DeclareStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Declare)?.span.start;
        let name = self.parse_variable()?;
        let has_as = self.optional_keyword(Keyword::As)?;

        if self.optional_keyword(Keyword::Table)? {
            let table_start = name.span.start;
            let elements = self.parse_table_elements()?;
            let table = TableDeclaration {
                name,
                elements,
                span: self.span_from(table_start),
            };
            return Ok(DeclareStatement {
                body: DeclareBody::Table(table),
                span: self.span_from(start),
            });
        }

        let mut variables = vec![self.parse_variable_declaration(name, has_as)?];
        while self.optional(SyntaxKind::Comma)? {
            let name = self.parse_variable()?;
            let has_as = self.optional_keyword(Keyword::As)?;
            variables.push(self.parse_variable_declaration(name, has_as)?);
        }

        Ok(DeclareStatement {
            body: DeclareBody::Variables(variables),
            span: self.span_from(start),
        })
    }

    fn parse_variable_declaration(
        &mut self,
        name: Identifier,
        has_as: bool,
    ) -> Result<VariableDeclaration, ParseError> {
        let start = name.span.start;
        let data_type = self.parse_data_type()?;
        let initializer = if self.check(SyntaxKind::Equal) {
            let token = self.advance()?;
            self.require(FeatureSet::DECLARE_INITIALIZER, token.span)?;
            Some(self.parse_expression()?)
        } else {
            None
        };
        Ok(VariableDeclaration {
            name,
            has_as,
            data_type,
            initializer,
            span: self.span_from(start),
        })
    }

    /// Parses a variable assignment or a session option.
    pub(super) fn parse_set(&mut self) -> Result<Statement, ParseError> {
        let set = self.expect_keyword(Keyword::Set)?;
        let start = set.span.start;

        if self.check(SyntaxKind::LocalVariable) {
            let target = self.parse_variable()?;
            let Some(op) = AssignmentOperator::from_kind(self.current.kind) else {
                return Err(self.unexpected("assignment operator"));
            };
            let token = self.advance()?;
            if op.is_compound() {
                self.require(FeatureSet::COMPOUND_ASSIGNMENT, token.span)?;
            }
            let expression = self.parse_expression()?;
            return Ok(Statement::Set(SetStatement {
                target,
                op,
                expression,
                span: self.span_from(start),
            }));
        }

        if self.check_keyword(Keyword::Transaction) {
            return Err(ParseError::unsupported(
                "SET TRANSACTION",
                set.span.merge(self.current.span),
            ));
        }

        let mut options = vec![self.parse_option_name()?];
        while self.optional(SyntaxKind::Comma)? {
            options.push(self.parse_option_name()?);
        }

        let target = if options
            .iter()
            .any(|option| option == Keyword::IdentityInsert.as_str())
        {
            Some(self.parse_identifier()?)
        } else {
            None
        };

        let value = if self.optional_keyword(Keyword::On)? {
            SetOptionValue::On
        } else if self.optional_keyword(Keyword::Off)? {
            SetOptionValue::Off
        } else {
            SetOptionValue::Value(self.parse_expression()?)
        };

        Ok(Statement::SetOption(SetOptionStatement {
            options,
            target,
            value,
            span: self.span_from(start),
        }))
    }

    /// Reads an upper-cased option name. `STATISTICS` takes a second word.
    fn parse_option_name(&mut self) -> Result<String, ParseError> {
        let token = self.advance_word("option name")?;
        let mut name = token.span.slice(self.scanner.source()).to_ascii_uppercase();
        if token.kind == SyntaxKind::Keyword(Keyword::Statistics) {
            let detail = self.advance_word("statistics option")?;
            name.push(' ');
            name.push_str(&detail.span.slice(self.scanner.source()).to_ascii_uppercase());
        }
        Ok(name)
    }

    /// Consumes a name or keyword token.
    fn advance_word(&mut self, expected: &str) -> Result<Token, ParseError> {
        match self.current.kind {
            SyntaxKind::Name | SyntaxKind::Keyword(_) => self.advance(),
            _ => Err(self.unexpected(expected)),
        }
    }

    /// Parses `USE database`.
    pub(super) fn parse_use(&mut self) -> Result<UseDatabaseStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Use)?.span.start;
        let database = self.parse_identifier()?;
        Ok(UseDatabaseStatement {
            database,
            span: self.span_from(start),
        })
    }

    /// Parses `GOTO label`.
    pub(super) fn parse_goto(&mut self) -> Result<GotoStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Goto)?.span.start;
        let label = self.parse_simple_identifier()?;
        Ok(GotoStatement {
            label,
            span: self.span_from(start),
        })
    }

    /// A leading name is either a label definition or, at the start of a
    /// batch, a procedure call written without EXEC.
    pub(super) fn parse_label_or_call(&mut self, batch_start: bool) -> Result<Statement, ParseError> {
        let start = self.current.span.start;
        let name = self.parse_identifier()?;

        if self.check(SyntaxKind::Colon) {
            if name.parts().len() > 1 {
                return Err(ParseError::new(
                    ParseErrorKind::InvalidIdentifier,
                    format!("Invalid label name '{name}'"),
                    name.span,
                ));
            }
            self.advance()?;
            return Ok(Statement::Label(LabelStatement {
                label: name,
                span: self.span_from(start),
            }));
        }

        if batch_start {
            let call =
                self.parse_execute_tail(start, None, name, ExecuteFlags::NO_EXEC_KEYWORD)?;
            return Ok(Statement::ExecuteProcedure(call));
        }

        Err(ParseError::new(
            ParseErrorKind::UnrecognizedStatement(SyntaxKind::Name),
            format!("Unrecognized statement starting with '{name}'"),
            name.span,
        ))
    }

    /// Parses `WHILE predicate body`.
    pub(super) fn parse_while(&mut self) -> Result<WhileStatement, ParseError> {
        let start = self.expect_keyword(Keyword::While)?.span.start;
        let predicate = self.parse_expression()?;
        let body = Box::new(self.parse_body()?);
        Ok(WhileStatement {
            predicate,
            body,
            span: self.span_from(start),
        })
    }

    /// Parses `IF predicate body [ELSE body]`.
    pub(super) fn parse_if(&mut self) -> Result<IfStatement, ParseError> {
        let start = self.expect_keyword(Keyword::If)?.span.start;
        let predicate = self.parse_expression()?;
        let then_branch = Box::new(self.parse_body()?);
        self.skip_semicolons()?;
        let else_branch = if self.optional_keyword(Keyword::Else)? {
            Some(Box::new(self.parse_body()?))
        } else {
            None
        };
        Ok(IfStatement {
            predicate,
            then_branch,
            else_branch,
            span: self.span_from(start),
        })
    }

    /// Parses the single statement governed by IF, ELSE or WHILE.
    fn parse_body(&mut self) -> Result<Statement, ParseError> {
        if self.check_keyword(Keyword::Go) || self.current.is_eof() {
            return Err(self.unexpected("statement"));
        }
        self.parse_statement_inner()
    }

    /// Parses `BEGIN statements END`.
    pub(super) fn parse_block(&mut self) -> Result<StatementBlock, ParseError> {
        let begin = self.expect_keyword(Keyword::Begin)?;

        let unsupported = match self.current.kind {
            SyntaxKind::Keyword(Keyword::Tran | Keyword::Transaction) => Some("BEGIN TRANSACTION"),
            SyntaxKind::Keyword(Keyword::Distributed) => Some("BEGIN DISTRIBUTED TRANSACTION"),
            _ if self.check_word("TRY") => Some("BEGIN TRY"),
            _ if self.check_word("CATCH") => Some("BEGIN CATCH"),
            _ => None,
        };
        if let Some(construct) = unsupported {
            return Err(ParseError::unsupported(
                construct,
                begin.span.merge(self.current.span),
            ));
        }

        let mut statements = Vec::new();
        loop {
            self.skip_semicolons()?;
            if self.optional_keyword(Keyword::End)? {
                break;
            }
            if self.check_keyword(Keyword::Go) || self.current.is_eof() {
                return Err(self.unexpected("END"));
            }
            statements.push(self.parse_statement_inner()?);
        }

        Ok(StatementBlock {
            statements,
            has_begin_end: true,
            span: self.span_from(begin.span.start),
        })
    }

    /// Parses `INSERT [TOP ...] [INTO] target [(columns)] VALUES ... | SELECT ...`.
    pub(super) fn parse_insert(&mut self) -> Result<InsertStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Insert)?.span.start;
        let top = if self.check_keyword(Keyword::Top) {
            Some(self.parse_top()?)
        } else {
            None
        };
        self.optional_keyword(Keyword::Into)?;
        let target = self.parse_identifier()?;
        let columns = if self.check(SyntaxKind::OpenParen) {
            self.parse_paren_identifier_list()?
        } else {
            Vec::new()
        };

        let source = match self.current.kind {
            SyntaxKind::Keyword(Keyword::Values) => {
                self.advance()?;
                let mut rows = Vec::new();
                loop {
                    self.expect(SyntaxKind::OpenParen)?;
                    rows.push(self.parse_expression_list()?);
                    self.expect(SyntaxKind::CloseParen)?;
                    if !self.optional(SyntaxKind::Comma)? {
                        break;
                    }
                }
                InsertSource::Values(rows)
            }
            SyntaxKind::Keyword(Keyword::Select) => {
                InsertSource::Select(Box::new(self.parse_select_statement()?))
            }
            SyntaxKind::Keyword(Keyword::Exec | Keyword::Execute) => {
                return Err(ParseError::unsupported("INSERT ... EXEC", self.current.span));
            }
            SyntaxKind::Keyword(Keyword::Default) => {
                return Err(ParseError::unsupported("DEFAULT VALUES", self.current.span));
            }
            _ => return Err(self.unexpected("VALUES or SELECT")),
        };

        Ok(InsertStatement {
            top,
            target,
            columns,
            source,
            span: self.span_from(start),
        })
    }

    /// Parses `DELETE [TOP ...] [FROM] target [FROM sources] [WHERE ...]`.
    pub(super) fn parse_delete(&mut self) -> Result<DeleteStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Delete)?.span.start;
        let top = if self.check_keyword(Keyword::Top) {
            Some(self.parse_top()?)
        } else {
            None
        };
        self.optional_keyword(Keyword::From)?;
        let target = self.parse_identifier()?;
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
        Ok(DeleteStatement {
            top,
            target,
            from,
            where_clause,
            span: self.span_from(start),
        })
    }

    /// Parses `TRUNCATE TABLE name`.
    pub(super) fn parse_truncate(&mut self) -> Result<TruncateTableStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Truncate)?.span.start;
        self.expect_keyword(Keyword::Table)?;
        let table = self.parse_identifier()?;
        Ok(TruncateTableStatement {
            table,
            span: self.span_from(start),
        })
    }

    /// Parses a procedure call or a dynamic SQL execution.
    pub(super) fn parse_execute(&mut self) -> Result<Statement, ParseError> {
        let start = self.advance()?.span.start;

        if self.optional(SyntaxKind::OpenParen)? {
            let query = self.parse_expression()?;
            self.expect(SyntaxKind::CloseParen)?;
            let context = if self.optional_keyword(Keyword::As)? {
                let kind = if self.optional_keyword(Keyword::User)? {
                    ExecuteAs::User
                } else if self.optional_word("LOGIN")? {
                    ExecuteAs::Login
                } else {
                    return Err(self.unexpected("USER or LOGIN"));
                };
                self.expect(SyntaxKind::Equal)?;
                Some((kind, self.parse_expression()?))
            } else {
                None
            };
            let linked_server = if self.optional_word("AT")? {
                Some(self.parse_simple_identifier()?)
            } else {
                None
            };
            return Ok(Statement::ExecuteString(ExecuteStringStatement {
                query,
                context,
                linked_server,
                span: self.span_from(start),
            }));
        }

        let mut flags = ExecuteFlags::NONE;
        let mut return_variable = None;
        let procedure = if self.check(SyntaxKind::LocalVariable) {
            let variable = self.parse_variable()?;
            if self.optional(SyntaxKind::Equal)? {
                return_variable = Some(variable);
                flags = flags.union(ExecuteFlags::HAS_RETURN_VARIABLE);
                self.parse_identifier()?
            } else {
                variable
            }
        } else {
            self.parse_identifier()?
        };

        let call = self.parse_execute_tail(start, return_variable, procedure, flags)?;
        Ok(Statement::ExecuteProcedure(call))
    }

    /// Parses the arguments and options following a procedure name.
    fn parse_execute_tail(
        &mut self,
        start: usize,
        return_variable: Option<Identifier>,
        procedure: Identifier,
        mut flags: ExecuteFlags,
    ) -> Result<ExecuteProcedureStatement, ParseError> {
        let mut arguments = Vec::new();
        if self.at_argument_start() {
            loop {
                arguments.push(self.parse_execute_argument()?);
                if !self.optional(SyntaxKind::Comma)? {
                    break;
                }
            }
            flags = flags.union(ExecuteFlags::HAS_ARGS);
        }

        let options = if self.optional_keyword(Keyword::With)? {
            flags = flags.union(ExecuteFlags::HAS_OPTIONS);
            self.parse_with_options()?
        } else {
            Vec::new()
        };

        Ok(ExecuteProcedureStatement {
            return_variable,
            procedure,
            arguments,
            options,
            flags,
            span: self.span_from(start),
        })
    }

    fn at_argument_start(&self) -> bool {
        let kind = self.current.kind;
        kind.is_identifier_like()
            || kind.is_literal()
            || matches!(
                kind,
                SyntaxKind::Keyword(Keyword::Default) | SyntaxKind::Plus | SyntaxKind::Minus
            )
    }

    /// Parses `[@param =] value | DEFAULT [OUTPUT | OUT]`.
    fn parse_execute_argument(&mut self) -> Result<ExecuteArgument, ParseError> {
        let start = self.current.span.start;
        let mut name = None;
        let value = if self.check(SyntaxKind::LocalVariable) {
            let variable = self.parse_variable()?;
            if self.optional(SyntaxKind::Equal)? {
                name = Some(variable);
                self.parse_argument_value()?
            } else {
                Some(self.parse_level(Precedence::Additive, Some(variable))?)
            }
        } else {
            self.parse_argument_value()?
        };
        let output = self.optional_word("OUTPUT")? || self.optional_word("OUT")?;
        Ok(ExecuteArgument {
            name,
            value,
            output,
            span: self.span_from(start),
        })
    }

    /// Returns `None` for DEFAULT.
    fn parse_argument_value(&mut self) -> Result<Option<Expr>, ParseError> {
        if self.optional_keyword(Keyword::Default)? {
            return Ok(None);
        }
        self.parse_additive_expression().map(Some)
    }

    /// Parses `PRINT expr`.
    pub(super) fn parse_print(&mut self) -> Result<PrintStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Print)?.span.start;
        let expression = self.parse_expression()?;
        Ok(PrintStatement {
            expression,
            span: self.span_from(start),
        })
    }

    /// Parses `RETURN [expr]`.
    pub(super) fn parse_return(&mut self) -> Result<ReturnStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Return)?.span.start;
        let value = if self.at_expression_start() {
            Some(self.parse_expression()?)
        } else {
            None
        };
        Ok(ReturnStatement {
            value,
            span: self.span_from(start),
        })
    }

    pub(super) fn parse_break(&mut self) -> Result<BreakStatement, ParseError> {
        let token = self.expect_keyword(Keyword::Break)?;
        Ok(BreakStatement { span: token.span })
    }

    pub(super) fn parse_continue(&mut self) -> Result<ContinueStatement, ParseError> {
        let token = self.expect_keyword(Keyword::Continue)?;
        Ok(ContinueStatement { span: token.span })
    }
}
