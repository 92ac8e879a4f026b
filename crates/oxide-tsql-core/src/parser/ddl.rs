//! Data types, table bodies and the CREATE / ALTER family.

use super::error::ParseError;
use super::parser::Parser;
use crate::ast::{
    AlterTableAction, AlterTableStatement, ColumnDefinition, ComputedColumnDefinition,
    ConstraintDefinition, ConstraintKind, CreateTableStatement, DataType, DropObjectType,
    DropStatement, Expr,
    ForeignKeyReference, Identifier, IdentitySpec, IndexColumn, IndexDefinition, ObjectAction,
    OrderDirection, ProcedureParameter, ProcedureStatement, ReferentialAction, Statement,
    StatementBlock, TableElement, TypeArgs, ViewStatement,
};
use crate::dialect::FeatureSet;
use crate::syntax::{Keyword, SyntaxKind};

impl Parser<'_> {
    /// Parses a type name with optional `(max)`, `(n)` or `(n, m)`.
    pub(super) fn parse_data_type(&mut self) -> Result<DataType, ParseError> {
        let start = self.current.span.start;
        let name = match self.current.kind {
            SyntaxKind::Keyword(Keyword::Cursor) => {
                let token = self.advance()?;
                Identifier::single(Keyword::Cursor.as_str(), token.span)
            }
            SyntaxKind::Name | SyntaxKind::QuotedIdentifier => self.parse_identifier()?,
            _ => return Err(self.unexpected("data type")),
        };

        let args = if self.optional(SyntaxKind::OpenParen)? {
            let args = if self.optional_word("MAX")? {
                TypeArgs::Max
            } else {
                let first = self.parse_unsigned()?;
                if self.optional(SyntaxKind::Comma)? {
                    TypeArgs::Two(first, self.parse_unsigned()?)
                } else {
                    TypeArgs::One(first)
                }
            };
            self.expect(SyntaxKind::CloseParen)?;
            args
        } else {
            TypeArgs::None
        };

        Ok(DataType {
            name,
            args,
            nullable: None,
            span: self.span_from(start),
        })
    }

    /// Parses `( element {, element} )`.
    pub(super) fn parse_table_elements(&mut self) -> Result<Vec<TableElement>, ParseError> {
        self.expect(SyntaxKind::OpenParen)?;
        let mut elements = vec![self.parse_table_element()?];
        while self.optional(SyntaxKind::Comma)? {
            // SQL Server accepts a trailing comma here.
            if self.check(SyntaxKind::CloseParen) {
                break;
            }
            elements.push(self.parse_table_element()?);
        }
        self.expect(SyntaxKind::CloseParen)?;
        Ok(elements)
    }

    fn parse_table_element(&mut self) -> Result<TableElement, ParseError> {
        match self.current.kind.as_keyword() {
            Some(
                Keyword::Constraint
                | Keyword::Primary
                | Keyword::Unique
                | Keyword::Check
                | Keyword::Foreign,
            ) => Ok(TableElement::Constraint(self.parse_table_constraint()?)),
            Some(Keyword::Index) => Ok(TableElement::Index(self.parse_index_definition()?)),
            _ => self.parse_column_element(),
        }
    }

    /// Parses a column or computed column.
    fn parse_column_element(&mut self) -> Result<TableElement, ParseError> {
        let start = self.current.span.start;
        let name = self.parse_simple_identifier()?;

        if self.optional_keyword(Keyword::As)? {
            let expression = self.parse_expression()?;
            let persisted = self.optional_word("PERSISTED")?;
            return Ok(TableElement::Computed(ComputedColumnDefinition {
                name,
                expression,
                persisted,
                span: self.span_from(start),
            }));
        }

        let data_type = self.parse_data_type()?;
        let span = name.span;
        let column = self.parse_column_options(ColumnDefinition::new(name, data_type, span))?;
        Ok(TableElement::Column(column))
    }

    /// Applies inline column options until none follows.
    fn parse_column_options(
        &mut self,
        mut column: ColumnDefinition,
    ) -> Result<ColumnDefinition, ParseError> {
        let start = column.name.span.start;
        while let Some(keyword) = self.current.kind.as_keyword() {
            match keyword {
                Keyword::Null => {
                    self.advance()?;
                    column.data_type.nullable = Some(true);
                }
                Keyword::Not => {
                    self.advance()?;
                    self.expect_keyword(Keyword::Null)?;
                    column.data_type.nullable = Some(false);
                }
                Keyword::Identity => {
                    self.advance()?;
                    column.identity = Some(self.parse_identity_spec()?);
                }
                Keyword::Default => {
                    self.advance()?;
                    column.default = Some(self.parse_additive_expression()?);
                }
                Keyword::Constraint => {
                    // Inline constraint names are not kept.
                    self.advance()?;
                    self.parse_simple_identifier()?;
                }
                Keyword::Primary => {
                    self.advance()?;
                    self.expect_keyword(Keyword::Key)?;
                    self.parse_clustered()?;
                    column.primary_key = true;
                }
                Keyword::Unique => {
                    self.advance()?;
                    self.parse_clustered()?;
                    column.unique = true;
                }
                Keyword::Check => {
                    self.advance()?;
                    column.check = Some(self.parse_condition()?);
                }
                Keyword::Foreign => {
                    self.advance()?;
                    self.expect_keyword(Keyword::Key)?;
                    column.references = Some(self.parse_references()?);
                }
                Keyword::References => {
                    column.references = Some(self.parse_references()?);
                }
                Keyword::Collate => {
                    self.advance()?;
                    column.collation = Some(self.parse_simple_identifier()?);
                }
                Keyword::Rowguidcol => {
                    self.advance()?;
                }
                _ => break,
            }
        }
        column.span = self.span_from(start);
        Ok(column)
    }

    /// Parses `[(seed, increment)]` after IDENTITY.
    fn parse_identity_spec(&mut self) -> Result<IdentitySpec, ParseError> {
        if !self.optional(SyntaxKind::OpenParen)? {
            return Ok(IdentitySpec::default());
        }
        let seed = self.parse_signed()?;
        self.expect(SyntaxKind::Comma)?;
        let increment = self.parse_signed()?;
        self.expect(SyntaxKind::CloseParen)?;
        Ok(IdentitySpec { seed, increment })
    }

    /// Parses `( condition )`.
    fn parse_condition(&mut self) -> Result<Expr, ParseError> {
        self.expect(SyntaxKind::OpenParen)?;
        let condition = self.parse_expression()?;
        self.expect(SyntaxKind::CloseParen)?;
        Ok(condition)
    }

    fn parse_clustered(&mut self) -> Result<Option<bool>, ParseError> {
        if self.optional_keyword(Keyword::Clustered)? {
            Ok(Some(true))
        } else if self.optional_keyword(Keyword::Nonclustered)? {
            Ok(Some(false))
        } else {
            Ok(None)
        }
    }

    /// Parses `( column [ASC | DESC] {, ...} )`.
    fn parse_index_columns(&mut self) -> Result<Vec<IndexColumn>, ParseError> {
        self.expect(SyntaxKind::OpenParen)?;
        let mut columns = Vec::new();
        loop {
            let name = self.parse_simple_identifier()?;
            let direction = if self.optional_keyword(Keyword::Asc)? {
                Some(OrderDirection::Asc)
            } else if self.optional_keyword(Keyword::Desc)? {
                Some(OrderDirection::Desc)
            } else {
                None
            };
            columns.push(IndexColumn { name, direction });
            if !self.optional(SyntaxKind::Comma)? {
                break;
            }
        }
        self.expect(SyntaxKind::CloseParen)?;
        Ok(columns)
    }

    fn parse_table_constraint(&mut self) -> Result<ConstraintDefinition, ParseError> {
        let start = self.current.span.start;
        let name = if self.optional_keyword(Keyword::Constraint)? {
            Some(self.parse_simple_identifier()?)
        } else {
            None
        };

        let kind = match self.current.kind.as_keyword() {
            Some(Keyword::Primary) => {
                self.advance()?;
                self.expect_keyword(Keyword::Key)?;
                let clustered = self.parse_clustered()?;
                let columns = self.parse_index_columns()?;
                ConstraintKind::PrimaryKey { clustered, columns }
            }
            Some(Keyword::Unique) => {
                self.advance()?;
                let clustered = self.parse_clustered()?;
                let columns = self.parse_index_columns()?;
                ConstraintKind::Unique { clustered, columns }
            }
            Some(Keyword::Check) => {
                self.advance()?;
                ConstraintKind::Check(self.parse_condition()?)
            }
            Some(Keyword::Foreign) => {
                self.advance()?;
                self.expect_keyword(Keyword::Key)?;
                let columns = self.parse_paren_identifier_list()?;
                let references = self.parse_references()?;
                ConstraintKind::ForeignKey {
                    columns,
                    references,
                }
            }
            _ => return Err(self.unexpected("PRIMARY KEY, UNIQUE, CHECK or FOREIGN KEY")),
        };

        Ok(ConstraintDefinition {
            name,
            kind,
            span: self.span_from(start),
        })
    }

    /// Parses `REFERENCES table [(columns)] {ON DELETE | ON UPDATE action}`.
    fn parse_references(&mut self) -> Result<ForeignKeyReference, ParseError> {
        self.expect_keyword(Keyword::References)?;
        let table = self.parse_identifier()?;
        let columns = if self.check(SyntaxKind::OpenParen) {
            self.parse_paren_identifier_list()?
        } else {
            Vec::new()
        };

        let mut on_delete = None;
        let mut on_update = None;
        while self.optional_keyword(Keyword::On)? {
            if self.optional_keyword(Keyword::Delete)? {
                on_delete = Some(self.parse_referential_action()?);
            } else if self.optional_keyword(Keyword::Update)? {
                on_update = Some(self.parse_referential_action()?);
            } else {
                return Err(self.unexpected("DELETE or UPDATE"));
            }
        }

        Ok(ForeignKeyReference {
            table,
            columns,
            on_delete,
            on_update,
        })
    }

    fn parse_referential_action(&mut self) -> Result<ReferentialAction, ParseError> {
        if self.optional_word("NO")? {
            self.expect_word("ACTION")?;
            return Ok(ReferentialAction::NoAction);
        }
        if self.optional_keyword(Keyword::Cascade)? {
            return Ok(ReferentialAction::Cascade);
        }
        if self.optional_keyword(Keyword::Set)? {
            if self.optional_keyword(Keyword::Null)? {
                return Ok(ReferentialAction::SetNull);
            }
            if self.optional_keyword(Keyword::Default)? {
                return Ok(ReferentialAction::SetDefault);
            }
            return Err(self.unexpected("NULL or DEFAULT"));
        }
        Err(self.unexpected("NO ACTION, CASCADE, SET NULL or SET DEFAULT"))
    }

    fn parse_index_definition(&mut self) -> Result<IndexDefinition, ParseError> {
        let start = self.expect_keyword(Keyword::Index)?.span.start;
        let name = self.parse_simple_identifier()?;
        let unique = self.optional_keyword(Keyword::Unique)?;
        let clustered = self.parse_clustered()?;
        let columns = self.parse_index_columns()?;
        Ok(IndexDefinition {
            name,
            unique,
            clustered,
            columns,
            span: self.span_from(start),
        })
    }

    /// Parses the names after WITH, as in `WITH RECOMPILE, ENCRYPTION`.
    pub(super) fn parse_with_options(&mut self) -> Result<Vec<Identifier>, ParseError> {
        let mut options = Vec::new();
        loop {
            if matches!(
                self.current.kind,
                SyntaxKind::Keyword(Keyword::Exec | Keyword::Execute)
            ) {
                return Err(ParseError::unsupported("WITH EXECUTE AS", self.current.span));
            }
            if self.check_word("RESULT") {
                return Err(ParseError::unsupported("WITH RESULT SETS", self.current.span));
            }
            if !self.check(SyntaxKind::Name) {
                return Err(self.unexpected("option"));
            }
            options.push(self.parse_simple_identifier()?);
            if !self.optional(SyntaxKind::Comma)? {
                return Ok(options);
            }
        }
    }

    /// Dispatches `CREATE`, `ALTER` and `CREATE OR ALTER`.
    pub(super) fn parse_create_or_alter(&mut self) -> Result<Statement, ParseError> {
        let token = self.advance()?;
        let start = token.span.start;
        let action = if token.kind == SyntaxKind::Keyword(Keyword::Alter) {
            ObjectAction::Alter
        } else if self.check_keyword(Keyword::Or) {
            let or_start = self.advance()?.span.start;
            self.expect_keyword(Keyword::Alter)?;
            self.require(FeatureSet::CREATE_OR_ALTER, self.span_from(or_start))?;
            ObjectAction::CreateOrAlter
        } else {
            ObjectAction::Create
        };

        match self.current.kind {
            SyntaxKind::Keyword(Keyword::Table) => match action {
                ObjectAction::Create => Ok(Statement::CreateTable(self.parse_create_table(start)?)),
                ObjectAction::Alter => Ok(Statement::AlterTable(self.parse_alter_table(start)?)),
                ObjectAction::CreateOrAlter => Err(ParseError::unsupported(
                    "CREATE OR ALTER TABLE",
                    self.current.span,
                )),
            },
            SyntaxKind::Keyword(Keyword::Proc | Keyword::Procedure) => Ok(Statement::Procedure(
                self.parse_procedure(start, action)?,
            )),
            SyntaxKind::Keyword(Keyword::View) => {
                Ok(Statement::View(self.parse_view(start, action)?))
            }
            SyntaxKind::Keyword(keyword) => Err(ParseError::unsupported(
                format!("{} {}", action.as_str(), keyword.as_str()),
                self.span_from(start).merge(self.current.span),
            )),
            _ => Err(self.unexpected("TABLE, PROCEDURE or VIEW")),
        }
    }

    /// Parses `DROP TABLE | VIEW | PROC[EDURE] [IF EXISTS] name {, name}`.
    pub(super) fn parse_drop(&mut self) -> Result<DropStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Drop)?.span.start;
        let object_type = match self.current.kind {
            SyntaxKind::Keyword(Keyword::Table) => DropObjectType::Table,
            SyntaxKind::Keyword(Keyword::View) => DropObjectType::View,
            SyntaxKind::Keyword(Keyword::Proc | Keyword::Procedure) => DropObjectType::Procedure,
            SyntaxKind::Keyword(keyword) => {
                return Err(ParseError::unsupported(
                    format!("DROP {}", keyword.as_str()),
                    self.span_from(start).merge(self.current.span),
                ));
            }
            _ => return Err(self.unexpected("TABLE, PROCEDURE or VIEW")),
        };
        self.advance()?;

        let if_exists = if self.check_keyword(Keyword::If) {
            let if_start = self.advance()?.span.start;
            self.expect_keyword(Keyword::Exists)?;
            self.require(FeatureSet::DROP_IF_EXISTS, self.span_from(if_start))?;
            true
        } else {
            false
        };

        let targets = self.parse_identifier_list()?;
        Ok(DropStatement {
            object_type,
            if_exists,
            targets,
            span: self.span_from(start),
        })
    }

    fn parse_create_table(&mut self, start: usize) -> Result<CreateTableStatement, ParseError> {
        self.expect_keyword(Keyword::Table)?;
        let name = self.parse_identifier()?;
        let elements = self.parse_table_elements()?;
        Ok(CreateTableStatement {
            name,
            elements,
            span: self.span_from(start),
        })
    }

    fn parse_alter_table(&mut self, start: usize) -> Result<AlterTableStatement, ParseError> {
        self.expect_keyword(Keyword::Table)?;
        let table = self.parse_identifier()?;

        let action = match self.current.kind.as_keyword() {
            Some(Keyword::Add) => {
                self.advance()?;
                let mut elements = vec![self.parse_table_element()?];
                while self.optional(SyntaxKind::Comma)? {
                    elements.push(self.parse_table_element()?);
                }
                AlterTableAction::Add(elements)
            }
            Some(Keyword::Drop) => {
                self.advance()?;
                if self.optional_keyword(Keyword::Column)? {
                    AlterTableAction::DropColumns(self.parse_identifier_list()?)
                } else {
                    self.optional_keyword(Keyword::Constraint)?;
                    AlterTableAction::DropConstraints(self.parse_identifier_list()?)
                }
            }
            Some(Keyword::Alter) => {
                self.advance()?;
                self.expect_keyword(Keyword::Column)?;
                let name = self.parse_simple_identifier()?;
                let data_type = self.parse_data_type()?;
                let span = name.span;
                let column =
                    self.parse_column_options(ColumnDefinition::new(name, data_type, span))?;
                AlterTableAction::AlterColumn(column)
            }
            Some(Keyword::With | Keyword::Check | Keyword::Nocheck) => {
                return Err(ParseError::unsupported(
                    "ALTER TABLE constraint checking",
                    self.current.span,
                ));
            }
            _ => return Err(self.unexpected("ADD, DROP or ALTER COLUMN")),
        };

        Ok(AlterTableStatement {
            table,
            action,
            span: self.span_from(start),
        })
    }

    fn parse_procedure(
        &mut self,
        start: usize,
        action: ObjectAction,
    ) -> Result<ProcedureStatement, ParseError> {
        self.advance()?;
        let name = self.parse_identifier()?;

        let parameters = if self.optional(SyntaxKind::OpenParen)? {
            let parameters = if self.check(SyntaxKind::CloseParen) {
                Vec::new()
            } else {
                self.parse_parameters()?
            };
            self.expect(SyntaxKind::CloseParen)?;
            parameters
        } else if self.check(SyntaxKind::LocalVariable) {
            self.parse_parameters()?
        } else {
            Vec::new()
        };

        let options = if self.optional_keyword(Keyword::With)? {
            self.parse_with_options()?
        } else {
            Vec::new()
        };

        self.expect_keyword(Keyword::As)?;
        let body = self.parse_batch_body()?;

        Ok(ProcedureStatement {
            action,
            name,
            parameters,
            options,
            body,
            span: self.span_from(start),
        })
    }

    fn parse_parameters(&mut self) -> Result<Vec<ProcedureParameter>, ParseError> {
        let mut parameters = Vec::new();
        loop {
            parameters.push(self.parse_parameter()?);
            if !self.optional(SyntaxKind::Comma)? {
                return Ok(parameters);
            }
        }
    }

    /// Parses `@name [AS] type [VARYING] [= default] [OUT | OUTPUT] [READONLY]`.
    fn parse_parameter(&mut self) -> Result<ProcedureParameter, ParseError> {
        let start = self.current.span.start;
        let name = self.parse_variable()?;
        self.optional_keyword(Keyword::As)?;
        let data_type = self.parse_data_type()?;
        self.optional_keyword(Keyword::Varying)?;
        let default = if self.optional(SyntaxKind::Equal)? {
            Some(self.parse_additive_expression()?)
        } else {
            None
        };
        let output = self.optional_word("OUTPUT")? || self.optional_word("OUT")?;
        let readonly = self.optional_word("READONLY")?;
        Ok(ProcedureParameter {
            name,
            data_type,
            default,
            output,
            readonly,
            span: self.span_from(start),
        })
    }

    /// Parses statements up to `GO` or end of input. A body that is a single
    /// BEGIN ... END block is returned as that block.
    fn parse_batch_body(&mut self) -> Result<StatementBlock, ParseError> {
        self.skip_semicolons()?;
        let start = self.current.span.start;
        let mut statements = Vec::new();
        loop {
            self.skip_semicolons()?;
            if self.current.is_eof() || self.check_keyword(Keyword::Go) {
                break;
            }
            statements.push(self.parse_statement_inner()?);
        }

        if statements.is_empty() {
            return Err(self.unexpected("statement"));
        }
        if matches!(statements.as_slice(), [Statement::Block(block)] if block.has_begin_end) {
            if let Some(Statement::Block(block)) = statements.pop() {
                return Ok(block);
            }
        }

        Ok(StatementBlock {
            statements,
            has_begin_end: false,
            span: self.span_from(start),
        })
    }

    fn parse_view(
        &mut self,
        start: usize,
        action: ObjectAction,
    ) -> Result<ViewStatement, ParseError> {
        self.expect_keyword(Keyword::View)?;
        let name = self.parse_identifier()?;
        let columns = if self.check(SyntaxKind::OpenParen) {
            self.parse_paren_identifier_list()?
        } else {
            Vec::new()
        };
        let options = if self.optional_keyword(Keyword::With)? {
            self.parse_with_options()?
        } else {
            Vec::new()
        };
        self.expect_keyword(Keyword::As)?;
        let query = self.parse_select_statement()?;
        Ok(ViewStatement {
            action,
            name,
            columns,
            options,
            query,
            span: self.span_from(start),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::SyntaxNode;
    use crate::lexer::Span;
    use crate::parser::{ParseErrorKind, ParserOptions};

    fn parse_one(sql: &str) -> Statement {
        let mut statements = Parser::new(sql).parse().unwrap();
        assert_eq!(statements.len(), 1, "{sql}");
        statements.remove(0)
    }

    fn data_type(sql: &str) -> DataType {
        let mut parser = Parser::new(sql);
        parser.current = parser.scanner.scan();
        parser.parse_data_type().unwrap()
    }

    #[test]
    fn test_data_types() {
        assert_eq!(data_type("INT").args, TypeArgs::None);
        assert_eq!(data_type("varchar(50)").args, TypeArgs::One(50));
        assert_eq!(data_type("DECIMAL(10, 2)").args, TypeArgs::Two(10, 2));
        assert_eq!(data_type("NVARCHAR(max)").args, TypeArgs::Max);
        assert_eq!(data_type("dbo.Phone").name.parts(), &["dbo", "Phone"]);
        assert_eq!(data_type("CURSOR").base_name(), "CURSOR");
        assert_eq!(data_type("varchar(50)").to_string(), "varchar(50)");
    }

    #[test]
    fn test_data_type_rejects_negative_size() {
        let mut parser = Parser::new("VARCHAR(-1)");
        parser.current = parser.scanner.scan();
        let err = parser.parse_data_type().unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedToken { .. }));
    }

    #[test]
    fn test_create_table() {
        let Statement::CreateTable(table) = parse_one(
            "CREATE TABLE dbo.orders (
                id INT IDENTITY(1, 1) NOT NULL PRIMARY KEY,
                customer_id INT NULL REFERENCES dbo.customers (id) ON DELETE CASCADE,
                total DECIMAL(10, 2) DEFAULT 0 CHECK (total >= 0),
                doubled AS total * 2 PERSISTED,
                CONSTRAINT uq_orders UNIQUE NONCLUSTERED (customer_id, total DESC),
                INDEX ix_total (total),
            )",
        ) else {
            panic!("expected CREATE TABLE");
        };
        assert_eq!(table.name.parts(), &["dbo", "orders"]);
        assert_eq!(table.elements.len(), 6);

        let id = table.elements[0].as_column().unwrap();
        assert_eq!(id.identity, Some(IdentitySpec { seed: 1, increment: 1 }));
        assert!(id.primary_key);
        assert!(!id.is_nullable());

        let customer = table.elements[1].as_column().unwrap();
        assert_eq!(customer.data_type.nullable, Some(true));
        let references = customer.references.as_ref().unwrap();
        assert_eq!(references.on_delete, Some(ReferentialAction::Cascade));

        let total = table.elements[2].as_column().unwrap();
        assert!(total.default.is_some());
        assert!(total.check.is_some());

        assert!(matches!(
            &table.elements[3],
            TableElement::Computed(ComputedColumnDefinition { persisted: true, .. })
        ));
        let TableElement::Constraint(constraint) = &table.elements[4] else {
            panic!("expected constraint");
        };
        assert_eq!(constraint.name.as_ref().unwrap().name(), "uq_orders");
        assert!(matches!(
            &constraint.kind,
            ConstraintKind::Unique { clustered: Some(false), columns } if columns.len() == 2
        ));
        assert!(matches!(&table.elements[5], TableElement::Index(index) if !index.unique));
    }

    #[test]
    fn test_alter_table() {
        let Statement::AlterTable(alter) = parse_one("ALTER TABLE t ADD a INT, b VARCHAR(10)")
        else {
            panic!("expected ALTER TABLE");
        };
        assert!(matches!(&alter.action, AlterTableAction::Add(elements) if elements.len() == 2));

        let Statement::AlterTable(alter) = parse_one("ALTER TABLE t DROP COLUMN a, b") else {
            panic!("expected ALTER TABLE");
        };
        assert!(matches!(&alter.action, AlterTableAction::DropColumns(cols) if cols.len() == 2));

        let Statement::AlterTable(alter) = parse_one("ALTER TABLE t DROP CONSTRAINT pk_t") else {
            panic!("expected ALTER TABLE");
        };
        assert!(matches!(&alter.action, AlterTableAction::DropConstraints(_)));

        let Statement::AlterTable(alter) =
            parse_one("ALTER TABLE t ALTER COLUMN a NVARCHAR(100) NOT NULL")
        else {
            panic!("expected ALTER TABLE");
        };
        let AlterTableAction::AlterColumn(column) = &alter.action else {
            panic!("expected ALTER COLUMN");
        };
        assert_eq!(column.data_type.args, TypeArgs::One(100));
        assert_eq!(column.data_type.nullable, Some(false));
    }

    #[test]
    fn test_procedure() {
        let statements = Parser::new(
            "CREATE PROCEDURE dbo.get_user @id INT, @name NVARCHAR(50) = NULL OUTPUT
             WITH RECOMPILE
             AS
             BEGIN
                 SET NOCOUNT ON
                 SELECT * FROM users WHERE id = @id
             END
             GO
             get_user 1",
        )
        .parse()
        .unwrap();
        assert_eq!(statements.len(), 3);

        let Statement::Procedure(proc) = &statements[0] else {
            panic!("expected procedure");
        };
        assert_eq!(proc.action, ObjectAction::Create);
        assert_eq!(proc.parameters.len(), 2);
        assert!(proc.parameters[1].output);
        assert!(matches!(proc.parameters[1].default, Some(Expr::Literal { .. })));
        assert_eq!(proc.options[0].name(), "RECOMPILE");
        assert!(proc.body.has_begin_end);
        assert_eq!(proc.body.statements.len(), 2);
        assert!(matches!(statements[2], Statement::ExecuteProcedure(_)));
    }

    #[test]
    fn test_procedure_body_runs_to_batch_end() {
        let Statement::Procedure(proc) =
            parse_one("ALTER PROC p (@a INT) AS PRINT @a; RETURN 0")
        else {
            panic!("expected procedure");
        };
        assert_eq!(proc.action, ObjectAction::Alter);
        assert!(!proc.body.has_begin_end);
        assert_eq!(proc.body.statements.len(), 2);
    }

    #[test]
    fn test_view() {
        let Statement::View(view) =
            parse_one("CREATE OR ALTER VIEW v (a, b) WITH SCHEMABINDING AS SELECT x, y FROM dbo.t")
        else {
            panic!("expected view");
        };
        assert_eq!(view.action, ObjectAction::CreateOrAlter);
        assert_eq!(view.columns.len(), 2);
        assert_eq!(view.options[0].name(), "SCHEMABINDING");
        assert_eq!(view.query.columns.len(), 2);
    }

    #[test]
    fn test_create_or_alter_gated() {
        let options = ParserOptions::new().with_features(FeatureSet::new());
        let err = Parser::with_options("CREATE OR ALTER VIEW v AS SELECT 1", options)
            .parse()
            .unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::FeatureDisabled(String::from(FeatureSet::CREATE_OR_ALTER))
        );
    }

    #[test]
    fn test_drop() {
        let Statement::Drop(stmt) = parse_one("DROP TABLE dbo.a, #work") else {
            panic!("expected DROP");
        };
        assert_eq!(stmt.object_type, DropObjectType::Table);
        assert!(!stmt.if_exists);
        assert_eq!(stmt.targets.len(), 2);
        assert!(stmt.targets[1].is_temp_table());
        assert_eq!(stmt.span.end, 23);

        let Statement::Drop(stmt) = parse_one("DROP PROC IF EXISTS usp_a") else {
            panic!("expected DROP");
        };
        assert_eq!(stmt.object_type, DropObjectType::Procedure);
        assert!(stmt.if_exists);
        assert_eq!(stmt.kind(), SyntaxKind::DropStatement);
    }

    #[test]
    fn test_drop_if_exists_gated() {
        let options = ParserOptions::new()
            .with_features(FeatureSet::for_edition("sql-server", "2014").unwrap());
        let err = Parser::with_options("DROP VIEW IF EXISTS v", options)
            .parse()
            .unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::FeatureDisabled(String::from(FeatureSet::DROP_IF_EXISTS))
        );
        assert_eq!(err.span, Span::new(10, 19));
    }

    #[test]
    fn test_unsupported_objects() {
        let err = Parser::new("CREATE FUNCTION f() RETURNS INT").parse().unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::Unsupported(String::from("CREATE FUNCTION"))
        );
    }
}
