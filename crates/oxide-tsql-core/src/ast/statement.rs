//! T-SQL statement AST types.

use core::fmt;

use serde::Serialize;

use super::expression::{write_list, Expr, FunctionCall, Identifier};
use super::node::{impl_syntax_node, SyntaxNode};
use super::types::{ColumnDefinition, DataType, TableElement};
use crate::lexer::Span;
use crate::syntax::SyntaxKind;

/// Order direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum OrderDirection {
    /// Ascending order (default).
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl OrderDirection {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// An ORDER BY entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderByItem {
    /// The expression to order by.
    pub expr: Expr,
    /// The direction, if written.
    pub direction: Option<OrderDirection>,
    /// Source span.
    pub span: Span,
}

/// `TOP n`, `TOP (expr)`, optionally with `PERCENT`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopClause {
    /// Row count or percentage.
    pub value: Expr,
    /// Whether the value was parenthesized.
    pub parenthesized: bool,
    /// TOP ... PERCENT.
    pub percent: bool,
    /// Source span.
    pub span: Span,
}

/// How a select column names its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AliasStyle {
    /// `alias = expr`
    AliasEqualsExpr,
    /// `expr AS alias`
    ExprAsAlias,
    /// `expr alias`
    ExprAlias,
    /// `expr`
    ExprOnly,
}

/// A computed or aliased select column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnExpression {
    /// The column value.
    pub expression: Expr,
    /// Result name.
    pub alias: Option<Identifier>,
    /// How the alias was written.
    pub style: AliasStyle,
    /// Source span.
    pub span: Span,
}

/// A column in a SELECT list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SelectColumn {
    /// A bare column reference (`a`, `t.a`).
    Reference(Identifier),
    /// Any other column.
    Expression(ColumnExpression),
}

impl SelectColumn {
    /// Returns the alias, if any.
    #[must_use]
    pub const fn alias(&self) -> Option<&Identifier> {
        match self {
            Self::Reference(_) => None,
            Self::Expression(column) => column.alias.as_ref(),
        }
    }
}

/// `INTO target` of SELECT ... INTO.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IntoClause {
    /// The new table.
    pub target: Identifier,
    /// Source span.
    pub span: Span,
}

/// Join type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum JoinType {
    /// `JOIN`
    Inner,
    /// `INNER JOIN`
    ExplicitInner,
    /// `LEFT [OUTER] JOIN`
    Left,
    /// `RIGHT [OUTER] JOIN`
    Right,
    /// `FULL [OUTER] JOIN`
    Full,
    /// `CROSS JOIN`
    Cross,
}

impl JoinType {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inner => "JOIN",
            Self::ExplicitInner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::Full => "FULL JOIN",
            Self::Cross => "CROSS JOIN",
        }
    }
}

/// The row source of a FROM entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TableFactor {
    /// A table, view, variable or temp table.
    Named(Identifier),
    /// A table-valued function call.
    Function(FunctionCall),
    /// A parenthesized subquery.
    Derived {
        /// The subquery.
        query: Box<SelectStatement>,
        /// Source span, including the parentheses.
        span: Span,
    },
}

impl TableFactor {
    fn span(&self) -> Span {
        match self {
            Self::Named(name) => name.span,
            Self::Function(call) => call.span,
            Self::Derived { span, .. } => *span,
        }
    }
}

/// A table reference in FROM, with its joins.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSource {
    /// The row source.
    pub factor: TableFactor,
    /// `[AS] alias`
    pub alias: Option<Identifier>,
    /// `WITH (NOLOCK, ...)` table hints.
    pub hints: Vec<Identifier>,
    /// Explicit joins following this source.
    pub joins: Vec<JoinedTable>,
    /// Source span, including joins.
    pub span: Span,
}

impl TableSource {
    /// Returns the factor span.
    #[must_use]
    pub fn factor_span(&self) -> Span {
        self.factor.span()
    }
}

/// `<join type> source [ON condition]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoinedTable {
    /// The type of join.
    pub join_type: JoinType,
    /// The joined source (its own `joins` are always empty).
    pub source: TableSource,
    /// The join condition; absent for CROSS JOIN.
    pub on: Option<Expr>,
    /// Source span.
    pub span: Span,
}

/// `FROM source {, source}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FromClause {
    /// Comma-separated sources (implicit joins).
    pub sources: Vec<TableSource>,
    /// Source span.
    pub span: Span,
}

/// `UNION [ALL] select`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnionClause {
    /// UNION ALL.
    pub all: bool,
    /// The right-hand query.
    pub select: Box<SelectStatement>,
    /// Source span.
    pub span: Span,
}

/// A SELECT statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectStatement {
    /// Whether to select DISTINCT values.
    pub distinct: bool,
    /// TOP clause.
    pub top: Option<TopClause>,
    /// The columns to select.
    pub columns: Vec<SelectColumn>,
    /// INTO clause.
    pub into: Option<IntoClause>,
    /// The FROM clause.
    pub from: Option<FromClause>,
    /// The WHERE clause.
    pub where_clause: Option<Expr>,
    /// GROUP BY expressions.
    pub group_by: Vec<Expr>,
    /// HAVING clause.
    pub having: Option<Expr>,
    /// UNION branches.
    pub unions: Vec<UnionClause>,
    /// ORDER BY items.
    pub order_by: Vec<OrderByItem>,
    /// Source span.
    pub span: Span,
}

/// Assignment operators of SET.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AssignmentOperator {
    /// =
    Assign,
    /// +=
    AddAssign,
    /// -=
    SubtractAssign,
    /// *=
    MultiplyAssign,
    /// /=
    DivideAssign,
    /// %=
    ModuloAssign,
    /// &=
    BitwiseAndAssign,
    /// |=
    BitwiseOrAssign,
    /// ^=
    BitwiseXorAssign,
}

impl AssignmentOperator {
    /// Returns the operator for a token kind.
    #[must_use]
    pub const fn from_kind(kind: SyntaxKind) -> Option<Self> {
        let op = match kind {
            SyntaxKind::Equal => Self::Assign,
            SyntaxKind::PlusEqual => Self::AddAssign,
            SyntaxKind::MinusEqual => Self::SubtractAssign,
            SyntaxKind::StarEqual => Self::MultiplyAssign,
            SyntaxKind::SlashEqual => Self::DivideAssign,
            SyntaxKind::PercentEqual => Self::ModuloAssign,
            SyntaxKind::AmpersandEqual => Self::BitwiseAndAssign,
            SyntaxKind::PipeEqual => Self::BitwiseOrAssign,
            SyntaxKind::CaretEqual => Self::BitwiseXorAssign,
            _ => return None,
        };
        Some(op)
    }

    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Assign => "=",
            Self::AddAssign => "+=",
            Self::SubtractAssign => "-=",
            Self::MultiplyAssign => "*=",
            Self::DivideAssign => "/=",
            Self::ModuloAssign => "%=",
            Self::BitwiseAndAssign => "&=",
            Self::BitwiseOrAssign => "|=",
            Self::BitwiseXorAssign => "^=",
        }
    }

    /// Returns true for every operator but `=`.
    #[must_use]
    pub const fn is_compound(&self) -> bool {
        !matches!(self, Self::Assign)
    }
}

/// `SET @var op expr`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetStatement {
    /// The assigned variable.
    pub target: Identifier,
    /// Assignment operator.
    pub op: AssignmentOperator,
    /// Assigned value.
    pub expression: Expr,
    /// Source span.
    pub span: Span,
}

/// Value of a session option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SetOptionValue {
    /// ON
    On,
    /// OFF
    Off,
    /// Any other value (`SET DATEFORMAT dmy`, `SET LOCK_TIMEOUT 100`).
    Value(Expr),
}

/// `SET option[, option] [target] ON | OFF | value`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetOptionStatement {
    /// Upper-cased option names.
    pub options: Vec<String>,
    /// Table of `SET IDENTITY_INSERT table ON`.
    pub target: Option<Identifier>,
    /// The new value.
    pub value: SetOptionValue,
    /// Source span.
    pub span: Span,
}

/// `@name [AS] type [= initializer]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableDeclaration {
    /// Variable name, including `@`.
    pub name: Identifier,
    /// Whether `AS` was written.
    pub has_as: bool,
    /// Declared type.
    pub data_type: DataType,
    /// Initial value.
    pub initializer: Option<Expr>,
    /// Source span.
    pub span: Span,
}

/// `@name [AS] TABLE (elements)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableDeclaration {
    /// Variable name, including `@`.
    pub name: Identifier,
    /// Columns, constraints and indexes.
    pub elements: Vec<TableElement>,
    /// Source span.
    pub span: Span,
}

/// What a DECLARE statement declares.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DeclareBody {
    /// One or more scalar variables.
    Variables(Vec<VariableDeclaration>),
    /// A table variable.
    Table(TableDeclaration),
}

/// A DECLARE statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeclareStatement {
    /// Scalar variables or a table variable, never both.
    pub body: DeclareBody,
    /// Source span.
    pub span: Span,
}

impl DeclareStatement {
    /// Returns the scalar variables, empty for table declarations.
    #[must_use]
    pub fn variables(&self) -> &[VariableDeclaration] {
        match &self.body {
            DeclareBody::Variables(variables) => variables,
            DeclareBody::Table(_) => &[],
        }
    }

    /// Returns the table declaration, if any.
    #[must_use]
    pub const fn table(&self) -> Option<&TableDeclaration> {
        match &self.body {
            DeclareBody::Table(table) => Some(table),
            DeclareBody::Variables(_) => None,
        }
    }
}

/// `USE database`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct UseDatabaseStatement {
    /// Database name.
    pub database: Identifier,
    /// Source span.
    pub span: Span,
}

/// `GOTO label`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GotoStatement {
    /// Target label.
    pub label: Identifier,
    /// Source span.
    pub span: Span,
}

/// `label:`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LabelStatement {
    /// Label name.
    pub label: Identifier,
    /// Source span.
    pub span: Span,
}

/// `WHILE predicate body`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhileStatement {
    /// Loop condition.
    pub predicate: Expr,
    /// Loop body.
    pub body: Box<Statement>,
    /// Source span.
    pub span: Span,
}

/// `IF predicate then [ELSE else]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IfStatement {
    /// Condition.
    pub predicate: Expr,
    /// Statement run when the condition holds.
    pub then_branch: Box<Statement>,
    /// ELSE statement.
    pub else_branch: Option<Box<Statement>>,
    /// Source span.
    pub span: Span,
}

/// An ordered list of statements, optionally wrapped in BEGIN ... END.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatementBlock {
    /// The statements.
    pub statements: Vec<Statement>,
    /// Whether the block was written as BEGIN ... END.
    pub has_begin_end: bool,
    /// Source span.
    pub span: Span,
}

/// Source rows of an INSERT.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum InsertSource {
    /// VALUES (...), (...), ...
    Values(Vec<Vec<Expr>>),
    /// SELECT ...
    Select(Box<SelectStatement>),
}

/// An INSERT statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsertStatement {
    /// TOP clause.
    pub top: Option<TopClause>,
    /// Target table.
    pub target: Identifier,
    /// Column names (optional).
    pub columns: Vec<Identifier>,
    /// Inserted rows.
    pub source: InsertSource,
    /// Source span.
    pub span: Span,
}

/// A DELETE statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteStatement {
    /// TOP clause.
    pub top: Option<TopClause>,
    /// Table or alias rows are deleted from.
    pub target: Identifier,
    /// Second FROM clause for joined deletes.
    pub from: Option<FromClause>,
    /// WHERE clause.
    pub where_clause: Option<Expr>,
    /// Source span.
    pub span: Span,
}

/// `TRUNCATE TABLE name`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TruncateTableStatement {
    /// The table.
    pub table: Identifier,
    /// Source span.
    pub span: Span,
}

/// `CREATE TABLE name (elements)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTableStatement {
    /// Table name.
    pub name: Identifier,
    /// Columns, constraints and indexes.
    pub elements: Vec<TableElement>,
    /// Source span.
    pub span: Span,
}

/// The change made by ALTER TABLE.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AlterTableAction {
    /// `ADD element {, element}`
    Add(Vec<TableElement>),
    /// `DROP COLUMN name {, name}`
    DropColumns(Vec<Identifier>),
    /// `DROP CONSTRAINT name {, name}`
    DropConstraints(Vec<Identifier>),
    /// `ALTER COLUMN definition`
    AlterColumn(ColumnDefinition),
}

/// `ALTER TABLE name action`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlterTableStatement {
    /// Table name.
    pub table: Identifier,
    /// The change.
    pub action: AlterTableAction,
    /// Source span.
    pub span: Span,
}

/// Whether a module definition creates, alters or upserts its object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ObjectAction {
    /// CREATE
    Create,
    /// ALTER
    Alter,
    /// CREATE OR ALTER
    CreateOrAlter,
}

impl ObjectAction {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Alter => "ALTER",
            Self::CreateOrAlter => "CREATE OR ALTER",
        }
    }
}

/// A stored procedure parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcedureParameter {
    /// Parameter name, including `@`.
    pub name: Identifier,
    /// Declared type.
    pub data_type: DataType,
    /// Default value.
    pub default: Option<Expr>,
    /// OUTPUT / OUT parameter.
    pub output: bool,
    /// READONLY table-valued parameter.
    pub readonly: bool,
    /// Source span.
    pub span: Span,
}

/// `CREATE | ALTER | CREATE OR ALTER PROCEDURE`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcedureStatement {
    /// Create, alter or both.
    pub action: ObjectAction,
    /// Procedure name.
    pub name: Identifier,
    /// Parameters.
    pub parameters: Vec<ProcedureParameter>,
    /// `WITH` options (RECOMPILE, ENCRYPTION, ...).
    pub options: Vec<Identifier>,
    /// Statements up to the end of the batch.
    pub body: StatementBlock,
    /// Source span.
    pub span: Span,
}

/// `CREATE | ALTER | CREATE OR ALTER VIEW`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewStatement {
    /// Create, alter or both.
    pub action: ObjectAction,
    /// View name.
    pub name: Identifier,
    /// Explicit column names.
    pub columns: Vec<Identifier>,
    /// `WITH` options (SCHEMABINDING, ...).
    pub options: Vec<Identifier>,
    /// The view query.
    pub query: SelectStatement,
    /// Source span.
    pub span: Span,
}

/// Syntax features present on an EXEC statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct ExecuteFlags(u8);

impl ExecuteFlags {
    /// No flags.
    pub const NONE: Self = Self(0);
    /// Written without EXEC at the start of a batch.
    pub const NO_EXEC_KEYWORD: Self = Self(1);
    /// Has at least one argument.
    pub const HAS_ARGS: Self = Self(1 << 1);
    /// Has `WITH` options.
    pub const HAS_OPTIONS: Self = Self(1 << 2);
    /// Assigns the return status (`EXEC @rc = proc`).
    pub const HAS_RETURN_VARIABLE: Self = Self(1 << 3);

    /// Returns true if every flag in `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of both flag sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

/// One argument of a procedure call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecuteArgument {
    /// `@param =` name.
    pub name: Option<Identifier>,
    /// Value; `None` for DEFAULT.
    pub value: Option<Expr>,
    /// OUTPUT argument.
    pub output: bool,
    /// Source span.
    pub span: Span,
}

/// `[EXEC] [@rc =] procedure [args] [WITH options]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecuteProcedureStatement {
    /// Variable receiving the return status.
    pub return_variable: Option<Identifier>,
    /// Procedure name or variable holding it.
    pub procedure: Identifier,
    /// Arguments.
    pub arguments: Vec<ExecuteArgument>,
    /// `WITH` options.
    pub options: Vec<Identifier>,
    /// Syntax features present.
    pub flags: ExecuteFlags,
    /// Source span.
    pub span: Span,
}

/// The security context of `EXEC (...) AS USER | LOGIN = name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ExecuteAs {
    /// AS USER
    User,
    /// AS LOGIN
    Login,
}

/// `EXEC (string) [AS USER | LOGIN = name] [AT server]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecuteStringStatement {
    /// The dynamic SQL, usually a concatenation.
    pub query: Expr,
    /// Execution context.
    pub context: Option<(ExecuteAs, Expr)>,
    /// Linked server named by `AT server`.
    pub linked_server: Option<Identifier>,
    /// Source span.
    pub span: Span,
}

/// Kind of object removed by `DROP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DropObjectType {
    /// TABLE
    Table,
    /// VIEW
    View,
    /// PROC / PROCEDURE
    Procedure,
}

impl DropObjectType {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "TABLE",
            Self::View => "VIEW",
            Self::Procedure => "PROCEDURE",
        }
    }
}

/// `DROP TABLE | VIEW | PROC[EDURE] [IF EXISTS] name {, name}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropStatement {
    /// What is dropped.
    pub object_type: DropObjectType,
    /// Written with `IF EXISTS`.
    pub if_exists: bool,
    /// Dropped objects.
    pub targets: Vec<Identifier>,
    /// Source span.
    pub span: Span,
}

/// `GO [count]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GoStatement {
    /// Repeat count.
    pub count: Option<u32>,
    /// Source span.
    pub span: Span,
}

/// `PRINT expr`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrintStatement {
    /// Printed value.
    pub expression: Expr,
    /// Source span.
    pub span: Span,
}

/// `RETURN [expr]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnStatement {
    /// Return status.
    pub value: Option<Expr>,
    /// Source span.
    pub span: Span,
}

/// `BREAK`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BreakStatement {
    /// Source span.
    pub span: Span,
}

/// `CONTINUE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ContinueStatement {
    /// Source span.
    pub span: Span,
}

/// A T-SQL statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Statement {
    /// SELECT statement.
    Select(SelectStatement),
    /// SET variable assignment.
    Set(SetStatement),
    /// SET session option.
    SetOption(SetOptionStatement),
    /// DECLARE statement.
    Declare(DeclareStatement),
    /// USE statement.
    Use(UseDatabaseStatement),
    /// GOTO statement.
    Goto(GotoStatement),
    /// Label definition.
    Label(LabelStatement),
    /// WHILE loop.
    While(WhileStatement),
    /// IF statement.
    If(IfStatement),
    /// BEGIN ... END block.
    Block(StatementBlock),
    /// INSERT statement.
    Insert(InsertStatement),
    /// DELETE statement.
    Delete(DeleteStatement),
    /// TRUNCATE TABLE statement.
    TruncateTable(TruncateTableStatement),
    /// CREATE TABLE statement.
    CreateTable(CreateTableStatement),
    /// ALTER TABLE statement.
    AlterTable(AlterTableStatement),
    /// Procedure definition.
    Procedure(ProcedureStatement),
    /// View definition.
    View(ViewStatement),
    /// Procedure call.
    ExecuteProcedure(ExecuteProcedureStatement),
    /// Dynamic SQL.
    ExecuteString(ExecuteStringStatement),
    /// DROP statement.
    Drop(DropStatement),
    /// Batch separator.
    Go(GoStatement),
    /// PRINT statement.
    Print(PrintStatement),
    /// RETURN statement.
    Return(ReturnStatement),
    /// BREAK statement.
    Break(BreakStatement),
    /// CONTINUE statement.
    Continue(ContinueStatement),
}

impl SyntaxNode for Statement {
    fn span(&self) -> Span {
        match self {
            Self::Select(s) => s.span,
            Self::Set(s) => s.span,
            Self::SetOption(s) => s.span,
            Self::Declare(s) => s.span,
            Self::Use(s) => s.span,
            Self::Goto(s) => s.span,
            Self::Label(s) => s.span,
            Self::While(s) => s.span,
            Self::If(s) => s.span,
            Self::Block(s) => s.span,
            Self::Insert(s) => s.span,
            Self::Delete(s) => s.span,
            Self::TruncateTable(s) => s.span,
            Self::CreateTable(s) => s.span,
            Self::AlterTable(s) => s.span,
            Self::Procedure(s) => s.span,
            Self::View(s) => s.span,
            Self::ExecuteProcedure(s) => s.span,
            Self::ExecuteString(s) => s.span,
            Self::Drop(s) => s.span,
            Self::Go(s) => s.span,
            Self::Print(s) => s.span,
            Self::Return(s) => s.span,
            Self::Break(s) => s.span,
            Self::Continue(s) => s.span,
        }
    }

    fn kind(&self) -> SyntaxKind {
        match self {
            Self::Select(s) => s.kind(),
            Self::Set(s) => s.kind(),
            Self::SetOption(s) => s.kind(),
            Self::Declare(s) => s.kind(),
            Self::Use(s) => s.kind(),
            Self::Goto(s) => s.kind(),
            Self::Label(s) => s.kind(),
            Self::While(s) => s.kind(),
            Self::If(s) => s.kind(),
            Self::Block(s) => s.kind(),
            Self::Insert(s) => s.kind(),
            Self::Delete(s) => s.kind(),
            Self::TruncateTable(s) => s.kind(),
            Self::CreateTable(s) => s.kind(),
            Self::AlterTable(s) => s.kind(),
            Self::Procedure(s) => s.kind(),
            Self::View(s) => s.kind(),
            Self::ExecuteProcedure(s) => s.kind(),
            Self::ExecuteString(s) => s.kind(),
            Self::Drop(s) => s.kind(),
            Self::Go(s) => s.kind(),
            Self::Print(s) => s.kind(),
            Self::Return(s) => s.kind(),
            Self::Break(s) => s.kind(),
            Self::Continue(s) => s.kind(),
        }
    }
}

impl SyntaxNode for SelectColumn {
    fn span(&self) -> Span {
        match self {
            Self::Reference(ident) => ident.span,
            Self::Expression(column) => column.span,
        }
    }

    fn kind(&self) -> SyntaxKind {
        match self {
            Self::Reference(_) => SyntaxKind::IdentifierExpr,
            Self::Expression(_) => SyntaxKind::ColumnExpr,
        }
    }
}

impl SyntaxNode for ProcedureStatement {
    fn span(&self) -> Span {
        self.span
    }

    fn kind(&self) -> SyntaxKind {
        match self.action {
            ObjectAction::Alter => SyntaxKind::AlterProcedureStatement,
            ObjectAction::Create | ObjectAction::CreateOrAlter => {
                SyntaxKind::CreateProcedureStatement
            }
        }
    }
}

impl SyntaxNode for ViewStatement {
    fn span(&self) -> Span {
        self.span
    }

    fn kind(&self) -> SyntaxKind {
        match self.action {
            ObjectAction::Alter => SyntaxKind::AlterViewStatement,
            ObjectAction::Create | ObjectAction::CreateOrAlter => SyntaxKind::CreateViewStatement,
        }
    }
}

impl_syntax_node!(
    OrderByItem => OrderByItem,
    TopClause => TopClause,
    ColumnExpression => ColumnExpr,
    IntoClause => IntoClause,
    TableSource => TableSource,
    JoinedTable => JoinedTable,
    FromClause => FromClause,
    UnionClause => UnionClause,
    SelectStatement => SelectStatement,
    SetStatement => SetStatement,
    SetOptionStatement => SetOptionStatement,
    VariableDeclaration => VariableDeclaration,
    TableDeclaration => TableDeclaration,
    DeclareStatement => DeclareStatement,
    UseDatabaseStatement => UseDatabaseStatement,
    GotoStatement => GotoStatement,
    LabelStatement => LabelStatement,
    WhileStatement => WhileStatement,
    IfStatement => IfStatement,
    StatementBlock => StatementBlock,
    InsertStatement => InsertStatement,
    DeleteStatement => DeleteStatement,
    TruncateTableStatement => TruncateTableStatement,
    CreateTableStatement => CreateTableStatement,
    AlterTableStatement => AlterTableStatement,
    ProcedureParameter => ProcedureParameter,
    ExecuteArgument => ExecuteArgument,
    ExecuteProcedureStatement => ExecuteProcedureStatement,
    ExecuteStringStatement => ExecuteStringStatement,
    DropStatement => DropStatement,
    GoStatement => GoStatement,
    PrintStatement => PrintStatement,
    ReturnStatement => ReturnStatement,
    BreakStatement => BreakStatement,
    ContinueStatement => ContinueStatement,
);

// Rendering of queries, so that expressions holding subqueries print as
// SQL that parses back to the same tree.

impl fmt::Display for OrderByItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)?;
        if let Some(direction) = self.direction {
            write!(f, " {}", direction.as_str())?;
        }
        Ok(())
    }
}

impl fmt::Display for TopClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.parenthesized {
            write!(f, "TOP ({})", self.value)?;
        } else {
            write!(f, "TOP {}", self.value)?;
        }
        if self.percent {
            f.write_str(" PERCENT")?;
        }
        Ok(())
    }
}

impl fmt::Display for SelectColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference(ident) => write!(f, "{ident}"),
            Self::Expression(column) => match (&column.alias, column.style) {
                (Some(alias), AliasStyle::AliasEqualsExpr) => {
                    write!(f, "{alias} = {}", column.expression)
                }
                (Some(alias), AliasStyle::ExprAsAlias) => {
                    write!(f, "{} AS {alias}", column.expression)
                }
                (Some(alias), _) => write!(f, "{} {alias}", column.expression),
                (None, _) => write!(f, "{}", column.expression),
            },
        }
    }
}

impl fmt::Display for TableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.factor {
            TableFactor::Named(name) => write!(f, "{name}")?,
            TableFactor::Function(call) => write!(f, "{call}")?,
            TableFactor::Derived { query, .. } => write!(f, "({query})")?,
        }
        if let Some(alias) = &self.alias {
            write!(f, " AS {alias}")?;
        }
        if !self.hints.is_empty() {
            f.write_str(" WITH (")?;
            write_list(f, &self.hints)?;
            f.write_str(")")?;
        }
        for join in &self.joins {
            write!(f, " {} {}", join.join_type.as_str(), join.source)?;
            if let Some(on) = &join.on {
                write!(f, " ON {on}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for SelectStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT ")?;
        if self.distinct {
            f.write_str("DISTINCT ")?;
        }
        if let Some(top) = &self.top {
            write!(f, "{top} ")?;
        }
        write_list(f, &self.columns)?;
        if let Some(into) = &self.into {
            write!(f, " INTO {}", into.target)?;
        }
        if let Some(from) = &self.from {
            f.write_str(" FROM ")?;
            write_list(f, &from.sources)?;
        }
        if let Some(where_clause) = &self.where_clause {
            write!(f, " WHERE {where_clause}")?;
        }
        if !self.group_by.is_empty() {
            f.write_str(" GROUP BY ")?;
            write_list(f, &self.group_by)?;
        }
        if let Some(having) = &self.having {
            write!(f, " HAVING {having}")?;
        }
        for union in &self.unions {
            f.write_str(if union.all { " UNION ALL " } else { " UNION " })?;
            write!(f, "{}", union.select)?;
        }
        if !self.order_by.is_empty() {
            f.write_str(" ORDER BY ")?;
            write_list(f, &self.order_by)?;
        }
        Ok(())
    }
}
