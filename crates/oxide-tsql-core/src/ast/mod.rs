//! Abstract Syntax Tree (AST) types for T-SQL scripts.
//!
//! Every node records the byte span it was parsed from and reports a
//! [`SyntaxKind`](crate::SyntaxKind) through the [`SyntaxNode`] trait.

mod expression;
mod node;
mod statement;
mod types;

pub use expression::{
    BinaryOperator, CaseExpression, CastExpression, CastKind, Expr, FunctionCall, Identifier,
    InList, Literal, OverClause, UnaryOperator, WhenClause, MAX_IDENTIFIER_PARTS,
};
pub use node::SyntaxNode;
pub use statement::{
    AliasStyle, AlterTableAction, AlterTableStatement, AssignmentOperator, BreakStatement,
    ColumnExpression, ContinueStatement, CreateTableStatement, DeclareBody, DeclareStatement,
    DeleteStatement, DropObjectType, DropStatement, ExecuteArgument, ExecuteAs, ExecuteFlags, ExecuteProcedureStatement,
    ExecuteStringStatement, FromClause, GoStatement, GotoStatement, IfStatement, InsertSource,
    InsertStatement, IntoClause, JoinType, JoinedTable, LabelStatement, ObjectAction, OrderByItem,
    OrderDirection, PrintStatement, ProcedureParameter, ProcedureStatement, ReturnStatement,
    SelectColumn, SelectStatement, SetOptionStatement, SetOptionValue, SetStatement, Statement,
    StatementBlock, TableDeclaration, TableFactor, TableSource, TopClause, TruncateTableStatement,
    UnionClause, UseDatabaseStatement, VariableDeclaration, ViewStatement, WhileStatement,
};
pub use types::{
    ColumnDefinition, ComputedColumnDefinition, ConstraintDefinition, ConstraintKind, DataType,
    ForeignKeyReference, IdentitySpec, IndexColumn, IndexDefinition, ReferentialAction,
    TableElement, TypeArgs,
};
