//! Data types and table element definitions.

use core::fmt;

use serde::Serialize;

use super::expression::{Expr, Identifier};
use super::node::{impl_syntax_node, SyntaxNode};
use super::statement::OrderDirection;
use crate::lexer::Span;
use crate::syntax::SyntaxKind;

/// Size arguments of a data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum TypeArgs {
    /// `INT`
    #[default]
    None,
    /// `VARCHAR(50)`
    One(u32),
    /// `DECIMAL(10, 2)`
    Two(u32, u32),
    /// `NVARCHAR(max)`
    Max,
}

impl fmt::Display for TypeArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::One(n) => write!(f, "({n})"),
            Self::Two(p, s) => write!(f, "({p}, {s})"),
            Self::Max => f.write_str("(max)"),
        }
    }
}

/// A data type reference such as `INT`, `VARCHAR(50)` or `dbo.MyType`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DataType {
    /// Type name; user-defined types may be schema-qualified.
    pub name: Identifier,
    /// Size arguments.
    pub args: TypeArgs,
    /// `Some(true)` for `NULL`, `Some(false)` for `NOT NULL`.
    pub nullable: Option<bool>,
    /// Source span.
    pub span: Span,
}

impl DataType {
    /// Returns the upper-cased type name, without schema.
    #[must_use]
    pub fn base_name(&self) -> String {
        self.name.name().to_ascii_uppercase()
    }
}

/// Writes the type name and size arguments. Nullability belongs to the
/// enclosing column and is not printed.
impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.args)
    }
}

/// `IDENTITY [(seed, increment)]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IdentitySpec {
    /// First value.
    pub seed: i64,
    /// Step between values.
    pub increment: i64,
}

impl Default for IdentitySpec {
    fn default() -> Self {
        Self {
            seed: 1,
            increment: 1,
        }
    }
}

/// `ON DELETE` / `ON UPDATE` behavior of a foreign key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ReferentialAction {
    /// NO ACTION
    NoAction,
    /// CASCADE
    Cascade,
    /// SET NULL
    SetNull,
    /// SET DEFAULT
    SetDefault,
}

/// `REFERENCES table [(columns)] [ON DELETE ...] [ON UPDATE ...]`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ForeignKeyReference {
    /// Referenced table.
    pub table: Identifier,
    /// Referenced columns.
    pub columns: Vec<Identifier>,
    /// ON DELETE action.
    pub on_delete: Option<ReferentialAction>,
    /// ON UPDATE action.
    pub on_update: Option<ReferentialAction>,
}

/// A column of a key or index, with optional sort direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IndexColumn {
    /// Column name.
    pub name: Identifier,
    /// ASC or DESC.
    pub direction: Option<OrderDirection>,
}

/// A column definition in CREATE TABLE, ALTER TABLE or a table variable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDefinition {
    /// Column name.
    pub name: Identifier,
    /// Data type, carrying the NULL / NOT NULL constraint.
    pub data_type: DataType,
    /// COLLATE name.
    pub collation: Option<Identifier>,
    /// IDENTITY specification.
    pub identity: Option<IdentitySpec>,
    /// DEFAULT value.
    pub default: Option<Expr>,
    /// Inline PRIMARY KEY.
    pub primary_key: bool,
    /// Inline UNIQUE.
    pub unique: bool,
    /// Inline CHECK condition.
    pub check: Option<Expr>,
    /// Inline REFERENCES.
    pub references: Option<ForeignKeyReference>,
    /// Source span.
    pub span: Span,
}

impl ColumnDefinition {
    /// Creates a column with no constraints.
    #[must_use]
    pub const fn new(name: Identifier, data_type: DataType, span: Span) -> Self {
        Self {
            name,
            data_type,
            collation: None,
            identity: None,
            default: None,
            primary_key: false,
            unique: false,
            check: None,
            references: None,
            span,
        }
    }

    /// Returns false only when the column is declared NOT NULL or is part
    /// of an inline primary key.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        !self.primary_key && self.data_type.nullable != Some(false)
    }
}

/// `name AS (expression) [PERSISTED]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputedColumnDefinition {
    /// Column name.
    pub name: Identifier,
    /// Computing expression.
    pub expression: Expr,
    /// Whether the value is stored.
    pub persisted: bool,
    /// Source span.
    pub span: Span,
}

/// The body of a table constraint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ConstraintKind {
    /// PRIMARY KEY [CLUSTERED | NONCLUSTERED] (columns)
    PrimaryKey {
        /// `Some(true)` for CLUSTERED, `Some(false)` for NONCLUSTERED.
        clustered: Option<bool>,
        /// Key columns.
        columns: Vec<IndexColumn>,
    },
    /// UNIQUE [CLUSTERED | NONCLUSTERED] (columns)
    Unique {
        /// `Some(true)` for CLUSTERED, `Some(false)` for NONCLUSTERED.
        clustered: Option<bool>,
        /// Key columns.
        columns: Vec<IndexColumn>,
    },
    /// CHECK (condition)
    Check(Expr),
    /// FOREIGN KEY (columns) REFERENCES ...
    ForeignKey {
        /// Referencing columns.
        columns: Vec<Identifier>,
        /// Referenced table and columns.
        references: ForeignKeyReference,
    },
}

/// A table-level constraint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstraintDefinition {
    /// CONSTRAINT name.
    pub name: Option<Identifier>,
    /// The constraint body.
    pub kind: ConstraintKind,
    /// Source span.
    pub span: Span,
}

/// An inline index: `INDEX name [UNIQUE] [CLUSTERED | NONCLUSTERED] (columns)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IndexDefinition {
    /// Index name.
    pub name: Identifier,
    /// UNIQUE index.
    pub unique: bool,
    /// `Some(true)` for CLUSTERED, `Some(false)` for NONCLUSTERED.
    pub clustered: Option<bool>,
    /// Indexed columns.
    pub columns: Vec<IndexColumn>,
    /// Source span.
    pub span: Span,
}

/// One element of a table body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TableElement {
    /// A regular column.
    Column(ColumnDefinition),
    /// A computed column.
    Computed(ComputedColumnDefinition),
    /// A table constraint.
    Constraint(ConstraintDefinition),
    /// An inline index.
    Index(IndexDefinition),
}

impl TableElement {
    /// Returns the column definition, if this is one.
    #[must_use]
    pub const fn as_column(&self) -> Option<&ColumnDefinition> {
        match self {
            Self::Column(column) => Some(column),
            _ => None,
        }
    }
}

impl SyntaxNode for TableElement {
    fn span(&self) -> Span {
        match self {
            Self::Column(column) => column.span,
            Self::Computed(computed) => computed.span,
            Self::Constraint(constraint) => constraint.span,
            Self::Index(index) => index.span,
        }
    }

    fn kind(&self) -> SyntaxKind {
        match self {
            Self::Column(_) => SyntaxKind::ColumnDefinition,
            Self::Computed(_) => SyntaxKind::ComputedColumnDefinition,
            Self::Constraint(_) => SyntaxKind::ConstraintDefinition,
            Self::Index(_) => SyntaxKind::IndexDefinition,
        }
    }
}

impl_syntax_node!(
    DataType => DataType,
    ColumnDefinition => ColumnDefinition,
    ComputedColumnDefinition => ComputedColumnDefinition,
    ConstraintDefinition => ConstraintDefinition,
    IndexDefinition => IndexDefinition,
);
