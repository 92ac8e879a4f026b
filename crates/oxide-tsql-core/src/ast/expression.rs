//! Expression AST types.

use core::fmt;

use serde::Serialize;

use super::node::{impl_syntax_node, SyntaxNode};
use super::statement::{OrderByItem, SelectStatement};
use super::types::DataType;
use crate::dialect::{Dialect, SqlServer};
use crate::lexer::chars::{is_identifier_char, is_letter};
use crate::lexer::Span;
use crate::parser::Precedence;
use crate::syntax::{Keyword, SyntaxKind};

/// Maximum number of dotted parts in an identifier (`db.schema.object`).
pub const MAX_IDENTIFIER_PARTS: usize = 3;

/// A possibly qualified name: `x`, `t.x`, `dbo.t.x`, `@var`, `#temp`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Identifier {
    parts: Vec<String>,
    /// Source span.
    pub span: Span,
}

impl Identifier {
    /// Creates an identifier from its parts.
    ///
    /// Returns `None` when `parts` is empty or has more than
    /// [`MAX_IDENTIFIER_PARTS`] entries.
    #[must_use]
    pub fn new(parts: Vec<String>, span: Span) -> Option<Self> {
        if parts.is_empty() || parts.len() > MAX_IDENTIFIER_PARTS {
            return None;
        }
        Some(Self { parts, span })
    }

    /// Creates a single-part identifier.
    #[must_use]
    pub fn single(name: impl Into<String>, span: Span) -> Self {
        Self {
            parts: vec![name.into()],
            span,
        }
    }

    /// Returns the parts in source order.
    #[must_use]
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Returns the last part (the object or column name).
    #[must_use]
    pub fn name(&self) -> &str {
        self.parts.last().map_or("", String::as_str)
    }

    /// Returns every part but the last.
    #[must_use]
    pub fn qualifier(&self) -> &[String] {
        &self.parts[..self.parts.len() - 1]
    }

    /// Returns true for `@name` and `@@name`.
    #[must_use]
    pub fn is_variable(&self) -> bool {
        self.parts.len() == 1 && self.parts[0].starts_with('@')
    }

    /// Returns true for `#name` and `##name`.
    #[must_use]
    pub fn is_temp_table(&self) -> bool {
        self.parts.len() == 1 && self.parts[0].starts_with('#')
    }

    /// Appends the parts of `other`, failing past the part limit.
    #[must_use]
    pub(crate) fn join(mut self, other: Self) -> Option<Self> {
        if self.parts.len() + other.parts.len() > MAX_IDENTIFIER_PARTS {
            return None;
        }
        self.parts.extend(other.parts);
        self.span = self.span.merge(other.span);
        Some(self)
    }
}

impl_syntax_node!(Identifier => Identifier);

/// Returns true when `part` can be written without brackets.
fn is_plain_part(part: &str) -> bool {
    let body = part
        .strip_prefix("@@")
        .or_else(|| part.strip_prefix('@'))
        .or_else(|| part.strip_prefix("##"))
        .or_else(|| part.strip_prefix('#'))
        .unwrap_or(part);
    let prefixed = body.len() < part.len();
    let mut chars = body.chars();
    let starts_well = chars
        .next()
        .is_some_and(|c| is_letter(c) || (prefixed && is_identifier_char(c)));
    starts_well && chars.all(is_identifier_char) && Keyword::from_str(part).is_none()
}

impl Identifier {
    /// Renders the identifier, quoting parts that need it the way
    /// `dialect` quotes identifiers.
    #[must_use]
    pub fn to_sql(&self, dialect: &dyn Dialect) -> String {
        self.parts
            .iter()
            .map(|part| {
                if is_plain_part(part) {
                    part.clone()
                } else {
                    dialect.quote_identifier(part)
                }
            })
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql(&SqlServer::latest()))
    }
}

/// A literal value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Literal {
    /// Numeric literal.
    Number(f64),
    /// String literal.
    String {
        /// Decoded contents.
        value: String,
        /// Written as `N'...'`.
        national: bool,
    },
    /// NULL literal.
    Null,
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::String { value, national } => {
                if *national {
                    f.write_str("N")?;
                }
                write!(f, "'{}'", value.replace('\'', "''"))
            }
            Self::Null => f.write_str("NULL"),
        }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnaryOperator {
    /// Logical NOT
    Not,
    /// Bitwise NOT (~)
    BitwiseNot,
    /// Unary plus (+)
    Plus,
    /// Negation (-)
    Minus,
}

impl UnaryOperator {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Not => "NOT",
            Self::BitwiseNot => "~",
            Self::Plus => "+",
            Self::Minus => "-",
        }
    }

    /// Returns the node kind of an expression using this operator.
    #[must_use]
    pub const fn node_kind(&self) -> SyntaxKind {
        match self {
            Self::Not => SyntaxKind::LogicalNotExpr,
            Self::BitwiseNot => SyntaxKind::BitwiseNotExpr,
            Self::Plus => SyntaxKind::UnaryPlusExpr,
            Self::Minus => SyntaxKind::UnaryMinusExpr,
        }
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOperator {
    // Logical
    Or,
    And,

    // Comparison
    Equal,
    NotEqual,
    LessGreater,
    LessThan,
    LessThanEqual,
    GreaterThan,
    GreaterThanEqual,
    NotLessThan,
    NotGreaterThan,

    // Additive
    Add,
    Subtract,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,

    // Multiplicative
    Multiply,
    Divide,
    Modulo,
}

impl BinaryOperator {
    /// Returns the operator for a token kind.
    #[must_use]
    pub const fn from_kind(kind: SyntaxKind) -> Option<Self> {
        let op = match kind {
            SyntaxKind::Keyword(Keyword::Or) => Self::Or,
            SyntaxKind::Keyword(Keyword::And) => Self::And,
            SyntaxKind::Equal => Self::Equal,
            SyntaxKind::NotEqual => Self::NotEqual,
            SyntaxKind::LessGreater => Self::LessGreater,
            SyntaxKind::LessThan => Self::LessThan,
            SyntaxKind::LessThanEqual => Self::LessThanEqual,
            SyntaxKind::GreaterThan => Self::GreaterThan,
            SyntaxKind::GreaterThanEqual => Self::GreaterThanEqual,
            SyntaxKind::NotLessThan => Self::NotLessThan,
            SyntaxKind::NotGreaterThan => Self::NotGreaterThan,
            SyntaxKind::Plus => Self::Add,
            SyntaxKind::Minus => Self::Subtract,
            SyntaxKind::Ampersand => Self::BitwiseAnd,
            SyntaxKind::Pipe => Self::BitwiseOr,
            SyntaxKind::Caret => Self::BitwiseXor,
            SyntaxKind::Star => Self::Multiply,
            SyntaxKind::Slash => Self::Divide,
            SyntaxKind::Percent => Self::Modulo,
            _ => return None,
        };
        Some(op)
    }

    /// Returns the token kind of the operator.
    #[must_use]
    pub const fn kind(&self) -> SyntaxKind {
        match self {
            Self::Or => SyntaxKind::Keyword(Keyword::Or),
            Self::And => SyntaxKind::Keyword(Keyword::And),
            Self::Equal => SyntaxKind::Equal,
            Self::NotEqual => SyntaxKind::NotEqual,
            Self::LessGreater => SyntaxKind::LessGreater,
            Self::LessThan => SyntaxKind::LessThan,
            Self::LessThanEqual => SyntaxKind::LessThanEqual,
            Self::GreaterThan => SyntaxKind::GreaterThan,
            Self::GreaterThanEqual => SyntaxKind::GreaterThanEqual,
            Self::NotLessThan => SyntaxKind::NotLessThan,
            Self::NotGreaterThan => SyntaxKind::NotGreaterThan,
            Self::Add => SyntaxKind::Plus,
            Self::Subtract => SyntaxKind::Minus,
            Self::BitwiseAnd => SyntaxKind::Ampersand,
            Self::BitwiseOr => SyntaxKind::Pipe,
            Self::BitwiseXor => SyntaxKind::Caret,
            Self::Multiply => SyntaxKind::Star,
            Self::Divide => SyntaxKind::Slash,
            Self::Modulo => SyntaxKind::Percent,
        }
    }

    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self.kind().symbol() {
            Some(symbol) => symbol,
            None => "",
        }
    }

    /// Returns the precedence tier of the operator.
    #[must_use]
    pub const fn precedence(&self) -> Precedence {
        match self {
            Self::Or => Precedence::Or,
            Self::And => Precedence::And,
            Self::Equal
            | Self::NotEqual
            | Self::LessGreater
            | Self::LessThan
            | Self::LessThanEqual
            | Self::GreaterThan
            | Self::GreaterThanEqual
            | Self::NotLessThan
            | Self::NotGreaterThan => Precedence::Comparison,
            Self::Add | Self::Subtract | Self::BitwiseAnd | Self::BitwiseOr | Self::BitwiseXor => {
                Precedence::Additive
            }
            Self::Multiply | Self::Divide | Self::Modulo => Precedence::Multiplicative,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `OVER (PARTITION BY ... ORDER BY ...)` on a function call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverClause {
    /// PARTITION BY expressions.
    pub partition_by: Vec<Expr>,
    /// ORDER BY items.
    pub order_by: Vec<OrderByItem>,
    /// Source span.
    pub span: Span,
}

/// A function call expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionCall {
    /// The function name.
    pub name: Identifier,
    /// The arguments.
    pub args: Vec<Expr>,
    /// Whether DISTINCT was specified.
    pub distinct: bool,
    /// Written without parentheses (`CURRENT_TIMESTAMP`, `USER`).
    pub niladic: bool,
    /// Window specification.
    pub over: Option<OverClause>,
    /// Source span.
    pub span: Span,
}

/// One `WHEN ... THEN ...` arm of a CASE expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhenClause {
    /// The value or predicate after WHEN.
    pub condition: Expr,
    /// The result after THEN.
    pub result: Expr,
    /// Source span.
    pub span: Span,
}

/// A CASE expression, simple (`CASE x WHEN 1 ...`) or searched
/// (`CASE WHEN x = 1 ...`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseExpression {
    /// The operand of a simple CASE.
    pub operand: Option<Box<Expr>>,
    /// WHEN/THEN arms, never empty.
    pub when_clauses: Vec<WhenClause>,
    /// ELSE result.
    pub else_result: Option<Box<Expr>>,
    /// Source span.
    pub span: Span,
}

/// The conversion function used by a [`CastExpression`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CastKind {
    /// `CAST(expr AS type)`
    Cast,
    /// `CONVERT(type, expr [, style])`
    Convert,
    /// `TRY_CONVERT(type, expr [, style])`
    TryConvert,
}

/// A type conversion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CastExpression {
    /// Which conversion function.
    pub kind: CastKind,
    /// Expression to convert.
    pub expr: Box<Expr>,
    /// Target type.
    pub data_type: DataType,
    /// Style argument of CONVERT.
    pub style: Option<Box<Expr>>,
    /// Source span.
    pub span: Span,
}

/// Right-hand side of an IN predicate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum InList {
    /// `IN (a, b, c)`
    Values(Vec<Expr>),
    /// `IN (SELECT ...)`
    Subquery(Box<SelectStatement>),
}

/// A T-SQL expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    /// A column, variable or object reference.
    Identifier(Identifier),

    /// A literal value.
    Literal {
        /// The value.
        value: Literal,
        /// Source span.
        span: Span,
    },

    /// A unary expression.
    Unary {
        /// Operator.
        op: UnaryOperator,
        /// Operand.
        operand: Box<Expr>,
        /// Source span.
        span: Span,
    },

    /// A binary expression.
    Binary {
        /// Left operand.
        left: Box<Expr>,
        /// Operator.
        op: BinaryOperator,
        /// Right operand.
        right: Box<Expr>,
        /// Source span.
        span: Span,
    },

    /// Parenthesized expression.
    Paren {
        /// Inner expression.
        expr: Box<Expr>,
        /// Source span, including the parentheses.
        span: Span,
    },

    /// A function call.
    Function(FunctionCall),

    /// CASE expression.
    Case(CaseExpression),

    /// A scalar subquery.
    Subquery {
        /// The query.
        query: Box<SelectStatement>,
        /// Source span, including the parentheses.
        span: Span,
    },

    /// CAST, CONVERT or TRY_CONVERT.
    Cast(CastExpression),

    /// IS [NOT] NULL.
    IsNull {
        /// The expression to check.
        expr: Box<Expr>,
        /// Whether this is IS NOT NULL.
        negated: bool,
        /// Source span.
        span: Span,
    },

    /// [NOT] BETWEEN.
    Between {
        /// The expression to check.
        expr: Box<Expr>,
        /// Lower bound.
        low: Box<Expr>,
        /// Upper bound.
        high: Box<Expr>,
        /// Whether this is NOT BETWEEN.
        negated: bool,
        /// Source span.
        span: Span,
    },

    /// [NOT] IN.
    In {
        /// The expression to check.
        expr: Box<Expr>,
        /// The list of values or subquery.
        list: InList,
        /// Whether this is NOT IN.
        negated: bool,
        /// Source span.
        span: Span,
    },

    /// [NOT] LIKE.
    Like {
        /// The expression to match.
        expr: Box<Expr>,
        /// The pattern.
        pattern: Box<Expr>,
        /// ESCAPE character expression.
        escape: Option<Box<Expr>>,
        /// Whether this is NOT LIKE.
        negated: bool,
        /// Source span.
        span: Span,
    },

    /// EXISTS (subquery).
    Exists {
        /// The subquery.
        query: Box<SelectStatement>,
        /// Source span.
        span: Span,
    },

    /// `*` or `t.*`.
    Wildcard {
        /// Table qualifier.
        qualifier: Option<Identifier>,
        /// Source span.
        span: Span,
    },
}

impl Expr {
    /// Returns the identifier if this is a bare reference.
    #[must_use]
    pub const fn as_identifier(&self) -> Option<&Identifier> {
        match self {
            Self::Identifier(ident) => Some(ident),
            _ => None,
        }
    }

    /// Returns the direct sub-expressions in source order.
    ///
    /// Subqueries are not descended into.
    #[must_use]
    pub fn children(&self) -> Vec<&Self> {
        match self {
            Self::Identifier(_)
            | Self::Literal { .. }
            | Self::Subquery { .. }
            | Self::Exists { .. }
            | Self::Wildcard { .. } => Vec::new(),
            Self::Unary { operand, .. } => vec![operand.as_ref()],
            Self::Binary { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            Self::Paren { expr, .. } | Self::IsNull { expr, .. } => vec![expr.as_ref()],
            Self::Function(call) => {
                let mut children: Vec<&Self> = call.args.iter().collect();
                if let Some(over) = &call.over {
                    children.extend(over.partition_by.iter());
                    children.extend(over.order_by.iter().map(|item| &item.expr));
                }
                children
            }
            Self::Case(case) => {
                let mut children = Vec::new();
                if let Some(operand) = &case.operand {
                    children.push(operand.as_ref());
                }
                for when in &case.when_clauses {
                    children.push(&when.condition);
                    children.push(&when.result);
                }
                if let Some(else_result) = &case.else_result {
                    children.push(else_result.as_ref());
                }
                children
            }
            Self::Cast(cast) => {
                let mut children = vec![cast.expr.as_ref()];
                if let Some(style) = &cast.style {
                    children.push(style.as_ref());
                }
                children
            }
            Self::Between { expr, low, high, .. } => {
                vec![expr.as_ref(), low.as_ref(), high.as_ref()]
            }
            Self::In { expr, list, .. } => {
                let mut children = vec![expr.as_ref()];
                if let InList::Values(values) = list {
                    children.extend(values.iter());
                }
                children
            }
            Self::Like {
                expr,
                pattern,
                escape,
                ..
            } => {
                let mut children = vec![expr.as_ref(), pattern.as_ref()];
                if let Some(escape) = escape {
                    children.push(escape.as_ref());
                }
                children
            }
        }
    }
}

impl SyntaxNode for Expr {
    fn span(&self) -> Span {
        match self {
            Self::Identifier(ident) => ident.span,
            Self::Function(call) => call.span,
            Self::Case(case) => case.span,
            Self::Cast(cast) => cast.span,
            Self::Literal { span, .. }
            | Self::Unary { span, .. }
            | Self::Binary { span, .. }
            | Self::Paren { span, .. }
            | Self::Subquery { span, .. }
            | Self::IsNull { span, .. }
            | Self::Between { span, .. }
            | Self::In { span, .. }
            | Self::Like { span, .. }
            | Self::Exists { span, .. }
            | Self::Wildcard { span, .. } => *span,
        }
    }

    fn kind(&self) -> SyntaxKind {
        match self {
            Self::Identifier(_) => SyntaxKind::IdentifierExpr,
            Self::Literal { .. } => SyntaxKind::LiteralExpr,
            Self::Unary { op, .. } => op.node_kind(),
            Self::Binary { op, .. } => op.kind(),
            Self::Paren { .. } => SyntaxKind::ParenExpr,
            Self::Function(_) => SyntaxKind::FunctionCallExpr,
            Self::Case(_) => SyntaxKind::CaseExpr,
            Self::Subquery { .. } => SyntaxKind::SubqueryExpr,
            Self::Cast(_) => SyntaxKind::CastExpr,
            Self::IsNull { .. } => SyntaxKind::IsNullExpr,
            Self::Between { .. } => SyntaxKind::BetweenExpr,
            Self::In { .. } => SyntaxKind::InExpr,
            Self::Like { .. } => SyntaxKind::LikeExpr,
            Self::Exists { .. } => SyntaxKind::ExistsExpr,
            Self::Wildcard { .. } => SyntaxKind::WildcardExpr,
        }
    }
}

impl_syntax_node!(
    FunctionCall => FunctionCallExpr,
    CaseExpression => CaseExpr,
    WhenClause => WhenClause,
    CastExpression => CastExpr,
    OverClause => OverClause,
);

/// Writes `items` separated by `", "`.
pub(crate) fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for OverClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OVER (")?;
        if !self.partition_by.is_empty() {
            f.write_str("PARTITION BY ")?;
            write_list(f, &self.partition_by)?;
            if !self.order_by.is_empty() {
                f.write_str(" ")?;
            }
        }
        if !self.order_by.is_empty() {
            f.write_str("ORDER BY ")?;
            write_list(f, &self.order_by)?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Keyword-named functions (LEFT, COALESCE, USER) print as written.
        match self.name.parts() {
            [single] if Keyword::from_str(single).is_some_and(Keyword::is_function_name) => {
                f.write_str(single)?;
            }
            _ => write!(f, "{}", self.name)?,
        }
        if self.niladic {
            return Ok(());
        }
        f.write_str("(")?;
        if self.distinct {
            f.write_str("DISTINCT ")?;
        }
        write_list(f, &self.args)?;
        f.write_str(")")?;
        if let Some(over) = &self.over {
            write!(f, " {over}")?;
        }
        Ok(())
    }
}

impl fmt::Display for CaseExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CASE")?;
        if let Some(operand) = &self.operand {
            write!(f, " {operand}")?;
        }
        for when in &self.when_clauses {
            write!(f, " WHEN {} THEN {}", when.condition, when.result)?;
        }
        if let Some(else_result) = &self.else_result {
            write!(f, " ELSE {else_result}")?;
        }
        f.write_str(" END")
    }
}

impl fmt::Display for CastExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CastKind::Cast => write!(f, "CAST({} AS {})", self.expr, self.data_type),
            CastKind::Convert | CastKind::TryConvert => {
                let name = if self.kind == CastKind::Convert {
                    "CONVERT"
                } else {
                    "TRY_CONVERT"
                };
                write!(f, "{name}({}, {}", self.data_type, self.expr)?;
                if let Some(style) = &self.style {
                    write!(f, ", {style}")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let not = |negated: bool| if negated { "NOT " } else { "" };
        match self {
            Self::Identifier(ident) => write!(f, "{ident}"),
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Unary { op, operand, .. } => match op {
                UnaryOperator::Not => write!(f, "NOT {operand}"),
                _ => {
                    let operand = operand.to_string();
                    // `- -x` must not become a `--` comment.
                    if operand.starts_with(['-', '+']) {
                        write!(f, "{} {operand}", op.as_str())
                    } else {
                        write!(f, "{}{operand}", op.as_str())
                    }
                }
            },
            Self::Binary {
                left, op, right, ..
            } => write!(f, "{left} {op} {right}"),
            Self::Paren { expr, .. } => write!(f, "({expr})"),
            Self::Function(call) => write!(f, "{call}"),
            Self::Case(case) => write!(f, "{case}"),
            Self::Subquery { query, .. } => write!(f, "({query})"),
            Self::Cast(cast) => write!(f, "{cast}"),
            Self::IsNull { expr, negated, .. } => write!(f, "{expr} IS {}NULL", not(*negated)),
            Self::Between {
                expr,
                low,
                high,
                negated,
                ..
            } => write!(f, "{expr} {}BETWEEN {low} AND {high}", not(*negated)),
            Self::In {
                expr,
                list,
                negated,
                ..
            } => {
                write!(f, "{expr} {}IN (", not(*negated))?;
                match list {
                    InList::Values(values) => write_list(f, values)?,
                    InList::Subquery(query) => write!(f, "{query}")?,
                }
                f.write_str(")")
            }
            Self::Like {
                expr,
                pattern,
                escape,
                negated,
                ..
            } => {
                write!(f, "{expr} {}LIKE {pattern}", not(*negated))?;
                if let Some(escape) = escape {
                    write!(f, " ESCAPE {escape}")?;
                }
                Ok(())
            }
            Self::Exists { query, .. } => write!(f, "EXISTS ({query})"),
            Self::Wildcard { qualifier, .. } => match qualifier {
                Some(qualifier) => write!(f, "{qualifier}.*"),
                None => f.write_str("*"),
            },
        }
    }
}
