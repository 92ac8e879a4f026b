//! The syntax-kind taxonomy shared by tokens and AST nodes.

use core::fmt;

use serde::Serialize;

/// T-SQL keywords.
///
/// The table covers the reserved words of SQL Server plus `GO`, `CAST`
/// and `PARTITION`, which the parser needs to recognize as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Keyword {
    Add,
    All,
    Alter,
    And,
    Any,
    As,
    Asc,
    Authorization,
    Backup,
    Begin,
    Between,
    Break,
    Browse,
    Bulk,
    By,
    Cascade,
    Case,
    Cast,
    Check,
    Checkpoint,
    Close,
    Clustered,
    Coalesce,
    Collate,
    Column,
    Commit,
    Compute,
    Constraint,
    Contains,
    Containstable,
    Continue,
    Convert,
    Create,
    Cross,
    Current,
    CurrentDate,
    CurrentTime,
    CurrentTimestamp,
    CurrentUser,
    Cursor,
    Database,
    Dbcc,
    Deallocate,
    Declare,
    Default,
    Delete,
    Deny,
    Desc,
    Disk,
    Distinct,
    Distributed,
    Double,
    Drop,
    Dump,
    Else,
    End,
    Errlvl,
    Escape,
    Except,
    Exec,
    Execute,
    Exists,
    Exit,
    External,
    Fetch,
    File,
    Fillfactor,
    For,
    Foreign,
    Freetext,
    Freetexttable,
    From,
    Full,
    Function,
    Go,
    Goto,
    Grant,
    Group,
    Having,
    Holdlock,
    Identity,
    IdentityInsert,
    Identitycol,
    If,
    In,
    Index,
    Inner,
    Insert,
    Intersect,
    Into,
    Is,
    Join,
    Key,
    Kill,
    Left,
    Like,
    Lineno,
    Load,
    Merge,
    National,
    Nocheck,
    Nonclustered,
    Not,
    Null,
    Nullif,
    Of,
    Off,
    Offsets,
    On,
    Open,
    Opendatasource,
    Openquery,
    Openrowset,
    Openxml,
    Option,
    Or,
    Order,
    Outer,
    Over,
    Partition,
    Percent,
    Pivot,
    Plan,
    Precision,
    Primary,
    Print,
    Proc,
    Procedure,
    Public,
    Raiserror,
    Read,
    Readtext,
    Reconfigure,
    References,
    Replication,
    Restore,
    Restrict,
    Return,
    Revert,
    Revoke,
    Right,
    Rollback,
    Rowcount,
    Rowguidcol,
    Rule,
    Save,
    Schema,
    Securityaudit,
    Select,
    Semantickeyphrasetable,
    Semanticsimilaritydetailstable,
    Semanticsimilaritytable,
    SessionUser,
    Set,
    Setuser,
    Shutdown,
    Some,
    Statistics,
    SystemUser,
    Table,
    Tablesample,
    Textsize,
    Then,
    To,
    Top,
    Tran,
    Transaction,
    Trigger,
    Truncate,
    TryConvert,
    Tsequal,
    Union,
    Unique,
    Unpivot,
    Update,
    Updatetext,
    Use,
    User,
    Values,
    Varying,
    View,
    Waitfor,
    When,
    Where,
    While,
    With,
    Writetext,
}

impl Keyword {
    /// Attempts to parse a keyword from a string (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait, clippy::too_many_lines)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "ADD" => Some(Self::Add),
            "ALL" => Some(Self::All),
            "ALTER" => Some(Self::Alter),
            "AND" => Some(Self::And),
            "ANY" => Some(Self::Any),
            "AS" => Some(Self::As),
            "ASC" => Some(Self::Asc),
            "AUTHORIZATION" => Some(Self::Authorization),
            "BACKUP" => Some(Self::Backup),
            "BEGIN" => Some(Self::Begin),
            "BETWEEN" => Some(Self::Between),
            "BREAK" => Some(Self::Break),
            "BROWSE" => Some(Self::Browse),
            "BULK" => Some(Self::Bulk),
            "BY" => Some(Self::By),
            "CASCADE" => Some(Self::Cascade),
            "CASE" => Some(Self::Case),
            "CAST" => Some(Self::Cast),
            "CHECK" => Some(Self::Check),
            "CHECKPOINT" => Some(Self::Checkpoint),
            "CLOSE" => Some(Self::Close),
            "CLUSTERED" => Some(Self::Clustered),
            "COALESCE" => Some(Self::Coalesce),
            "COLLATE" => Some(Self::Collate),
            "COLUMN" => Some(Self::Column),
            "COMMIT" => Some(Self::Commit),
            "COMPUTE" => Some(Self::Compute),
            "CONSTRAINT" => Some(Self::Constraint),
            "CONTAINS" => Some(Self::Contains),
            "CONTAINSTABLE" => Some(Self::Containstable),
            "CONTINUE" => Some(Self::Continue),
            "CONVERT" => Some(Self::Convert),
            "CREATE" => Some(Self::Create),
            "CROSS" => Some(Self::Cross),
            "CURRENT" => Some(Self::Current),
            "CURRENT_DATE" => Some(Self::CurrentDate),
            "CURRENT_TIME" => Some(Self::CurrentTime),
            "CURRENT_TIMESTAMP" => Some(Self::CurrentTimestamp),
            "CURRENT_USER" => Some(Self::CurrentUser),
            "CURSOR" => Some(Self::Cursor),
            "DATABASE" => Some(Self::Database),
            "DBCC" => Some(Self::Dbcc),
            "DEALLOCATE" => Some(Self::Deallocate),
            "DECLARE" => Some(Self::Declare),
            "DEFAULT" => Some(Self::Default),
            "DELETE" => Some(Self::Delete),
            "DENY" => Some(Self::Deny),
            "DESC" => Some(Self::Desc),
            "DISK" => Some(Self::Disk),
            "DISTINCT" => Some(Self::Distinct),
            "DISTRIBUTED" => Some(Self::Distributed),
            "DOUBLE" => Some(Self::Double),
            "DROP" => Some(Self::Drop),
            "DUMP" => Some(Self::Dump),
            "ELSE" => Some(Self::Else),
            "END" => Some(Self::End),
            "ERRLVL" => Some(Self::Errlvl),
            "ESCAPE" => Some(Self::Escape),
            "EXCEPT" => Some(Self::Except),
            "EXEC" => Some(Self::Exec),
            "EXECUTE" => Some(Self::Execute),
            "EXISTS" => Some(Self::Exists),
            "EXIT" => Some(Self::Exit),
            "EXTERNAL" => Some(Self::External),
            "FETCH" => Some(Self::Fetch),
            "FILE" => Some(Self::File),
            "FILLFACTOR" => Some(Self::Fillfactor),
            "FOR" => Some(Self::For),
            "FOREIGN" => Some(Self::Foreign),
            "FREETEXT" => Some(Self::Freetext),
            "FREETEXTTABLE" => Some(Self::Freetexttable),
            "FROM" => Some(Self::From),
            "FULL" => Some(Self::Full),
            "FUNCTION" => Some(Self::Function),
            "GO" => Some(Self::Go),
            "GOTO" => Some(Self::Goto),
            "GRANT" => Some(Self::Grant),
            "GROUP" => Some(Self::Group),
            "HAVING" => Some(Self::Having),
            "HOLDLOCK" => Some(Self::Holdlock),
            "IDENTITY" => Some(Self::Identity),
            "IDENTITY_INSERT" => Some(Self::IdentityInsert),
            "IDENTITYCOL" => Some(Self::Identitycol),
            "IF" => Some(Self::If),
            "IN" => Some(Self::In),
            "INDEX" => Some(Self::Index),
            "INNER" => Some(Self::Inner),
            "INSERT" => Some(Self::Insert),
            "INTERSECT" => Some(Self::Intersect),
            "INTO" => Some(Self::Into),
            "IS" => Some(Self::Is),
            "JOIN" => Some(Self::Join),
            "KEY" => Some(Self::Key),
            "KILL" => Some(Self::Kill),
            "LEFT" => Some(Self::Left),
            "LIKE" => Some(Self::Like),
            "LINENO" => Some(Self::Lineno),
            "LOAD" => Some(Self::Load),
            "MERGE" => Some(Self::Merge),
            "NATIONAL" => Some(Self::National),
            "NOCHECK" => Some(Self::Nocheck),
            "NONCLUSTERED" => Some(Self::Nonclustered),
            "NOT" => Some(Self::Not),
            "NULL" => Some(Self::Null),
            "NULLIF" => Some(Self::Nullif),
            "OF" => Some(Self::Of),
            "OFF" => Some(Self::Off),
            "OFFSETS" => Some(Self::Offsets),
            "ON" => Some(Self::On),
            "OPEN" => Some(Self::Open),
            "OPENDATASOURCE" => Some(Self::Opendatasource),
            "OPENQUERY" => Some(Self::Openquery),
            "OPENROWSET" => Some(Self::Openrowset),
            "OPENXML" => Some(Self::Openxml),
            "OPTION" => Some(Self::Option),
            "OR" => Some(Self::Or),
            "ORDER" => Some(Self::Order),
            "OUTER" => Some(Self::Outer),
            "OVER" => Some(Self::Over),
            "PARTITION" => Some(Self::Partition),
            "PERCENT" => Some(Self::Percent),
            "PIVOT" => Some(Self::Pivot),
            "PLAN" => Some(Self::Plan),
            "PRECISION" => Some(Self::Precision),
            "PRIMARY" => Some(Self::Primary),
            "PRINT" => Some(Self::Print),
            "PROC" => Some(Self::Proc),
            "PROCEDURE" => Some(Self::Procedure),
            "PUBLIC" => Some(Self::Public),
            "RAISERROR" => Some(Self::Raiserror),
            "READ" => Some(Self::Read),
            "READTEXT" => Some(Self::Readtext),
            "RECONFIGURE" => Some(Self::Reconfigure),
            "REFERENCES" => Some(Self::References),
            "REPLICATION" => Some(Self::Replication),
            "RESTORE" => Some(Self::Restore),
            "RESTRICT" => Some(Self::Restrict),
            "RETURN" => Some(Self::Return),
            "REVERT" => Some(Self::Revert),
            "REVOKE" => Some(Self::Revoke),
            "RIGHT" => Some(Self::Right),
            "ROLLBACK" => Some(Self::Rollback),
            "ROWCOUNT" => Some(Self::Rowcount),
            "ROWGUIDCOL" => Some(Self::Rowguidcol),
            "RULE" => Some(Self::Rule),
            "SAVE" => Some(Self::Save),
            "SCHEMA" => Some(Self::Schema),
            "SECURITYAUDIT" => Some(Self::Securityaudit),
            "SELECT" => Some(Self::Select),
            "SEMANTICKEYPHRASETABLE" => Some(Self::Semantickeyphrasetable),
            "SEMANTICSIMILARITYDETAILSTABLE" => Some(Self::Semanticsimilaritydetailstable),
            "SEMANTICSIMILARITYTABLE" => Some(Self::Semanticsimilaritytable),
            "SESSION_USER" => Some(Self::SessionUser),
            "SET" => Some(Self::Set),
            "SETUSER" => Some(Self::Setuser),
            "SHUTDOWN" => Some(Self::Shutdown),
            "SOME" => Some(Self::Some),
            "STATISTICS" => Some(Self::Statistics),
            "SYSTEM_USER" => Some(Self::SystemUser),
            "TABLE" => Some(Self::Table),
            "TABLESAMPLE" => Some(Self::Tablesample),
            "TEXTSIZE" => Some(Self::Textsize),
            "THEN" => Some(Self::Then),
            "TO" => Some(Self::To),
            "TOP" => Some(Self::Top),
            "TRAN" => Some(Self::Tran),
            "TRANSACTION" => Some(Self::Transaction),
            "TRIGGER" => Some(Self::Trigger),
            "TRUNCATE" => Some(Self::Truncate),
            "TRY_CONVERT" => Some(Self::TryConvert),
            "TSEQUAL" => Some(Self::Tsequal),
            "UNION" => Some(Self::Union),
            "UNIQUE" => Some(Self::Unique),
            "UNPIVOT" => Some(Self::Unpivot),
            "UPDATE" => Some(Self::Update),
            "UPDATETEXT" => Some(Self::Updatetext),
            "USE" => Some(Self::Use),
            "USER" => Some(Self::User),
            "VALUES" => Some(Self::Values),
            "VARYING" => Some(Self::Varying),
            "VIEW" => Some(Self::View),
            "WAITFOR" => Some(Self::Waitfor),
            "WHEN" => Some(Self::When),
            "WHERE" => Some(Self::Where),
            "WHILE" => Some(Self::While),
            "WITH" => Some(Self::With),
            "WRITETEXT" => Some(Self::Writetext),
            _ => None,
        }
    }

    /// Returns true for reserved words that are also function names.
    #[must_use]
    pub const fn is_function_name(self) -> bool {
        matches!(
            self,
            Self::Coalesce | Self::Nullif | Self::Left | Self::Right | Self::Identity
        ) || self.is_niladic_function()
    }

    /// Returns true for functions called without parentheses.
    #[must_use]
    pub const fn is_niladic_function(self) -> bool {
        matches!(
            self,
            Self::CurrentTimestamp
                | Self::CurrentUser
                | Self::CurrentDate
                | Self::CurrentTime
                | Self::SessionUser
                | Self::SystemUser
                | Self::User
        )
    }

    /// Returns the keyword as a string.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::All => "ALL",
            Self::Alter => "ALTER",
            Self::And => "AND",
            Self::Any => "ANY",
            Self::As => "AS",
            Self::Asc => "ASC",
            Self::Authorization => "AUTHORIZATION",
            Self::Backup => "BACKUP",
            Self::Begin => "BEGIN",
            Self::Between => "BETWEEN",
            Self::Break => "BREAK",
            Self::Browse => "BROWSE",
            Self::Bulk => "BULK",
            Self::By => "BY",
            Self::Cascade => "CASCADE",
            Self::Case => "CASE",
            Self::Cast => "CAST",
            Self::Check => "CHECK",
            Self::Checkpoint => "CHECKPOINT",
            Self::Close => "CLOSE",
            Self::Clustered => "CLUSTERED",
            Self::Coalesce => "COALESCE",
            Self::Collate => "COLLATE",
            Self::Column => "COLUMN",
            Self::Commit => "COMMIT",
            Self::Compute => "COMPUTE",
            Self::Constraint => "CONSTRAINT",
            Self::Contains => "CONTAINS",
            Self::Containstable => "CONTAINSTABLE",
            Self::Continue => "CONTINUE",
            Self::Convert => "CONVERT",
            Self::Create => "CREATE",
            Self::Cross => "CROSS",
            Self::Current => "CURRENT",
            Self::CurrentDate => "CURRENT_DATE",
            Self::CurrentTime => "CURRENT_TIME",
            Self::CurrentTimestamp => "CURRENT_TIMESTAMP",
            Self::CurrentUser => "CURRENT_USER",
            Self::Cursor => "CURSOR",
            Self::Database => "DATABASE",
            Self::Dbcc => "DBCC",
            Self::Deallocate => "DEALLOCATE",
            Self::Declare => "DECLARE",
            Self::Default => "DEFAULT",
            Self::Delete => "DELETE",
            Self::Deny => "DENY",
            Self::Desc => "DESC",
            Self::Disk => "DISK",
            Self::Distinct => "DISTINCT",
            Self::Distributed => "DISTRIBUTED",
            Self::Double => "DOUBLE",
            Self::Drop => "DROP",
            Self::Dump => "DUMP",
            Self::Else => "ELSE",
            Self::End => "END",
            Self::Errlvl => "ERRLVL",
            Self::Escape => "ESCAPE",
            Self::Except => "EXCEPT",
            Self::Exec => "EXEC",
            Self::Execute => "EXECUTE",
            Self::Exists => "EXISTS",
            Self::Exit => "EXIT",
            Self::External => "EXTERNAL",
            Self::Fetch => "FETCH",
            Self::File => "FILE",
            Self::Fillfactor => "FILLFACTOR",
            Self::For => "FOR",
            Self::Foreign => "FOREIGN",
            Self::Freetext => "FREETEXT",
            Self::Freetexttable => "FREETEXTTABLE",
            Self::From => "FROM",
            Self::Full => "FULL",
            Self::Function => "FUNCTION",
            Self::Go => "GO",
            Self::Goto => "GOTO",
            Self::Grant => "GRANT",
            Self::Group => "GROUP",
            Self::Having => "HAVING",
            Self::Holdlock => "HOLDLOCK",
            Self::Identity => "IDENTITY",
            Self::IdentityInsert => "IDENTITY_INSERT",
            Self::Identitycol => "IDENTITYCOL",
            Self::If => "IF",
            Self::In => "IN",
            Self::Index => "INDEX",
            Self::Inner => "INNER",
            Self::Insert => "INSERT",
            Self::Intersect => "INTERSECT",
            Self::Into => "INTO",
            Self::Is => "IS",
            Self::Join => "JOIN",
            Self::Key => "KEY",
            Self::Kill => "KILL",
            Self::Left => "LEFT",
            Self::Like => "LIKE",
            Self::Lineno => "LINENO",
            Self::Load => "LOAD",
            Self::Merge => "MERGE",
            Self::National => "NATIONAL",
            Self::Nocheck => "NOCHECK",
            Self::Nonclustered => "NONCLUSTERED",
            Self::Not => "NOT",
            Self::Null => "NULL",
            Self::Nullif => "NULLIF",
            Self::Of => "OF",
            Self::Off => "OFF",
            Self::Offsets => "OFFSETS",
            Self::On => "ON",
            Self::Open => "OPEN",
            Self::Opendatasource => "OPENDATASOURCE",
            Self::Openquery => "OPENQUERY",
            Self::Openrowset => "OPENROWSET",
            Self::Openxml => "OPENXML",
            Self::Option => "OPTION",
            Self::Or => "OR",
            Self::Order => "ORDER",
            Self::Outer => "OUTER",
            Self::Over => "OVER",
            Self::Partition => "PARTITION",
            Self::Percent => "PERCENT",
            Self::Pivot => "PIVOT",
            Self::Plan => "PLAN",
            Self::Precision => "PRECISION",
            Self::Primary => "PRIMARY",
            Self::Print => "PRINT",
            Self::Proc => "PROC",
            Self::Procedure => "PROCEDURE",
            Self::Public => "PUBLIC",
            Self::Raiserror => "RAISERROR",
            Self::Read => "READ",
            Self::Readtext => "READTEXT",
            Self::Reconfigure => "RECONFIGURE",
            Self::References => "REFERENCES",
            Self::Replication => "REPLICATION",
            Self::Restore => "RESTORE",
            Self::Restrict => "RESTRICT",
            Self::Return => "RETURN",
            Self::Revert => "REVERT",
            Self::Revoke => "REVOKE",
            Self::Right => "RIGHT",
            Self::Rollback => "ROLLBACK",
            Self::Rowcount => "ROWCOUNT",
            Self::Rowguidcol => "ROWGUIDCOL",
            Self::Rule => "RULE",
            Self::Save => "SAVE",
            Self::Schema => "SCHEMA",
            Self::Securityaudit => "SECURITYAUDIT",
            Self::Select => "SELECT",
            Self::Semantickeyphrasetable => "SEMANTICKEYPHRASETABLE",
            Self::Semanticsimilaritydetailstable => "SEMANTICSIMILARITYDETAILSTABLE",
            Self::Semanticsimilaritytable => "SEMANTICSIMILARITYTABLE",
            Self::SessionUser => "SESSION_USER",
            Self::Set => "SET",
            Self::Setuser => "SETUSER",
            Self::Shutdown => "SHUTDOWN",
            Self::Some => "SOME",
            Self::Statistics => "STATISTICS",
            Self::SystemUser => "SYSTEM_USER",
            Self::Table => "TABLE",
            Self::Tablesample => "TABLESAMPLE",
            Self::Textsize => "TEXTSIZE",
            Self::Then => "THEN",
            Self::To => "TO",
            Self::Top => "TOP",
            Self::Tran => "TRAN",
            Self::Transaction => "TRANSACTION",
            Self::Trigger => "TRIGGER",
            Self::Truncate => "TRUNCATE",
            Self::TryConvert => "TRY_CONVERT",
            Self::Tsequal => "TSEQUAL",
            Self::Union => "UNION",
            Self::Unique => "UNIQUE",
            Self::Unpivot => "UNPIVOT",
            Self::Update => "UPDATE",
            Self::Updatetext => "UPDATETEXT",
            Self::Use => "USE",
            Self::User => "USER",
            Self::Values => "VALUES",
            Self::Varying => "VARYING",
            Self::View => "VIEW",
            Self::Waitfor => "WAITFOR",
            Self::When => "WHEN",
            Self::Where => "WHERE",
            Self::While => "WHILE",
            Self::With => "WITH",
            Self::Writetext => "WRITETEXT",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of a token or syntax node.
///
/// Tokens and nodes share this one enumeration: the scanner produces the
/// lexical kinds, and every AST node reports one of the node kinds (or,
/// for binary expressions, the kind of its operator token).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SyntaxKind {
    // Trivia
    /// Spaces, tabs and line breaks.
    Whitespace,
    /// `-- ...` up to the end of the line.
    InlineComment,
    /// `/* ... */`, possibly nested.
    BlockComment,

    // Literals
    /// `42`, `3.14`
    NumericLiteral,
    /// `'text'`, `N'text'`
    StringLiteral,

    // Names
    /// A bare, possibly dotted, name (`dbo.users`).
    Name,
    /// `"name"` or `[name]`
    QuotedIdentifier,
    /// `@name`
    LocalVariable,
    /// `@@name`
    SystemVariable,
    /// `#name`
    TempTable,
    /// `##name`
    SharedTempTable,

    // Punctuation
    /// (
    OpenParen,
    /// )
    CloseParen,
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// .
    Dot,
    /// :
    Colon,

    // Operators
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,
    /// %
    Percent,
    /// &
    Ampersand,
    /// |
    Pipe,
    /// ^
    Caret,
    /// ~
    Tilde,
    /// =
    Equal,
    /// !=
    NotEqual,
    /// <>
    LessGreater,
    /// <
    LessThan,
    /// <=
    LessThanEqual,
    /// >
    GreaterThan,
    /// >=
    GreaterThanEqual,
    /// !<
    NotLessThan,
    /// !>
    NotGreaterThan,
    /// +=
    PlusEqual,
    /// -=
    MinusEqual,
    /// *=
    StarEqual,
    /// /=
    SlashEqual,
    /// %=
    PercentEqual,
    /// &=
    AmpersandEqual,
    /// |=
    PipeEqual,
    /// ^=
    CaretEqual,

    /// A reserved word.
    Keyword(Keyword),

    // Special
    /// End of input.
    Eof,
    /// Unrecognized character, or the "no token yet" sentinel.
    Unknown,

    // Names and expressions
    Identifier,
    IdentifierExpr,
    LiteralExpr,
    UnaryMinusExpr,
    UnaryPlusExpr,
    BitwiseNotExpr,
    LogicalNotExpr,
    ParenExpr,
    FunctionCallExpr,
    CaseExpr,
    WhenClause,
    SubqueryExpr,
    CastExpr,
    IsNullExpr,
    BetweenExpr,
    InExpr,
    LikeExpr,
    ExistsExpr,
    WildcardExpr,
    ColumnExpr,

    // Clauses
    TopClause,
    IntoClause,
    FromClause,
    TableSource,
    JoinedTable,
    OrderByItem,
    OverClause,
    UnionClause,

    // Definitions
    DataType,
    ColumnDefinition,
    ComputedColumnDefinition,
    ConstraintDefinition,
    IndexDefinition,
    TableDeclaration,
    VariableDeclaration,
    ProcedureParameter,
    ExecuteArgument,

    // Statements
    SelectStatement,
    SetStatement,
    SetOptionStatement,
    DeclareStatement,
    UseDatabaseStatement,
    GotoStatement,
    LabelStatement,
    WhileStatement,
    IfStatement,
    StatementBlock,
    InsertStatement,
    DeleteStatement,
    TruncateTableStatement,
    CreateTableStatement,
    AlterTableStatement,
    CreateProcedureStatement,
    AlterProcedureStatement,
    CreateViewStatement,
    AlterViewStatement,
    ExecuteProcedureStatement,
    ExecuteStringStatement,
    DropStatement,
    GoStatement,
    PrintStatement,
    ReturnStatement,
    BreakStatement,
    ContinueStatement,
}

impl SyntaxKind {
    /// Returns true for whitespace and comments.
    #[must_use]
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::InlineComment | Self::BlockComment
        )
    }

    /// Returns true for keyword tokens.
    #[must_use]
    pub const fn is_keyword(self) -> bool {
        matches!(self, Self::Keyword(_))
    }

    /// Returns the keyword if this is a keyword kind.
    #[must_use]
    pub const fn as_keyword(self) -> Option<Keyword> {
        match self {
            Self::Keyword(kw) => Some(kw),
            _ => None,
        }
    }

    /// Returns true for literal tokens, including `NULL`.
    #[must_use]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            Self::NumericLiteral | Self::StringLiteral | Self::Keyword(Keyword::Null)
        )
    }

    /// Returns true for tokens that can name an object or variable.
    #[must_use]
    pub const fn is_identifier_like(self) -> bool {
        matches!(
            self,
            Self::Name
                | Self::QuotedIdentifier
                | Self::LocalVariable
                | Self::SystemVariable
                | Self::TempTable
                | Self::SharedTempTable
        )
    }

    /// Returns true for the comparison operators.
    #[must_use]
    pub const fn is_comparison_operator(self) -> bool {
        matches!(
            self,
            Self::Equal
                | Self::NotEqual
                | Self::LessGreater
                | Self::LessThan
                | Self::LessThanEqual
                | Self::GreaterThan
                | Self::GreaterThanEqual
                | Self::NotLessThan
                | Self::NotGreaterThan
        )
    }

    /// Returns true for `+=`, `-=` and the other compound assignments.
    #[must_use]
    pub const fn is_compound_assignment(self) -> bool {
        matches!(
            self,
            Self::PlusEqual
                | Self::MinusEqual
                | Self::StarEqual
                | Self::SlashEqual
                | Self::PercentEqual
                | Self::AmpersandEqual
                | Self::PipeEqual
                | Self::CaretEqual
        )
    }

    /// Returns true for statement node kinds.
    #[must_use]
    pub const fn is_statement(self) -> bool {
        matches!(
            self,
            Self::SelectStatement
                | Self::SetStatement
                | Self::SetOptionStatement
                | Self::DeclareStatement
                | Self::UseDatabaseStatement
                | Self::GotoStatement
                | Self::LabelStatement
                | Self::WhileStatement
                | Self::IfStatement
                | Self::StatementBlock
                | Self::InsertStatement
                | Self::DeleteStatement
                | Self::TruncateTableStatement
                | Self::CreateTableStatement
                | Self::AlterTableStatement
                | Self::CreateProcedureStatement
                | Self::AlterProcedureStatement
                | Self::CreateViewStatement
                | Self::AlterViewStatement
                | Self::ExecuteProcedureStatement
                | Self::ExecuteStringStatement
                | Self::DropStatement
                | Self::GoStatement
                | Self::PrintStatement
                | Self::ReturnStatement
                | Self::BreakStatement
                | Self::ContinueStatement
        )
    }

    /// Returns the source text of fixed-spelling tokens.
    #[must_use]
    pub const fn symbol(self) -> Option<&'static str> {
        let text = match self {
            Self::OpenParen => "(",
            Self::CloseParen => ")",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Dot => ".",
            Self::Colon => ":",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Ampersand => "&",
            Self::Pipe => "|",
            Self::Caret => "^",
            Self::Tilde => "~",
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::LessGreater => "<>",
            Self::LessThan => "<",
            Self::LessThanEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanEqual => ">=",
            Self::NotLessThan => "!<",
            Self::NotGreaterThan => "!>",
            Self::PlusEqual => "+=",
            Self::MinusEqual => "-=",
            Self::StarEqual => "*=",
            Self::SlashEqual => "/=",
            Self::PercentEqual => "%=",
            Self::AmpersandEqual => "&=",
            Self::PipeEqual => "|=",
            Self::CaretEqual => "^=",
            Self::Keyword(kw) => kw.as_str(),
            _ => return None,
        };
        Some(text)
    }
}

impl From<Keyword> for SyntaxKind {
    fn from(keyword: Keyword) -> Self {
        Self::Keyword(keyword)
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword(kw) => write!(f, "{kw}"),
            Self::Eof => f.write_str("end of input"),
            Self::NumericLiteral => f.write_str("numeric literal"),
            Self::StringLiteral => f.write_str("string literal"),
            Self::Name => f.write_str("name"),
            Self::QuotedIdentifier => f.write_str("quoted identifier"),
            Self::LocalVariable => f.write_str("local variable"),
            Self::SystemVariable => f.write_str("system variable"),
            Self::TempTable | Self::SharedTempTable => f.write_str("temporary table"),
            other => match other.symbol() {
                Some(symbol) => write!(f, "'{symbol}'"),
                None => write!(f, "{other:?}"),
            },
        }
    }
}
