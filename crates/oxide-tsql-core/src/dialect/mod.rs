//! SQL dialect support.
//!
//! Different servers and editions accept slightly different T-SQL. The
//! parser does not know about editions; it only asks a [`FeatureSet`]
//! whether a named capability is enabled. This module builds those sets
//! and provides a trait for dialect-specific behavior.

mod generic;
mod sqlserver;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub use generic::GenericDialect;
pub use sqlserver::SqlServer;

/// A set of named capabilities the parser may query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSet {
    features: BTreeSet<String>,
}

impl FeatureSet {
    /// `#name` temporary tables.
    pub const TEMP_TABLES: &'static str = "temp_tables";
    /// `##name` shared temporary tables.
    pub const SHARED_TEMP_TABLES: &'static str = "shared_temp_tables";
    /// `DECLARE @x INT = 1`
    pub const DECLARE_INITIALIZER: &'static str = "declare_initializer";
    /// `SET @x += 1`
    pub const COMPOUND_ASSIGNMENT: &'static str = "compound_assignment";
    /// `TRY_CONVERT(type, expr)`
    pub const TRY_CONVERT: &'static str = "try_convert";
    /// `CREATE OR ALTER`
    pub const CREATE_OR_ALTER: &'static str = "create_or_alter";
    /// `DROP TABLE IF EXISTS t`
    pub const DROP_IF_EXISTS: &'static str = "drop_if_exists";

    /// Creates an empty feature set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a capability.
    #[must_use]
    pub fn with(mut self, feature: impl Into<String>) -> Self {
        self.insert(feature);
        self
    }

    /// Adds a capability in place.
    pub fn insert(&mut self, feature: impl Into<String>) {
        self.features.insert(feature.into());
    }

    /// Returns true if the capability is enabled.
    #[must_use]
    pub fn supports(&self, feature: &str) -> bool {
        self.features.contains(feature)
    }

    /// Returns the enabled capabilities in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.features.iter().map(String::as_str)
    }

    /// Returns the number of enabled capabilities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns true if nothing is enabled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Builds the feature set of a dialect edition.
    ///
    /// `dialect` is `"sql-server"` (editions `"2005"` through `"2022"`,
    /// including `"2008r2"`) or `"generic"` (edition ignored). Returns
    /// `None` for unknown dialects or editions.
    #[must_use]
    pub fn for_edition(dialect: &str, edition: &str) -> Option<Self> {
        match dialect.to_ascii_lowercase().as_str() {
            "sql-server" | "sqlserver" | "mssql" => {
                SqlServer::from_edition(edition).map(|server| server.features())
            }
            "generic" => Some(GenericDialect::new().features()),
            _ => None,
        }
    }
}

impl<S: Into<String>> FromIterator<S> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            features: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Trait for SQL dialect-specific behavior.
pub trait Dialect {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the capabilities this dialect enables.
    fn features(&self) -> FeatureSet;

    /// Returns the opening identifier quote character.
    fn identifier_quote(&self) -> char {
        '"'
    }

    /// Quotes an identifier, doubling embedded closing quotes.
    fn quote_identifier(&self, name: &str) -> String {
        let open = self.identifier_quote();
        let close = if open == '[' { ']' } else { open };
        let escaped = name.replace(close, &format!("{close}{close}"));
        format!("{open}{escaped}{close}")
    }
}
