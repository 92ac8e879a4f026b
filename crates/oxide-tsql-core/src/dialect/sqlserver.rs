//! Microsoft SQL Server dialect.

use super::{Dialect, FeatureSet};

/// SQL Server, identified by its release year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SqlServer {
    /// Release year (2005, 2008, 2012, ...).
    pub edition: u16,
}

/// Known releases, oldest first.
const EDITIONS: [u16; 8] = [2005, 2008, 2012, 2014, 2016, 2017, 2019, 2022];

impl SqlServer {
    /// Creates the dialect for a release year.
    #[must_use]
    pub const fn new(edition: u16) -> Self {
        Self { edition }
    }

    /// Returns the newest known release.
    #[must_use]
    pub const fn latest() -> Self {
        Self::new(EDITIONS[EDITIONS.len() - 1])
    }

    /// Parses an edition name such as `"2016"` or `"2008r2"`.
    #[must_use]
    pub fn from_edition(edition: &str) -> Option<Self> {
        let edition = edition.trim().to_ascii_lowercase();
        let year = edition.strip_suffix("r2").unwrap_or(&edition);
        let year: u16 = year.parse().ok()?;
        EDITIONS.contains(&year).then_some(Self::new(year))
    }
}

impl Default for SqlServer {
    fn default() -> Self {
        Self::latest()
    }
}

impl Dialect for SqlServer {
    fn name(&self) -> &'static str {
        "sql-server"
    }

    fn features(&self) -> FeatureSet {
        let mut features = FeatureSet::new()
            .with(FeatureSet::TEMP_TABLES)
            .with(FeatureSet::SHARED_TEMP_TABLES);
        if self.edition >= 2008 {
            features.insert(FeatureSet::DECLARE_INITIALIZER);
            features.insert(FeatureSet::COMPOUND_ASSIGNMENT);
        }
        if self.edition >= 2012 {
            features.insert(FeatureSet::TRY_CONVERT);
        }
        if self.edition >= 2016 {
            features.insert(FeatureSet::CREATE_OR_ALTER);
            features.insert(FeatureSet::DROP_IF_EXISTS);
        }
        features
    }

    fn identifier_quote(&self) -> char {
        '['
    }
}
