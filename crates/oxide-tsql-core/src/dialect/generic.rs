//! Generic SQL dialect.

use super::{Dialect, FeatureSet};

/// A dialect without T-SQL extensions: no temp tables, no edition-gated
/// syntax.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericDialect;

impl GenericDialect {
    /// Creates a new generic dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for GenericDialect {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn features(&self) -> FeatureSet {
        FeatureSet::new()
    }
}
