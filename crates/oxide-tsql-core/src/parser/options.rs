//! Parser configuration.

use core::fmt;
use std::rc::Rc;

use serde::Deserialize;

use super::error::ErrorRecord;
use crate::dialect::FeatureSet;
use crate::lexer::ScannerOptions;

/// Callback invoked once per reported diagnostic.
#[derive(Clone)]
pub struct ErrorCallback(Rc<dyn Fn(&ErrorRecord)>);

impl ErrorCallback {
    /// Wraps a closure.
    pub fn new(callback: impl Fn(&ErrorRecord) + 'static) -> Self {
        Self(Rc::new(callback))
    }

    /// Invokes the callback.
    pub fn call(&self, record: &ErrorRecord) {
        (self.0)(record);
    }
}

impl fmt::Debug for ErrorCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ErrorCallback(..)")
    }
}

/// Parser settings.
///
/// Deserializes from any serde format; missing fields take their default
/// values. The error callback can only be set from code.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Source path, copied into diagnostics.
    pub path: Option<String>,
    /// Drop whitespace and comments (default `true`).
    pub skip_trivia: bool,
    /// Disable keyword lookup: every identifier-shaped run scans as a
    /// plain name.
    pub skip_keyword_tracking: bool,
    /// Record consumed keyword tokens in [`Parser::keywords`] (default
    /// `true`).
    ///
    /// [`Parser::keywords`]: crate::Parser::keywords
    pub collect_keywords: bool,
    /// Enabled capabilities; `None` permits everything.
    pub features: Option<FeatureSet>,
    /// Diagnostic callback.
    #[serde(skip)]
    pub error: Option<ErrorCallback>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            path: None,
            skip_trivia: true,
            skip_keyword_tracking: false,
            collect_keywords: true,
            features: None,
            error: None,
        }
    }
}

impl ParserOptions {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Restricts the parser to a feature set.
    #[must_use]
    pub fn with_features(mut self, features: FeatureSet) -> Self {
        self.features = Some(features);
        self
    }

    /// Sets whether whitespace and comments are dropped.
    #[must_use]
    pub const fn with_skip_trivia(mut self, skip: bool) -> Self {
        self.skip_trivia = skip;
        self
    }

    /// Sets whether keyword lookup is turned off.
    #[must_use]
    pub const fn with_skip_keyword_tracking(mut self, skip: bool) -> Self {
        self.skip_keyword_tracking = skip;
        self
    }

    /// Sets whether consumed keyword tokens are recorded.
    #[must_use]
    pub const fn with_collect_keywords(mut self, collect: bool) -> Self {
        self.collect_keywords = collect;
        self
    }

    /// Installs a diagnostic callback.
    #[must_use]
    pub fn on_error(mut self, callback: impl Fn(&ErrorRecord) + 'static) -> Self {
        self.error = Some(ErrorCallback::new(callback));
        self
    }

    /// Returns true if `feature` is enabled, or no feature set is configured.
    #[must_use]
    pub fn supports(&self, feature: &str) -> bool {
        self.features
            .as_ref()
            .map_or(true, |features| features.supports(feature))
    }

    /// Derives the scanner settings.
    #[must_use]
    pub fn scanner_options(&self) -> ScannerOptions {
        ScannerOptions {
            skip_trivia: self.skip_trivia,
            temp_tables: self.supports(FeatureSet::TEMP_TABLES),
            shared_temp_tables: self.supports(FeatureSet::SHARED_TEMP_TABLES),
            skip_keyword_lookup: self.skip_keyword_tracking,
        }
    }
}
