//! Line and column lookup for byte offsets.

/// Table of line-start offsets for one source text.
///
/// Lines are separated by `\n`; a preceding `\r` stays part of the line
/// it ends. Lines and columns are 1-based, columns count characters.
#[derive(Debug, Clone)]
pub struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    /// Builds the index for `source`.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let starts = core::iter::once(0)
            .chain(
                source
                    .bytes()
                    .enumerate()
                    .filter(|&(_, b)| b == b'\n')
                    .map(|(i, _)| i + 1),
            )
            .collect();
        Self { starts }
    }

    /// Returns the number of lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// Returns the 1-based line containing `offset`.
    #[must_use]
    pub fn line_of(&self, offset: usize) -> usize {
        self.starts.partition_point(|&start| start <= offset).max(1)
    }

    /// Returns the byte offset where the 1-based `line` starts.
    #[must_use]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        line.checked_sub(1).and_then(|i| self.starts.get(i).copied())
    }

    /// Returns the 1-based column of `offset` in `source`.
    ///
    /// Offsets inside a multi-byte character or past the end are clamped.
    #[must_use]
    pub fn column_of(&self, source: &str, offset: usize) -> usize {
        let offset = offset.min(source.len());
        let start = self.line_start(self.line_of(offset)).unwrap_or(0);
        let prefix = source[start..]
            .char_indices()
            .take_while(|&(i, _)| start + i < offset)
            .count();
        prefix + 1
    }
}
