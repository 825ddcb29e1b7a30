//! Byte ranges into timeline source text.

use std::ops::Range;

/// A byte range in the source document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a new span from a byte range.
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    /// Get the start offset of the span
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get the end offset of the span
    pub fn end(&self) -> usize {
        self.end
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Converts a 1-based line/column position into a one-character span,
    /// clamped to the source length.
    ///
    /// Columns count bytes, which is how `serde_json` reports them.
    pub fn at_line_column(source: &str, line: usize, column: usize) -> Self {
        let line_start: usize = source
            .split_inclusive('\n')
            .take(line.saturating_sub(1))
            .map(str::len)
            .sum();
        let offset = (line_start + column.saturating_sub(1)).min(source.len());
        let end = (offset + 1).min(source.len());
        Self::new(offset..end)
    }

    /// Finds the first occurrence of `literal` as a JSON string value and
    /// returns the span of its contents, excluding the quotes.
    pub fn find_string_literal(source: &str, literal: &str) -> Option<Self> {
        let needle = format!("\"{literal}\"");
        source
            .find(&needle)
            .map(|start| Self::new(start + 1..start + needle.len() - 1))
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range)
    }
}
