//! Submission text with a line table for offset → line/column mapping.
//!
//! The pipeline itself only produces spans; hosts use `SourceText` to turn
//! a diagnostic's span into a position a user can find.

use crate::Span;

/// The text of one submission plus the byte offset of every line start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceText {
    text: String,
    line_starts: Vec<u32>,
}

impl SourceText {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut line_starts = vec![0];
        for (offset, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(u32::try_from(offset + 1).unwrap_or(u32::MAX));
            }
        }
        SourceText { text, line_starts }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Zero-based index of the line containing `offset`.
    pub fn line_index(&self, offset: u32) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(index) => index,
            Err(insert_at) => insert_at.saturating_sub(1),
        }
    }

    /// One-based `(line, column)` for `offset`; the column counts bytes.
    pub fn line_col(&self, offset: u32) -> (usize, usize) {
        let line = self.line_index(offset);
        let column = (offset - self.line_starts[line]) as usize;
        (line + 1, column + 1)
    }

    /// Text of line `index` without its line terminator.
    pub fn line(&self, index: usize) -> &str {
        let start = self.line_starts.get(index).copied().unwrap_or(0) as usize;
        let end = self
            .line_starts
            .get(index + 1)
            .map_or(self.text.len(), |&next| next as usize);
        self.text[start..end].trim_end_matches(&['\r', '\n'][..])
    }

    /// Text covered by `span`, clamped to the source length.
    pub fn slice(&self, span: Span) -> &str {
        let end = (span.end as usize).min(self.text.len());
        let start = (span.start as usize).min(end);
        &self.text[start..end]
    }
}
