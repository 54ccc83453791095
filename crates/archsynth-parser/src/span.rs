//! Byte spans into the source text of a system description.

use std::ops::Range;

/// A half-open byte range into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
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

    /// Create the span of the character at a one-based `line` and `column`,
    /// as reported by the JSON reader.
    ///
    /// Positions past the end of `source` are clamped to an empty span at the
    /// end of the text.
    pub fn at_line_column(source: &str, line: usize, column: usize) -> Self {
        let line_start: usize = source
            .split_inclusive('\n')
            .take(line.saturating_sub(1))
            .map(str::len)
            .sum();
        let start = (line_start + column.saturating_sub(1)).min(source.len());
        // A column may point inside a multi-byte character.
        if !source.is_char_boundary(start) {
            return Self::new(source.len()..source.len());
        }
        let end = source[start..]
            .chars()
            .next()
            .map_or(start, |c| start + c.len_utf8());
        Self::new(start..end)
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len() {
        let span = Span::new(3..8);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        assert!(Span::default().is_empty());
    }

    #[test]
    fn test_at_line_column() {
        let source = "{\n  \"a\": ,\n}";
        // Line 2, column 8 is the stray comma.
        let span = Span::at_line_column(source, 2, 8);
        assert_eq!(&source[span.start()..span.end()], ",");
    }

    #[test]
    fn test_at_line_column_past_end() {
        let source = "{\"a\": 1";
        let span = Span::at_line_column(source, 1, 100);
        assert_eq!(span, Span::new(source.len()..source.len()));
    }
}
