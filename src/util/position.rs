/// Maps byte offsets in a source string to 1-based line and column numbers.
///
/// Line starts are computed once up front, so each lookup is a binary search
/// plus a character count within one line. Columns count characters, not
/// bytes.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Builds the index for `source`.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(source.match_indices('\n').map(|(i, _)| i + 1));
        Self { line_starts }
    }

    /// Returns the `(line, column)` of `offset` within `source`.
    ///
    /// `source` must be the string the index was built from. Offsets past the
    /// end are clamped to the end of the source.
    ///
    /// # Example
    /// ```
    /// use minipl::util::position::LineIndex;
    ///
    /// let source = "var x\n  print x;";
    /// let index = LineIndex::new(source);
    ///
    /// assert_eq!(index.position(source, 0), (1, 1));
    /// assert_eq!(index.position(source, 4), (1, 5));
    /// assert_eq!(index.position(source, 8), (2, 3));
    /// ```
    #[must_use]
    pub fn position(&self, source: &str, offset: usize) -> (usize, usize) {
        let offset = offset.min(source.len());
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let start = self.line_starts[line - 1];
        let column = source.get(start..offset).map_or(0, |s| s.chars().count()) + 1;
        (line, column)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_source_is_line_one() {
        let index = LineIndex::new("");
        assert_eq!(index.position("", 0), (1, 1));
    }

    #[test]
    fn newline_belongs_to_its_line() {
        let source = "ab\ncd";
        let index = LineIndex::new(source);
        assert_eq!(index.position(source, 2), (1, 3));
        assert_eq!(index.position(source, 3), (2, 1));
    }

    #[test]
    fn columns_count_characters() {
        let source = "\"äö\" x";
        let index = LineIndex::new(source);
        // 'x' sits after two two-byte characters
        assert_eq!(index.position(source, 7), (1, 6));
    }

    #[test]
    fn end_of_source_after_trailing_newline() {
        let source = "x;\n";
        let index = LineIndex::new(source);
        assert_eq!(index.position(source, source.len()), (2, 1));
    }
}
