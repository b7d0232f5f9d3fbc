//! Byte offset to line/column conversion for reporting.

/// Fast line/column lookup using pre-calculated line offsets.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<u32>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push((i + 1) as u32);
            }
        }
        Self { line_starts }
    }

    /// Calculate line and column from byte offset.
    /// Returns (line, column) where both are 1-indexed, matching editor conventions.
    pub fn line_column(&self, offset: u32, source: &str) -> (u32, u32) {
        // line_starts[0] == 0, so Err(0) is unreachable
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(0) => 0,
            Err(idx) => idx - 1,
        };

        let line_start = self.line_starts[line_idx] as usize;
        let line = (line_idx + 1) as u32;

        // Column counts characters, not bytes
        let column = match source.get(line_start..offset as usize) {
            Some(prefix) => prefix.chars().count() as u32 + 1,
            None => 1,
        };

        (line, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_column_calculation() {
        let source = "line 1\nline 2\nline 3";
        let index = LineIndex::new(source);

        assert_eq!(index.line_column(0, source), (1, 1));
        assert_eq!(index.line_column(7, source), (2, 1));
        assert_eq!(index.line_column(16, source), (3, 3));
    }

    #[test]
    fn test_column_counts_characters() {
        let source = "const é = <nav />;";
        let index = LineIndex::new(source);
        // 'é' is two bytes, '<' sits at byte 11 but character 10
        assert_eq!(index.line_column(11, source), (1, 11));
    }
}
