//! Occurrence reporting over a loaded index
//!
//! Turns the rank range of each pattern into either a count or the lines
//! that contain each occurrence.

use crate::index::suffix_array::{BuiltSuffixArray, RangeSearcher, SuffixArrayReader};
use crate::utils::line_bounds;
use std::collections::HashSet;
use std::ops::Range;

/// One occurrence of a pattern, located on its line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    /// Index of the pattern in the query list
    pub pattern: usize,
    /// Text offset where the occurrence starts
    pub position: usize,
    /// Byte range of the enclosing line (line break excluded)
    pub line: Range<usize>,
    /// Matched bytes relative to the line start, clipped to the line
    pub highlight: Range<usize>,
}

/// Runs pattern queries against one index
pub struct QueryExecutor<'a> {
    text: &'a [u8],
    searcher: RangeSearcher<'a>,
}

impl<'a> QueryExecutor<'a> {
    pub fn new(reader: &'a SuffixArrayReader) -> Self {
        Self::over(reader.index())
    }

    pub fn over(index: &'a BuiltSuffixArray) -> Self {
        Self {
            text: &index.text,
            searcher: RangeSearcher::over(index),
        }
    }

    /// Total occurrences of all patterns
    pub fn count<P: AsRef<[u8]>>(&self, patterns: &[P]) -> usize {
        patterns
            .iter()
            .map(|p| self.searcher.count(p.as_ref()))
            .sum()
    }

    /// Every occurrence of every pattern, in pattern order then rank order
    ///
    /// Several occurrences on the same line each produce their own entry.
    pub fn matches<P: AsRef<[u8]>>(&self, patterns: &[P]) -> Vec<LineMatch> {
        let mut out = Vec::new();

        for (index, pattern) in patterns.iter().enumerate() {
            let pattern = pattern.as_ref();
            for rank in self.searcher.find(pattern) {
                let position = self.searcher.position(rank);
                let line = line_bounds(self.text, position);
                let start = position - line.start;
                let end = (position + pattern.len()).min(line.end).max(position) - line.start;

                out.push(LineMatch {
                    pattern: index,
                    position,
                    line,
                    highlight: start..end,
                });
            }
        }

        out
    }

    /// Number of distinct lines holding at least one occurrence of any pattern
    pub fn line_count<P: AsRef<[u8]>>(&self, patterns: &[P]) -> usize {
        let mut lines = HashSet::new();
        for pattern in patterns {
            for rank in self.searcher.find(pattern.as_ref()) {
                lines.insert(line_bounds(self.text, self.searcher.position(rank)).start);
            }
        }
        lines.len()
    }

    /// Text of a reported line
    pub fn line_text(&self, m: &LineMatch) -> &'a [u8] {
        &self.text[m.line.clone()]
    }
}
