//! Line lookup inside the reconstructed text

use crate::index::suffix_array::types::LINE_BREAK;
use std::ops::Range;

/// Byte range of the line containing `pos`, without its line break
///
/// The line starts after the nearest line break before `pos` (or at the
/// start of the text) and ends at the next line break at or after `pos`
/// (or at the end of the text). A `pos` that is itself a line break belongs
/// to the line it terminates.
pub fn line_bounds(text: &[u8], pos: usize) -> Range<usize> {
    let pos = pos.min(text.len());
    let start = memchr::memrchr(LINE_BREAK, &text[..pos]).map_or(0, |i| i + 1);
    let end = memchr::memchr(LINE_BREAK, &text[pos..]).map_or(text.len(), |i| pos + i);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_middle_line() {
        let text = b"one\ntwo\nthree\n";
        assert_eq!(line_bounds(text, 5), 4..7);
        assert_eq!(&text[line_bounds(text, 5)], b"two");
    }

    #[test]
    fn test_first_line_has_no_preceding_break() {
        let text = b"alpha\nbeta\n";
        assert_eq!(line_bounds(text, 0), 0..5);
        assert_eq!(line_bounds(text, 3), 0..5);
    }

    #[test]
    fn test_last_line_without_trailing_break() {
        let text = b"alpha\nbeta";
        assert_eq!(line_bounds(text, 8), 6..10);
    }

    #[test]
    fn test_position_on_line_break() {
        let text = b"ab\ncd\n";
        assert_eq!(line_bounds(text, 2), 0..2);
        assert_eq!(line_bounds(text, 5), 3..5);
    }

    #[test]
    fn test_empty_lines() {
        let text = b"a\n\nb\n";
        assert_eq!(line_bounds(text, 2), 2..2);
    }
}
