//! Types for suffix array indexing
//!
//! This module defines the core types shared by the builder, the codec and
//! the searcher.

use crate::error::{IndexError, Result};

/// Position in the indexed text
pub type TextPosition = usize;

/// Number of byte values the index can represent (0x00..=0x7e)
pub const ALPHABET_SIZE: usize = 127;

/// Width of every integer field in the index file
pub const WORD_SIZE: usize = std::mem::size_of::<u64>();

/// Line separator used when reporting matches
pub const LINE_BREAK: u8 = b'\n';

/// Per-byte-value counts of the indexed text
///
/// Together with the suffix array this is enough to rebuild the text, so
/// the index file never stores text bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharHistogram {
    /// Occurrences of each byte value
    pub counts: [u64; ALPHABET_SIZE],
    /// Sum of all counts (the text length)
    pub total: u64,
}

impl CharHistogram {
    /// Count every byte of `text`, rejecting bytes outside the alphabet
    pub fn from_text(text: &[u8]) -> Result<Self> {
        let mut counts = [0u64; ALPHABET_SIZE];
        for (offset, &byte) in text.iter().enumerate() {
            let slot = counts
                .get_mut(byte as usize)
                .ok_or(IndexError::UnsupportedByte { offset, byte })?;
            *slot += 1;
        }

        Ok(Self {
            counts,
            total: text.len() as u64,
        })
    }

    /// Number of distinct byte values present
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Byte values with a non-zero count, most frequent first
    pub fn most_frequent(&self, limit: usize) -> Vec<(u8, u64)> {
        let mut present: Vec<(u8, u64)> = self
            .counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(b, &c)| (b as u8, c))
            .collect();
        present.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        present.truncate(limit);
        present
    }
}

impl Default for CharHistogram {
    fn default() -> Self {
        Self {
            counts: [0; ALPHABET_SIZE],
            total: 0,
        }
    }
}

/// Minimum LCP from each bisection midpoint to its left and right bound
///
/// Both arrays have one slot per rank. Only slots that are a midpoint of
/// the bisection of `[0, n-1]` carry meaning; the rest stay zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LcpIntervals {
    /// `left[h]` = min(lcp[l..h]) for the interval `(l, r)` that produced `h`
    pub left: Vec<usize>,
    /// `right[h]` = min(lcp[h..r]) for the interval `(l, r)` that produced `h`
    pub right: Vec<usize>,
}

impl LcpIntervals {
    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }
}

/// Summary of an index, used by `stats`
#[derive(Debug, Clone)]
pub struct SuffixArrayStats {
    pub text_size: usize,
    pub suffix_count: usize,
    pub interval_count: usize,
    pub distinct_bytes: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_counts() {
        let hist = CharHistogram::from_text(b"banana\n").unwrap();
        assert_eq!(hist.total, 7);
        assert_eq!(hist.counts[b'a' as usize], 3);
        assert_eq!(hist.counts[b'n' as usize], 2);
        assert_eq!(hist.counts[b'b' as usize], 1);
        assert_eq!(hist.counts[b'\n' as usize], 1);
        assert_eq!(hist.distinct(), 4);
    }

    #[test]
    fn test_histogram_rejects_high_bytes() {
        let err = CharHistogram::from_text(b"ok\x7fno").unwrap_err();
        match err {
            IndexError::UnsupportedByte { offset, byte } => {
                assert_eq!(offset, 2);
                assert_eq!(byte, 0x7f);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_most_frequent_ordering() {
        let hist = CharHistogram::from_text(b"banana\n").unwrap();
        assert_eq!(
            hist.most_frequent(2),
            vec![(b'a', 3), (b'n', 2)]
        );
        // ties broken by byte value
        assert_eq!(hist.most_frequent(4)[2..], [(b'\n', 1), (b'b', 1)]);
    }
}
