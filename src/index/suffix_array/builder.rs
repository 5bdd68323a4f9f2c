//! Suffix array builder
//!
//! Builds a suffix array over a single text by prefix doubling:
//! 1. Rank every suffix by its leading byte
//! 2. Re-rank by (rank[j], rank[j + k]) pairs for k = 1, 2, 4, ...
//! 3. Invert the final ranks into the suffix array
//!
//! The LCP array and the LCP-interval arrays are derived afterwards, and the
//! byte histogram is collected up front so the text never needs persisting.

use super::lcp::build_lcp;
use super::rank::RankAssigner;
use super::types::*;
use crate::error::Result;
use crate::utils::progress::{ProgressBar, ProgressStyle};
use log::debug;

/// Builder for constructing a suffix array index from a text
pub struct SuffixArrayBuilder {
    text: Vec<u8>,
    show_progress: bool,
}

impl SuffixArrayBuilder {
    /// Create a builder over `text`
    pub fn new(text: Vec<u8>) -> Self {
        Self {
            text,
            show_progress: false,
        }
    }

    /// Draw a progress bar over the doubling rounds
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Get the size of the text being indexed
    pub fn text_size(&self) -> usize {
        self.text.len()
    }

    /// Build the suffix array, LCP intervals and histogram
    ///
    /// Fails if the text holds a byte outside `0x00..=0x7e`.
    pub fn build(self) -> Result<BuiltSuffixArray> {
        let text = self.text;
        let histogram = CharHistogram::from_text(&text)?;

        let inv_sa = build_inverse_suffix_array(&text, self.show_progress);
        let suffix_array = invert(&inv_sa);

        let lcp = build_lcp(&text, &suffix_array, &inv_sa);
        debug!("lcp array built ({} entries)", lcp.len());

        let intervals = LcpIntervals::build(&lcp, text.len());
        debug!("lcp intervals built");

        Ok(BuiltSuffixArray {
            text,
            suffix_array,
            intervals,
            histogram,
        })
    }
}

/// Result of building (or loading) a suffix array index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltSuffixArray {
    /// Indexed text
    pub text: Vec<u8>,
    /// Sorted suffix array (positions into text)
    pub suffix_array: Vec<TextPosition>,
    /// Search acceleration arrays
    pub intervals: LcpIntervals,
    /// Byte histogram used to rebuild the text on load
    pub histogram: CharHistogram,
}

impl BuiltSuffixArray {
    /// Get statistics about this index
    pub fn stats(&self) -> SuffixArrayStats {
        SuffixArrayStats {
            text_size: self.text.len(),
            suffix_count: self.suffix_array.len(),
            interval_count: self.intervals.len(),
            distinct_bytes: self.histogram.distinct(),
        }
    }
}

/// Number of doubling rounds needed to order suffixes of a length-`n` text
fn doubling_rounds(n: usize) -> u32 {
    if n < 2 {
        0
    } else {
        usize::BITS - (n - 1).leading_zeros()
    }
}

/// Rank every suffix of `text`, returning the inverse suffix array
///
/// Two rank buffers alternate between the `current` and `next` roles; the
/// pair buffer is reused by every round.
fn build_inverse_suffix_array(text: &[u8], show_progress: bool) -> Vec<usize> {
    let n = text.len();
    let mut assigner = RankAssigner::with_capacity(n);
    let mut current = vec![0; n];
    let mut next = vec![0; n];

    let mut distinct = assigner.assign(text, &mut current);

    let rounds = doubling_rounds(n);
    let progress = if show_progress && rounds > 0 {
        let bar = ProgressBar::new(rounds as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} Sorting suffixes [{bar:30}] {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );
        Some(bar)
    } else {
        None
    };

    let mut pairs: Vec<(usize, usize)> = vec![(0, 0); n];
    for round in 0..rounds {
        // every suffix already distinguished; further rounds change nothing
        if distinct == n {
            break;
        }

        let k = 1usize << round;
        for j in 0..n {
            let second = if j + k < n { current[j + k] + 1 } else { 0 };
            pairs[j] = (current[j] + 1, second);
        }

        distinct = assigner.assign(&pairs, &mut next);
        std::mem::swap(&mut current, &mut next);

        debug!("doubling round {} (window {}): {} distinct ranks", round + 1, k, distinct);
        if let Some(bar) = &progress {
            bar.inc(1);
        }
    }

    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    current
}

/// Turn an inverse suffix array into a suffix array
fn invert(inv_sa: &[usize]) -> Vec<TextPosition> {
    let mut sa = vec![0; inv_sa.len()];
    for (pos, &rank) in inv_sa.iter().enumerate() {
        sa[rank] = pos;
    }
    sa
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IndexError;

    fn build(text: &[u8]) -> BuiltSuffixArray {
        SuffixArrayBuilder::new(text.to_vec()).build().unwrap()
    }

    #[test]
    fn test_suffix_array_correctness() {
        let built = build(b"banana\n");

        // 6: \n
        // 5: a\n
        // 3: ana\n
        // 1: anana\n
        // 0: banana\n
        // 4: na\n
        // 2: nana\n
        assert_eq!(built.suffix_array, vec![6, 5, 3, 1, 0, 4, 2]);
    }

    #[test]
    fn test_shorter_suffix_sorts_first() {
        // "a" < "aa" < "aaa" < "aaaa"
        let built = build(b"aaaa");
        assert_eq!(built.suffix_array, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_trivial_texts() {
        let empty = build(b"");
        assert!(empty.suffix_array.is_empty());
        assert!(empty.intervals.is_empty());
        assert_eq!(empty.histogram.total, 0);

        let single = build(b"x");
        assert_eq!(single.suffix_array, vec![0]);
        assert_eq!(single.intervals.len(), 1);
    }

    #[test]
    fn test_matches_naive_sort() {
        let text = b"the quick brown fox\njumps over the lazy dog\nthe end\n";
        let built = build(text);

        let mut naive: Vec<usize> = (0..text.len()).collect();
        naive.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
        assert_eq!(built.suffix_array, naive);
    }

    #[test]
    fn test_periodic_text_needs_all_rounds() {
        let text: Vec<u8> = b"ab".iter().copied().cycle().take(37).collect();
        let built = build(&text);

        let mut naive: Vec<usize> = (0..text.len()).collect();
        naive.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
        assert_eq!(built.suffix_array, naive);
    }

    #[test]
    fn test_rejects_unsupported_bytes() {
        let err = SuffixArrayBuilder::new(vec![b'a', 0x80, b'b']).build().unwrap_err();
        assert!(matches!(err, IndexError::UnsupportedByte { offset: 1, byte: 0x80 }));
    }

    #[test]
    fn test_doubling_rounds() {
        assert_eq!(doubling_rounds(0), 0);
        assert_eq!(doubling_rounds(1), 0);
        assert_eq!(doubling_rounds(2), 1);
        assert_eq!(doubling_rounds(3), 2);
        assert_eq!(doubling_rounds(4), 2);
        assert_eq!(doubling_rounds(5), 3);
        assert_eq!(doubling_rounds(1024), 10);
        assert_eq!(doubling_rounds(1025), 11);
    }

    #[test]
    fn test_stats() {
        let stats = build(b"banana\n").stats();
        assert_eq!(stats.text_size, 7);
        assert_eq!(stats.suffix_count, 7);
        assert_eq!(stats.interval_count, 7);
        assert_eq!(stats.distinct_bytes, 4);
    }
}
