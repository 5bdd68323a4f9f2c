//! Accelerated range search over a suffix array
//!
//! Every suffix compares to a pattern as one of:
//! - `Less`: it sorts before every suffix that starts with the pattern
//!   (including a suffix that runs out while still matching)
//! - `Equal`: it starts with the pattern
//! - `Greater`: it sorts after every suffix that starts with the pattern
//!
//! In suffix array order these classes appear as `Less*, Equal*, Greater*`,
//! so the matching ranks are `[succ, pred]` where `succ` is the first rank
//! not `Less` and `pred` is the last rank not `Greater`.
//!
//! Both bounds come from the same bisection of `[0, n-1]`. The LCP of the
//! pattern with the current left and right bound is carried along, and the
//! precomputed interval minima tell us the LCP with the midpoint without
//! touching the text unless it could extend past what is already known.
//! Total work is O(m + log n) byte comparisons for a pattern of length m.

use super::builder::BuiltSuffixArray;
use super::types::{LcpIntervals, TextPosition};
use std::cmp::Ordering;
use std::ops::Range;

/// Binary search over a suffix array guided by LCP intervals
#[derive(Clone, Copy)]
pub struct RangeSearcher<'a> {
    text: &'a [u8],
    suffix_array: &'a [TextPosition],
    intervals: &'a LcpIntervals,
}

impl<'a> RangeSearcher<'a> {
    pub fn new(
        text: &'a [u8],
        suffix_array: &'a [TextPosition],
        intervals: &'a LcpIntervals,
    ) -> Self {
        Self {
            text,
            suffix_array,
            intervals,
        }
    }

    /// Searcher over a built or loaded index
    pub fn over(index: &'a BuiltSuffixArray) -> Self {
        Self::new(&index.text, &index.suffix_array, &index.intervals)
    }

    /// Smallest rank whose suffix is not smaller than `pattern`
    ///
    /// Returns `n` when every suffix is smaller.
    pub fn succ(&self, pattern: &[u8]) -> usize {
        self.partition_point(pattern, |ord| ord == Ordering::Less)
    }

    /// Largest rank whose suffix is not greater than `pattern`
    ///
    /// Returns `None` when even the smallest suffix is greater.
    pub fn pred(&self, pattern: &[u8]) -> Option<usize> {
        self.partition_point(pattern, |ord| ord != Ordering::Greater)
            .checked_sub(1)
    }

    /// Ranks of all suffixes starting with `pattern`, as a half-open range
    pub fn find(&self, pattern: &[u8]) -> Range<usize> {
        let start = self.succ(pattern);
        let end = self.pred(pattern).map_or(0, |p| p + 1);
        start..end.max(start)
    }

    /// Number of occurrences of `pattern`
    pub fn count(&self, pattern: &[u8]) -> usize {
        self.find(pattern).len()
    }

    /// Text offset of the suffix with the given rank
    #[inline]
    pub fn position(&self, rank: usize) -> TextPosition {
        self.suffix_array[rank]
    }

    /// Number of ranks for which `go_right` holds
    ///
    /// `go_right` must be true for a prefix of the rank order and false for
    /// the rest, which holds for both predicates used above.
    fn partition_point(&self, pattern: &[u8], go_right: impl Fn(Ordering) -> bool) -> usize {
        let n = self.suffix_array.len();
        if n == 0 {
            return 0;
        }

        let first = self.suffix_array[0];
        let mut left_lcp = self.common_prefix(first, pattern, 0);
        if !go_right(self.classify(first, pattern, left_lcp)) {
            return 0;
        }

        let last = self.suffix_array[n - 1];
        let mut right_lcp = self.common_prefix(last, pattern, 0);
        if go_right(self.classify(last, pattern, right_lcp)) {
            return n;
        }

        // invariant: go_right(l) && !go_right(r)
        let (mut l, mut r) = (0, n - 1);
        while r - l > 1 {
            let h = (l + r) / 2;
            let pos = self.suffix_array[h];

            let lcp = if left_lcp >= right_lcp {
                self.skip(pos, pattern, left_lcp, self.interval(&self.intervals.left, h))
            } else {
                self.skip(pos, pattern, right_lcp, self.interval(&self.intervals.right, h))
            };

            if go_right(self.classify(pos, pattern, lcp)) {
                l = h;
                left_lcp = lcp;
            } else {
                r = h;
                right_lcp = lcp;
            }
        }

        r
    }

    /// LCP of the pattern with the midpoint suffix
    ///
    /// `known` is the LCP of the pattern with a bound and `interval` the LCP
    /// of that bound with the midpoint. Only when they are equal can the
    /// midpoint match further, so only then are bytes compared.
    #[inline]
    fn skip(&self, pos: TextPosition, pattern: &[u8], known: usize, interval: usize) -> usize {
        match known.cmp(&interval) {
            Ordering::Less => known,
            Ordering::Greater => interval,
            Ordering::Equal => self.common_prefix(pos, pattern, known),
        }
    }

    #[inline]
    fn interval(&self, values: &[usize], h: usize) -> usize {
        values.get(h).copied().unwrap_or(0)
    }

    /// Length of the common prefix of `suffix(pos)` and `pattern`, assuming
    /// the first `from` bytes are already known to agree
    #[inline]
    fn common_prefix(&self, pos: TextPosition, pattern: &[u8], from: usize) -> usize {
        let suffix = self.text.get(pos + from..).unwrap_or_default();
        let rest = pattern.get(from..).unwrap_or_default();
        from + suffix.iter().zip(rest).take_while(|(a, b)| a == b).count()
    }

    /// Classify `suffix(pos)` against `pattern` given their exact LCP
    #[inline]
    fn classify(&self, pos: TextPosition, pattern: &[u8], lcp: usize) -> Ordering {
        if lcp >= pattern.len() {
            return Ordering::Equal;
        }
        match self.text.get(pos + lcp) {
            // suffix exhausted while still matching
            None => Ordering::Less,
            Some(&byte) => byte.cmp(&pattern[lcp]),
        }
    }
}
