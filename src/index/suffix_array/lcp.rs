//! LCP and LCP-interval construction
//!
//! `build_lcp` computes the adjacent-rank longest common prefix array in
//! amortized O(n) by walking text positions in order (Kasai et al.).
//!
//! `LcpIntervals::build` then folds that array along the bisection tree of
//! `[0, n-1]`, storing at each midpoint the minimum LCP towards its left and
//! right bound. A later binary search over the same range visits exactly
//! these midpoints.

use super::types::LcpIntervals;

/// Compute `lcp[k] = |lcp(suffix(sa[k]), suffix(sa[k+1]))|` for `k < n-1`
pub fn build_lcp(text: &[u8], sa: &[usize], inv_sa: &[usize]) -> Vec<usize> {
    let n = text.len();
    if n < 2 {
        return Vec::new();
    }

    let mut lcp = vec![0; n - 1];
    let mut matched = 0;

    for i in 0..n {
        let k = inv_sa[i];
        if k == n - 1 {
            matched = 0;
            continue;
        }

        let next = sa[k + 1];
        while i + matched < n && next + matched < n && text[i + matched] == text[next + matched] {
            matched += 1;
        }

        lcp[k] = matched;
        matched = matched.saturating_sub(1);
    }

    lcp
}

enum Frame {
    /// Interval still to be split
    Enter(usize, usize),
    /// Both halves done; their minima are on the value stack
    Exit(usize),
}

impl LcpIntervals {
    /// Precompute the interval minima for a suffix array of length `n`
    ///
    /// Walks the bisection tree with an explicit stack in the same
    /// left-then-right post-order a recursive split would use.
    pub fn build(lcp: &[usize], n: usize) -> Self {
        let mut intervals = Self {
            left: vec![0; n],
            right: vec![0; n],
        };
        if n < 3 {
            return intervals;
        }
        debug_assert_eq!(lcp.len(), n - 1);

        let mut frames = vec![Frame::Enter(0, n - 1)];
        let mut minima: Vec<usize> = Vec::new();

        while let Some(frame) = frames.pop() {
            match frame {
                Frame::Enter(l, r) if r - l == 1 => minima.push(lcp[l]),
                Frame::Enter(l, r) => {
                    let h = (l + r) / 2;
                    frames.push(Frame::Exit(h));
                    frames.push(Frame::Enter(h, r));
                    frames.push(Frame::Enter(l, h));
                }
                Frame::Exit(h) => {
                    // the left half finished first, so its minimum sits lower
                    let r_min = minima.pop().unwrap_or(0);
                    let l_min = minima.pop().unwrap_or(0);
                    intervals.left[h] = l_min;
                    intervals.right[h] = r_min;
                    minima.push(l_min.min(r_min));
                }
            }
        }

        intervals
    }
}
