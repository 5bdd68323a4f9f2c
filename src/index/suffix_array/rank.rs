//! Dense order-preserving ranks
//!
//! Turns a sequence of comparable keys into ranks `0..k` where equal keys
//! share a rank and the rank order matches the key order. Used on raw bytes
//! for the first doubling round and on rank pairs for every later round.

/// Assigns dense ranks, reusing its sort buffer between calls
#[derive(Debug, Default)]
pub struct RankAssigner {
    /// Original indices in sorted key order
    order: Vec<usize>,
}

impl RankAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            order: Vec::with_capacity(n),
        }
    }

    /// Write the rank of `keys[i]` into `ranks[i]`
    ///
    /// Returns the number of distinct keys. `ranks` must be as long as `keys`.
    pub fn assign<K: Ord + Copy>(&mut self, keys: &[K], ranks: &mut [usize]) -> usize {
        debug_assert_eq!(keys.len(), ranks.len());

        self.order.clear();
        self.order.extend(0..keys.len());
        // stable, so equal keys keep their original relative order
        self.order.sort_by_key(|&i| keys[i]);

        let mut rank = 0;
        let mut prev: Option<K> = None;
        for &i in &self.order {
            let key = keys[i];
            if prev.is_some_and(|p| p != key) {
                rank += 1;
            }
            prev = Some(key);
            ranks[i] = rank;
        }

        if keys.is_empty() { 0 } else { rank + 1 }
    }
}

/// One-shot convenience wrapper around [`RankAssigner::assign`]
pub fn assign_ranks<K: Ord + Copy>(keys: &[K]) -> Vec<usize> {
    let mut ranks = vec![0; keys.len()];
    RankAssigner::with_capacity(keys.len()).assign(keys, &mut ranks);
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_bytes() {
        assert_eq!(assign_ranks(b"banana"), vec![1, 0, 2, 0, 2, 0]);
    }

    #[test]
    fn test_ranks_pairs() {
        let keys = [(2, 1), (1, 3), (2, 0), (1, 3), (0, 0)];
        assert_eq!(assign_ranks(&keys), vec![3, 1, 2, 1, 0]);
    }

    #[test]
    fn test_distinct_count() {
        let mut assigner = RankAssigner::new();
        let mut ranks = vec![0; 4];
        assert_eq!(assigner.assign(&[7u8, 7, 7, 7], &mut ranks), 1);
        assert_eq!(ranks, vec![0, 0, 0, 0]);
        assert_eq!(assigner.assign(&[4u8, 3, 2, 1], &mut ranks), 4);
        assert_eq!(ranks, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_empty_keys() {
        let mut assigner = RankAssigner::new();
        let keys: [u8; 0] = [];
        assert_eq!(assigner.assign(&keys, &mut []), 0);
    }
}
