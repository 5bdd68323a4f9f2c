//! Suffix array reader
//!
//! Decodes an index file and rebuilds the indexed text from the suffix
//! array and the byte histogram.
//!
//! Every declared length is checked against the bytes that remain before
//! anything is allocated, and the decoded arrays are cross-checked, so a
//! truncated or foreign file fails with a format error instead of
//! producing garbage.

use super::builder::BuiltSuffixArray;
use super::search::RangeSearcher;
use super::types::*;
use crate::error::{IndexError, Result};
use log::{debug, info};
use memmap2::Mmap;
use std::fs::File;
use std::ops::Range;
use std::path::Path;

/// A loaded, searchable index
pub struct SuffixArrayReader {
    index: BuiltSuffixArray,
    /// Size of the encoded index in bytes
    encoded_size: usize,
}

impl SuffixArrayReader {
    /// Open and decode an index file
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let len = file.metadata()?.len();

        let reader = if len == 0 {
            Self::from_bytes(&[])?
        } else {
            // Safety: the map is read-only and dropped before returning
            let mmap = unsafe { Mmap::map(&file)? };
            Self::from_bytes(&mmap)?
        };

        info!(
            "loaded index {} ({} suffixes)",
            path.display(),
            reader.index.suffix_array.len()
        );
        Ok(reader)
    }

    /// Decode an index held in memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self {
            index: decode_index(bytes)?,
            encoded_size: bytes.len(),
        })
    }

    /// The reconstructed text
    #[inline]
    pub fn text(&self) -> &[u8] {
        &self.index.text
    }

    /// The decoded index
    pub fn index(&self) -> &BuiltSuffixArray {
        &self.index
    }

    pub fn histogram(&self) -> &CharHistogram {
        &self.index.histogram
    }

    /// Searcher over this index
    pub fn searcher(&self) -> RangeSearcher<'_> {
        RangeSearcher::over(&self.index)
    }

    /// Ranks of the suffixes starting with `pattern`
    pub fn search(&self, pattern: &[u8]) -> Range<usize> {
        self.searcher().find(pattern)
    }

    /// Get the number of matches for a pattern
    pub fn count_matches(&self, pattern: &[u8]) -> usize {
        self.searcher().count(pattern)
    }

    /// Check if pattern exists in the text
    pub fn contains(&self, pattern: &[u8]) -> bool {
        !self.search(pattern).is_empty()
    }

    pub fn encoded_size(&self) -> usize {
        self.encoded_size
    }

    /// Get statistics about this index
    pub fn stats(&self) -> SuffixArrayStats {
        self.index.stats()
    }
}

/// Decode the serialized form produced by `SuffixArrayWriter`
pub fn decode_index(bytes: &[u8]) -> Result<BuiltSuffixArray> {
    let mut cursor = Cursor::new(bytes);

    let suffix_array = cursor.section("suffix array")?;
    let left = cursor.section("left lcp intervals")?;
    let right = cursor.section("right lcp intervals")?;

    let mut counts = [0u64; ALPHABET_SIZE];
    for slot in counts.iter_mut() {
        *slot = cursor.word("histogram")?;
    }
    let total = cursor.word("histogram total")?;

    if cursor.remaining() > 0 {
        return Err(IndexError::TrailingBytes(cursor.remaining()));
    }

    let n = suffix_array.len();
    debug!(
        "decoded sections: sa={} l_lcp={} r_lcp={} total={}",
        n,
        left.len(),
        right.len(),
        total
    );

    if left.len() != n || right.len() != n {
        return Err(IndexError::Inconsistent(format!(
            "lcp interval lengths {}/{} differ from suffix array length {}",
            left.len(),
            right.len(),
            n
        )));
    }
    if let Some(bad) = left.iter().chain(&right).find(|&&v| v > n) {
        return Err(IndexError::Inconsistent(format!(
            "lcp interval value {bad} exceeds text length {n}"
        )));
    }
    check_permutation(&suffix_array)?;

    let histogram = CharHistogram { counts, total };
    let text = reconstruct_text(&suffix_array, &histogram)?;

    Ok(BuiltSuffixArray {
        text,
        suffix_array,
        intervals: LcpIntervals { left, right },
        histogram,
    })
}

/// Rebuild the text from the suffix array and the byte histogram
///
/// In rank order the leading bytes of the suffixes never decrease, so the
/// first `counts[0]` ranks start with byte 0, the next `counts[1]` with
/// byte 1, and so on.
pub fn reconstruct_text(
    suffix_array: &[TextPosition],
    histogram: &CharHistogram,
) -> Result<Vec<u8>> {
    let n = suffix_array.len();
    let sum = histogram
        .counts
        .iter()
        .try_fold(0u64, |acc, &c| acc.checked_add(c));
    if histogram.total != n as u64 || sum != Some(histogram.total) {
        return Err(IndexError::Inconsistent(format!(
            "histogram total {} (sum {}) does not match {} suffixes",
            histogram.total,
            sum.map_or_else(|| "overflow".to_string(), |s| s.to_string()),
            n
        )));
    }

    let mut text = vec![0u8; n];
    let mut ranks = suffix_array.iter();
    for (byte, &count) in histogram.counts.iter().enumerate() {
        for &pos in ranks.by_ref().take(count as usize) {
            let slot = text.get_mut(pos).ok_or_else(|| {
                IndexError::Inconsistent(format!("suffix position {pos} out of range"))
            })?;
            *slot = byte as u8;
        }
    }

    Ok(text)
}

/// Reject suffix arrays that are not a permutation of `0..n`
fn check_permutation(suffix_array: &[TextPosition]) -> Result<()> {
    let n = suffix_array.len();
    let mut seen = vec![false; n];
    for &pos in suffix_array {
        match seen.get_mut(pos) {
            Some(flag) if !*flag => *flag = true,
            Some(_) => {
                return Err(IndexError::Inconsistent(format!(
                    "suffix position {pos} appears twice"
                )));
            }
            None => {
                return Err(IndexError::Inconsistent(format!(
                    "suffix position {pos} out of range for {n} suffixes"
                )));
            }
        }
    }
    Ok(())
}

/// Bounds-checked reader over native-endian words
struct Cursor<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    fn take(&mut self, section: &'static str, len: u64) -> Result<&'a [u8]> {
        let available = self.remaining();
        let bytes = self.bytes;
        match usize::try_from(len) {
            Ok(len) if len <= available => {
                let slice = &bytes[self.offset..self.offset + len];
                self.offset += len;
                Ok(slice)
            }
            _ => Err(IndexError::Truncated {
                section,
                needed: len,
                available,
            }),
        }
    }

    fn word(&mut self, section: &'static str) -> Result<u64> {
        let raw = self.take(section, WORD_SIZE as u64)?;
        let mut buf = [0u8; WORD_SIZE];
        buf.copy_from_slice(raw);
        Ok(u64::from_ne_bytes(buf))
    }

    /// Read a length-prefixed array
    fn section(&mut self, section: &'static str) -> Result<Vec<usize>> {
        let count = self.word(section)?;
        let needed = count.saturating_mul(WORD_SIZE as u64);
        let raw = self.take(section, needed)?;

        raw.chunks_exact(WORD_SIZE)
            .map(|chunk| {
                let mut buf = [0u8; WORD_SIZE];
                buf.copy_from_slice(chunk);
                let value = u64::from_ne_bytes(buf);
                usize::try_from(value).map_err(|_| {
                    IndexError::Inconsistent(format!("{section} value {value} not addressable"))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::suffix_array::builder::SuffixArrayBuilder;
    use crate::index::suffix_array::writer::SuffixArrayWriter;
    use tempfile::tempdir;

    fn encoded(text: &[u8]) -> (BuiltSuffixArray, Vec<u8>) {
        let built = SuffixArrayBuilder::new(text.to_vec()).build().unwrap();
        let bytes = SuffixArrayWriter::encode(&built);
        (built, bytes)
    }

    fn put_word(bytes: &mut [u8], index: usize, value: u64) {
        let start = index * WORD_SIZE;
        bytes[start..start + WORD_SIZE].copy_from_slice(&value.to_ne_bytes());
    }

    #[test]
    fn test_open_reader() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("banana.idx");
        let built = SuffixArrayBuilder::new(b"banana\n".to_vec()).build().unwrap();
        SuffixArrayWriter::write(&path, &built).unwrap();

        let reader = SuffixArrayReader::open(&path).unwrap();
        assert_eq!(reader.text(), b"banana\n");
        assert_eq!(reader.index(), &built);
        assert_eq!(reader.count_matches(b"ana"), 2);
        assert!(reader.contains(b"nan"));
        assert!(!reader.contains(b"xyz"));
    }

    #[test]
    fn test_reconstruct_text() {
        let text = b"It was the best of times,\nit was the worst of times.\n";
        let built = SuffixArrayBuilder::new(text.to_vec()).build().unwrap();
        let rebuilt = reconstruct_text(&built.suffix_array, &built.histogram).unwrap();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_reconstruct_rejects_wrong_total() {
        let built = SuffixArrayBuilder::new(b"abc".to_vec()).build().unwrap();
        let mut histogram = built.histogram.clone();
        histogram.counts[b'a' as usize] += 1;
        assert!(reconstruct_text(&built.suffix_array, &histogram).is_err());
    }

    #[test]
    fn test_empty_index_round_trip() {
        let (_, bytes) = encoded(b"");
        let reader = SuffixArrayReader::from_bytes(&bytes).unwrap();
        assert!(reader.text().is_empty());
        assert_eq!(reader.count_matches(b"a"), 0);
    }

    #[test]
    fn test_empty_file_is_truncated() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("empty.idx");
        std::fs::write(&path, b"").unwrap();

        let err = SuffixArrayReader::open(&path).err().unwrap();
        assert!(err.is_format_error());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = tempdir().unwrap();
        let err = SuffixArrayReader::open(&temp_dir.path().join("nope.idx"))
            .err()
            .unwrap();
        assert!(matches!(err, IndexError::Io(_)));
    }

    #[test]
    fn test_truncated_everywhere() {
        let (_, bytes) = encoded(b"banana\n");
        for cut in 0..bytes.len() {
            let err = decode_index(&bytes[..cut]).unwrap_err();
            assert!(
                matches!(err, IndexError::Truncated { .. }),
                "cut at {cut}: {err}"
            );
        }
    }

    #[test]
    fn test_huge_declared_length() {
        let (_, mut bytes) = encoded(b"banana\n");
        put_word(&mut bytes, 0, u64::MAX);
        assert!(matches!(
            decode_index(&bytes).unwrap_err(),
            IndexError::Truncated { section: "suffix array", .. }
        ));
    }

    #[test]
    fn test_trailing_bytes() {
        let (_, mut bytes) = encoded(b"banana\n");
        bytes.extend_from_slice(&[1, 2, 3]);
        assert!(matches!(
            decode_index(&bytes).unwrap_err(),
            IndexError::TrailingBytes(3)
        ));
    }

    #[test]
    fn test_duplicate_suffix_position() {
        let (_, mut bytes) = encoded(b"banana\n");
        // sa[1] = sa[0]
        put_word(&mut bytes, 2, 6);
        assert!(matches!(
            decode_index(&bytes).unwrap_err(),
            IndexError::Inconsistent(_)
        ));
    }

    #[test]
    fn test_out_of_range_suffix_position() {
        let (_, mut bytes) = encoded(b"banana\n");
        put_word(&mut bytes, 1, 99);
        assert!(matches!(
            decode_index(&bytes).unwrap_err(),
            IndexError::Inconsistent(_)
        ));
    }

    #[test]
    fn test_histogram_mismatch() {
        let (_, mut bytes) = encoded(b"banana\n");
        // total_char_count is the last word
        let last = bytes.len() / WORD_SIZE - 1;
        put_word(&mut bytes, last, 8);
        assert!(matches!(
            decode_index(&bytes).unwrap_err(),
            IndexError::Inconsistent(_)
        ));
    }

    #[test]
    fn test_interval_value_out_of_range() {
        let (_, mut bytes) = encoded(b"banana\n");
        // l_lcp[3]: sa_len + 7 entries + llcp_len + 3
        put_word(&mut bytes, 1 + 7 + 1 + 3, 1000);
        assert!(matches!(
            decode_index(&bytes).unwrap_err(),
            IndexError::Inconsistent(_)
        ));
    }

    #[test]
    fn test_stats() {
        let (_, bytes) = encoded(b"banana\n");
        let reader = SuffixArrayReader::from_bytes(&bytes).unwrap();
        let stats = reader.stats();
        assert_eq!(stats.suffix_count, 7);
        assert_eq!(stats.distinct_bytes, 4);
        assert_eq!(reader.encoded_size(), bytes.len());
    }
}
