//! Suffix array writer
//!
//! Serializes an index to a single file. The text itself is not written:
//! the reader rebuilds it from the suffix array and the byte histogram.
//!
//! Layout (native-endian u64 fields, no padding):
//!
//! ```text
//! sa_len    sa[sa_len]
//! llcp_len  l_lcp[llcp_len]
//! rlcp_len  r_lcp[rlcp_len]
//! char_count[127]
//! total_char_count
//! ```

use super::builder::BuiltSuffixArray;
use super::types::*;
use crate::error::Result;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes suffix array indexes to disk
pub struct SuffixArrayWriter;

impl SuffixArrayWriter {
    /// Write `built` to `path`, replacing any existing file
    pub fn write(path: &Path, built: &BuiltSuffixArray) -> Result<()> {
        let mut file = BufWriter::with_capacity(65536, File::create(path)?);
        Self::write_to(&mut file, built)?;
        file.flush()?;

        info!(
            "wrote index for {} bytes to {}",
            built.histogram.total,
            path.display()
        );
        Ok(())
    }

    /// Serialize into an in-memory buffer
    pub fn encode(built: &BuiltSuffixArray) -> Vec<u8> {
        let words = 3 + 3 * built.suffix_array.len() + ALPHABET_SIZE + 1;
        let mut buffer = Vec::with_capacity(words * WORD_SIZE);
        // writing into a Vec cannot fail
        let _ = Self::write_to(&mut buffer, built);
        buffer
    }

    /// Serialize into any writer
    pub fn write_to<W: Write>(out: &mut W, built: &BuiltSuffixArray) -> Result<()> {
        write_section(out, &built.suffix_array)?;
        write_section(out, &built.intervals.left)?;
        write_section(out, &built.intervals.right)?;

        for &count in &built.histogram.counts {
            out.write_all(&count.to_ne_bytes())?;
        }
        out.write_all(&built.histogram.total.to_ne_bytes())?;
        Ok(())
    }
}

/// Write a length-prefixed array of words
fn write_section<W: Write>(out: &mut W, values: &[usize]) -> Result<()> {
    out.write_all(&(values.len() as u64).to_ne_bytes())?;

    // Using a buffer to reduce system call overhead
    let mut buffer = Vec::with_capacity(8 * 1024);
    for &value in values {
        buffer.extend_from_slice(&(value as u64).to_ne_bytes());
        if buffer.len() >= 8 * 1024 {
            out.write_all(&buffer)?;
            buffer.clear();
        }
    }
    if !buffer.is_empty() {
        out.write_all(&buffer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::suffix_array::builder::SuffixArrayBuilder;
    use std::fs;
    use tempfile::tempdir;

    fn word(bytes: &[u8], index: usize) -> u64 {
        let start = index * WORD_SIZE;
        u64::from_ne_bytes(bytes[start..start + WORD_SIZE].try_into().unwrap())
    }

    #[test]
    fn test_encoded_layout() {
        let built = SuffixArrayBuilder::new(b"banana\n".to_vec()).build().unwrap();
        let bytes = SuffixArrayWriter::encode(&built);

        // 3 length words + 3 arrays of 7 + histogram + total
        assert_eq!(bytes.len(), (3 + 21 + 127 + 1) * WORD_SIZE);

        assert_eq!(word(&bytes, 0), 7);
        let sa: Vec<u64> = (1..8).map(|i| word(&bytes, i)).collect();
        assert_eq!(sa, vec![6, 5, 3, 1, 0, 4, 2]);
        assert_eq!(word(&bytes, 8), 7);
        assert_eq!(word(&bytes, 16), 7);

        let hist_start = 24;
        assert_eq!(word(&bytes, hist_start + b'a' as usize), 3);
        assert_eq!(word(&bytes, hist_start + b'\n' as usize), 1);
        assert_eq!(word(&bytes, hist_start + 127), 7);
    }

    #[test]
    fn test_text_is_not_stored() {
        let text = b"needle in a haystack\n";
        let built = SuffixArrayBuilder::new(text.to_vec()).build().unwrap();
        let bytes = SuffixArrayWriter::encode(&built);

        assert!(!bytes.windows(6).any(|w| w == b"needle"));
    }

    #[test]
    fn test_write_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("text.idx");

        let built = SuffixArrayBuilder::new(b"hello world\n".to_vec()).build().unwrap();
        SuffixArrayWriter::write(&path, &built).unwrap();

        let on_disk = fs::read(&path).unwrap();
        assert_eq!(on_disk, SuffixArrayWriter::encode(&built));
    }

    #[test]
    fn test_write_empty_text() {
        let built = SuffixArrayBuilder::new(Vec::new()).build().unwrap();
        let bytes = SuffixArrayWriter::encode(&built);
        assert_eq!(bytes.len(), (3 + 127 + 1) * WORD_SIZE);
        assert!(bytes.iter().all(|&b| b == 0));
    }
}
