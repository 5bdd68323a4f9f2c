//! Pattern lists for `search -p`

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Split a pattern file into patterns, one per line
///
/// A trailing `\r` is dropped so CRLF files behave like LF files, and empty
/// lines are skipped.
pub fn parse_patterns(content: &[u8]) -> Vec<Vec<u8>> {
    content
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(<[u8]>::to_vec)
        .collect()
}

/// Read and split a pattern file
pub fn read_patterns(path: &Path) -> Result<Vec<Vec<u8>>> {
    let content = fs::read(path)
        .with_context(|| format!("Failed to read pattern file {}", path.display()))?;
    Ok(parse_patterns(&content))
}
