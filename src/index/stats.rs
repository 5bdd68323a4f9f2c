use crate::index::suffix_array::SuffixArrayReader;
use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;

/// Number of byte values listed by `stats`
const TOP_BYTES: usize = 10;

/// Display index statistics
pub fn show_stats(index_path: &Path) -> Result<()> {
    let reader = SuffixArrayReader::open(index_path)
        .with_context(|| format!("Failed to load {}", index_path.display()))?;

    let stdout = io::stdout();
    write_stats(&mut stdout.lock(), index_path, &reader)?;
    Ok(())
}

/// Write the statistics report for a loaded index
pub fn write_stats<W: Write>(
    out: &mut W,
    index_path: &Path,
    reader: &SuffixArrayReader,
) -> io::Result<()> {
    let stats = reader.stats();

    writeln!(out, "Index Statistics")?;
    writeln!(out, "================")?;
    writeln!(out)?;
    writeln!(out, "Index location:   {}", index_path.display())?;
    writeln!(out, "Index size:       {}", format_size(reader.encoded_size() as u64))?;
    writeln!(out, "Text size:        {}", format_size(stats.text_size as u64))?;
    writeln!(out, "Suffix count:     {}", stats.suffix_count)?;
    writeln!(out, "LCP intervals:    {}", stats.interval_count)?;
    writeln!(out, "Distinct bytes:   {}", stats.distinct_bytes)?;

    let top = reader.histogram().most_frequent(TOP_BYTES);
    if !top.is_empty() {
        writeln!(out)?;
        writeln!(out, "Most frequent bytes:")?;
        for (byte, count) in top {
            writeln!(out, "  {:8} {}", describe_byte(byte), count)?;
        }
    }

    Ok(())
}

/// Printable name for a byte value
fn describe_byte(byte: u8) -> String {
    match byte {
        b'\n' => "'\\n'".to_string(),
        b'\t' => "'\\t'".to_string(),
        b'\r' => "'\\r'".to_string(),
        b' ' => "space".to_string(),
        0x21..=0x7e => format!("'{}'", byte as char),
        _ => format!("0x{:02x}", byte),
    }
}

/// Format byte size to human readable
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
