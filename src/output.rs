//! Output formatting for search results

use crate::query::{LineMatch, QueryExecutor};
use crate::utils::ColorMode;
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

/// Stdout stream honouring the colour mode
pub fn stdout(mode: ColorMode) -> StandardStream {
    StandardStream::stdout(mode.choice())
}

/// Print one line per match, highlighting the matched bytes
pub fn print_line_matches<W: WriteColor>(
    out: &mut W,
    executor: &QueryExecutor<'_>,
    matches: &[LineMatch],
) -> io::Result<()> {
    for m in matches {
        print_match_line(out, executor.line_text(m), m)?;
    }
    out.flush()
}

/// Print a match line with highlighted match
fn print_match_line<W: WriteColor>(out: &mut W, line: &[u8], m: &LineMatch) -> io::Result<()> {
    let start = m.highlight.start.min(line.len());
    let end = m.highlight.end.clamp(start, line.len());

    // Text before match
    out.write_all(&line[..start])?;

    // The match itself (highlighted)
    if end > start {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        out.write_all(&line[start..end])?;
        out.reset()?;
    }

    // Text after match
    out.write_all(&line[end..])?;
    writeln!(out)
}

/// Print a bare count (for -c and -l)
pub fn print_count<W: WriteColor>(out: &mut W, count: usize) -> io::Result<()> {
    writeln!(out, "{}", count)?;
    out.flush()
}
