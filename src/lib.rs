//! # ipmt - Indexed Pattern Matching Tool
//!
//! ipmt builds a persistent suffix-array index over a text file and answers
//! exact substring queries against it without rescanning the text.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - Index construction, the on-disk codec and `stats`
//! - [`query`] - Occurrence counting and line reporting
//! - [`output`] - Result formatting
//! - [`utils`] - Configuration, line lookup, progress display
//! - [`error`] - Typed errors of the index core
//!
//! ## Quick Start
//!
//! ```no_run
//! use ipmt::index::suffix_array::{SuffixArrayBuilder, SuffixArrayReader, SuffixArrayWriter};
//! use ipmt::query::QueryExecutor;
//! use std::path::Path;
//!
//! let text = std::fs::read("moby-dick.txt").unwrap();
//! let built = SuffixArrayBuilder::new(text).build().unwrap();
//! SuffixArrayWriter::write(Path::new("moby-dick.idx"), &built).unwrap();
//!
//! let reader = SuffixArrayReader::open(Path::new("moby-dick.idx")).unwrap();
//! let executor = QueryExecutor::new(&reader);
//! println!("{}", executor.count(&["whale"]));
//! ```
//!
//! ## Index size
//!
//! The index file stores the suffix array, the LCP-interval arrays and a
//! 127-entry byte histogram, but never the text. Because suffixes in rank
//! order have non-decreasing first bytes, the histogram tells which byte
//! starts each ranked suffix, which rebuilds the text exactly. Texts are
//! therefore limited to bytes `0x00..=0x7e`.

pub mod error;
pub mod index;
pub mod output;
pub mod query;
pub mod utils;

pub use error::{IndexError, Result};
