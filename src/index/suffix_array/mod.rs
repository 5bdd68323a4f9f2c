//! Suffix array indexing module
//!
//! This module provides exact substring search in O(m + log n) using a
//! suffix array accelerated by precomputed LCP intervals.
//!
//! ## Architecture
//!
//! - `rank`: Dense order-preserving ranks (one prefix-doubling step)
//! - `builder`: Constructs the suffix array by prefix doubling
//! - `lcp`: Adjacent LCP array and bisection interval minima
//! - `search`: pred/succ range search over the suffix array
//! - `writer`: Persists an index to disk
//! - `reader`: Loads an index and rebuilds the text
//! - `types`: Core type definitions
//!
//! ## File Format
//!
//! One `.idx` file per text holding the suffix array, the two LCP-interval
//! arrays and a 127-entry byte histogram. The text is not stored; it is
//! recovered from the histogram and the suffix array on load.

pub mod builder;
pub mod lcp;
pub mod rank;
pub mod reader;
pub mod search;
pub mod types;
pub mod writer;

// Re-exports for convenience
pub use builder::{BuiltSuffixArray, SuffixArrayBuilder};
pub use reader::{SuffixArrayReader, decode_index, reconstruct_text};
pub use search::RangeSearcher;
pub use types::{CharHistogram, LcpIntervals, SuffixArrayStats};
pub use writer::SuffixArrayWriter;
