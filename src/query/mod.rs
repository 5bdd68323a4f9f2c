//! Pattern queries against a loaded index.
//!
//! - [`executor`] - Counts occurrences and locates their lines
//! - [`patterns`] - Reads pattern lists from files

pub mod executor;
pub mod patterns;

pub use executor::{LineMatch, QueryExecutor};
pub use patterns::{parse_patterns, read_patterns};
