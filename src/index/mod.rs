pub mod build;
pub mod stats;
pub mod suffix_array;

pub use build::build_index;
pub use suffix_array::{BuiltSuffixArray, SuffixArrayBuilder, SuffixArrayReader, SuffixArrayWriter};
