//! Utility functions and data structures.
//!
//! ## Modules
//!
//! - [`app_data`] - User configuration (`config.json` in the config directory)
//! - [`lines`] - Line boundaries around a text position
//! - [`progress`] - Progress bar, or a no-op without the `progress` feature
//!
//! ```no_run
//! use ipmt::utils::line_bounds;
//!
//! let text = b"first line\nsecond line\n";
//! assert_eq!(&text[line_bounds(text, 14)], b"second line");
//! ```

pub mod app_data;
pub mod lines;
pub mod progress;

pub use app_data::*;
pub use lines::*;
