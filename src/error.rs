//! Error types for index construction and decoding.

use std::io;
use thiserror::Error;

/// Errors raised by the suffix array core and the index codec.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Underlying file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Text contains a byte the histogram cannot represent.
    #[error("byte 0x{byte:02x} at offset {offset} is outside the supported range 0x00..=0x7e")]
    UnsupportedByte { offset: usize, byte: u8 },

    /// A declared length runs past the end of the index file.
    #[error("index truncated in {section}: need {needed} bytes, {available} remain")]
    Truncated {
        section: &'static str,
        needed: u64,
        available: usize,
    },

    /// Bytes left over after the last field of the index.
    #[error("index has {0} trailing bytes")]
    TrailingBytes(usize),

    /// Fields that decode cleanly but disagree with each other.
    #[error("inconsistent index: {0}")]
    Inconsistent(String),
}

impl IndexError {
    /// True for errors caused by a damaged or foreign index file.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::Truncated { .. } | Self::TrailingBytes(_) | Self::Inconsistent(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, IndexError>;
