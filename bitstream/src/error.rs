//! Error types for byte cursor and varint operations.

use std::fmt;

/// Result type for bitstream operations.
pub type BitResult<T> = Result<T, BitError>;

/// Errors that can occur while reading or writing deck bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitError {
    /// Attempted to read at or past the active read boundary.
    EndOfBuffer {
        /// Cursor position of the failed read.
        position: usize,
        /// Active read boundary (exclusive).
        limit: usize,
    },

    /// Invalid field width for a chunk read or write.
    InvalidBitCount {
        /// The invalid bit count provided.
        bits: u8,
        /// Maximum allowed bits for this operation.
        max_bits: u8,
    },

    /// A continuation chain kept going past the width of a `u32`.
    VarintOverflow {
        /// Shift at which the next chunk would have been placed.
        shift: u32,
    },
}

impl fmt::Display for BitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndOfBuffer { position, limit } => {
                write!(
                    f,
                    "attempted to read byte at offset {position} but read limit is {limit}"
                )
            }
            Self::InvalidBitCount { bits, max_bits } => {
                write!(f, "invalid bit count {bits}, maximum allowed is {max_bits}")
            }
            Self::VarintOverflow { shift } => {
                write!(f, "varint continues past 32 bits (next shift {shift})")
            }
        }
    }
}

impl std::error::Error for BitError {}
