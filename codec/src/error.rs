//! Error types for deck decoding.

use std::fmt;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while decoding a deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Text or header framing error.
    Wire(wire::DecodeError),

    /// Byte cursor or varint error.
    Bitstream(bitstream::BitError),

    /// Adding a delta to the running identifier overflowed.
    IdOverflow { base: u32, delta: u32 },

    /// An extended count decoded to zero.
    ZeroCount { id: u32 },

    /// Limits exceeded.
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },
}

/// Specific limit that was exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    Heroes,
    Cards,
}

/// Coarse failure classes, one per way a deck code can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Code does not start with the required prefix.
    InvalidPrefix,
    /// Remainder is not valid base64 text.
    InvalidEncoding,
    /// Version is neither current nor legacy.
    UnsupportedVersion,
    /// Stored checksum does not match the card-data region.
    ChecksumMismatch,
    /// A read needed a byte beyond its boundary.
    TruncatedBuffer,
    /// An entry decoded to an impossible value.
    MalformedEntry,
    /// A configured decoding limit was hit.
    LimitsExceeded,
}

impl CodecError {
    /// Classifies this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Wire(err) => match err {
                wire::DecodeError::InvalidPrefix => ErrorKind::InvalidPrefix,
                wire::DecodeError::InvalidEncoding(_) => ErrorKind::InvalidEncoding,
                wire::DecodeError::UnsupportedVersion { .. } => ErrorKind::UnsupportedVersion,
                wire::DecodeError::ChecksumMismatch { .. } => ErrorKind::ChecksumMismatch,
                wire::DecodeError::BufferTooSmall { .. }
                | wire::DecodeError::NameOutOfBounds { .. } => ErrorKind::TruncatedBuffer,
                wire::DecodeError::LimitsExceeded { .. } => ErrorKind::LimitsExceeded,
            },
            Self::Bitstream(err) => match err {
                bitstream::BitError::EndOfBuffer { .. } => ErrorKind::TruncatedBuffer,
                bitstream::BitError::InvalidBitCount { .. }
                | bitstream::BitError::VarintOverflow { .. } => ErrorKind::MalformedEntry,
            },
            Self::IdOverflow { .. } | Self::ZeroCount { .. } => ErrorKind::MalformedEntry,
            Self::LimitsExceeded { .. } => ErrorKind::LimitsExceeded,
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wire(e) => write!(f, "wire error: {e}"),
            Self::Bitstream(e) => write!(f, "bitstream error: {e}"),
            Self::IdOverflow { base, delta } => {
                write!(f, "card id overflow: {base} + {delta}")
            }
            Self::ZeroCount { id } => write!(f, "card {id} has an extended count of zero"),
            Self::LimitsExceeded {
                kind,
                limit,
                actual,
            } => {
                write!(f, "{kind} limit exceeded: {actual} > {limit}")
            }
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Heroes => "heroes",
            Self::Cards => "cards",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidPrefix => "invalid prefix",
            Self::InvalidEncoding => "invalid encoding",
            Self::UnsupportedVersion => "unsupported version",
            Self::ChecksumMismatch => "checksum mismatch",
            Self::TruncatedBuffer => "truncated buffer",
            Self::MalformedEntry => "malformed entry",
            Self::LimitsExceeded => "limits exceeded",
        };
        write!(f, "{name}")
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Wire(e) => Some(e),
            Self::Bitstream(e) => Some(e),
            _ => None,
        }
    }
}

impl From<wire::DecodeError> for CodecError {
    fn from(err: wire::DecodeError) -> Self {
        Self::Wire(err)
    }
}

impl From<bitstream::BitError> for CodecError {
    fn from(err: bitstream::BitError) -> Self {
        Self::Bitstream(err)
    }
}
