//! Error types for deck code framing.

use std::fmt;

/// Result type for wire format operations.
pub type WireResult<T> = Result<T, DecodeError>;

/// High-level decode errors for the text and header layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Code does not start with the required prefix.
    InvalidPrefix,

    /// Remainder after the prefix is not valid padded base64.
    InvalidEncoding(base64::DecodeError),

    /// Buffer is too small to contain the header fields.
    BufferTooSmall { actual: usize, required: usize },

    /// Unsupported format version.
    UnsupportedVersion { found: u8 },

    /// Stored checksum does not match the card-data region.
    ChecksumMismatch { stored: u8, computed: u8 },

    /// Declared name length runs past the bytes following the header.
    NameOutOfBounds { name_len: usize, available: usize },

    /// Limits exceeded.
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },
}

/// Specific wire limits that can be exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    CodeLength,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPrefix => {
                write!(f, "deck code does not start with \"{}\"", crate::PREFIX)
            }
            Self::InvalidEncoding(err) => write!(f, "invalid base64 payload: {err}"),
            Self::BufferTooSmall { actual, required } => {
                write!(
                    f,
                    "deck buffer too small: {actual} bytes, need at least {required}"
                )
            }
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported deck code version: {found}")
            }
            Self::ChecksumMismatch { stored, computed } => {
                write!(
                    f,
                    "checksum mismatch: stored 0x{stored:02X}, computed 0x{computed:02X}"
                )
            }
            Self::NameOutOfBounds {
                name_len,
                available,
            } => {
                write!(
                    f,
                    "name length {name_len} exceeds the {available} bytes after the header"
                )
            }
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
            Self::CodeLength => "code length",
        };
        write!(f, "{name}")
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidEncoding(err) => Some(err),
            _ => None,
        }
    }
}

impl From<base64::DecodeError> for DecodeError {
    fn from(err: base64::DecodeError) -> Self {
        Self::InvalidEncoding(err)
    }
}
