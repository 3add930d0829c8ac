//! Deck header layout and constants.
//!
//! ```text
//! byte 0   [ version:4 | hero count continuation:1 | hero count seed:3 ]
//! byte 1   checksum over the card-data region
//! byte 2   name length (only when version > 1)
//! ```

use bitstream::ByteReader;

use crate::error::{DecodeError, WireResult};

/// Current deck format version.
pub const VERSION: u8 = 2;

/// Oldest version still accepted; it carries no name length byte.
pub const LEGACY_VERSION: u8 = 1;

/// Position of the version nibble in byte 0.
pub const VERSION_SHIFT: u8 = 4;

/// Low bits of byte 0 that seed the hero count varint.
///
/// Bit 3 is the seed's continuation flag, so the field and the version nibble
/// together fill the byte.
pub const HERO_COUNT_SEED_BITS: u8 = 3;

/// Header size in bytes for [`LEGACY_VERSION`].
pub const LEGACY_HEADER_SIZE: usize = 2;

/// Header size in bytes for versions that carry a name length.
pub const HEADER_SIZE: usize = 3;

/// Decoded deck header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckHeader {
    /// Format version from the top nibble of byte 0.
    pub version: u8,
    /// Byte 0 as stored; its low bits seed the hero count.
    pub version_and_heroes: u8,
    /// Stored checksum.
    pub checksum: u8,
    /// Number of trailing name bytes.
    pub name_len: usize,
    /// Number of header bytes preceding the hero count tail.
    pub header_len: usize,
    /// End (exclusive) of the card-data region, i.e. where the name starts.
    pub card_data_end: usize,
}

impl DeckHeader {
    /// Returns `true` if `version` is one this crate can decode.
    #[must_use]
    pub const fn is_supported_version(version: u8) -> bool {
        version == VERSION || version == LEGACY_VERSION
    }

    /// Returns `true` if `version` stores a name length byte.
    #[must_use]
    pub const fn has_name_len(version: u8) -> bool {
        version > LEGACY_VERSION
    }

    /// Returns the number of bytes between the header and the name.
    #[must_use]
    pub const fn body_len(&self) -> usize {
        self.card_data_end - self.header_len
    }
}

/// Decodes the deck header from the start of `bytes`.
///
/// The version is checked before the checksum byte is read, so an
/// unsupported version wins over a short buffer.
pub fn decode_header(bytes: &[u8]) -> WireResult<DeckHeader> {
    let mut reader = ByteReader::new(bytes);
    let too_small = |required| DecodeError::BufferTooSmall {
        actual: bytes.len(),
        required,
    };

    let version_and_heroes = reader
        .read_u8()
        .map_err(|_| too_small(LEGACY_HEADER_SIZE))?;
    let version = version_and_heroes >> VERSION_SHIFT;
    if !DeckHeader::is_supported_version(version) {
        return Err(DecodeError::UnsupportedVersion { found: version });
    }

    let (header_len, name_field) = if DeckHeader::has_name_len(version) {
        (HEADER_SIZE, true)
    } else {
        (LEGACY_HEADER_SIZE, false)
    };
    let checksum = reader.read_u8().map_err(|_| too_small(header_len))?;
    let name_len = if name_field {
        usize::from(reader.read_u8().map_err(|_| too_small(header_len))?)
    } else {
        0
    };

    let available = bytes.len() - header_len;
    if name_len > available {
        return Err(DecodeError::NameOutOfBounds {
            name_len,
            available,
        });
    }

    Ok(DeckHeader {
        version,
        version_and_heroes,
        checksum,
        name_len,
        header_len,
        card_data_end: bytes.len() - name_len,
    })
}
