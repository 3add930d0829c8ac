//! Single-byte modular checksum over the card-data region.

use crate::error::{DecodeError, WireResult};
use crate::header::DeckHeader;

/// Sums `region` modulo 256.
#[must_use]
pub fn compute_checksum(region: &[u8]) -> u8 {
    region.iter().fold(0u8, |acc, &byte| acc.wrapping_add(byte))
}

/// Returns the bytes covered by the checksum: everything after the header
/// and before the name.
#[must_use]
pub fn checksum_region<'a>(bytes: &'a [u8], header: &DeckHeader) -> &'a [u8] {
    bytes
        .get(header.header_len..header.card_data_end)
        .unwrap_or_default()
}

/// Checks the stored checksum against the card-data region of `bytes`.
pub fn verify_checksum(bytes: &[u8], header: &DeckHeader) -> WireResult<()> {
    let computed = compute_checksum(checksum_region(bytes, header));
    if computed != header.checksum {
        return Err(DecodeError::ChecksumMismatch {
            stored: header.checksum,
            computed,
        });
    }
    Ok(())
}
