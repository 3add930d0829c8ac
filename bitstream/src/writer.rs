//! Byte writer mirroring the reader's varint layout.

use crate::error::{BitError, BitResult};
use crate::reader::{CONTINUATION_CHUNK_BITS, MAX_CHUNK_BITS};

/// Packs the low `bits` of `value` into a seed field, setting the
/// continuation bit (bit `bits`) when `value` does not fit.
///
/// # Errors
///
/// Returns [`BitError::InvalidBitCount`] if `bits > 7`.
pub fn seed_bits(value: u32, bits: u8) -> BitResult<u8> {
    if bits > MAX_CHUNK_BITS {
        return Err(BitError::InvalidBitCount {
            bits,
            max_bits: MAX_CHUNK_BITS,
        });
    }
    let limit = 1u32 << bits;
    let mut seed = (value & (limit - 1)) as u8;
    if value >= limit {
        seed |= 1 << bits;
    }
    Ok(seed)
}

/// A growable byte writer for building deck buffers.
#[derive(Debug, Default)]
pub struct ByteWriter {
    bytes: Vec<u8>,
}

impl ByteWriter {
    /// Creates a new empty `ByteWriter`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `ByteWriter` with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bytes),
        }
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the bytes written so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Writes one byte.
    pub fn write_u8(&mut self, value: u8) {
        self.bytes.push(value);
    }

    /// Writes a run of raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Overwrites a byte that was already written.
    pub fn patch_u8(&mut self, index: usize, value: u8) -> BitResult<()> {
        let len = self.bytes.len();
        let slot = self.bytes.get_mut(index).ok_or(BitError::EndOfBuffer {
            position: index,
            limit: len,
        })?;
        *slot = value;
        Ok(())
    }

    /// Writes the bits of `value` above the first `already_written` bits as a
    /// 7-bit continuation chain. Writes nothing once no bits remain.
    pub fn write_var_u32_tail(&mut self, value: u32, already_written: u8) {
        let mut rest = value.checked_shr(u32::from(already_written)).unwrap_or(0);
        while rest > 0 {
            let mut chunk = (rest & 0x7F) as u8;
            rest >>= CONTINUATION_CHUNK_BITS;
            if rest > 0 {
                chunk |= 0x80;
            }
            self.bytes.push(chunk);
        }
    }

    /// Writes a seed byte (`high | seed_bits(value, base_bits)`) followed by
    /// the continuation chain for the rest of `value`.
    ///
    /// `high` supplies the bits above the seed field and its continuation bit.
    pub fn write_seeded_var_u32(&mut self, high: u8, value: u32, base_bits: u8) -> BitResult<()> {
        let seed = seed_bits(value, base_bits)?;
        self.bytes.push(high | seed);
        self.write_var_u32_tail(value, base_bits);
        Ok(())
    }

    /// Finishes writing and returns the byte buffer.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }
}
