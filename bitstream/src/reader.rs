//! Bounded byte cursor with continuation-bit varint decoding.

use crate::error::{BitError, BitResult};

/// Widest field a single chunk may carry; bit 7 is always left for the
/// continuation flag.
pub const MAX_CHUNK_BITS: u8 = 7;

/// Value bits contributed by every byte after the seed byte of a varint.
pub const CONTINUATION_CHUNK_BITS: u8 = 7;

/// Copies the low `bits` of `chunk` into `out` at `shift`.
///
/// Returns whether bit `bits` of `chunk` (the continuation bit sitting
/// directly above the field) is set. With `bits == 0` nothing is copied and
/// only bit 0 is tested.
///
/// # Errors
///
/// Returns [`BitError::InvalidBitCount`] if `bits > 7` and
/// [`BitError::VarintOverflow`] if `shift` would place the field past a `u32`.
pub fn read_bits_chunk(chunk: u8, bits: u8, shift: u32, out: &mut u32) -> BitResult<bool> {
    if bits > MAX_CHUNK_BITS {
        return Err(BitError::InvalidBitCount {
            bits,
            max_bits: MAX_CHUNK_BITS,
        });
    }
    if shift >= u32::BITS {
        return Err(BitError::VarintOverflow { shift });
    }
    let continue_bit = 1u8 << bits;
    let new_bits = chunk & (continue_bit - 1);
    *out |= u32::from(new_bits) << shift;
    Ok(chunk & continue_bit != 0)
}

/// A byte cursor over a decoded deck buffer.
///
/// Reads never go past the active limit, which starts at the end of the
/// buffer and can be narrowed with [`set_limit`](Self::set_limit). The reader
/// never panics on malformed input.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
    limit: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a new `ByteReader` positioned at the start of `data`.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            limit: data.len(),
        }
    }

    /// Returns the current cursor position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the active read limit (exclusive).
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the length of the underlying buffer.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the underlying buffer is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of bytes left before the active limit.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.pos)
    }

    /// Returns `true` once the cursor has reached the active limit.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.pos >= self.limit
    }

    /// Moves the read limit. Values past the buffer end are clamped to it.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit.min(self.data.len());
    }

    /// Advances the cursor by `count` bytes without decoding them.
    pub fn skip(&mut self, count: usize) -> BitResult<()> {
        if count > self.remaining() {
            return Err(BitError::EndOfBuffer {
                position: self.limit,
                limit: self.limit,
            });
        }
        self.pos += count;
        Ok(())
    }

    /// Reads one byte.
    pub fn read_u8(&mut self) -> BitResult<u8> {
        if self.pos >= self.limit {
            return Err(BitError::EndOfBuffer {
                position: self.pos,
                limit: self.limit,
            });
        }
        let value = self.data[self.pos];
        self.pos += 1;
        Ok(value)
    }

    /// Reads a varint seeded by the low `base_bits` of `base`.
    ///
    /// When `base_bits` is non-zero the seed's continuation bit (bit
    /// `base_bits` of `base`) decides whether any buffer bytes follow. When it
    /// is zero the seed carries nothing and at least one buffer byte is always
    /// consumed. Each following byte contributes 7 bits, low chunk first,
    /// until one arrives with bit 7 clear.
    pub fn read_var_u32(&mut self, base: u8, base_bits: u8) -> BitResult<u32> {
        let mut value = 0u32;
        let mut shift = 0u32;

        if base_bits != 0 && !read_bits_chunk(base, base_bits, shift, &mut value)? {
            return Ok(value);
        }
        shift += u32::from(base_bits);

        loop {
            let byte = self.read_u8()?;
            if !read_bits_chunk(byte, CONTINUATION_CHUNK_BITS, shift, &mut value)? {
                return Ok(value);
            }
            shift += u32::from(CONTINUATION_CHUNK_BITS);
        }
    }
}
