//! Byte cursor and continuation-bit varint primitives for deck codes.
//!
//! This crate provides [`ByteReader`] and [`ByteWriter`] for the packed layout
//! used inside deck codes: integers split into a seed field that shares a byte
//! with other data, followed by a chain of 7-bit chunks.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads are checked against an explicit limit.
//! - **No domain knowledge** - This crate knows nothing about heroes, cards, or checksums.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use bitstream::{ByteReader, ByteWriter};
//!
//! let mut writer = ByteWriter::new();
//! writer.write_seeded_var_u32(0x20, 300, 3).unwrap();
//!
//! let bytes = writer.finish();
//!
//! let mut reader = ByteReader::new(&bytes);
//! let seed = reader.read_u8().unwrap();
//! assert_eq!(seed >> 4, 2);
//! assert_eq!(reader.read_var_u32(seed, 3).unwrap(), 300);
//! ```

mod error;
mod reader;
mod writer;

pub use error::{BitError, BitResult};
pub use reader::{read_bits_chunk, ByteReader, CONTINUATION_CHUNK_BITS, MAX_CHUNK_BITS};
pub use writer::{seed_bits, ByteWriter};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_roundtrip() {
        let writer = ByteWriter::new();
        let bytes = writer.finish();
        assert!(bytes.is_empty());

        let reader = ByteReader::new(&bytes);
        assert!(reader.is_exhausted());
    }

    #[test]
    fn seeded_roundtrip_various_widths() {
        let test_cases = [(0u32, 3u8), (7, 3), (8, 3), (31, 5), (32, 5), (300, 5), (u32::MAX, 3)];

        for (value, bits) in test_cases {
            let mut writer = ByteWriter::new();
            writer.write_seeded_var_u32(0, value, bits).unwrap();
            let bytes = writer.finish();

            let mut reader = ByteReader::new(&bytes);
            let seed = reader.read_u8().unwrap();
            let read_value = reader.read_var_u32(seed, bits).unwrap();
            assert_eq!(read_value, value, "roundtrip failed for {bits}-bit seed {value}");
            assert!(reader.is_exhausted());
        }
    }

    #[test]
    fn doctest_example() {
        let mut writer = ByteWriter::new();
        writer.write_seeded_var_u32(0x20, 300, 3).unwrap();
        let bytes = writer.finish();

        let mut reader = ByteReader::new(&bytes);
        let seed = reader.read_u8().unwrap();
        assert_eq!(seed >> 4, 2);
        assert_eq!(reader.read_var_u32(seed, 3).unwrap(), 300);
    }
}
