//! Single entry records shared by the hero and card lists.
//!
//! Every record starts with one header byte:
//!
//! ```text
//! [ count mode:2 | id delta continuation:1 | id delta seed:5 ]
//! ```
//!
//! A count mode of `0b11` means the count follows the id delta as a pure
//! 7-bit chain; any other mode `m` is an inline count of `m + 1`.

use bitstream::ByteReader;

use crate::error::{CodecError, CodecResult};
use crate::types::CardId;

/// Position of the count mode in the record header.
pub const COUNT_MODE_SHIFT: u8 = 6;

/// Count mode selecting an extended count.
pub const EXTENDED_COUNT_MODE: u8 = 0b11;

/// Low header bits seeding the identifier delta. Bit 5 is its continuation.
pub const ID_DELTA_SEED_BITS: u8 = 5;

/// Largest count that fits inline.
pub const MAX_INLINE_COUNT: u32 = EXTENDED_COUNT_MODE as u32;

/// Running identifier of one list.
///
/// Each record stores its identifier as a delta from the previous record in
/// the same list. The hero and card lists each get their own chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeltaChain {
    last: CardId,
}

impl DeltaChain {
    /// Starts a chain at identifier 0.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: CardId::new(0),
        }
    }

    /// Returns the identifier of the last record read through this chain.
    #[must_use]
    pub const fn last(&self) -> CardId {
        self.last
    }

    fn resolve(&self, delta: u32) -> CodecResult<CardId> {
        self.last.checked_add(delta).ok_or(CodecError::IdOverflow {
            base: self.last.raw(),
            delta,
        })
    }
}

/// One decoded record. Hero lists read `count` as the deploy turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryRecord {
    pub id: CardId,
    pub count: u32,
}

/// Reads one record at the reader's cursor and advances `chain` past it.
///
/// Bounded by the reader's active limit.
pub fn read_entry(
    reader: &mut ByteReader<'_>,
    chain: &mut DeltaChain,
) -> CodecResult<EntryRecord> {
    let header = reader.read_u8()?;
    let mode = header >> COUNT_MODE_SHIFT;

    let delta = reader.read_var_u32(header, ID_DELTA_SEED_BITS)?;
    let id = chain.resolve(delta)?;

    let count = if mode == EXTENDED_COUNT_MODE {
        let count = reader.read_var_u32(0, 0)?;
        if count == 0 {
            return Err(CodecError::ZeroCount { id: id.raw() });
        }
        count
    } else {
        u32::from(mode) + 1
    };

    chain.last = id;
    Ok(EntryRecord { id, count })
}
