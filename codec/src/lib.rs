//! Hero and card list decoding for deck codes.
//!
//! This is the main crate that ties together bitstream and wire to turn a
//! deck code into a [`ParsedDeck`]:
//!
//! ```text
//! text -> prefix/base64 -> header -> checksum -> hero count -> heroes -> cards -> name
//! ```
//!
//! # Features
//!
//! - Current and legacy format versions
//! - Delta-compressed identifiers, one chain per list
//! - Inline and extended entry counts
//! - Optional `serde` support for the decoded types
//!
//! # Design Principles
//!
//! - **All or nothing** - A parse returns a complete deck or an error, never a partial deck.
//! - **Bounded decoding** - Every read is checked; entry counts are capped by [`CodecLimits`].
//! - **Deterministic** - Same input, same output; no state survives between calls.
//!
//! # Example
//!
//! ```
//! let deck = codec::parse_deck("ADCIAEAAQ__").unwrap();
//! assert!(deck.heroes.is_empty());
//! assert_eq!(deck.cards[0].id.raw(), 1);
//! assert_eq!(deck.cards[0].count, 1);
//! ```

mod card;
mod deck;
mod error;
mod limits;
mod types;

pub use card::{
    read_entry, DeltaChain, EntryRecord, COUNT_MODE_SHIFT, EXTENDED_COUNT_MODE,
    ID_DELTA_SEED_BITS, MAX_INLINE_COUNT,
};
pub use deck::{parse_deck, parse_deck_bytes, parse_deck_with_limits};
pub use error::{CodecError, CodecResult, ErrorKind, LimitKind};
pub use limits::CodecLimits;
pub use types::{CardEntry, CardId, HeroEntry, ParsedDeck};
pub use wire::Limits as WireLimits;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        // Verify all expected items are exported
        let _ = CardId::new(0);
        let _ = DeltaChain::new();
        let _ = WireLimits::default();
        let _ = CodecLimits::default();

        // Error types
        let _: CodecResult<()> = Ok(());
    }

    #[test]
    fn header_layout_fills_a_byte() {
        assert_eq!(ID_DELTA_SEED_BITS + 1, COUNT_MODE_SHIFT);
        assert_eq!(EXTENDED_COUNT_MODE, 0xFF >> COUNT_MODE_SHIFT);
    }

    #[test]
    fn limits_reexported() {
        // Limits is re-exported from wire
        let limits = WireLimits::default();
        assert!(limits.max_code_len > 0);
    }
}
