//! Deck code framing for deckcode.
//!
//! This crate handles everything between the text a user pastes and the
//! entry data inside the decoded buffer: the `ADC` prefix, the URL-safe
//! base64 wrapping, the version/checksum/name-length header, and the
//! checksum over the card-data region. It does not know how heroes or cards
//! are encoded.
//!
//! # Design Principles
//!
//! - **Versioned format** - Only the current and the one legacy version decode.
//! - **Bounded decoding** - Text length and name length are validated before use.
//! - **No domain knowledge** - This crate handles framing, not deck contents.

mod checksum;
mod error;
mod header;
mod limits;
mod text;

pub use checksum::{checksum_region, compute_checksum, verify_checksum};
pub use error::{DecodeError, LimitKind, WireResult};
pub use header::{
    decode_header, DeckHeader, HEADER_SIZE, HERO_COUNT_SEED_BITS, LEGACY_HEADER_SIZE,
    LEGACY_VERSION, VERSION, VERSION_SHIFT,
};
pub use limits::Limits;
pub use text::{decode_deck_string, decode_deck_string_with_limits, encode_deck_string, PREFIX};
