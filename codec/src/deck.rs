//! Deck parsing: header, checksum, hero list, card list, name.

use std::str::FromStr;

use bitstream::ByteReader;
use wire::{decode_deck_string_with_limits, decode_header, verify_checksum, HERO_COUNT_SEED_BITS};

use crate::card::{read_entry, DeltaChain};
use crate::error::{CodecError, CodecResult, LimitKind};
use crate::limits::CodecLimits;
use crate::types::{CardEntry, HeroEntry, ParsedDeck};

/// Decodes a deck code using default limits.
pub fn parse_deck(code: &str) -> CodecResult<ParsedDeck> {
    parse_deck_with_limits(code, &wire::Limits::default(), &CodecLimits::default())
}

/// Decodes a deck code.
pub fn parse_deck_with_limits(
    code: &str,
    wire_limits: &wire::Limits,
    limits: &CodecLimits,
) -> CodecResult<ParsedDeck> {
    let bytes = decode_deck_string_with_limits(code, wire_limits).map_err(|err| {
        tracing::debug!(error = %err, "deck code text rejected");
        CodecError::from(err)
    })?;
    parse_deck_bytes(&bytes, limits)
}

/// Decodes an already base64-decoded deck buffer.
///
/// Either the whole deck is returned or nothing is.
pub fn parse_deck_bytes(bytes: &[u8], limits: &CodecLimits) -> CodecResult<ParsedDeck> {
    let result = parse_buffer(bytes, limits);
    if let Err(err) = &result {
        tracing::debug!(error = %err, kind = %err.kind(), len = bytes.len(), "deck parse failed");
    }
    result
}

fn parse_buffer(bytes: &[u8], limits: &CodecLimits) -> CodecResult<ParsedDeck> {
    let header = decode_header(bytes)?;
    verify_checksum(bytes, &header)?;
    tracing::debug!(
        version = header.version,
        name_len = header.name_len,
        body_len = header.body_len(),
        "deck header decoded"
    );

    let mut reader = ByteReader::new(bytes);
    reader.skip(header.header_len)?;

    // Heroes must fit inside the card-data region.
    reader.set_limit(header.card_data_end);
    let hero_count = reader.read_var_u32(header.version_and_heroes, HERO_COUNT_SEED_BITS)?;
    let hero_count = usize::try_from(hero_count).unwrap_or(usize::MAX);
    if hero_count > limits.max_heroes {
        return Err(CodecError::LimitsExceeded {
            kind: LimitKind::Heroes,
            limit: limits.max_heroes,
            actual: hero_count,
        });
    }

    let mut heroes = Vec::with_capacity(hero_count.min(reader.remaining()));
    let mut chain = DeltaChain::new();
    for _ in 0..hero_count {
        let record = read_entry(&mut reader, &mut chain)?;
        tracing::trace!(id = record.id.raw(), turn = record.count, "hero");
        heroes.push(HeroEntry {
            id: record.id,
            turn: record.count,
        });
    }

    // Cards start a fresh chain. Individual records may run into the name
    // bytes; only the loop condition is tied to the card-data region.
    reader.set_limit(bytes.len());
    let mut cards = Vec::new();
    let mut chain = DeltaChain::new();
    while reader.position() < header.card_data_end {
        if cards.len() >= limits.max_cards {
            return Err(CodecError::LimitsExceeded {
                kind: LimitKind::Cards,
                limit: limits.max_cards,
                actual: cards.len() + 1,
            });
        }
        let record = read_entry(&mut reader, &mut chain)?;
        tracing::trace!(id = record.id.raw(), count = record.count, "card");
        cards.push(CardEntry {
            id: record.id,
            count: record.count,
        });
    }

    let name_bytes = bytes.get(header.card_data_end..).unwrap_or_default();
    let name = String::from_utf8_lossy(name_bytes).into_owned();

    tracing::debug!(
        heroes = heroes.len(),
        cards = cards.len(),
        name = %name,
        "deck decoded"
    );
    Ok(ParsedDeck {
        heroes,
        cards,
        name,
    })
}

impl FromStr for ParsedDeck {
    type Err = CodecError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        parse_deck(code)
    }
}
