//! Introspection and decoding tools for deck codes.
//!
//! This crate provides utilities for understanding encoded decks:
//!
//! - Decode codes into structured JSON or a readable listing
//! - Inspect the header and region sizes of a code, even when it fails to parse
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to see why a code does or does not decode.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use bitstream::ByteReader;
use codec::{CodecError, CodecLimits, ParsedDeck};
use serde::Serialize;
use wire::DeckHeader;

/// Outcome of decoding one code, shaped for JSON output.
#[derive(Debug, Serialize)]
pub struct DecodeOutput {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deck: Option<ParsedDeck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<DecodeFailure>,
}

/// A failed decode with its classification.
#[derive(Debug, Serialize)]
pub struct DecodeFailure {
    pub kind: String,
    pub message: String,
}

impl DecodeOutput {
    /// Returns `true` if the code decoded.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.deck.is_some()
    }
}

/// Decodes one code without failing the caller.
pub fn decode_code(code: &str, wire_limits: &wire::Limits, limits: &CodecLimits) -> DecodeOutput {
    match codec::parse_deck_with_limits(code, wire_limits, limits) {
        Ok(deck) => DecodeOutput {
            code: code.to_string(),
            deck: Some(deck),
            error: None,
        },
        Err(err) => DecodeOutput {
            code: code.to_string(),
            deck: None,
            error: Some(DecodeFailure {
                kind: err.kind().to_string(),
                message: err.to_string(),
            }),
        },
    }
}

/// Structural view of a code's buffer.
#[derive(Debug)]
pub struct InspectReport {
    pub total_len: usize,
    pub header: DeckHeader,
    pub computed_checksum: u8,
    /// Hero count as read from the header seed, if it could be read.
    pub hero_count: Option<u32>,
    pub deck: Result<ParsedDeck, CodecError>,
}

/// Decodes the text and header of `code` and attempts a full parse.
///
/// Fails only when there is no header to report on.
pub fn inspect_code(
    code: &str,
    wire_limits: &wire::Limits,
    limits: &CodecLimits,
) -> Result<InspectReport> {
    let bytes = wire::decode_deck_string_with_limits(code, wire_limits).context("decode text")?;
    let header = wire::decode_header(&bytes).context("decode header")?;
    let computed_checksum = wire::compute_checksum(wire::checksum_region(&bytes, &header));

    let mut reader = ByteReader::new(&bytes);
    reader.set_limit(header.card_data_end);
    let hero_count = reader
        .skip(header.header_len)
        .and_then(|()| reader.read_var_u32(header.version_and_heroes, wire::HERO_COUNT_SEED_BITS))
        .ok();

    Ok(InspectReport {
        total_len: bytes.len(),
        header,
        computed_checksum,
        hero_count,
        deck: codec::parse_deck_bytes(&bytes, limits),
    })
}

/// Renders a deck as an aligned text listing.
#[must_use]
pub fn format_deck_pretty(deck: &ParsedDeck) -> String {
    let mut out = String::new();
    let name = if deck.name.is_empty() {
        "(unnamed)"
    } else {
        deck.name.as_str()
    };
    let _ = writeln!(out, "deck: {name}");
    let _ = writeln!(out, "heroes ({}):", deck.heroes.len());
    for hero in &deck.heroes {
        let _ = writeln!(out, "  turn {:>2}  id {:>6}", hero.turn, hero.id);
    }
    let _ = writeln!(
        out,
        "cards ({} stacks, {} total):",
        deck.cards.len(),
        deck.total_cards()
    );
    for card in &deck.cards {
        let _ = writeln!(out, "  {:>3}x     id {:>6}", card.count, card.id);
    }
    out
}

/// Renders an inspect report.
#[must_use]
pub fn format_inspect_report(report: &InspectReport) -> String {
    let header = &report.header;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "version: {} bytes: {} header: {} body: {} name: {}",
        header.version,
        report.total_len,
        header.header_len,
        header.body_len(),
        header.name_len
    );
    let status = if header.checksum == report.computed_checksum {
        "ok"
    } else {
        "MISMATCH"
    };
    let _ = writeln!(
        out,
        "checksum: stored 0x{:02x} computed 0x{:02x} ({status})",
        header.checksum, report.computed_checksum
    );
    match report.hero_count {
        Some(count) => {
            let _ = writeln!(out, "hero count: {count}");
        }
        None => {
            let _ = writeln!(out, "hero count: unreadable");
        }
    }
    match &report.deck {
        Ok(deck) => {
            let _ = writeln!(
                out,
                "decoded: {} heroes, {} card stacks, {} cards",
                deck.heroes.len(),
                deck.cards.len(),
                deck.total_cards()
            );
        }
        Err(err) => {
            let _ = writeln!(out, "decode failed ({}): {err}", err.kind());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREEN_BLACK: &str =
        "ADCJWkTZX05uwGDCRV4XQGy3QGLmqUBg4GQJgGLGgO7AaABR3JlZW4vQmxhY2sgRXhhbXBsZQ__";

    fn defaults() -> (wire::Limits, CodecLimits) {
        (wire::Limits::default(), CodecLimits::default())
    }

    #[test]
    fn decode_code_success_json() {
        let (w, c) = defaults();
        let output = decode_code("ADCIAEAAQ__", &w, &c);
        assert!(output.is_ok());
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["deck"]["cards"][0]["id"], 1);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn decode_code_failure_json() {
        let (w, c) = defaults();
        let output = decode_code("XYZ", &w, &c);
        assert!(!output.is_ok());
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["error"]["kind"], "invalid prefix");
        assert!(json.get("deck").is_none());
    }

    #[test]
    fn inspect_reports_layout() {
        let (w, c) = defaults();
        let report = inspect_code(GREEN_BLACK, &w, &c).unwrap();
        assert_eq!(report.total_len, 52);
        assert_eq!(report.header.name_len, 19);
        assert_eq!(report.hero_count, Some(5));
        assert_eq!(report.computed_checksum, report.header.checksum);
        assert!(report.deck.is_ok());

        let text = format_inspect_report(&report);
        assert!(text.contains("(ok)"));
        assert!(text.contains("hero count: 5"));
    }

    #[test]
    fn inspect_survives_bad_checksum() {
        let (w, c) = defaults();
        let mut bytes = wire::decode_deck_string("ADCIAEAAQ__").unwrap();
        bytes[1] = 0x77;
        let code = wire::encode_deck_string(&bytes);
        let report = inspect_code(&code, &w, &c).unwrap();
        assert_eq!(report.computed_checksum, 0x01);
        assert!(report.deck.is_err());
        assert!(format_inspect_report(&report).contains("MISMATCH"));
    }

    #[test]
    fn inspect_honours_code_length_limit() {
        let tight = wire::Limits { max_code_len: 16 };
        assert!(inspect_code(GREEN_BLACK, &tight, &CodecLimits::default()).is_err());
        let report =
            inspect_code(GREEN_BLACK, &wire::Limits::unlimited(), &CodecLimits::unlimited())
                .unwrap();
        assert!(report.deck.is_ok());
    }

    #[test]
    fn inspect_needs_header() {
        let (w, c) = defaults();
        assert!(inspect_code("ADC", &w, &c).is_err());
    }

    #[test]
    fn pretty_listing() {
        let deck = codec::parse_deck(GREEN_BLACK).unwrap();
        let text = format_deck_pretty(&deck);
        assert!(text.starts_with("deck: Green/Black Example"));
        assert!(text.contains("heroes (5):"));
        assert!(text.contains("cards (15 stacks, 36 total):"));
        assert!(text.contains("id  10354"));
    }

    #[test]
    fn pretty_listing_unnamed() {
        let deck = codec::parse_deck("ADCIAEAAQ__").unwrap();
        assert!(format_deck_pretty(&deck).starts_with("deck: (unnamed)"));
    }
}
