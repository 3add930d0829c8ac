//! Prefix and URL-safe base64 wrapping of deck buffers.

use base64::alphabet;
use base64::engine::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

use crate::error::{DecodeError, LimitKind, WireResult};
use crate::limits::Limits;

/// Literal prefix every deck code starts with.
pub const PREFIX: &str = "ADC";

/// Standard padded alphabet. Non-zero bits left over in the final symbol are
/// ignored rather than rejected.
const ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Decodes a deck code into its raw byte buffer using default limits.
pub fn decode_deck_string(code: &str) -> WireResult<Vec<u8>> {
    decode_deck_string_with_limits(code, &Limits::default())
}

/// Decodes a deck code into its raw byte buffer.
///
/// The prefix is stripped, `-` and `_` are mapped back to `/` and `=`, and
/// the remainder is decoded as standard padded base64.
pub fn decode_deck_string_with_limits(code: &str, limits: &Limits) -> WireResult<Vec<u8>> {
    let payload = code.strip_prefix(PREFIX).ok_or(DecodeError::InvalidPrefix)?;
    if code.len() > limits.max_code_len {
        return Err(DecodeError::LimitsExceeded {
            kind: LimitKind::CodeLength,
            limit: limits.max_code_len,
            actual: code.len(),
        });
    }

    let standard: String = payload
        .chars()
        .map(|c| match c {
            '-' => '/',
            '_' => '=',
            other => other,
        })
        .collect();

    Ok(ENGINE.decode(standard)?)
}

/// Wraps a raw deck buffer as a deck code.
#[must_use]
pub fn encode_deck_string(bytes: &[u8]) -> String {
    let encoded = ENGINE.encode(bytes);
    let mut code = String::with_capacity(PREFIX.len() + encoded.len());
    code.push_str(PREFIX);
    code.extend(encoded.chars().map(|c| match c {
        '/' => '-',
        '=' => '_',
        other => other,
    }));
    code
}
