#![cfg(feature = "serde")]

use codec::{parse_deck, ParsedDeck};

#[test]
fn deck_serializes_with_plain_ids() {
    let deck = parse_deck("ADCIAEAAQ__").unwrap();
    let json = serde_json::to_value(&deck).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "heroes": [],
            "cards": [{ "id": 1, "count": 1 }],
            "name": "",
        })
    );
}

#[test]
fn deck_json_roundtrip() {
    let deck = parse_deck("ADCIu0ACl6F").unwrap();
    let text = serde_json::to_string(&deck).unwrap();
    let back: ParsedDeck = serde_json::from_str(&text).unwrap();
    assert_eq!(back, deck);
    assert!(text.contains("\"turn\":2"));
}
