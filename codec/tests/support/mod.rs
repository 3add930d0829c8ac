//! Deck buffer builder used by integration tests.

use bitstream::{seed_bits, ByteWriter};
use codec::{
    CardEntry, HeroEntry, ParsedDeck, COUNT_MODE_SHIFT, EXTENDED_COUNT_MODE, ID_DELTA_SEED_BITS,
    MAX_INLINE_COUNT,
};
use wire::{HEADER_SIZE, HERO_COUNT_SEED_BITS, VERSION, VERSION_SHIFT};

fn write_entry(writer: &mut ByteWriter, prev: &mut u32, id: u32, count: u32) {
    assert!(count >= 1, "counts start at 1");
    let delta = id.checked_sub(*prev).expect("entries must be sorted by id");
    let mode = if count <= MAX_INLINE_COUNT {
        u8::try_from(count - 1).unwrap()
    } else {
        EXTENDED_COUNT_MODE
    };
    writer
        .write_seeded_var_u32(mode << COUNT_MODE_SHIFT, delta, ID_DELTA_SEED_BITS)
        .unwrap();
    if mode == EXTENDED_COUNT_MODE {
        writer.write_var_u32_tail(count, 0);
    }
    *prev = id;
}

/// Builds a current-version buffer for `deck`. Entries must be sorted by id.
pub fn encode_bytes(deck: &ParsedDeck) -> Vec<u8> {
    let hero_count = u32::try_from(deck.heroes.len()).unwrap();
    let name = deck.name.as_bytes();

    let entries = deck.heroes.len() + deck.cards.len();
    let mut writer = ByteWriter::with_capacity(HEADER_SIZE + 2 * entries + name.len());
    writer.write_u8((VERSION << VERSION_SHIFT) | seed_bits(hero_count, HERO_COUNT_SEED_BITS).unwrap());
    writer.write_u8(0);
    writer.write_u8(u8::try_from(name.len()).expect("name fits in a byte"));
    writer.write_var_u32_tail(hero_count, HERO_COUNT_SEED_BITS);

    let mut prev = 0;
    for HeroEntry { id, turn } in &deck.heroes {
        write_entry(&mut writer, &mut prev, id.raw(), *turn);
    }
    let mut prev = 0;
    for CardEntry { id, count } in &deck.cards {
        write_entry(&mut writer, &mut prev, id.raw(), *count);
    }

    let checksum = wire::compute_checksum(&writer.as_bytes()[HEADER_SIZE..]);
    writer.patch_u8(1, checksum).unwrap();
    writer.write_bytes(name);
    writer.finish()
}

/// Builds a deck code for `deck`.
pub fn encode_code(deck: &ParsedDeck) -> String {
    wire::encode_deck_string(&encode_bytes(deck))
}
