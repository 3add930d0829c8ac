//! Core types for decoded decks.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A card identifier.
///
/// Heroes and cards share the same identifier space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct CardId(u32);

impl CardId {
    /// Creates a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw card ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns the ID `delta` past this one, or `None` on overflow.
    #[must_use]
    pub const fn checked_add(self, delta: u32) -> Option<Self> {
        match self.0.checked_add(delta) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<CardId> for u32 {
    fn from(id: CardId) -> Self {
        id.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// One hero slot. `turn` is the turn the hero is deployed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeroEntry {
    pub id: CardId,
    pub turn: u32,
}

/// One card stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CardEntry {
    pub id: CardId,
    pub count: u32,
}

/// A fully decoded deck.
///
/// Only produced by a successful parse; entries keep their encoded order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParsedDeck {
    pub heroes: Vec<HeroEntry>,
    pub cards: Vec<CardEntry>,
    pub name: String,
}

impl ParsedDeck {
    /// Returns the sum of all card stack counts (heroes excluded).
    #[must_use]
    pub fn total_cards(&self) -> u64 {
        self.cards.iter().map(|card| u64::from(card.count)).sum()
    }

    /// Returns the hero IDs in deck order.
    pub fn hero_ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.heroes.iter().map(|hero| hero.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_id_roundtrip() {
        let id = CardId::new(10_014);
        assert_eq!(id.raw(), 10_014);
        assert_eq!(u32::from(id), 10_014);
        assert_eq!(CardId::from(7), CardId::new(7));
    }

    #[test]
    fn card_id_checked_add() {
        assert_eq!(CardId::new(40).checked_add(5), Some(CardId::new(45)));
        assert_eq!(CardId::new(u32::MAX).checked_add(1), None);
    }

    #[test]
    fn card_id_display() {
        assert_eq!(CardId::new(3000).to_string(), "3000");
        assert_eq!(format!("{:>6}", CardId::new(42)), "    42");
    }

    #[test]
    fn card_id_ordering() {
        assert!(CardId::new(1) < CardId::new(2));
        assert_eq!(CardId::default(), CardId::new(0));
    }

    #[test]
    fn total_cards_sums_counts() {
        let deck = ParsedDeck {
            heroes: vec![HeroEntry {
                id: CardId::new(1),
                turn: 1,
            }],
            cards: vec![
                CardEntry {
                    id: CardId::new(2),
                    count: 3,
                },
                CardEntry {
                    id: CardId::new(5),
                    count: u32::MAX,
                },
            ],
            name: String::new(),
        };
        assert_eq!(deck.total_cards(), 3 + u64::from(u32::MAX));
        assert_eq!(deck.hero_ids().collect::<Vec<_>>(), vec![CardId::new(1)]);
    }

    #[test]
    fn default_deck_is_empty() {
        let deck = ParsedDeck::default();
        assert!(deck.heroes.is_empty());
        assert!(deck.cards.is_empty());
        assert!(deck.name.is_empty());
        assert_eq!(deck.total_cards(), 0);
    }
}
