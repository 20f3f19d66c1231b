//! Card kinds.
//!
//! Cards carry no per-instance state: two Wave cards are interchangeable,
//! so a card is just its kind.

use serde::{Deserialize, Serialize};

use crate::core::Action;

/// A card kind.
///
/// `Unknown` is a placeholder for a card that has not been assigned yet.
/// It never appears in a deck and cannot be played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Card {
    #[default]
    Unknown,
    Water,
    Wave,
    DoubleWave,
    Pirat,
    Ghost,
    Round,
    Piranha,
}

impl Card {
    /// Every playable card kind in canonical order.
    pub const ALL: [Card; 7] = [
        Card::Water,
        Card::Wave,
        Card::DoubleWave,
        Card::Pirat,
        Card::Ghost,
        Card::Round,
        Card::Piranha,
    ];

    /// Short label used on the table.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Card::Unknown => "?",
            Card::Water => "||",
            Card::Wave => "~",
            Card::DoubleWave => "~~",
            Card::Pirat => "Pirat",
            Card::Ghost => "Ghost",
            Card::Round => "Round",
            Card::Piranha => "Piranha",
        }
    }

    /// The action that plays this card.
    #[must_use]
    pub const fn action(self) -> Option<Action> {
        match self {
            Card::Unknown => None,
            Card::Water => Some(Action::PlayWater),
            Card::Wave => Some(Action::PlayWave),
            Card::DoubleWave => Some(Action::PlayDoubleWave),
            Card::Pirat => Some(Action::PlayPirat),
            Card::Ghost => Some(Action::PlayGhost),
            Card::Round => Some(Action::PlayRound),
            Card::Piranha => Some(Action::PlayPiranha),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_is_not_playable() {
        assert!(!Card::ALL.contains(&Card::Unknown));
        assert_eq!(Card::Unknown.action(), None);
        assert_eq!(Card::default(), Card::Unknown);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Card::Water.to_string(), "||");
        assert_eq!(Card::DoubleWave.to_string(), "~~");
        assert_eq!(Card::Piranha.to_string(), "Piranha");
    }

    #[test]
    fn test_canonical_order_is_sorted() {
        let mut sorted = Card::ALL;
        sorted.sort();
        assert_eq!(sorted, Card::ALL);
    }
}
