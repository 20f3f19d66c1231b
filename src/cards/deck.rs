//! The shared draw pile and its discard pile.
//!
//! The deck is owned by the game. Players never hold a reference to it;
//! they receive cards by value through `pick`, and played cards come back
//! through `discard`. Cards are never created or destroyed after
//! construction, so `len() + discard_len()` plus every hand is always
//! `total_len()`.
//!
//! Both piles are `im::Vector`s, so cloning a game for lookahead is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::Card;
use crate::core::constants::CARD_COPIES;
use crate::core::GameRng;
use crate::error::EmptyDeck;

/// Draw pile (front = top) plus discard pile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
    discard: Vector<Card>,
    total: usize,
}

impl Deck {
    /// Build a fresh, unshuffled deck.
    ///
    /// Holds `CARD_COPIES` of every card kind, grouped in canonical order.
    #[must_use]
    pub fn new() -> Self {
        let cards: Vector<Card> = Card::ALL
            .iter()
            .flat_map(|&card| std::iter::repeat(card).take(CARD_COPIES))
            .collect();
        let total = cards.len();

        Self {
            cards,
            discard: Vector::new(),
            total,
        }
    }

    /// Build a deck holding exactly `cards`, top first.
    ///
    /// Useful for setting up a known draw order.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let cards: Vector<Card> = cards.into_iter().collect();
        let total = cards.len();

        Self {
            cards,
            discard: Vector::new(),
            total,
        }
    }

    /// Uniformly permute the draw pile.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<Card> = self.cards.iter().copied().collect();
        rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }

    /// Remove and return the top card.
    pub fn pick(&mut self) -> Result<Card, EmptyDeck> {
        self.cards.pop_front().ok_or(EmptyDeck)
    }

    /// Put a played card on the discard pile.
    pub fn discard(&mut self, card: Card) {
        self.discard.push_back(card);
    }

    /// Cards left in the draw pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the draw pile is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards on the discard pile.
    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    /// Number of cards the deck was built with.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.total
    }

    /// Draw pile, top first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
