//! Per-player state.
//!
//! A `Player` is owned by the game's roster and only changes through
//! dealing (`add_card`) or action resolution. Hands are private: observers
//! see only the hand size, through `core::State`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Bonus, Card};
use crate::core::constants::WIN_WATER;
use crate::core::{Action, PlayerId, PlayerMap};

/// A participant's mutable state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    /// Unordered; order carries no meaning.
    hand: SmallVec<[Card; 8]>,
    water: u32,
    bonus: Bonus,
    bonus_used: bool,
    /// Set by a Ghost, consumed by the turn controller.
    skip_next: bool,
}

impl Player {
    /// Create a player with an empty hand, no water, and an unused bonus.
    #[must_use]
    pub fn new(id: PlayerId, bonus: Bonus) -> Self {
        Self {
            id,
            hand: SmallVec::new(),
            water: 0,
            bonus,
            bonus_used: false,
            skip_next: false,
        }
    }

    /// Start with `water` instead of zero (scenario setup).
    #[must_use]
    pub fn with_water(mut self, water: u32) -> Self {
        self.water = water;
        self
    }

    /// Start with `cards` in hand (scenario setup).
    #[must_use]
    pub fn with_cards(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.hand.extend(cards);
        self
    }

    /// Start with the bonus already spent (scenario setup).
    #[must_use]
    pub fn with_bonus_used(mut self) -> Self {
        self.bonus_used = true;
        self
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn water(&self) -> u32 {
        self.water
    }

    #[must_use]
    pub fn bonus(&self) -> Bonus {
        self.bonus
    }

    #[must_use]
    pub fn bonus_used(&self) -> bool {
        self.bonus_used
    }

    /// Whether a Ghost will make this player miss their next turn.
    #[must_use]
    pub fn skip_next(&self) -> bool {
        self.skip_next
    }

    #[must_use]
    pub fn has_card(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    /// Put a card in hand. No hand limit is enforced here.
    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Whether this player has reached `WIN_WATER`.
    #[must_use]
    pub fn is_winner(&self) -> bool {
        self.water >= WIN_WATER
    }

    /// Every other seat, ascending.
    #[must_use]
    pub fn other_players(&self, roster: &PlayerMap<Player>) -> SmallVec<[PlayerId; 4]> {
        roster.player_ids().filter(|&id| id != self.id).collect()
    }

    /// Other seats holding water, ascending.
    #[must_use]
    pub fn other_players_with_water(&self, roster: &PlayerMap<Player>) -> SmallVec<[PlayerId; 4]> {
        roster
            .iter()
            .filter(|(id, player)| *id != self.id && player.water > 0)
            .map(|(id, _)| id)
            .collect()
    }

    /// Every seat including this one, ascending.
    #[must_use]
    pub fn all_players(&self, roster: &PlayerMap<Player>) -> SmallVec<[PlayerId; 4]> {
        roster.player_ids().collect()
    }

    /// Actions this player could legally make right now, given suitable
    /// targets.
    ///
    /// One entry per distinct card kind in hand, in canonical card order,
    /// followed by `PlayBonus` while the bonus is unspent. Actions whose
    /// target rule cannot be met (a Pirat when nobody else holds water, a
    /// Piranha at a two-player table) are left out.
    #[must_use]
    pub fn available_actions(&self, roster: &PlayerMap<Player>) -> Vec<Action> {
        let cards = Card::ALL
            .into_iter()
            .filter(|&card| self.has_card(card))
            .filter_map(Card::action);
        let bonus = (!self.bonus_used).then_some(Action::PlayBonus);

        cards
            .chain(bonus)
            .filter(|action| action.target_spec(self.bonus).is_satisfiable(roster, self.id))
            .collect()
    }

    // === Resolution ===

    /// Remove one copy of `card` from hand. Returns false if absent.
    pub(crate) fn remove_card(&mut self, card: Card) -> bool {
        match self.hand.iter().position(|&c| c == card) {
            Some(pos) => {
                self.hand.swap_remove(pos);
                true
            }
            None => false,
        }
    }

    pub(crate) fn gain_water(&mut self, amount: u32) {
        self.water = self.water.saturating_add(amount);
    }

    /// Lose up to `amount` water, never going below zero.
    ///
    /// Returns how much was actually removed.
    pub(crate) fn lose_water(&mut self, amount: u32) -> u32 {
        let removed = amount.min(self.water);
        self.water -= removed;
        removed
    }

    pub(crate) fn set_water(&mut self, water: u32) {
        self.water = water;
    }

    pub(crate) fn mark_bonus_used(&mut self) {
        self.bonus_used = true;
    }

    pub(crate) fn set_skip_next(&mut self) {
        self.skip_next = true;
    }

    /// Consume the skip flag, returning whether it was set.
    pub(crate) fn take_skip(&mut self) -> bool {
        std::mem::take(&mut self.skip_next)
    }
}
