//! Action resolution - validating and executing a move.
//!
//! `ActionResolver::play` is the single entry point. It validates the whole
//! move first and only then mutates, so an `Err` leaves the deck and every
//! player exactly as they were.
//!
//! ## Effects
//!
//! | Action        | Targets          | Effect                                          |
//! |---------------|------------------|-------------------------------------------------|
//! | Water         | none             | actor +`WATER_GAIN`                             |
//! | Wave          | none             | actor +`WAVE_GAIN`                              |
//! | DoubleWave    | none             | actor +`DOUBLE_WAVE_GAIN`                       |
//! | Pirat         | 1 with water     | move up to `PIRAT_STEAL` from target to actor   |
//! | Ghost         | 1 other          | target skips their next turn                    |
//! | Round         | all others       | each loses `ROUND_LOSS` (floor 0)               |
//! | Piranha       | 2 others         | each loses `PIRANHA_BITE`, actor gains the sum  |
//! | Bonus         | per bonus        | see `Bonus`                                     |
//!
//! A played card goes to the discard pile and the actor draws a
//! replacement. Bonuses consume no card.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::cards::{Bonus, Deck};
use crate::core::constants::{
    DOUBLE_WAVE_GAIN, PIRANHA_BITE, PIRAT_STEAL, ROUND_LOSS, SPRING_GAIN, STORM_LOSS, TIDE_DRAW,
    WATER_GAIN, WAVE_GAIN,
};
use crate::core::{Action, PlayerId, PlayerMap};
use crate::error::{PlayError, Result};
use crate::game::Player;

use super::TargetFilter;

/// Validates and applies actions to the roster.
///
/// Holds no state: the roster and deck are borrowed for one call only.
pub struct ActionResolver;

impl ActionResolver {
    /// Validate and execute `action` for `actor` against `targets`.
    ///
    /// # Panics
    ///
    /// If `actor` is not a seat of `roster`.
    pub fn play(
        deck: &mut Deck,
        roster: &mut PlayerMap<Player>,
        actor: PlayerId,
        action: Action,
        targets: &[PlayerId],
    ) -> Result<()> {
        Self::validate(roster, actor, action, targets)?;

        debug!(%actor, %action, ?targets, "resolving action");
        Self::resolve(deck, roster, actor, action, targets);
        Ok(())
    }

    /// Check that `action` is legal for `actor` without changing anything.
    ///
    /// A spent bonus is reported first. Otherwise checks run in order:
    /// target count, target identity, target eligibility, then whether the
    /// actor holds the card.
    pub fn validate(
        roster: &PlayerMap<Player>,
        actor: PlayerId,
        action: Action,
        targets: &[PlayerId],
    ) -> Result<()> {
        let player = &roster[actor];
        if action == Action::PlayBonus && player.bonus_used() {
            return Err(PlayError::BonusAlreadyUsed(player.bonus()));
        }

        let spec = action.target_spec(player.bonus());

        let expected = spec.required(roster.player_count());
        if targets.len() != expected {
            return Err(PlayError::InvalidTargetCount {
                expected,
                got: targets.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for &target in targets {
            if !roster.contains(target) || target == actor || !seen.insert(target) {
                return Err(PlayError::InvalidTarget(target));
            }
        }

        if spec.filter == TargetFilter::OtherWithWater {
            if let Some(&dry) = targets.iter().find(|&&t| roster[t].water() == 0) {
                return Err(PlayError::IneligibleTarget(dry));
            }
        }

        match action.card() {
            Some(card) if !player.has_card(card) => Err(PlayError::CardNotInHand(card)),
            _ => Ok(()),
        }
    }

    /// Apply a validated action.
    fn resolve(
        deck: &mut Deck,
        roster: &mut PlayerMap<Player>,
        actor: PlayerId,
        action: Action,
        targets: &[PlayerId],
    ) {
        if let Some(card) = action.card() {
            roster[actor].remove_card(card);
            deck.discard(card);
        }

        match action {
            Action::PlayWater => roster[actor].gain_water(WATER_GAIN),
            Action::PlayWave => roster[actor].gain_water(WAVE_GAIN),
            Action::PlayDoubleWave => roster[actor].gain_water(DOUBLE_WAVE_GAIN),
            Action::PlayPirat => {
                let stolen = roster[targets[0]].lose_water(PIRAT_STEAL);
                roster[actor].gain_water(stolen);
            }
            Action::PlayGhost => roster[targets[0]].set_skip_next(),
            Action::PlayRound => {
                for &target in targets {
                    roster[target].lose_water(ROUND_LOSS);
                }
            }
            Action::PlayPiranha => {
                let bitten: u32 = targets
                    .iter()
                    .map(|&target| roster[target].lose_water(PIRANHA_BITE))
                    .sum();
                roster[actor].gain_water(bitten);
            }
            Action::PlayBonus => {
                let bonus = roster[actor].bonus();
                roster[actor].mark_bonus_used();
                Self::resolve_bonus(deck, roster, actor, bonus, targets);
            }
        }

        if action.card().is_some() {
            draw(deck, &mut roster[actor], 1);
        }
    }

    fn resolve_bonus(
        deck: &mut Deck,
        roster: &mut PlayerMap<Player>,
        actor: PlayerId,
        bonus: Bonus,
        targets: &[PlayerId],
    ) {
        match bonus {
            Bonus::Spring => roster[actor].gain_water(SPRING_GAIN),
            Bonus::Tide => draw(deck, &mut roster[actor], TIDE_DRAW),
            Bonus::Whirlpool => {
                let target = targets[0];
                let mine = roster[actor].water();
                let theirs = roster[target].water();
                roster[actor].set_water(theirs);
                roster[target].set_water(mine);
            }
            Bonus::Storm => {
                for &target in targets {
                    roster[target].lose_water(STORM_LOSS);
                }
            }
        }
    }
}

/// Draw up to `count` cards into `player`'s hand, stopping quietly when
/// the deck runs out.
pub(crate) fn draw(deck: &mut Deck, player: &mut Player, count: usize) {
    for _ in 0..count {
        match deck.pick() {
            Ok(card) => player.add_card(card),
            Err(err) => {
                debug!(player = %player.id(), %err, "draw skipped");
                break;
            }
        }
    }
}
