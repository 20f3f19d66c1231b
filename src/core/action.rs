//! Moves a player can make on their turn.
//!
//! Every card kind has a matching `PlayX` action; `PlayBonus` spends the
//! player's one-shot bonus. Which players an action must name is described
//! by its `TargetSpec` (see `effects::targeting`).

use serde::{Deserialize, Serialize};

use crate::cards::{Bonus, Card};
use crate::effects::TargetSpec;

/// A move made by the current player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    PlayWater,
    PlayWave,
    PlayDoubleWave,
    PlayPirat,
    PlayGhost,
    PlayRound,
    PlayPiranha,
    PlayBonus,
}

impl Action {
    /// The card consumed by this action, `None` for `PlayBonus`.
    #[must_use]
    pub fn card(self) -> Option<Card> {
        match self {
            Action::PlayWater => Some(Card::Water),
            Action::PlayWave => Some(Card::Wave),
            Action::PlayDoubleWave => Some(Card::DoubleWave),
            Action::PlayPirat => Some(Card::Pirat),
            Action::PlayGhost => Some(Card::Ghost),
            Action::PlayRound => Some(Card::Round),
            Action::PlayPiranha => Some(Card::Piranha),
            Action::PlayBonus => None,
        }
    }

    /// Targets this action requires.
    ///
    /// `PlayBonus` has no fixed arity; it defers to the acting player's
    /// bonus, which is why the bonus is passed in.
    #[must_use]
    pub fn target_spec(self, bonus: Bonus) -> TargetSpec {
        match self {
            Action::PlayWater | Action::PlayWave | Action::PlayDoubleWave => TargetSpec::none(),
            Action::PlayPirat => TargetSpec::single_with_water(),
            Action::PlayGhost => TargetSpec::single_other(),
            Action::PlayRound => TargetSpec::all_others(),
            Action::PlayPiranha => TargetSpec::exactly_others(2),
            Action::PlayBonus => bonus.target_spec(),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.card() {
            Some(card) => write!(f, "Play {card}"),
            None => write!(f, "Play bonus"),
        }
    }
}
