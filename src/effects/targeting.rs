//! Target rules for actions and bonuses.
//!
//! - `TargetSpec`: How many players an action names, and which ones qualify
//! - `TargetCount`: Fixed arity, or every other player
//! - `TargetFilter`: Eligibility of a single named player
//!
//! The actor can never target themselves, and a player may appear at most
//! once in a target list.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PlayerId, PlayerMap};
use crate::game::Player;

/// Number of targets to name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetCount {
    /// Exactly N other players.
    Exactly(usize),
    /// Every player except the actor, in any order.
    AllOthers,
}

/// Eligibility rule applied to each named target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetFilter {
    /// Any player other than the actor.
    Other,
    /// Another player whose water total is above zero.
    OtherWithWater,
}

/// Specification for action targeting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSpec {
    pub count: TargetCount,
    pub filter: TargetFilter,
}

impl TargetSpec {
    /// Self-only action: no targets.
    #[must_use]
    pub const fn none() -> Self {
        Self::exactly_others(0)
    }

    /// One other player.
    #[must_use]
    pub const fn single_other() -> Self {
        Self::exactly_others(1)
    }

    /// One other player holding water.
    #[must_use]
    pub const fn single_with_water() -> Self {
        Self {
            count: TargetCount::Exactly(1),
            filter: TargetFilter::OtherWithWater,
        }
    }

    /// Exactly `n` distinct other players.
    #[must_use]
    pub const fn exactly_others(n: usize) -> Self {
        Self {
            count: TargetCount::Exactly(n),
            filter: TargetFilter::Other,
        }
    }

    /// Every other player.
    #[must_use]
    pub const fn all_others() -> Self {
        Self {
            count: TargetCount::AllOthers,
            filter: TargetFilter::Other,
        }
    }

    /// Length a target list must have in a game of `player_count` players.
    #[must_use]
    pub fn required(&self, player_count: usize) -> usize {
        match self.count {
            TargetCount::Exactly(n) => n,
            TargetCount::AllOthers => player_count.saturating_sub(1),
        }
    }

    /// Players that `actor` may name, ascending.
    ///
    /// Empty for self-only actions.
    #[must_use]
    pub fn candidates(&self, roster: &PlayerMap<Player>, actor: PlayerId) -> SmallVec<[PlayerId; 4]> {
        if self.required(roster.player_count()) == 0 {
            return SmallVec::new();
        }

        let player = &roster[actor];
        match self.filter {
            TargetFilter::Other => player.other_players(roster),
            TargetFilter::OtherWithWater => player.other_players_with_water(roster),
        }
    }

    /// Whether `actor` can currently satisfy this spec at all.
    #[must_use]
    pub fn is_satisfiable(&self, roster: &PlayerMap<Player>, actor: PlayerId) -> bool {
        self.candidates(roster, actor).len() >= self.required(roster.player_count())
    }
}
