//! One-shot bonuses.
//!
//! Each player is dealt a distinct bonus at game start and may spend it
//! once with `Action::PlayBonus`. Every bonus has its own target rule and
//! effect, resolved by `effects::resolver`.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;
use crate::effects::TargetSpec;

/// A one-shot special ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bonus {
    /// Actor gains `SPRING_GAIN` water. No targets.
    Spring,
    /// Actor draws `TIDE_DRAW` cards. No targets.
    Tide,
    /// Actor swaps water totals with one other player.
    Whirlpool,
    /// Every other player loses `STORM_LOSS` water.
    Storm,
}

impl Bonus {
    /// The full pool, one bonus per seat of a maximum-size table.
    pub const ALL: [Bonus; 4] = [Bonus::Spring, Bonus::Tide, Bonus::Whirlpool, Bonus::Storm];

    /// Targets required to play this bonus.
    #[must_use]
    pub fn target_spec(self) -> TargetSpec {
        match self {
            Bonus::Spring | Bonus::Tide => TargetSpec::none(),
            Bonus::Whirlpool => TargetSpec::single_other(),
            Bonus::Storm => TargetSpec::all_others(),
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Bonus::Spring => "Spring",
            Bonus::Tide => "Tide",
            Bonus::Whirlpool => "Whirlpool",
            Bonus::Storm => "Storm",
        }
    }
}

impl std::fmt::Display for Bonus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Deal `player_count` distinct bonuses from a shuffled pool.
pub fn assign_bonuses(player_count: usize, rng: &mut GameRng) -> Vec<Bonus> {
    assert!(
        player_count <= Bonus::ALL.len(),
        "only {} bonuses for {player_count} players",
        Bonus::ALL.len()
    );

    let mut pool = Bonus::ALL;
    rng.shuffle(&mut pool);
    pool[..player_count].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_assigned_bonuses_are_distinct() {
        for seed in 0..20 {
            let bonuses = assign_bonuses(4, &mut GameRng::new(seed));
            let unique: FxHashSet<_> = bonuses.iter().collect();
            assert_eq!(unique.len(), 4);
        }
    }

    #[test]
    fn test_assignment_is_seeded() {
        assert_eq!(
            assign_bonuses(3, &mut GameRng::new(11)),
            assign_bonuses(3, &mut GameRng::new(11))
        );
    }

    #[test]
    fn test_assignment_varies_with_seed() {
        let firsts: FxHashSet<_> = (0..50)
            .map(|seed| assign_bonuses(2, &mut GameRng::new(seed))[0])
            .collect();
        assert!(firsts.len() > 1);
    }

    #[test]
    #[should_panic(expected = "only 4 bonuses")]
    fn test_too_many_players() {
        assign_bonuses(5, &mut GameRng::new(0));
    }
}
