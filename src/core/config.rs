//! Game setup configuration.
//!
//! `GameConfig` collects everything needed to start a game: how many
//! players sit at the table, the seed of the random source, and how many
//! cards each player is dealt.

use super::constants::{INITIAL_CARD_COUNT, MAX_PLAYERS, MIN_PLAYERS};

/// Complete game setup.
///
/// ## Example
///
/// ```
/// use whale::core::GameConfig;
///
/// let config = GameConfig::new(3).with_seed(42).with_initial_card_count(4);
///
/// assert_eq!(config.player_count, 3);
/// assert_eq!(config.seed, 42);
/// assert_eq!(config.initial_card_count, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of players (2-4).
    pub player_count: usize,

    /// Seed for deck shuffling and bonus assignment.
    pub seed: u64,

    /// Cards dealt to each player before the first turn.
    pub initial_card_count: usize,
}

impl GameConfig {
    /// Create a configuration for `player_count` players.
    ///
    /// The player count is a setup precondition, not runtime data: values
    /// outside 2-4 are a programming error and panic.
    pub fn new(player_count: usize) -> Self {
        assert!(
            player_count >= MIN_PLAYERS,
            "invalid player count {player_count}: need at least {MIN_PLAYERS} players"
        );
        assert!(
            player_count <= MAX_PLAYERS,
            "invalid player count {player_count}: at most {MAX_PLAYERS} players"
        );

        Self {
            player_count,
            seed: 0,
            initial_card_count: INITIAL_CARD_COUNT,
        }
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the size of the opening hand.
    #[must_use]
    pub fn with_initial_card_count(mut self, count: usize) -> Self {
        self.initial_card_count = count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new(2);

        assert_eq!(config.player_count, 2);
        assert_eq!(config.seed, 0);
        assert_eq!(config.initial_card_count, INITIAL_CARD_COUNT);
    }

    #[test]
    fn test_accepts_two_to_four() {
        for n in MIN_PLAYERS..=MAX_PLAYERS {
            assert_eq!(GameConfig::new(n).player_count, n);
        }
    }

    #[test]
    #[should_panic(expected = "need at least 2 players")]
    fn test_one_player_panics() {
        GameConfig::new(1);
    }

    #[test]
    #[should_panic(expected = "at most 4 players")]
    fn test_five_players_panics() {
        GameConfig::new(5);
    }
}
