//! Balancing numbers shared by the whole engine.
//!
//! Every effect magnitude lives here exactly once.

/// Fewest players a game can be set up with.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game can be set up with.
pub const MAX_PLAYERS: usize = 4;

/// Water total at which a player has won.
pub const WIN_WATER: u32 = 10;

/// Cards dealt to each player at game start.
pub const INITIAL_CARD_COUNT: usize = 3;

/// Copies of each card kind in a fresh deck.
pub const CARD_COPIES: usize = 6;

/// Water gained by playing a Water card.
pub const WATER_GAIN: u32 = 1;

/// Water gained by playing a Wave card.
pub const WAVE_GAIN: u32 = 2;

/// Water gained by playing a DoubleWave card.
pub const DOUBLE_WAVE_GAIN: u32 = 3;

/// Water a Pirat steals from its target, capped at what the target holds.
pub const PIRAT_STEAL: u32 = 2;

/// Water every other player loses to a Round card.
pub const ROUND_LOSS: u32 = 1;

/// Water each Piranha target loses; the actor collects what was removed.
pub const PIRANHA_BITE: u32 = 1;

/// Water gained by the Spring bonus.
pub const SPRING_GAIN: u32 = 4;

/// Cards drawn by the Tide bonus.
pub const TIDE_DRAW: usize = 2;

/// Water every other player loses to the Storm bonus.
pub const STORM_LOSS: u32 = 2;
