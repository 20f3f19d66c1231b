//! # whale
//!
//! Engine for a 2-4 player turn-based water card game.
//!
//! Each player holds a hand of water cards and one one-shot bonus. On their
//! turn a player plays a card or their bonus, moving water between players;
//! the first player to reach `WIN_WATER` at the end of their turn wins.
//!
//! ## Design Principles
//!
//! 1. **No presentation**: Rendering, input, and bot policy live outside.
//!    Callers hand the engine an `Action` plus target seats.
//!
//! 2. **Validate, then mutate**: An illegal move returns a `PlayError` and
//!    leaves the game untouched.
//!
//! 3. **Deterministic**: All randomness flows from one seeded `GameRng`.
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, configuration, constants, actions, public state
//! - `cards`: Card kinds, deck, bonuses
//! - `effects`: Target rules and action resolution
//! - `game`: Players and the turn/round controller
//! - `error`: Recoverable error types

pub mod cards;
pub mod core;
pub mod effects;
pub mod error;
pub mod game;

// Re-export commonly used types
pub use crate::core::constants::WIN_WATER;
pub use crate::core::{
    Action, GameConfig, GameRng, GameStatus, PlayerId, PlayerInfo, PlayerMap, State,
};

pub use crate::cards::{Bonus, Card, Deck};

pub use crate::effects::{ActionResolver, TargetCount, TargetFilter, TargetSpec};

pub use crate::error::{EmptyDeck, PlayError, Result};

pub use crate::game::{Game, Player};
