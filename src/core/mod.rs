//! Core engine types: seats, RNG, configuration, actions, public state.
//!
//! Everything here is independent of how a move is resolved; the rules
//! live in `effects` and the turn controller in `game`.

pub mod action;
pub mod config;
pub mod constants;
pub mod player;
pub mod rng;
pub mod state;

pub use action::Action;
pub use config::GameConfig;
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use state::{GameStatus, PlayerInfo, State};
