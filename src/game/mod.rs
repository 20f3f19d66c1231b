//! Players and the turn/round state machine.

mod controller;
mod player;

pub use controller::Game;
pub use player::Player;
