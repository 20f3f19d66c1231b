//! Public game state.
//!
//! `State` is the only view of a game handed to observers (renderers,
//! bots). It carries hand sizes, never hand contents.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerMap};
use crate::cards::Bonus;

/// Whether the game is still being played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    /// Terminal: `winner` reached the water threshold.
    Finished { winner: PlayerId },
}

impl GameStatus {
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, GameStatus::Finished { .. })
    }

    /// The winning player, once finished.
    #[must_use]
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            GameStatus::Finished { winner } => Some(winner),
            GameStatus::InProgress => None,
        }
    }
}

/// What everyone at the table can see about one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub card_count: usize,
    pub water: u32,
    pub bonus: Bonus,
    pub bonus_used: bool,
    pub skip_next: bool,
}

/// Snapshot of the public game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    /// Per-seat public info.
    pub players: PlayerMap<PlayerInfo>,

    /// Completed rounds (starts at 0).
    pub round: u32,

    /// Seat whose turn it is.
    pub player_index: PlayerId,

    pub status: GameStatus,
}
