//! Recoverable engine errors.
//!
//! Illegal moves are reported as `PlayError` and never change game state.
//! Setup mistakes (a player count outside 2-4) are not errors: they panic
//! in `GameConfig::new`.

use thiserror::Error;

use crate::cards::{Bonus, Card};
use crate::core::PlayerId;

/// The draw pile has no cards left.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("deck is empty")]
pub struct EmptyDeck;

/// A move that the rules do not allow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayError {
    #[error("expected {expected} target(s), got {got}")]
    InvalidTargetCount { expected: usize, got: usize },

    #[error("{0} is not a valid target")]
    InvalidTarget(PlayerId),

    #[error("{0} has no water to take")]
    IneligibleTarget(PlayerId),

    #[error("bonus {0} was already used")]
    BonusAlreadyUsed(Bonus),

    #[error("card {0} is not in hand")]
    CardNotInHand(Card),

    #[error("the current player has already played this turn")]
    AlreadyPlayed,

    #[error("game is already finished")]
    GameFinished,
}

pub type Result<T> = std::result::Result<T, PlayError>;
