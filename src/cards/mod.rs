//! Card system: card kinds, the shared deck, and bonuses.
//!
//! ## Key Types
//!
//! - `Card`: A card kind (no per-instance state)
//! - `Deck`: Shuffled draw pile with a discard pile
//! - `Bonus`: One-shot ability, one distinct bonus per player

pub mod bonus;
pub mod card;
pub mod deck;

pub use bonus::{assign_bonuses, Bonus};
pub use card::Card;
pub use deck::Deck;
