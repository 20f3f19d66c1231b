//! Action targeting and resolution.
//!
//! - `TargetSpec`: Which players an action must name
//! - `ActionResolver`: Validates a move, then applies its effect
//!
//! Resolution borrows the game's deck and roster for one call and keeps
//! nothing afterwards.

mod resolver;
mod targeting;

pub(crate) use resolver::draw;
pub use resolver::ActionResolver;
pub use targeting::{TargetCount, TargetFilter, TargetSpec};
