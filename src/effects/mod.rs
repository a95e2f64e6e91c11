//! Effect system for card game actions.
//!
//! Effects are the building blocks of card abilities:
//! - `Effect`: Player, card and move-card effects
//! - `Target`: How to select targets for effects
//! - `TargetResolver`: Turns targets into concrete players and cards
//! - `EffectApplier`: Writes stat changes to game state
//!
//! ## Design Philosophy
//!
//! Effects operate on generic concepts: named stats on players and cards,
//! and zones. Games define the meaning of these through their
//! configuration.

mod effect;
mod resolver;
mod targeting;

pub use effect::{CardEffect, Effect, MoveCardEffect, PlayerEffect, StatOp, Value};
pub use resolver::EffectApplier;
pub use targeting::{
    CardTarget, CardTargets, PlayerTarget, PlayerTargets, Target, TargetResolver, TargetSelection,
};
