//! # ccg-solver
//!
//! A deterministic effect-resolution engine for data-driven collectible
//! card games.
//!
//! ## Design Principles
//!
//! 1. **Data-Driven**: Zones, stats, card types and cards come from a
//!    `GameConfig` built at startup. The engine hardcodes no game.
//!
//! 2. **Deterministic**: One seeded generator per game. Two instances with
//!    the same configuration, seed and operation sequence end in identical
//!    states.
//!
//! 3. **Re-entrant, Bounded**: Effects change stats, stat changes fire
//!    triggers, triggers resolve more effects. Every operation runs its
//!    chain to completion, with nesting capped by `SolverConfig::max_depth`.
//!
//! ## Modules
//!
//! - `core`: IDs, players, configuration, RNG, errors, game state
//! - `zones`: Ordered card containers
//! - `cards`: Stats, card types, card definitions, runtime cards
//! - `triggers`: Triggers, conditions, abilities
//! - `effects`: Effect descriptions, target resolution, stat application
//! - `rules`: The `EffectSolver` and its watcher table
//! - `games`: Reference configurations

pub mod cards;
pub mod core;
pub mod effects;
pub mod games;
pub mod rules;
pub mod triggers;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameRng, GameState, InstanceId, LookupError, PlayerId, PlayerSetup, RulesConfig,
    SolverError, StatOwner, ZoneDefinition, ZoneId,
};

pub use crate::zones::Zone;

pub use crate::cards::{
    CardDefinition, CardId, CardTypeDefinition, CardTypeId, RuntimeCard, StatChange, StatDefinition,
};

pub use crate::triggers::{
    Ability, ActivatedAbility, Comparison, Condition, Trigger, TriggerKind, TriggeredAbility,
};

pub use crate::effects::{
    CardEffect, Effect, MoveCardEffect, PlayerEffect, StatOp, Target, TargetSelection, Value,
};

pub use crate::rules::{EffectSolver, SolverConfig};
