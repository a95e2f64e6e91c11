//! Core engine types: entities, players, state, errors, RNG, configuration.
//!
//! This module contains the fundamental building blocks that are game-agnostic.
//! Games configure these via `GameConfig` rather than modifying the core.

pub mod config;
pub mod entity;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{GameConfig, RulesConfig, ZoneDefinition, ZoneId, ZoneKind, ZoneVisibility};
pub use entity::{InstanceId, StatOwner};
pub use error::{ConfigError, LookupError, Result, SolverError};
pub use player::{PlayerId, PlayerInfo};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, PlayerSetup};
