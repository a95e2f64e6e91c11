//! Error types for the solver.
//!
//! - `LookupError`: a referenced player, card, or zone does not exist.
//!   Recoverable; the operation that hit it has not mutated state.
//! - `ConfigError`: the catalog is inconsistent. Raised before the engine runs.
//! - `SolverError`: everything a driver-facing operation can return.

use thiserror::Error;

use super::config::ZoneId;
use super::entity::InstanceId;
use super::player::PlayerId;
use crate::cards::{CardId, CardTypeId};
use crate::triggers::TriggerKind;

/// A referenced entity does not exist.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("player not found: {0}")]
    PlayerNotFound(PlayerId),

    #[error("card not found: {0}")]
    CardNotFound(InstanceId),

    #[error("{player} has no zone {zone}")]
    ZoneNotFound { player: PlayerId, zone: ZoneId },

    #[error("{card} is not in {zone}")]
    CardNotInZone { card: InstanceId, zone: ZoneId },

    #[error("card definition not found: {0}")]
    CardDefinitionNotFound(CardId),

    #[error("card type not found: {0}")]
    CardTypeNotFound(CardTypeId),
}

/// The catalog is internally inconsistent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("duplicate zone: {0}")]
    DuplicateZone(String),

    #[error("duplicate card definition: {0}")]
    DuplicateCard(CardId),

    #[error("rules {role} zone {zone} is not defined")]
    MissingRulesZone { role: &'static str, zone: ZoneId },

    #[error("unknown zone: {0}")]
    UnknownZone(ZoneId),

    #[error("unknown card type: {0}")]
    UnknownCardType(CardTypeId),

    #[error("unknown stat: {0}")]
    UnknownStat(String),

    #[error("ability {ability} of {card} pairs its effect with the wrong target family")]
    TargetMismatch { card: CardId, ability: usize },

    #[error("a game needs exactly two players with distinct ids")]
    InvalidPlayers,
}

/// Errors surfaced by driver-facing operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("ability index {index} out of range for {card}: it has {count} activated abilities")]
    AbilityIndexOutOfRange {
        card: InstanceId,
        index: usize,
        count: usize,
    },

    #[error("resolution depth limit {limit} exceeded dispatching {trigger} on {card}")]
    RecursionLimit {
        limit: usize,
        trigger: TriggerKind,
        card: InstanceId,
    },

    #[error("state snapshot failed: {0}")]
    Snapshot(String),
}

impl SolverError {
    /// Lookup failures leave state untouched; the driver may carry on.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SolverError::Lookup(_))
    }
}

pub type Result<T> = std::result::Result<T, SolverError>;
