//! Trigger definitions.
//!
//! A trigger names the event an ability listens for. The solver dispatches
//! by `TriggerKind` and a predicate over the trigger's fields, so adding a
//! kind forces every match over triggers to handle it.

use serde::{Deserialize, Serialize};

use crate::core::config::ZoneId;

/// Whose stat a stat trigger watches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatSubject {
    /// A stat of the card's owner.
    Player,
    /// A stat of a card owned by the card's owner.
    Card,
}

/// The event a triggered ability listens for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trigger {
    /// The owner's turn started.
    TurnStarted,

    /// The owner's turn ended.
    TurnEnded,

    /// This card entered `zone`.
    CardEnteredZone { zone: ZoneId },

    /// This card left `zone`.
    CardLeftZone { zone: ZoneId },

    /// A watched stat's effective value went up.
    StatIncreased { subject: StatSubject, stat: String },

    /// A watched stat's effective value went down.
    StatDecreased { subject: StatSubject, stat: String },

    /// A watched stat's effective value changed to exactly `value`.
    StatReachedValue {
        subject: StatSubject,
        stat: String,
        value: i64,
    },
}

impl Trigger {
    /// The fieldless kind of this trigger.
    #[must_use]
    pub fn kind(&self) -> TriggerKind {
        match self {
            Trigger::TurnStarted => TriggerKind::TurnStarted,
            Trigger::TurnEnded => TriggerKind::TurnEnded,
            Trigger::CardEnteredZone { .. } => TriggerKind::CardEnteredZone,
            Trigger::CardLeftZone { .. } => TriggerKind::CardLeftZone,
            Trigger::StatIncreased { .. } => TriggerKind::StatIncreased,
            Trigger::StatDecreased { .. } => TriggerKind::StatDecreased,
            Trigger::StatReachedValue { .. } => TriggerKind::StatReachedValue,
        }
    }

    /// Subject and stat name of a stat trigger.
    #[must_use]
    pub fn watched_stat(&self) -> Option<(StatSubject, &str)> {
        match self {
            Trigger::StatIncreased { subject, stat }
            | Trigger::StatDecreased { subject, stat }
            | Trigger::StatReachedValue { subject, stat, .. } => Some((*subject, stat.as_str())),
            _ => None,
        }
    }
}

/// Discriminant of `Trigger`, used to select abilities during dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerKind {
    TurnStarted,
    TurnEnded,
    CardEnteredZone,
    CardLeftZone,
    StatIncreased,
    StatDecreased,
    StatReachedValue,
}

impl std::fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TriggerKind::TurnStarted => "TurnStarted",
            TriggerKind::TurnEnded => "TurnEnded",
            TriggerKind::CardEnteredZone => "CardEnteredZone",
            TriggerKind::CardLeftZone => "CardLeftZone",
            TriggerKind::StatIncreased => "StatIncreased",
            TriggerKind::StatDecreased => "StatDecreased",
            TriggerKind::StatReachedValue => "StatReachedValue",
        };
        f.write_str(name)
    }
}
