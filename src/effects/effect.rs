//! Effect definitions.
//!
//! Effects are closed data: a stat change on players, a stat change on
//! cards of one type in one zone, or a move of such cards to another zone.
//! They carry no behavior; `EffectApplier` executes them and the solver
//! decides against whom.

use serde::{Deserialize, Serialize};

use crate::cards::CardTypeId;
use crate::core::config::ZoneId;
use crate::core::rng::GameRng;

/// How a stat effect changes its stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatOp {
    /// Add the amount.
    Increase,
    /// Subtract the amount.
    Decrease,
    /// Replace the base value with the amount.
    Set,
}

/// The amount of a stat effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    /// A fixed amount.
    Constant(i64),
    /// Drawn from the game generator in `[min, max)` each time it is applied.
    Random { min: i64, max: i64 },
}

impl Value {
    /// Resolve to a concrete amount. Only `Random` consumes a draw.
    pub fn roll(&self, rng: &mut GameRng) -> i64 {
        match *self {
            Value::Constant(v) => v,
            Value::Random { min, max } => rng.next_range(min, max),
        }
    }
}

/// Change a stat of each targeted player.
///
/// A `duration` of zero changes the base value; a positive duration adds
/// a modifier that expires after that many of the owner's turn ends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerEffect {
    pub stat: String,
    pub op: StatOp,
    pub value: Value,
    #[serde(default)]
    pub duration: u32,
}

impl PlayerEffect {
    pub fn new(stat: impl Into<String>, op: StatOp, value: Value) -> Self {
        Self {
            stat: stat.into(),
            op,
            value,
            duration: 0,
        }
    }

    pub fn increase(stat: impl Into<String>, value: Value) -> Self {
        Self::new(stat, StatOp::Increase, value)
    }

    pub fn decrease(stat: impl Into<String>, value: Value) -> Self {
        Self::new(stat, StatOp::Decrease, value)
    }

    pub fn set(stat: impl Into<String>, value: Value) -> Self {
        Self::new(stat, StatOp::Set, value)
    }

    /// Apply as a modifier lasting `turns` turns (builder pattern).
    #[must_use]
    pub fn for_turns(mut self, turns: u32) -> Self {
        self.duration = turns;
        self
    }
}

/// Change a stat of each targeted card.
///
/// Candidates are cards of `card_type` in `zone`; see [`PlayerEffect`] for
/// `duration`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEffect {
    pub zone: ZoneId,
    pub card_type: CardTypeId,
    pub stat: String,
    pub op: StatOp,
    pub value: Value,
    #[serde(default)]
    pub duration: u32,
}

impl CardEffect {
    pub fn new(
        zone: ZoneId,
        card_type: CardTypeId,
        stat: impl Into<String>,
        op: StatOp,
        value: Value,
    ) -> Self {
        Self {
            zone,
            card_type,
            stat: stat.into(),
            op,
            value,
            duration: 0,
        }
    }

    pub fn increase(
        zone: ZoneId,
        card_type: CardTypeId,
        stat: impl Into<String>,
        value: Value,
    ) -> Self {
        Self::new(zone, card_type, stat, StatOp::Increase, value)
    }

    pub fn decrease(
        zone: ZoneId,
        card_type: CardTypeId,
        stat: impl Into<String>,
        value: Value,
    ) -> Self {
        Self::new(zone, card_type, stat, StatOp::Decrease, value)
    }

    pub fn set(zone: ZoneId, card_type: CardTypeId, stat: impl Into<String>, value: Value) -> Self {
        Self::new(zone, card_type, stat, StatOp::Set, value)
    }

    /// Apply as a modifier lasting `turns` turns (builder pattern).
    #[must_use]
    pub fn for_turns(mut self, turns: u32) -> Self {
        self.duration = turns;
        self
    }
}

/// Move each targeted card (of `card_type`, in `zone`) to `destination`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCardEffect {
    pub zone: ZoneId,
    pub card_type: CardTypeId,
    pub destination: ZoneId,
}

impl MoveCardEffect {
    pub fn new(zone: ZoneId, card_type: CardTypeId, destination: ZoneId) -> Self {
        Self {
            zone,
            card_type,
            destination,
        }
    }
}

/// An ability's effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    Player(PlayerEffect),
    Card(CardEffect),
    MoveCard(MoveCardEffect),
}

impl Effect {
    /// Zone card candidates are drawn from (card effects only).
    #[must_use]
    pub fn zone(&self) -> Option<ZoneId> {
        match self {
            Effect::Player(_) => None,
            Effect::Card(e) => Some(e.zone),
            Effect::MoveCard(e) => Some(e.zone),
        }
    }

    /// Card type candidates must have (card effects only).
    #[must_use]
    pub fn card_type(&self) -> Option<CardTypeId> {
        match self {
            Effect::Player(_) => None,
            Effect::Card(e) => Some(e.card_type),
            Effect::MoveCard(e) => Some(e.card_type),
        }
    }

    /// Whether the effect applies to players rather than cards.
    #[must_use]
    pub fn targets_players(&self) -> bool {
        matches!(self, Effect::Player(_))
    }
}

impl From<PlayerEffect> for Effect {
    fn from(effect: PlayerEffect) -> Self {
        Effect::Player(effect)
    }
}

impl From<CardEffect> for Effect {
    fn from(effect: CardEffect) -> Self {
        Effect::Card(effect)
    }
}

impl From<MoveCardEffect> for Effect {
    fn from(effect: MoveCardEffect) -> Self {
        Effect::MoveCard(effect)
    }
}
