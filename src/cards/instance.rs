//! Card instances - runtime card state.
//!
//! `RuntimeCard` represents a specific card in a game. It caches the
//! definition and type ids, remembers its owner by id, and carries its own
//! stats. Which zone it is in is tracked by the owner's zones, not here.

use serde::Serialize;

use super::definition::{CardDefinition, CardId, CardTypeDefinition, CardTypeId};
use super::stats::{Stat, StatBlock};
use crate::core::entity::InstanceId;
use crate::core::player::PlayerId;

/// A card instance in a game.
///
/// Instances are never destroyed; a destroyed card is relocated to its
/// owner's graveyard and keeps its id.
#[derive(Clone, Debug, Serialize)]
pub struct RuntimeCard {
    /// Unique instance ID.
    pub instance_id: InstanceId,

    /// Reference to the card definition.
    pub card_id: CardId,

    /// Cached card type of the definition.
    pub card_type: CardTypeId,

    /// Owning player.
    pub owner: PlayerId,

    stats: StatBlock,
}

impl RuntimeCard {
    /// Instantiate a card with its type's stats and the card's overrides.
    #[must_use]
    pub fn new(
        instance_id: InstanceId,
        definition: &CardDefinition,
        card_type: &CardTypeDefinition,
        owner: PlayerId,
    ) -> Self {
        Self {
            instance_id,
            card_id: definition.id,
            card_type: definition.card_type,
            owner,
            stats: StatBlock::from_definitions(&definition.instance_stats(card_type)),
        }
    }

    /// The card's stats.
    #[must_use]
    pub fn stats(&self) -> &StatBlock {
        &self.stats
    }

    pub(crate) fn stats_mut(&mut self) -> &mut StatBlock {
        &mut self.stats
    }

    /// Look up a stat by name.
    #[must_use]
    pub fn stat(&self, name: &str) -> Option<&Stat> {
        self.stats.get(name)
    }

    /// Effective value of a stat, if the card has it.
    #[must_use]
    pub fn stat_value(&self, name: &str) -> Option<i64> {
        self.stats.value(name)
    }
}
