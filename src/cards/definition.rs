//! Card definitions - static card data.
//!
//! `CardTypeDefinition` describes a family of cards (Creature, Spell, ...):
//! which stats its cards carry, when they are destroyed, and where they go
//! after their triggers resolve. `CardDefinition` describes a single card:
//! its type, per-card stat overrides, and its abilities in declaration
//! order.
//!
//! Instance-specific data (current stat values, zone) is stored separately
//! in `RuntimeCard` and the owning player's zones.

use serde::{Deserialize, Serialize};

use super::stats::StatDefinition;
use crate::core::config::ZoneId;
use crate::triggers::{Ability, ActivatedAbility, Condition, TriggeredAbility};

/// Unique identifier for a card definition.
///
/// This identifies the "kind" of card (e.g., "Fire Imp"),
/// not a specific instance in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card type identifier - games define their own types.
///
/// The engine doesn't interpret these. Games define what types exist
/// (Creature, Spell, etc.) and what stats they carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardTypeId(pub u32);

impl CardTypeId {
    /// Create a new card type ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CardType({})", self.0)
    }
}

/// A family of cards sharing a stat layout and lifecycle rules.
///
/// ## Example
///
/// ```
/// use ccg_solver::cards::{CardTypeDefinition, CardTypeId, StatDefinition};
/// use ccg_solver::core::ZoneId;
/// use ccg_solver::triggers::{Comparison, Condition};
///
/// let creature = CardTypeDefinition::new(CardTypeId::new(0), "Creature")
///     .with_stat(StatDefinition::new("Life", 1))
///     .with_stat(StatDefinition::new("Attack", 1))
///     .with_destroy_condition(Condition::new("Life", Comparison::LessOrEqual, 0));
///
/// let spell = CardTypeDefinition::new(CardTypeId::new(1), "Spell")
///     .moves_after_trigger(ZoneId::new(3));
///
/// assert!(creature.has_stat("Attack"));
/// assert_eq!(spell.zone_after_trigger, Some(ZoneId::new(3)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTypeDefinition {
    /// Unique identifier for this card type.
    pub id: CardTypeId,

    /// Type name (for display/debugging).
    pub name: String,

    /// Stats every card of this type carries, with default base values.
    pub stats: Vec<StatDefinition>,

    /// Stat conditions under which a card on the board is destroyed.
    #[serde(default)]
    pub destroy_conditions: Vec<Condition>,

    /// Zone a card is relocated to once its enter-zone triggers resolve.
    #[serde(default)]
    pub zone_after_trigger: Option<ZoneId>,
}

impl CardTypeDefinition {
    /// Create a card type with no stats.
    pub fn new(id: CardTypeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            stats: Vec::new(),
            destroy_conditions: Vec::new(),
            zone_after_trigger: None,
        }
    }

    /// Add a stat (builder pattern).
    #[must_use]
    pub fn with_stat(mut self, stat: StatDefinition) -> Self {
        self.stats.push(stat);
        self
    }

    /// Add a destroy condition (builder pattern).
    #[must_use]
    pub fn with_destroy_condition(mut self, condition: Condition) -> Self {
        self.destroy_conditions.push(condition);
        self
    }

    /// Relocate cards of this type to `zone` after they enter a zone.
    #[must_use]
    pub fn moves_after_trigger(mut self, zone: ZoneId) -> Self {
        self.zone_after_trigger = Some(zone);
        self
    }

    /// Check if cards of this type carry a stat.
    #[must_use]
    pub fn has_stat(&self, name: &str) -> bool {
        self.stats.iter().any(|s| s.name == name)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use ccg_solver::cards::{CardDefinition, CardId, CardTypeId};
///
/// let imp = CardDefinition::new(CardId::new(1), "Fire Imp", CardTypeId::new(0))
///     .with_stat("Attack", 3)
///     .with_stat("Life", 2);
///
/// assert_eq!(imp.stat_override("Attack"), Some(3));
/// assert_eq!(imp.stat_override("Mana"), None);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Card type.
    pub card_type: CardTypeId,

    /// Base values replacing the card type's defaults.
    #[serde(default)]
    pub stat_overrides: Vec<(String, i64)>,

    /// Abilities in declaration order.
    #[serde(default)]
    pub abilities: Vec<Ability>,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, card_type: CardTypeId) -> Self {
        Self {
            id,
            name: name.into(),
            card_type,
            stat_overrides: Vec::new(),
            abilities: Vec::new(),
        }
    }

    /// Override a stat's base value (builder pattern).
    #[must_use]
    pub fn with_stat(mut self, name: impl Into<String>, base_value: i64) -> Self {
        let name = name.into();
        self.stat_overrides.retain(|(n, _)| *n != name);
        self.stat_overrides.push((name, base_value));
        self
    }

    /// Add an ability (builder pattern).
    #[must_use]
    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.abilities.push(ability);
        self
    }

    /// The overridden base value of a stat, if any.
    #[must_use]
    pub fn stat_override(&self, name: &str) -> Option<i64> {
        self.stat_overrides
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    /// Stat definitions for an instance of this card: the type's stats
    /// with this card's overrides applied.
    #[must_use]
    pub fn instance_stats(&self, card_type: &CardTypeDefinition) -> Vec<StatDefinition> {
        card_type
            .stats
            .iter()
            .map(|stat| {
                let mut stat = stat.clone();
                if let Some(value) = self.stat_override(&stat.name) {
                    stat.base_value = value;
                }
                stat
            })
            .collect()
    }

    /// Triggered abilities in declaration order.
    pub fn triggered_abilities(&self) -> impl Iterator<Item = &TriggeredAbility> {
        self.abilities.iter().filter_map(|a| match a {
            Ability::Triggered(t) => Some(t),
            Ability::Activated(_) => None,
        })
    }

    /// Activated abilities in declaration order.
    pub fn activated_abilities(&self) -> impl Iterator<Item = &ActivatedAbility> {
        self.abilities.iter().filter_map(|a| match a {
            Ability::Activated(a) => Some(a),
            Ability::Triggered(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::{Effect, PlayerEffect, PlayerTarget, Target, Value};
    use crate::triggers::{Comparison, Trigger};

    fn creature_type() -> CardTypeDefinition {
        CardTypeDefinition::new(CardTypeId::new(0), "Creature")
            .with_stat(StatDefinition::new("Life", 1))
            .with_stat(StatDefinition::new("Attack", 1))
            .with_destroy_condition(Condition::new("Life", Comparison::LessOrEqual, 0))
    }

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_card_type_id() {
        let id = CardTypeId::new(1);
        assert_eq!(id.raw(), 1);
        assert_eq!(format!("{}", id), "CardType(1)");
    }

    #[test]
    fn test_instance_stats_apply_overrides() {
        let card = CardDefinition::new(CardId::new(1), "Ogre", CardTypeId::new(0))
            .with_stat("Attack", 4)
            .with_stat("Attack", 5);

        let stats = card.instance_stats(&creature_type());
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].base_value, 1);
        assert_eq!(stats[1].base_value, 5);
        assert_eq!(card.stat_overrides.len(), 1);
    }

    #[test]
    fn test_ability_partitions_keep_order() {
        let ping = Effect::Player(PlayerEffect::decrease("Life", Value::Constant(1)));
        let target = Target::player(PlayerTarget::Opponent);

        let card = CardDefinition::new(CardId::new(1), "Pinger", CardTypeId::new(0))
            .with_ability(ActivatedAbility::new(ping.clone(), target.clone()).into())
            .with_ability(Ability::Triggered(TriggeredAbility::new(
                Trigger::TurnStarted,
                ping.clone(),
                target.clone(),
            )))
            .with_ability(Ability::Activated(ActivatedAbility::new(
                Effect::Player(PlayerEffect::increase("Life", Value::Constant(2))),
                target,
            )));

        assert_eq!(card.triggered_abilities().count(), 1);
        let activated: Vec<_> = card.activated_abilities().collect();
        assert_eq!(activated.len(), 2);
        assert_eq!(activated[0].effect, ping);
    }

    #[test]
    fn test_card_definition_serialization() {
        let card = CardDefinition::new(CardId::new(1), "Test", CardTypeId::new(0))
            .with_stat("Life", 2);

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: CardDefinition = serde_json::from_str(&json).unwrap();

        assert_eq!(card.id, deserialized.id);
        assert_eq!(card.name, deserialized.name);
        assert_eq!(deserialized.stat_override("Life"), Some(2));
    }
}
