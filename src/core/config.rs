//! Game configuration types.
//!
//! Games configure the engine at startup by providing:
//! - `ZoneDefinition`: Defines zones (deck, hand, board, graveyard, etc.)
//! - `StatDefinition`: Defines player stats (life, mana, etc.)
//! - `CardTypeDefinition` / `CardDefinition`: The card catalog
//! - `RulesConfig`: Which zones and stats the combat and draw rules use
//! - `GameConfig`: Combines all configuration
//!
//! The catalog is immutable once built. It is shared between the state and
//! the solver as an `Arc<GameConfig>` and is never mutated by the engine.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::{
    CardDefinition, CardId, CardRegistry, CardTypeDefinition, CardTypeId, StatDefinition,
};
use crate::effects::{Effect, Target};
use crate::triggers::{Ability, StatSubject, Trigger};

/// Zone identifier. Games define what zones exist.
///
/// The engine doesn't interpret zone IDs - they're opaque identifiers.
/// Games assign meaning via `ZoneDefinition`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ZoneId(pub u16);

impl ZoneId {
    /// Create a new zone ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Zone({})", self.0)
    }
}

/// Whether cards in a zone take part in the game (board) or are stored (deck).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneKind {
    /// Cards in play; their turn and stat triggers are live.
    Dynamic,
    /// Storage zones (deck, hand, graveyard).
    Static,
}

/// Whether the opponent can see the cards in a zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneVisibility {
    /// Visible to the opponent (board, graveyard).
    Visible,
    /// Hidden from the opponent (deck, hand).
    Hidden,
}

/// Configuration for a single zone.
///
/// Every player gets one zone per definition, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneDefinition {
    /// Unique identifier for this zone.
    pub id: ZoneId,

    /// Zone name, unique within the catalog.
    pub name: String,

    /// Dynamic or static.
    pub kind: ZoneKind,

    /// Opponent visibility.
    pub visibility: ZoneVisibility,
}

impl ZoneDefinition {
    /// Create a static, visible zone.
    pub fn new(id: ZoneId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: ZoneKind::Static,
            visibility: ZoneVisibility::Visible,
        }
    }

    /// Mark zone as dynamic (like the board).
    #[must_use]
    pub fn dynamic(mut self) -> Self {
        self.kind = ZoneKind::Dynamic;
        self
    }

    /// Hide zone from the opponent (like a hand).
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visibility = ZoneVisibility::Hidden;
        self
    }

    /// Cards in this zone receive turn and stat triggers.
    #[must_use]
    pub fn is_triggering(&self) -> bool {
        self.kind == ZoneKind::Dynamic && self.visibility == ZoneVisibility::Visible
    }
}

/// Zones and stats the built-in rules operate on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Zone cards are drawn from (top = end).
    pub deck_zone: ZoneId,
    /// Zone drawn cards land in.
    pub hand_zone: ZoneId,
    /// Zone creatures fight from.
    pub board_zone: ZoneId,
    /// Zone destroyed cards are moved to.
    pub graveyard_zone: ZoneId,
    /// Stat reduced by combat damage (players and creatures).
    pub life_stat: String,
    /// Stat giving combat damage dealt by creatures.
    pub attack_stat: String,
}

impl RulesConfig {
    /// Create rules with the conventional "Life" and "Attack" stat names.
    pub fn new(
        deck_zone: ZoneId,
        hand_zone: ZoneId,
        board_zone: ZoneId,
        graveyard_zone: ZoneId,
    ) -> Self {
        Self {
            deck_zone,
            hand_zone,
            board_zone,
            graveyard_zone,
            life_stat: "Life".to_string(),
            attack_stat: "Attack".to_string(),
        }
    }

    /// Use a different life stat name.
    #[must_use]
    pub fn with_life_stat(mut self, name: impl Into<String>) -> Self {
        self.life_stat = name.into();
        self
    }

    /// Use a different attack stat name.
    #[must_use]
    pub fn with_attack_stat(mut self, name: impl Into<String>) -> Self {
        self.attack_stat = name.into();
        self
    }
}

/// Complete game configuration: the immutable catalog.
///
/// ## Example
///
/// ```
/// use ccg_solver::cards::StatDefinition;
/// use ccg_solver::core::{GameConfig, RulesConfig, ZoneDefinition, ZoneId};
///
/// let [deck, hand, board, graveyard] = [0, 1, 2, 3].map(ZoneId::new);
///
/// let config = GameConfig::new(RulesConfig::new(deck, hand, board, graveyard))
///     .with_zone(ZoneDefinition::new(deck, "Deck").hidden())
///     .with_zone(ZoneDefinition::new(hand, "Hand").hidden())
///     .with_zone(ZoneDefinition::new(board, "Board").dynamic())
///     .with_zone(ZoneDefinition::new(graveyard, "Graveyard"))
///     .with_player_stat(StatDefinition::new("Life", 20));
///
/// assert!(config.validate().is_ok());
/// assert!(config.zone(board).unwrap().is_triggering());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameConfig {
    /// Zone definitions, in declaration order.
    pub zones: Vec<ZoneDefinition>,

    /// Stats every player has.
    pub player_stats: Vec<StatDefinition>,

    /// Card type definitions.
    pub card_types: Vec<CardTypeDefinition>,

    /// Card definitions.
    pub cards: CardRegistry,

    /// Rule wiring (zones and stats used by draw and combat).
    pub rules: RulesConfig,
}

impl GameConfig {
    /// Create an empty configuration.
    pub fn new(rules: RulesConfig) -> Self {
        Self {
            zones: Vec::new(),
            player_stats: Vec::new(),
            card_types: Vec::new(),
            cards: CardRegistry::new(),
            rules,
        }
    }

    /// Add a zone definition.
    #[must_use]
    pub fn with_zone(mut self, zone: ZoneDefinition) -> Self {
        self.zones.push(zone);
        self
    }

    /// Add a player stat definition.
    #[must_use]
    pub fn with_player_stat(mut self, stat: StatDefinition) -> Self {
        self.player_stats.push(stat);
        self
    }

    /// Add a card type definition.
    #[must_use]
    pub fn with_card_type(mut self, card_type: CardTypeDefinition) -> Self {
        self.card_types.push(card_type);
        self
    }

    /// Add a card definition.
    #[must_use]
    pub fn with_card(mut self, card: CardDefinition) -> Self {
        self.cards.register(card);
        self
    }

    /// Get a zone definition by ID.
    #[must_use]
    pub fn zone(&self, id: ZoneId) -> Option<&ZoneDefinition> {
        self.zones.iter().find(|z| z.id == id)
    }

    /// Get a card type by ID.
    #[must_use]
    pub fn card_type(&self, id: CardTypeId) -> Option<&CardTypeDefinition> {
        self.card_types.iter().find(|t| t.id == id)
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(id)
    }

    fn has_player_stat(&self, name: &str) -> bool {
        self.player_stats.iter().any(|s| s.name == name)
    }

    fn require_zone(&self, zone: ZoneId) -> Result<(), ConfigError> {
        if self.zone(zone).is_some() {
            Ok(())
        } else {
            Err(ConfigError::UnknownZone(zone))
        }
    }

    /// Check the catalog for internal consistency.
    ///
    /// Every zone, card type and stat referenced anywhere in the catalog must
    /// exist, and every ability's effect must be paired with a target of the
    /// matching family. The engine refuses to run over a catalog that fails
    /// this check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut zone_ids = FxHashSet::default();
        let mut zone_names = FxHashSet::default();
        for zone in &self.zones {
            if !zone_ids.insert(zone.id) || !zone_names.insert(zone.name.as_str()) {
                return Err(ConfigError::DuplicateZone(zone.name.clone()));
            }
        }

        for (role, zone) in [
            ("deck", self.rules.deck_zone),
            ("hand", self.rules.hand_zone),
            ("board", self.rules.board_zone),
            ("graveyard", self.rules.graveyard_zone),
        ] {
            if self.zone(zone).is_none() {
                return Err(ConfigError::MissingRulesZone { role, zone });
            }
        }

        if !self.has_player_stat(&self.rules.life_stat) {
            return Err(ConfigError::UnknownStat(self.rules.life_stat.clone()));
        }

        for card_type in &self.card_types {
            if let Some(zone) = card_type.zone_after_trigger {
                self.require_zone(zone)?;
            }
            for condition in &card_type.destroy_conditions {
                if !card_type.has_stat(&condition.stat) {
                    return Err(ConfigError::UnknownStat(condition.stat.clone()));
                }
            }
        }

        if let Some(duplicate) = self.cards.first_duplicate() {
            return Err(ConfigError::DuplicateCard(duplicate));
        }

        for card in self.cards.iter() {
            let card_type = self
                .card_type(card.card_type)
                .ok_or(ConfigError::UnknownCardType(card.card_type))?;
            for (stat, _) in &card.stat_overrides {
                if !card_type.has_stat(stat) {
                    return Err(ConfigError::UnknownStat(stat.clone()));
                }
            }
            for (index, ability) in card.abilities.iter().enumerate() {
                self.validate_ability(card.id, index, ability)?;
            }
        }

        Ok(())
    }

    fn validate_ability(
        &self,
        card: CardId,
        index: usize,
        ability: &Ability,
    ) -> Result<(), ConfigError> {
        if let Some(trigger) = ability.trigger() {
            if let Trigger::CardEnteredZone { zone } | Trigger::CardLeftZone { zone } = trigger {
                self.require_zone(*zone)?;
            }
            if let Some((StatSubject::Player, stat)) = trigger.watched_stat() {
                if !self.has_player_stat(stat) {
                    return Err(ConfigError::UnknownStat(stat.to_string()));
                }
            }
        }

        let mismatch = ConfigError::TargetMismatch {
            card,
            ability: index,
        };
        match (ability.effect(), ability.target()) {
            (Effect::Player(effect), Target::Player { .. }) => {
                if !self.has_player_stat(&effect.stat) {
                    return Err(ConfigError::UnknownStat(effect.stat.clone()));
                }
            }
            (Effect::Card(effect), Target::Card { .. }) => {
                self.require_zone(effect.zone)?;
                let card_type = self
                    .card_type(effect.card_type)
                    .ok_or(ConfigError::UnknownCardType(effect.card_type))?;
                if !card_type.has_stat(&effect.stat) {
                    return Err(ConfigError::UnknownStat(effect.stat.clone()));
                }
            }
            (Effect::MoveCard(effect), Target::Card { .. }) => {
                self.require_zone(effect.zone)?;
                self.require_zone(effect.destination)?;
                if self.card_type(effect.card_type).is_none() {
                    return Err(ConfigError::UnknownCardType(effect.card_type));
                }
            }
            _ => return Err(mismatch),
        }
        Ok(())
    }
}
