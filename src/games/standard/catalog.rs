//! Standard game catalog.

use std::sync::Arc;

use crate::cards::{CardDefinition, CardId, CardTypeDefinition, CardTypeId, StatDefinition};
use crate::core::{GameConfig, GameState, PlayerSetup, Result, RulesConfig, ZoneDefinition, ZoneId};
use crate::effects::{Effect, PlayerEffect, PlayerTarget, Target, Value};
use crate::rules::EffectSolver;
use crate::triggers::{Ability, Comparison, Condition, Trigger, TriggeredAbility};

pub const DECK: ZoneId = ZoneId::new(0);
pub const HAND: ZoneId = ZoneId::new(1);
pub const BOARD: ZoneId = ZoneId::new(2);
pub const GRAVEYARD: ZoneId = ZoneId::new(3);

pub const CREATURE: CardTypeId = CardTypeId::new(0);
pub const SPELL: CardTypeId = CardTypeId::new(1);

/// "Grunt": a vanilla 1/1 creature.
pub const CREATURE_CARD: CardId = CardId::new(1);
/// "Spark": deals 1 damage to the opponent when played to the board.
pub const SPELL_CARD: CardId = CardId::new(2);

/// Creatures: Life 1, Attack 1, destroyed at Life <= 0.
#[must_use]
pub fn creature_type() -> CardTypeDefinition {
    CardTypeDefinition::new(CREATURE, "Creature")
        .with_stat(StatDefinition::new("Life", 1))
        .with_stat(StatDefinition::new("Attack", 1))
        .with_destroy_condition(Condition::new("Life", Comparison::LessOrEqual, 0))
}

/// Spells: no stats, moved to the graveyard after entering a zone.
#[must_use]
pub fn spell_type() -> CardTypeDefinition {
    CardTypeDefinition::new(SPELL, "Spell").moves_after_trigger(GRAVEYARD)
}

/// The standard catalog with default settings.
#[must_use]
pub fn config() -> Arc<GameConfig> {
    StandardGameBuilder::new().build()
}

/// Builder for the standard catalog.
///
/// ## Example
///
/// ```
/// use ccg_solver::cards::{CardDefinition, CardId};
/// use ccg_solver::core::{PlayerId, PlayerSetup};
/// use ccg_solver::games::standard::{StandardGameBuilder, CREATURE};
///
/// let ogre = CardDefinition::new(CardId::new(10), "Ogre", CREATURE)
///     .with_stat("Life", 5)
///     .with_stat("Attack", 4);
///
/// let solver = StandardGameBuilder::new()
///     .starting_life(30)
///     .with_card(ogre)
///     .start(7, [
///         PlayerSetup::new(PlayerId::new(1), vec![CardId::new(10)]),
///         PlayerSetup::new(PlayerId::new(2), vec![]),
///     ])?;
///
/// assert_eq!(solver.state().card_count(), 1);
/// # Ok::<(), ccg_solver::core::SolverError>(())
/// ```
#[derive(Clone, Debug)]
pub struct StandardGameBuilder {
    starting_life: i64,
    starting_mana: i64,
    cards: Vec<CardDefinition>,
}

impl Default for StandardGameBuilder {
    fn default() -> Self {
        Self {
            starting_life: 20,
            starting_mana: 0,
            cards: Vec::new(),
        }
    }
}

impl StandardGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn starting_life(mut self, life: i64) -> Self {
        self.starting_life = life;
        self
    }

    #[must_use]
    pub fn starting_mana(mut self, mana: i64) -> Self {
        self.starting_mana = mana;
        self
    }

    /// Add a card to the catalog.
    #[must_use]
    pub fn with_card(mut self, card: CardDefinition) -> Self {
        self.cards.push(card);
        self
    }

    /// Build the catalog.
    #[must_use]
    pub fn build(self) -> Arc<GameConfig> {
        let spark = CardDefinition::new(SPELL_CARD, "Spark", SPELL).with_ability(Ability::Triggered(
            TriggeredAbility::new(
                Trigger::CardEnteredZone { zone: BOARD },
                Effect::Player(PlayerEffect::decrease("Life", Value::Constant(1))),
                Target::player(PlayerTarget::Opponent),
            ),
        ));

        let mut config = GameConfig::new(RulesConfig::new(DECK, HAND, BOARD, GRAVEYARD))
            .with_zone(ZoneDefinition::new(DECK, "Deck").hidden())
            .with_zone(ZoneDefinition::new(HAND, "Hand").hidden())
            .with_zone(ZoneDefinition::new(BOARD, "Board").dynamic())
            .with_zone(ZoneDefinition::new(GRAVEYARD, "Graveyard"))
            .with_player_stat(StatDefinition::new("Life", self.starting_life).with_bounds(0, 99))
            .with_player_stat(StatDefinition::new("Mana", self.starting_mana))
            .with_card_type(creature_type())
            .with_card_type(spell_type())
            .with_card(CardDefinition::new(CREATURE_CARD, "Grunt", CREATURE))
            .with_card(spark);

        for card in self.cards {
            config = config.with_card(card);
        }
        Arc::new(config)
    }

    /// Build the catalog and start a game with a solver over it.
    pub fn start(self, seed: u64, players: [PlayerSetup; 2]) -> Result<EffectSolver> {
        let state = GameState::new(self.build(), seed, players)?;
        Ok(EffectSolver::new(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_config_is_valid() {
        assert_eq!(config().validate(), Ok(()));
    }

    #[test]
    fn test_builder_settings() {
        let config = StandardGameBuilder::new().starting_life(30).starting_mana(2).build();

        let life = config.player_stats.iter().find(|s| s.name == "Life").unwrap();
        assert_eq!(life.base_value, 30);
        assert_eq!(life.max_value, 99);
        assert!(config.card(SPELL_CARD).is_some());
        assert_eq!(config.card_type(SPELL).unwrap().zone_after_trigger, Some(GRAVEYARD));
    }
}
