//! Combat between board creatures and players.
//!
//! Damage is the attacker's effective attack subtracted from the life
//! stat's base value. Both stat names and the board zone come from the
//! configuration's `RulesConfig`.

use std::sync::Arc;

use tracing::debug;

use super::solver::EffectSolver;
use crate::core::{InstanceId, LookupError, PlayerId, Result, StatOwner};
use crate::effects::EffectApplier;

impl EffectSolver {
    /// `attacking_card`, on `attacker`'s board, hits the other player.
    ///
    /// Nothing changes if the card is not on the attacker's board.
    pub fn fight_player(&mut self, attacker: PlayerId, attacking_card: InstanceId) -> Result<()> {
        let config = Arc::clone(self.state.config());
        let rules = &config.rules;
        let defender = self.state.opponent_of(attacker)?;
        if !self.state.zone(attacker, rules.board_zone)?.contains(attacking_card) {
            return Err(LookupError::CardNotInZone {
                card: attacking_card,
                zone: rules.board_zone,
            }
            .into());
        }

        let attack = self.attack_of(attacking_card, &rules.attack_stat)?;
        let owner = StatOwner::Player(defender);
        debug!(%attacker, card = %attacking_card, %defender, attack, "fight player");

        let change = EffectApplier::damage(&mut self.state, owner, &rules.life_stat, attack)?;
        if let Some(change) = change {
            self.notify(owner, &rules.life_stat, change)?;
        }
        Ok(())
    }

    /// `attacking_card` on `attacker`'s board and `defending_card` on the
    /// other player's board deal damage to each other simultaneously.
    ///
    /// Both attacks are read before either life changes. Watchers then run
    /// for the defending card first.
    pub fn fight_creature(
        &mut self,
        attacker: PlayerId,
        attacking_card: InstanceId,
        defending_card: InstanceId,
    ) -> Result<()> {
        let config = Arc::clone(self.state.config());
        let rules = &config.rules;
        let defender = self.state.opponent_of(attacker)?;
        for (player, card) in [(attacker, attacking_card), (defender, defending_card)] {
            if !self.state.zone(player, rules.board_zone)?.contains(card) {
                return Err(LookupError::CardNotInZone {
                    card,
                    zone: rules.board_zone,
                }
                .into());
            }
        }

        let attack_a = self.attack_of(attacking_card, &rules.attack_stat)?;
        let attack_b = self.attack_of(defending_card, &rules.attack_stat)?;
        debug!(%attacker, %attacking_card, %defending_card, attack_a, attack_b, "fight creature");

        let (owner_a, owner_b) = (StatOwner::Card(attacking_card), StatOwner::Card(defending_card));
        let change_b = EffectApplier::damage(&mut self.state, owner_b, &rules.life_stat, attack_a)?;
        let change_a = EffectApplier::damage(&mut self.state, owner_a, &rules.life_stat, attack_b)?;

        if let Some(change) = change_b {
            self.notify(owner_b, &rules.life_stat, change)?;
        }
        if let Some(change) = change_a {
            self.notify(owner_a, &rules.life_stat, change)?;
        }
        Ok(())
    }

    /// Effective attack of a card; a card without the stat deals no damage.
    fn attack_of(&self, card: InstanceId, stat: &str) -> Result<i64> {
        Ok(self.state.card(card)?.stat_value(stat).unwrap_or(0))
    }
}
