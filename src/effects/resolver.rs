//! Effect application - the only code that writes stat values.
//!
//! The `EffectApplier` changes one stat of one player or card and reports
//! the resulting `StatChange`. It never dispatches triggers or runs
//! watchers; the solver does that with the returned change, so every stat
//! write is observed exactly once.

use tracing::trace;

use super::effect::{CardEffect, PlayerEffect, StatOp, Value};
use crate::cards::{Stat, StatChange};
use crate::core::{GameState, InstanceId, LookupError, PlayerId, StatOwner};

/// Applies stat changes to game state.
pub struct EffectApplier;

impl EffectApplier {
    /// Apply a player effect to one player.
    ///
    /// Returns `None` if the player has no such stat.
    pub fn apply_player_effect(
        state: &mut GameState,
        player: PlayerId,
        effect: &PlayerEffect,
    ) -> Result<Option<StatChange>, LookupError> {
        Self::apply(
            state,
            StatOwner::Player(player),
            &effect.stat,
            effect.op,
            effect.value,
            effect.duration,
        )
    }

    /// Apply a card effect to one card.
    ///
    /// Returns `None` if the card has no such stat.
    pub fn apply_card_effect(
        state: &mut GameState,
        card: InstanceId,
        effect: &CardEffect,
    ) -> Result<Option<StatChange>, LookupError> {
        Self::apply(
            state,
            StatOwner::Card(card),
            &effect.stat,
            effect.op,
            effect.value,
            effect.duration,
        )
    }

    /// Subtract `amount` from a stat's base value (combat damage).
    pub fn damage(
        state: &mut GameState,
        owner: StatOwner,
        stat: &str,
        amount: i64,
    ) -> Result<Option<StatChange>, LookupError> {
        Ok(state
            .stats_mut(owner)?
            .get_mut(stat)
            .map(|s| s.add_base(amount.saturating_neg())))
    }

    /// Age the timed modifiers of every stat of `owner`.
    ///
    /// Returns the stats whose effective value was affected by an expiry,
    /// in declaration order.
    pub fn tick_modifiers(
        state: &mut GameState,
        owner: StatOwner,
    ) -> Result<Vec<(String, StatChange)>, LookupError> {
        Ok(state
            .stats_mut(owner)?
            .iter_mut()
            .filter_map(|stat| {
                let change = stat.tick_modifiers()?;
                Some((stat.name().to_string(), change))
            })
            .collect())
    }

    fn apply(
        state: &mut GameState,
        owner: StatOwner,
        stat: &str,
        op: StatOp,
        value: Value,
        duration: u32,
    ) -> Result<Option<StatChange>, LookupError> {
        state.stats(owner)?;
        if state.stat_value(owner, stat).is_none() {
            trace!(%owner, stat, "effect skipped: no such stat");
            return Ok(None);
        }
        let amount = value.roll(state.rng_mut());

        Ok(state
            .stats_mut(owner)?
            .get_mut(stat)
            .map(|s| Self::write(s, op, amount, duration)))
    }

    fn write(stat: &mut Stat, op: StatOp, amount: i64, duration: u32) -> StatChange {
        match (op, duration) {
            (StatOp::Set, _) => stat.set_base(amount),
            (StatOp::Increase, 0) => stat.add_base(amount),
            (StatOp::Decrease, 0) => stat.add_base(amount.saturating_neg()),
            (StatOp::Increase, turns) => stat.add_modifier(amount, turns),
            (StatOp::Decrease, turns) => stat.add_modifier(amount.saturating_neg(), turns),
        }
    }
}
