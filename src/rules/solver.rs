//! The effect solver: trigger dispatch, ability resolution, and
//! stat-change propagation.
//!
//! `EffectSolver` owns the `GameState` of one running instance and is the
//! only entry point the driver uses to change it. Every operation runs to
//! completion synchronously, including all re-entrant work it sets off:
//!
//! ```text
//! operation -> dispatch -> targets -> EffectApplier -> StatChange
//!                 ^                                        |
//!                 +------------- watchers <----------------+
//! ```
//!
//! ## Ordering
//!
//! - Abilities fire in catalog declaration order
//! - Zones are visited in configuration order, cards in zone order
//! - Watchers run in registration order
//! - Targets are applied left to right
//!
//! Nothing iterates a hash map on the resolution path, so two instances
//! driven by the same operations consume the generator identically.
//!
//! ## Re-entrancy
//!
//! Nested dispatch is bounded by `SolverConfig::max_depth`. Exceeding it
//! aborts the whole operation with `SolverError::RecursionLimit`; effects
//! already applied by that operation stay applied.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use super::watchers::Watcher;
use crate::cards::{CardDefinition, StatChange};
use crate::core::{
    GameState, InstanceId, LookupError, PlayerId, Result, SolverError, StatOwner, ZoneId,
};
use crate::effects::{Effect, EffectApplier, Target, TargetResolver, TargetSelection};
use crate::triggers::{StatSubject, Trigger, TriggerKind};
use crate::zones::Zone;

/// Engine tuning.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Maximum nesting of trigger dispatch within one operation.
    pub max_depth: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { max_depth: 64 }
    }
}

/// Resolves card effects against the game state it owns.
///
/// ## Example
///
/// ```
/// use ccg_solver::core::{GameState, PlayerId, PlayerSetup};
/// use ccg_solver::games::standard::{self, BOARD, CREATURE_CARD, HAND};
/// use ccg_solver::rules::EffectSolver;
///
/// let (alice, bob) = (PlayerId::new(1), PlayerId::new(2));
/// let state = GameState::new(
///     standard::config(),
///     42,
///     [PlayerSetup::new(alice, vec![CREATURE_CARD]), PlayerSetup::new(bob, vec![])],
/// )?;
/// let mut solver = EffectSolver::new(state);
///
/// let drawn = solver.draw_cards(alice, 1)?;
/// solver.move_card(alice, drawn[0], HAND, BOARD, None)?;
///
/// assert!(solver.state().zone(alice, BOARD)?.contains(drawn[0]));
/// # Ok::<(), ccg_solver::core::SolverError>(())
/// ```
#[derive(Clone, Debug)]
pub struct EffectSolver {
    pub(super) state: GameState,
    config: SolverConfig,
    depth: usize,
}

impl EffectSolver {
    /// Create a solver with default tuning.
    #[must_use]
    pub fn new(state: GameState) -> Self {
        Self::with_config(state, SolverConfig::default())
    }

    /// Create a solver with explicit tuning.
    #[must_use]
    pub fn with_config(state: GameState, config: SolverConfig) -> Self {
        Self {
            state,
            config,
            depth: 0,
        }
    }

    /// Read access to the game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Give up the solver and keep its state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Select whose turn it is.
    pub fn set_current_player(&mut self, player: PlayerId) -> Result<()> {
        self.state.set_current_player(player)?;
        debug!(%player, "current player set");
        Ok(())
    }

    // === Dispatch ===

    /// Fire every triggered ability of `card` whose trigger is of `kind` and
    /// satisfies `predicate`, in declaration order.
    ///
    /// Returns the number of abilities that resolved (had available
    /// targets).
    pub fn dispatch<P>(
        &mut self,
        acting: PlayerId,
        card: InstanceId,
        kind: TriggerKind,
        predicate: P,
        selection: Option<&TargetSelection>,
    ) -> Result<usize>
    where
        P: Fn(&Trigger) -> bool,
    {
        let card_id = self.state.card(card)?.card_id;
        let config = Arc::clone(self.state.config());
        let definition = config
            .card(card_id)
            .ok_or(LookupError::CardDefinitionNotFound(card_id))?;

        let limit = self.config.max_depth;
        if self.depth >= limit {
            warn!(%card, trigger = %kind, limit, "resolution depth exceeded");
            return Err(SolverError::RecursionLimit {
                limit,
                trigger: kind,
                card,
            });
        }

        self.depth += 1;
        let result = self.fire_matching(acting, card, definition, kind, &predicate, selection);
        self.depth -= 1;

        if let Ok(resolved) = result {
            if resolved > 0 {
                trace!(%card, trigger = %kind, resolved, "dispatched");
            }
        }
        result
    }

    fn fire_matching(
        &mut self,
        acting: PlayerId,
        card: InstanceId,
        definition: &CardDefinition,
        kind: TriggerKind,
        predicate: &dyn Fn(&Trigger) -> bool,
        selection: Option<&TargetSelection>,
    ) -> Result<usize> {
        let mut resolved = 0;
        for ability in definition.triggered_abilities() {
            if ability.trigger.kind() != kind || !predicate(&ability.trigger) {
                continue;
            }
            if self.resolve(acting, card, &ability.effect, &ability.target, selection)? {
                resolved += 1;
            }
        }
        Ok(resolved)
    }

    /// Resolve the `index`-th activated ability of `card` for `player`.
    ///
    /// Returns whether the ability resolved. An index outside the card's
    /// activated abilities is an error and changes nothing.
    pub fn activate_ability(
        &mut self,
        player: PlayerId,
        card: InstanceId,
        index: usize,
        selection: Option<&TargetSelection>,
    ) -> Result<bool> {
        self.state.player(player)?;
        let card_id = self.state.card(card)?.card_id;
        let config = Arc::clone(self.state.config());
        let definition = config
            .card(card_id)
            .ok_or(LookupError::CardDefinitionNotFound(card_id))?;

        let count = definition.activated_abilities().count();
        let ability = definition
            .activated_abilities()
            .nth(index)
            .ok_or(SolverError::AbilityIndexOutOfRange { card, index, count })?;

        debug!(%player, %card, index, "activating ability");
        self.resolve(player, card, &ability.effect, &ability.target, selection)
    }

    /// Apply `effect` to every target `target` resolves to.
    ///
    /// Returns whether at least one target was changed: a player or card
    /// carrying the effect's stat, or a card still in the zone a move
    /// takes it from. A random pick may have drawn from the generator even
    /// when nothing changed.
    fn resolve(
        &mut self,
        acting: PlayerId,
        source: InstanceId,
        effect: &Effect,
        target: &Target,
        selection: Option<&TargetSelection>,
    ) -> Result<bool> {
        if !TargetResolver::targets_available(&self.state, acting, effect, target, selection) {
            trace!(%source, "no targets available");
            return Ok(false);
        }

        match effect {
            Effect::Player(player_effect) => {
                let targets = match TargetResolver::resolve_player_targets(
                    &mut self.state,
                    acting,
                    target,
                    selection,
                ) {
                    Ok(targets) => targets,
                    Err(err) => {
                        warn!(%source, error = %err, "target lookup failed");
                        return Ok(false);
                    }
                };
                let mut applied = false;
                for player in targets {
                    let change =
                        EffectApplier::apply_player_effect(&mut self.state, player, player_effect)?;
                    if let Some(change) = change {
                        applied = true;
                        self.notify(StatOwner::Player(player), &player_effect.stat, change)?;
                    }
                }
                Ok(applied)
            }
            Effect::Card(card_effect) => {
                let targets = match TargetResolver::resolve_card_targets(
                    &mut self.state,
                    acting,
                    source,
                    target,
                    card_effect.zone,
                    card_effect.card_type,
                    selection,
                ) {
                    Ok(targets) => targets,
                    Err(err) => {
                        warn!(%source, error = %err, "target lookup failed");
                        return Ok(false);
                    }
                };
                let mut applied = false;
                for card in targets {
                    let change =
                        EffectApplier::apply_card_effect(&mut self.state, card, card_effect)?;
                    if let Some(change) = change {
                        applied = true;
                        self.notify(StatOwner::Card(card), &card_effect.stat, change)?;
                    }
                }
                Ok(applied)
            }
            Effect::MoveCard(move_effect) => {
                let zone = selection.and_then(|s| s.zone).unwrap_or(move_effect.zone);
                let targets = match TargetResolver::resolve_card_targets(
                    &mut self.state,
                    acting,
                    source,
                    target,
                    move_effect.zone,
                    move_effect.card_type,
                    selection,
                ) {
                    Ok(targets) => targets,
                    Err(err) => {
                        warn!(%source, error = %err, "target lookup failed");
                        return Ok(false);
                    }
                };
                let mut moved = false;
                for card in targets {
                    match self.state.location_of(card) {
                        Some((owner, current)) if current == zone => {
                            self.move_card(owner, card, zone, move_effect.destination, None)?;
                            moved = true;
                        }
                        _ => trace!(%card, %zone, "move target no longer in zone"),
                    }
                }
                Ok(moved)
            }
        }
    }

    // === Turn boundaries ===

    /// Dispatch `TurnStarted` to every card in the current player's
    /// triggering zones.
    pub fn on_turn_started(&mut self) -> Result<usize> {
        let player = self.state.current_player();
        debug!(%player, "turn started");
        self.dispatch_to_zones(player, TriggerKind::TurnStarted, &|_: &Trigger| true)
    }

    /// Dispatch `TurnEnded` to every card in the current player's
    /// triggering zones, then expire the player's and their cards' timed
    /// modifiers.
    pub fn on_turn_ended(&mut self) -> Result<usize> {
        let player = self.state.current_player();
        debug!(%player, "turn ended");
        let resolved = self.dispatch_to_zones(player, TriggerKind::TurnEnded, &|_: &Trigger| true)?;
        self.expire_modifiers(player)?;
        Ok(resolved)
    }

    fn expire_modifiers(&mut self, player: PlayerId) -> Result<()> {
        let mut owners = vec![StatOwner::Player(player)];
        for zone in self.state.player(player)?.zones() {
            owners.extend(zone.cards().iter().map(|&c| StatOwner::Card(c)));
        }

        for owner in owners {
            for (stat, change) in EffectApplier::tick_modifiers(&mut self.state, owner)? {
                trace!(%owner, stat = %stat, "modifier expired");
                self.notify(owner, &stat, change)?;
            }
        }
        Ok(())
    }

    /// Dispatch `kind` to every card in `player`'s triggering zones.
    ///
    /// Each zone is snapshotted first; a card that leaves the zone before
    /// its turn comes is skipped. A card is dispatched at most once per
    /// walk, even if its chain moves it into a later triggering zone.
    fn dispatch_to_zones(
        &mut self,
        player: PlayerId,
        kind: TriggerKind,
        predicate: &dyn Fn(&Trigger) -> bool,
    ) -> Result<usize> {
        let zones: SmallVec<[ZoneId; 4]> = self
            .state
            .player(player)?
            .triggering_zones()
            .map(Zone::id)
            .collect();

        let mut visited = FxHashSet::default();
        let mut resolved = 0;
        for zone in zones {
            let snapshot = self.state.zone(player, zone)?.snapshot();
            for card in snapshot {
                if !self.state.zone(player, zone)?.contains(card) || !visited.insert(card) {
                    continue;
                }
                resolved += self.dispatch(player, card, kind, predicate, None)?;
            }
        }
        Ok(resolved)
    }

    // === Watchers ===

    /// Propagate every stat change of `player` to the stat triggers of
    /// the cards in their triggering zones.
    pub fn set_triggers_for_player(&mut self, player: PlayerId) -> Result<()> {
        let stats: Vec<String> = self
            .state
            .player(player)?
            .stats()
            .names()
            .map(str::to_string)
            .collect();
        let watcher = Watcher::Propagate {
            player,
            subject: StatSubject::Player,
        };
        for stat in &stats {
            self.state
                .watchers_mut()
                .register(StatOwner::Player(player), stat, watcher);
        }
        debug!(%player, stats = stats.len(), "player stat triggers registered");
        Ok(())
    }

    /// Propagate every stat change of `card` to the stat triggers of the
    /// cards in its owner's triggering zones.
    pub fn set_triggers_for_card(&mut self, card: InstanceId) -> Result<()> {
        let runtime = self.state.card(card)?;
        let watcher = Watcher::Propagate {
            player: runtime.owner,
            subject: StatSubject::Card,
        };
        let stats: Vec<String> = runtime.stats().names().map(str::to_string).collect();
        for stat in &stats {
            self.state.watchers_mut().register(StatOwner::Card(card), stat, watcher);
        }
        trace!(%card, stats = stats.len(), "card stat triggers registered");
        Ok(())
    }

    /// Watch the stats named by `card`'s destroy conditions; when one holds
    /// while the card is on the board, the card moves to the graveyard.
    pub fn set_destroy_conditions_for_card(&mut self, card: InstanceId) -> Result<()> {
        let runtime = self.state.card(card)?;
        let owner = runtime.owner;
        let card_type_id = runtime.card_type;
        let config = Arc::clone(self.state.config());
        let card_type = config
            .card_type(card_type_id)
            .ok_or(LookupError::CardTypeNotFound(card_type_id))?;

        for (index, condition) in card_type.destroy_conditions.iter().enumerate() {
            let watcher = Watcher::Destroy {
                player: owner,
                card,
                condition: index,
            };
            self.state
                .watchers_mut()
                .register(StatOwner::Card(card), &condition.stat, watcher);
        }
        Ok(())
    }

    /// Run the watchers of a changed stat, in registration order.
    pub(super) fn notify(
        &mut self,
        owner: StatOwner,
        stat: &str,
        change: StatChange,
    ) -> Result<()> {
        let watchers: SmallVec<[Watcher; 4]> = self
            .state
            .watchers()
            .get(owner, stat)
            .iter()
            .copied()
            .collect();
        trace!(%owner, stat, ?change, watchers = watchers.len(), "stat changed");

        for watcher in watchers {
            match watcher {
                Watcher::Propagate { player, subject } => {
                    self.propagate(player, subject, stat, change)?;
                }
                Watcher::Destroy {
                    player,
                    card,
                    condition,
                } => self.check_destroy(player, card, condition)?,
            }
        }
        Ok(())
    }

    fn propagate(
        &mut self,
        player: PlayerId,
        subject: StatSubject,
        stat: &str,
        change: StatChange,
    ) -> Result<()> {
        let predicate = |trigger: &Trigger| match trigger {
            Trigger::StatIncreased {
                subject: s,
                stat: name,
            } => *s == subject && name == stat && change.increased(),
            Trigger::StatDecreased {
                subject: s,
                stat: name,
            } => *s == subject && name == stat && change.decreased(),
            Trigger::StatReachedValue {
                subject: s,
                stat: name,
                value,
            } => *s == subject && name == stat && change.new == *value,
            _ => false,
        };

        for kind in [
            TriggerKind::StatIncreased,
            TriggerKind::StatDecreased,
            TriggerKind::StatReachedValue,
        ] {
            self.dispatch_to_zones(player, kind, &predicate)?;
        }
        Ok(())
    }

    fn check_destroy(
        &mut self,
        player: PlayerId,
        card: InstanceId,
        condition: usize,
    ) -> Result<()> {
        let runtime = self.state.card(card)?;
        let config = Arc::clone(self.state.config());
        let Some(condition) = config
            .card_type(runtime.card_type)
            .and_then(|t| t.destroy_conditions.get(condition))
        else {
            return Ok(());
        };
        let Some(value) = runtime.stat_value(&condition.stat) else {
            return Ok(());
        };
        if !condition.holds(value) {
            return Ok(());
        }

        let (board, graveyard) = (config.rules.board_zone, config.rules.graveyard_zone);
        if !self.state.zone(player, board)?.contains(card) {
            return Ok(());
        }
        debug!(%card, stat = %condition.stat, value, "destroy condition met");
        self.move_card(player, card, board, graveyard, None)
    }
}
