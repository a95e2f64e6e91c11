//! Effect targeting system.
//!
//! Defines how effects select their targets:
//! - `Target`: Which kind of player or card selection, plus filter conditions
//! - `TargetSelection`: Driver choices (zone override, instance, self/opponent flag)
//! - `TargetResolver`: Turns a target into concrete players or cards
//!
//! ## Determinism
//!
//! Random kinds draw exactly one value from the game generator per
//! resolution, over a candidate list in stable order: players sorted by
//! id, cards in zone order with the acting player's side first. An empty
//! candidate list draws nothing.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use super::effect::Effect;
use crate::cards::CardTypeId;
use crate::core::{GameState, InstanceId, LookupError, PlayerId, StatOwner, ZoneId};
use crate::triggers::Condition;

/// Resolved player targets.
pub type PlayerTargets = SmallVec<[PlayerId; 2]>;

/// Resolved card targets.
pub type CardTargets = SmallVec<[InstanceId; 4]>;

/// How a player target is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerTarget {
    /// The acting player.
    Self_,
    /// The acting player's opponent.
    Opponent,
    /// Chosen by the selection flag: 0 = acting player, 1 = opponent.
    PlayerOrOpponent,
    /// One player, uniformly at random.
    RandomPlayer,
    /// Both players, in seat order.
    AllPlayers,
}

/// How card targets are chosen.
///
/// Candidates always come from a single zone (the effect's zone unless the
/// selection overrides it) and must be of the effect's card type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardTarget {
    /// The card whose ability is resolving.
    ThisCard,
    /// The selected instance, in the acting player's zone.
    PlayerCard,
    /// The selected instance, in the opponent's zone.
    OpponentCard,
    /// The selected instance, in the acting player's zone, else the opponent's.
    TargetCard,
    /// One random candidate of the acting player.
    RandomPlayerCard,
    /// One random candidate of the opponent.
    RandomOpponentCard,
    /// One random candidate of either player.
    RandomCard,
    /// Every candidate of the acting player.
    AllPlayerCards,
    /// Every candidate of the opponent.
    AllOpponentCards,
    /// Every candidate of both players.
    AllCards,
}

/// Which side(s) a card target kind draws candidates from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Acting,
    Opponent,
    Both,
}

impl CardTarget {
    fn side(self) -> Side {
        match self {
            CardTarget::ThisCard
            | CardTarget::PlayerCard
            | CardTarget::RandomPlayerCard
            | CardTarget::AllPlayerCards => Side::Acting,
            CardTarget::OpponentCard
            | CardTarget::RandomOpponentCard
            | CardTarget::AllOpponentCards => Side::Opponent,
            CardTarget::TargetCard | CardTarget::RandomCard | CardTarget::AllCards => Side::Both,
        }
    }
}

/// An ability's target specification.
///
/// ## Example
///
/// ```
/// use ccg_solver::effects::{CardTarget, Target};
/// use ccg_solver::triggers::{Comparison, Condition};
///
/// // "every enemy creature with 3 or more attack"
/// let target = Target::card(CardTarget::AllOpponentCards)
///     .with_condition(Condition::new("Attack", Comparison::GreaterOrEqual, 3));
///
/// assert!(target.is_card());
/// assert_eq!(target.conditions().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    Player {
        kind: PlayerTarget,
        #[serde(default)]
        conditions: Vec<Condition>,
    },
    Card {
        kind: CardTarget,
        #[serde(default)]
        conditions: Vec<Condition>,
    },
}

impl Target {
    /// An unfiltered player target.
    pub fn player(kind: PlayerTarget) -> Self {
        Target::Player {
            kind,
            conditions: Vec::new(),
        }
    }

    /// An unfiltered card target.
    pub fn card(kind: CardTarget) -> Self {
        Target::Card {
            kind,
            conditions: Vec::new(),
        }
    }

    /// Add a filter condition (builder pattern).
    #[must_use]
    pub fn with_condition(mut self, condition: Condition) -> Self {
        match &mut self {
            Target::Player { conditions, .. } | Target::Card { conditions, .. } => {
                conditions.push(condition);
            }
        }
        self
    }

    /// Filter conditions; a candidate must satisfy all of them.
    #[must_use]
    pub fn conditions(&self) -> &[Condition] {
        match self {
            Target::Player { conditions, .. } | Target::Card { conditions, .. } => conditions,
        }
    }

    #[must_use]
    pub fn is_card(&self) -> bool {
        matches!(self, Target::Card { .. })
    }
}

/// Choices supplied by the driver with an operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSelection {
    /// Zone to draw card candidates from instead of the effect's zone.
    pub zone: Option<ZoneId>,
    /// Explicitly chosen card instance.
    pub card: Option<InstanceId>,
    /// Self/opponent flag for `PlayerOrOpponent` (0 = self, 1 = opponent).
    pub player_choice: Option<u8>,
}

impl TargetSelection {
    /// Select a card instance.
    #[must_use]
    pub fn card(card: InstanceId) -> Self {
        Self {
            card: Some(card),
            ..Self::default()
        }
    }

    /// Select between self (0) and opponent (1).
    #[must_use]
    pub fn player_choice(choice: u8) -> Self {
        Self {
            player_choice: Some(choice),
            ..Self::default()
        }
    }

    /// Override the candidate zone (builder pattern).
    #[must_use]
    pub fn in_zone(mut self, zone: ZoneId) -> Self {
        self.zone = Some(zone);
        self
    }
}

/// Resolves targets against game state.
pub struct TargetResolver;

impl TargetResolver {
    /// Players targeted by `target` when `acting` resolves an ability.
    ///
    /// A card target yields no players.
    pub fn resolve_player_targets(
        state: &mut GameState,
        acting: PlayerId,
        target: &Target,
        selection: Option<&TargetSelection>,
    ) -> Result<PlayerTargets, LookupError> {
        let Target::Player { kind, conditions } = target else {
            return Ok(PlayerTargets::new());
        };
        let opponent = state.opponent_of(acting)?;

        let mut targets = PlayerTargets::new();
        match kind {
            PlayerTarget::Self_ => targets.push(acting),
            PlayerTarget::Opponent => targets.push(opponent),
            PlayerTarget::PlayerOrOpponent => match selection.and_then(|s| s.player_choice) {
                Some(0) => targets.push(acting),
                Some(1) => targets.push(opponent),
                other => trace!(choice = ?other, "no usable player choice"),
            },
            PlayerTarget::RandomPlayer => {
                let mut candidates: PlayerTargets = state.players().iter().map(|p| p.id).collect();
                candidates.sort_unstable();
                if let Some(index) = state.rng_mut().next_index(candidates.len()) {
                    targets.push(candidates[index]);
                }
            }
            PlayerTarget::AllPlayers => targets.extend(state.players().iter().map(|p| p.id)),
        }

        targets.retain(|p| Self::satisfies(state, StatOwner::Player(*p), conditions));
        Ok(targets)
    }

    /// Cards targeted by `target` when `acting` resolves an ability of
    /// `source` whose effect draws candidates of `card_type` from `zone`.
    ///
    /// A player target yields no cards.
    pub fn resolve_card_targets(
        state: &mut GameState,
        acting: PlayerId,
        source: InstanceId,
        target: &Target,
        zone: ZoneId,
        card_type: CardTypeId,
        selection: Option<&TargetSelection>,
    ) -> Result<CardTargets, LookupError> {
        let Target::Card { kind, conditions } = target else {
            return Ok(CardTargets::new());
        };
        let zone = selection.and_then(|s| s.zone).unwrap_or(zone);
        let opponent = state.opponent_of(acting)?;
        let chosen = selection.and_then(|s| s.card);
        let side = kind.side();

        let mut targets = CardTargets::new();
        match kind {
            CardTarget::ThisCard => targets.push(source),
            CardTarget::PlayerCard | CardTarget::OpponentCard | CardTarget::TargetCard => {
                if let Some(card) = chosen {
                    let found = Self::find_selected(state, acting, opponent, *kind, zone, card)?;
                    targets.extend(found);
                }
            }
            CardTarget::RandomPlayerCard
            | CardTarget::RandomOpponentCard
            | CardTarget::RandomCard => {
                let candidates = Self::candidates(state, acting, opponent, side, zone, card_type)?;
                if let Some(index) = state.rng_mut().next_index(candidates.len()) {
                    targets.push(candidates[index]);
                }
            }
            CardTarget::AllPlayerCards | CardTarget::AllOpponentCards | CardTarget::AllCards => {
                targets = Self::candidates(state, acting, opponent, side, zone, card_type)?;
            }
        }

        targets.retain(|c| Self::satisfies(state, StatOwner::Card(*c), conditions));
        Ok(targets)
    }

    /// Whether `target` could select anything for `effect` right now.
    ///
    /// Existence check only: consumes no randomness and ignores conditions.
    /// Player targets are always available, as is `ThisCard`.
    #[must_use]
    pub fn targets_available(
        state: &GameState,
        acting: PlayerId,
        effect: &Effect,
        target: &Target,
        selection: Option<&TargetSelection>,
    ) -> bool {
        let kind = match target {
            Target::Player { .. } => return effect.targets_players(),
            Target::Card { kind, .. } => *kind,
        };
        let (Some(zone), Some(card_type)) = (effect.zone(), effect.card_type()) else {
            return false;
        };
        if kind == CardTarget::ThisCard {
            return true;
        }
        let zone = selection.and_then(|s| s.zone).unwrap_or(zone);
        let Ok(opponent) = state.opponent_of(acting) else {
            return false;
        };

        match kind {
            CardTarget::PlayerCard | CardTarget::OpponentCard | CardTarget::TargetCard => {
                let Some(card) = selection.and_then(|s| s.card) else {
                    return false;
                };
                let found = Self::find_selected(state, acting, opponent, kind, zone, card);
                matches!(found, Ok(Some(_)))
            }
            _ => Self::sides(acting, opponent, kind.side())
                .iter()
                .any(|&side| Self::has_candidate(state, side, zone, card_type)),
        }
    }

    fn sides(acting: PlayerId, opponent: PlayerId, side: Side) -> SmallVec<[PlayerId; 2]> {
        match side {
            Side::Acting => smallvec::smallvec![acting],
            Side::Opponent => smallvec::smallvec![opponent],
            Side::Both => smallvec::smallvec![acting, opponent],
        }
    }

    /// Look up an explicitly selected instance on the side(s) `kind` allows.
    fn find_selected(
        state: &GameState,
        acting: PlayerId,
        opponent: PlayerId,
        kind: CardTarget,
        zone: ZoneId,
        card: InstanceId,
    ) -> Result<Option<InstanceId>, LookupError> {
        for side in Self::sides(acting, opponent, kind.side()) {
            if state.zone(side, zone)?.contains(card) {
                return Ok(Some(card));
            }
        }
        Ok(None)
    }

    /// Cards of `card_type` in `zone` on the given side(s), acting side
    /// first, each in zone order.
    fn candidates(
        state: &GameState,
        acting: PlayerId,
        opponent: PlayerId,
        side: Side,
        zone: ZoneId,
        card_type: CardTypeId,
    ) -> Result<CardTargets, LookupError> {
        let mut candidates = CardTargets::new();
        for player in Self::sides(acting, opponent, side) {
            candidates.extend(
                state
                    .zone(player, zone)?
                    .cards()
                    .iter()
                    .copied()
                    .filter(|&c| state.card(c).is_ok_and(|card| card.card_type == card_type)),
            );
        }
        Ok(candidates)
    }

    fn has_candidate(
        state: &GameState,
        player: PlayerId,
        zone: ZoneId,
        card_type: CardTypeId,
    ) -> bool {
        state.zone(player, zone).is_ok_and(|zone| {
            zone.cards()
                .iter()
                .any(|&c| state.card(c).is_ok_and(|card| card.card_type == card_type))
        })
    }

    /// All conditions hold on the candidate's effective stat values.
    /// A missing stat fails its condition.
    fn satisfies(state: &GameState, owner: StatOwner, conditions: &[Condition]) -> bool {
        conditions.iter().all(|condition| {
            state
                .stat_value(owner, &condition.stat)
                .is_some_and(|value| condition.holds(value))
        })
    }
}
