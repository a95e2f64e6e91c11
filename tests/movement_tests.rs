//! Card movement integration tests.
//!
//! Covers zone membership after moves, enter/leave trigger order, forced
//! relocation after triggers, move effects and draws.

use ccg_solver::cards::{CardDefinition, CardId};
use ccg_solver::core::{
    InstanceId, LookupError, PlayerId, PlayerSetup, SolverError, StatOwner, ZoneId,
};
use ccg_solver::effects::{
    CardTarget, Effect, MoveCardEffect, PlayerEffect, PlayerTarget, Target, TargetSelection, Value,
};
use ccg_solver::games::standard::{
    StandardGameBuilder, BOARD, CREATURE, CREATURE_CARD, DECK, GRAVEYARD, HAND, SPELL, SPELL_CARD,
};
use ccg_solver::rules::EffectSolver;
use ccg_solver::triggers::{Ability, ActivatedAbility, Trigger, TriggeredAbility};
use proptest::prelude::*;

const P1: PlayerId = PlayerId::new(1);
const P2: PlayerId = PlayerId::new(2);

/// Spell: sets mana to 1 on leaving the hand, 2 on entering the board, and
/// burns the opponent for 5 on entering the graveyard.
const OMEN: CardId = CardId::new(20);
/// Creature: returns a selected opponent creature from the board to its hand.
const BOUNCER: CardId = CardId::new(21);
/// Spell: sends every opposing creature on the board to the graveyard.
const SWEEPER: CardId = CardId::new(22);
/// Creature: returns itself from the board to its owner's hand.
const RECALL: CardId = CardId::new(23);

fn triggered(trigger: Trigger, effect: impl Into<Effect>, target: Target) -> Ability {
    Ability::Triggered(TriggeredAbility::new(trigger, effect.into(), target))
}

fn solver(p1_deck: Vec<CardId>) -> EffectSolver {
    StandardGameBuilder::new()
        .with_card(
            CardDefinition::new(OMEN, "Omen", SPELL)
                .with_ability(triggered(
                    Trigger::CardLeftZone { zone: HAND },
                    PlayerEffect::set("Mana", Value::Constant(1)),
                    Target::player(PlayerTarget::Self_),
                ))
                .with_ability(triggered(
                    Trigger::CardEnteredZone { zone: BOARD },
                    PlayerEffect::set("Mana", Value::Constant(2)),
                    Target::player(PlayerTarget::Self_),
                ))
                .with_ability(triggered(
                    Trigger::CardEnteredZone { zone: GRAVEYARD },
                    PlayerEffect::decrease("Life", Value::Constant(5)),
                    Target::player(PlayerTarget::Opponent),
                )),
        )
        .with_card(
            CardDefinition::new(BOUNCER, "Bouncer", CREATURE).with_ability(Ability::Activated(
                ActivatedAbility::new(
                    MoveCardEffect::new(BOARD, CREATURE, HAND).into(),
                    Target::card(CardTarget::OpponentCard),
                ),
            )),
        )
        .with_card(CardDefinition::new(SWEEPER, "Sweeper", SPELL).with_ability(triggered(
            Trigger::CardEnteredZone { zone: BOARD },
            MoveCardEffect::new(BOARD, CREATURE, GRAVEYARD),
            Target::card(CardTarget::AllOpponentCards),
        )))
        .with_card(
            CardDefinition::new(RECALL, "Recall", CREATURE).with_ability(Ability::Activated(
                ActivatedAbility::new(
                    MoveCardEffect::new(BOARD, CREATURE, HAND).into(),
                    Target::card(CardTarget::ThisCard),
                ),
            )),
        )
        .start(11, [PlayerSetup::new(P1, p1_deck), PlayerSetup::new(P2, vec![])])
        .unwrap()
}

fn cards(solver: &EffectSolver, player: PlayerId, zone: ZoneId) -> Vec<InstanceId> {
    solver
        .state()
        .zone(player, zone)
        .unwrap()
        .cards()
        .iter()
        .copied()
        .collect()
}

fn occurrences(solver: &EffectSolver, player: PlayerId, zone: ZoneId, card: InstanceId) -> usize {
    solver
        .state()
        .zone(player, zone)
        .unwrap()
        .cards()
        .iter()
        .filter(|&&c| c == card)
        .count()
}

#[test]
fn test_move_appends_to_destination() {
    let mut solver = solver(vec![CREATURE_CARD, CREATURE_CARD]);
    let first = solver.create_card(P1, CREATURE_CARD, BOARD).unwrap();

    solver.move_card(P1, InstanceId(2), DECK, BOARD, None).unwrap();

    assert_eq!(cards(&solver, P1, BOARD), vec![first, InstanceId(2)]);
    assert_eq!(cards(&solver, P1, DECK), vec![InstanceId(1)]);
}

#[test]
fn test_enter_and_leave_trigger_order() {
    let mut solver = solver(vec![]);
    let omen = solver.create_card(P1, OMEN, HAND).unwrap();

    solver.move_card(P1, omen, HAND, BOARD, None).unwrap();

    // Left(HAND) set 1, then Entered(BOARD) set 2
    assert_eq!(solver.state().stat_value(StatOwner::Player(P1), "Mana"), Some(2));
}

/// The spell ends in the graveyard without firing its enter-graveyard
/// ability.
#[test]
fn test_forced_relocation_fires_no_triggers() {
    let mut solver = solver(vec![]);
    let omen = solver.create_card(P1, OMEN, HAND).unwrap();

    solver.move_card(P1, omen, HAND, BOARD, None).unwrap();

    assert_eq!(cards(&solver, P1, GRAVEYARD), vec![omen]);
    assert!(cards(&solver, P1, BOARD).is_empty());
    assert!(cards(&solver, P1, HAND).is_empty());
    assert_eq!(solver.state().stat_value(StatOwner::Player(P2), "Life"), Some(20));
}

#[test]
fn test_spell_moved_to_relocation_zone_stays() {
    let mut solver = solver(vec![]);
    let spark = solver.create_card(P1, SPELL_CARD, HAND).unwrap();

    solver.move_card(P1, spark, HAND, GRAVEYARD, None).unwrap();

    assert_eq!(cards(&solver, P1, GRAVEYARD), vec![spark]);
    assert_eq!(solver.state().stat_value(StatOwner::Player(P2), "Life"), Some(20));
}

#[test]
fn test_move_from_wrong_zone_changes_nothing() {
    let mut solver = solver(vec![CREATURE_CARD]);
    let before = solver.state().snapshot_bytes().unwrap();

    let err = solver.move_card(P1, InstanceId(1), HAND, BOARD, None).unwrap_err();
    assert_eq!(
        err,
        SolverError::Lookup(LookupError::CardNotInZone {
            card: InstanceId(1),
            zone: HAND,
        })
    );

    let err = solver.move_card(P1, InstanceId(1), DECK, ZoneId::new(9), None).unwrap_err();
    assert_eq!(
        err,
        SolverError::Lookup(LookupError::ZoneNotFound {
            player: P1,
            zone: ZoneId::new(9),
        })
    );

    let err = solver.move_card(PlayerId::new(7), InstanceId(1), DECK, BOARD, None).unwrap_err();
    assert!(err.is_recoverable());

    assert_eq!(solver.state().snapshot_bytes().unwrap(), before);
}

#[test]
fn test_move_effect_uses_selection() {
    let mut solver = solver(vec![]);
    let bouncer = solver.create_card(P1, BOUNCER, BOARD).unwrap();
    let victim = solver.create_card(P2, CREATURE_CARD, BOARD).unwrap();

    // No selection: nothing to target.
    assert!(!solver.activate_ability(P1, bouncer, 0, None).unwrap());
    assert_eq!(cards(&solver, P2, BOARD), vec![victim]);

    // The acting player's own card is not an opponent card.
    let own = TargetSelection::card(bouncer);
    assert!(!solver.activate_ability(P1, bouncer, 0, Some(&own)).unwrap());

    let selection = TargetSelection::card(victim);
    assert!(solver.activate_ability(P1, bouncer, 0, Some(&selection)).unwrap());
    assert!(cards(&solver, P2, BOARD).is_empty());
    assert_eq!(cards(&solver, P2, HAND), vec![victim]);
    assert_eq!(cards(&solver, P1, BOARD), vec![bouncer]);
}

#[test]
fn test_move_effect_over_all_candidates() {
    let mut solver = solver(vec![]);
    let mine = solver.create_card(P1, CREATURE_CARD, BOARD).unwrap();
    let a = solver.create_card(P2, CREATURE_CARD, BOARD).unwrap();
    let spark = solver.create_card(P2, SPELL_CARD, BOARD).unwrap();
    let b = solver.create_card(P2, CREATURE_CARD, BOARD).unwrap();
    let sweeper = solver.create_card(P1, SWEEPER, HAND).unwrap();

    solver.move_card(P1, sweeper, HAND, BOARD, None).unwrap();

    assert_eq!(cards(&solver, P2, GRAVEYARD), vec![a, b]);
    assert_eq!(cards(&solver, P2, BOARD), vec![spark]);
    assert_eq!(cards(&solver, P1, BOARD), vec![mine]);
    assert_eq!(cards(&solver, P1, GRAVEYARD), vec![sweeper]);
}

#[test]
fn test_move_effect_outside_source_zone_is_not_resolved() {
    let mut solver = solver(vec![]);
    let buried = solver.create_card(P1, RECALL, GRAVEYARD).unwrap();

    assert!(!solver.activate_ability(P1, buried, 0, None).unwrap());
    assert_eq!(cards(&solver, P1, GRAVEYARD), vec![buried]);
    assert!(cards(&solver, P1, HAND).is_empty());

    let fielded = solver.create_card(P1, RECALL, BOARD).unwrap();
    assert!(solver.activate_ability(P1, fielded, 0, None).unwrap());
    assert_eq!(cards(&solver, P1, HAND), vec![fielded]);
    assert_eq!(cards(&solver, P1, GRAVEYARD), vec![buried]);
}

#[test]
fn test_draw_skips_triggers() {
    let mut solver = solver(vec![OMEN]);

    let drawn = solver.draw_cards(P1, 3).unwrap();

    assert_eq!(drawn, vec![InstanceId(1)]);
    assert_eq!(cards(&solver, P1, HAND), vec![InstanceId(1)]);
    assert_eq!(solver.state().stat_value(StatOwner::Player(P1), "Mana"), Some(0));
}

#[test]
fn test_create_unknown_card() {
    let mut solver = solver(vec![]);
    let err = solver.create_card(P1, CardId::new(99), BOARD).unwrap_err();
    assert_eq!(err, SolverError::Lookup(LookupError::CardDefinitionNotFound(CardId::new(99))));
    assert_eq!(solver.state().card_count(), 0);
}

const ZONES: [ZoneId; 4] = [DECK, HAND, BOARD, GRAVEYARD];

proptest! {
    /// After every move the card sits in the destination exactly once and
    /// no other card changes zone.
    #[test]
    fn test_move_keeps_card_unique(path in proptest::collection::vec(0usize..4, 1..20)) {
        let mut solver = solver(vec![CREATURE_CARD, CREATURE_CARD]);
        let card = InstanceId(2);
        let mut current = DECK;

        for index in path {
            let destination = ZONES[index];
            solver.move_card(P1, card, current, destination, None).unwrap();

            prop_assert_eq!(occurrences(&solver, P1, destination, card), 1);
            for zone in ZONES.iter().filter(|&&z| z != destination) {
                prop_assert_eq!(occurrences(&solver, P1, *zone, card), 0);
            }
            prop_assert_eq!(occurrences(&solver, P1, DECK, InstanceId(1)), 1);
            current = destination;
        }
    }
}
