//! Replay determinism tests.
//!
//! Two solvers built from the same catalog and seed and driven by the same
//! operations must end in byte-identical states, random effects included.

use ccg_solver::cards::{CardDefinition, CardId};
use ccg_solver::core::{GameConfig, InstanceId, PlayerId, PlayerSetup, StatOwner};
use ccg_solver::effects::{
    CardEffect, CardTarget, Effect, PlayerEffect, PlayerTarget, Target, Value,
};
use ccg_solver::games::standard::{
    StandardGameBuilder, BOARD, CREATURE, CREATURE_CARD, HAND, SPELL_CARD,
};
use ccg_solver::rules::EffectSolver;
use ccg_solver::triggers::{Ability, StatSubject, Trigger, TriggeredAbility};
use proptest::collection::vec;
use proptest::prelude::*;

const P1: PlayerId = PlayerId::new(1);
const P2: PlayerId = PlayerId::new(2);

/// Burns a random enemy creature for 1-2 at the start of its owner's turn.
const WILDFIRE: CardId = CardId::new(60);
/// Drains a random player for 0-3 at the end of its owner's turn.
const GAMBLER: CardId = CardId::new(61);
/// Grows whenever its owner loses life.
const BRAWLER: CardId = CardId::new(62);

fn triggered(trigger: Trigger, effect: impl Into<Effect>, target: Target) -> Ability {
    Ability::Triggered(TriggeredAbility::new(trigger, effect.into(), target))
}

fn catalog() -> StandardGameBuilder {
    StandardGameBuilder::new()
        .with_card(CardDefinition::new(WILDFIRE, "Wildfire", CREATURE).with_ability(triggered(
            Trigger::TurnStarted,
            CardEffect::decrease(BOARD, CREATURE, "Life", Value::Random { min: 1, max: 3 }),
            Target::card(CardTarget::RandomOpponentCard),
        )))
        .with_card(CardDefinition::new(GAMBLER, "Gambler", CREATURE).with_ability(triggered(
            Trigger::TurnEnded,
            PlayerEffect::decrease("Life", Value::Random { min: 0, max: 4 }),
            Target::player(PlayerTarget::RandomPlayer),
        )))
        .with_card(
            CardDefinition::new(BRAWLER, "Brawler", CREATURE)
                .with_stat("Life", 3)
                .with_ability(triggered(
                    Trigger::StatDecreased {
                        subject: StatSubject::Player,
                        stat: "Life".into(),
                    },
                    CardEffect::increase(BOARD, CREATURE, "Attack", Value::Constant(1)),
                    Target::card(CardTarget::RandomPlayerCard),
                )),
        )
}

fn deck() -> Vec<CardId> {
    vec![CREATURE_CARD, WILDFIRE, SPELL_CARD, GAMBLER, BRAWLER, WILDFIRE, CREATURE_CARD, BRAWLER]
}

fn new_solver(seed: u64) -> EffectSolver {
    let mut solver = catalog()
        .start(seed, [PlayerSetup::new(P1, deck()), PlayerSetup::new(P2, deck())])
        .unwrap();
    solver.set_triggers_for_player(P1).unwrap();
    solver.set_triggers_for_player(P2).unwrap();
    solver
}

#[derive(Clone, Copy, Debug)]
enum Op {
    Draw(usize),
    PlayFirstInHand,
    AttackPlayer,
    AttackCreature,
    StartTurn,
    EndTurn,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1usize..3).prop_map(Op::Draw),
        Just(Op::PlayFirstInHand),
        Just(Op::AttackPlayer),
        Just(Op::AttackCreature),
        Just(Op::StartTurn),
        Just(Op::EndTurn),
    ]
}

fn first_on_board(solver: &EffectSolver, player: PlayerId) -> Option<InstanceId> {
    solver.state().zone(player, BOARD).ok()?.cards().iter().next().copied()
}

/// Apply one operation for the current player. Returns a short outcome
/// so both runs can be compared step by step.
fn apply(solver: &mut EffectSolver, op: Op) -> String {
    let player = solver.state().current_player();
    let opponent = solver.state().opponent_of(player).unwrap();
    let result = match op {
        Op::Draw(count) => solver.draw_cards(player, count).map(|drawn| format!("{drawn:?}")),
        Op::PlayFirstInHand => {
            let card = solver.state().zone(player, HAND).unwrap().cards().iter().next().copied();
            match card {
                Some(card) => solver.move_card(player, card, HAND, BOARD, None).map(|()| {
                    // Newly played creatures can die and grow.
                    let _ = solver.set_destroy_conditions_for_card(card);
                    let _ = solver.set_triggers_for_card(card);
                    card.to_string()
                }),
                None => Ok("empty hand".to_string()),
            }
        }
        Op::AttackPlayer => match first_on_board(solver, player) {
            Some(card) => solver.fight_player(player, card).map(|()| "hit".to_string()),
            None => Ok("no attacker".to_string()),
        },
        Op::AttackCreature => {
            let pair = (first_on_board(solver, player), first_on_board(solver, opponent));
            match pair {
                (Some(a), Some(b)) => {
                    let fought = solver.fight_creature(player, a, b);
                    fought.map(|()| "fought".to_string())
                }
                _ => Ok("no fight".to_string()),
            }
        }
        Op::StartTurn => solver.on_turn_started().map(|n| n.to_string()),
        Op::EndTurn => {
            let ended = solver.on_turn_ended().map(|n| n.to_string());
            solver.set_current_player(opponent).unwrap();
            ended
        }
    };
    match result {
        Ok(outcome) => outcome,
        Err(err) => err.to_string(),
    }
}

#[test]
fn test_scripted_game_replays_identically() {
    let script = [
        Op::Draw(2),
        Op::PlayFirstInHand,
        Op::PlayFirstInHand,
        Op::StartTurn,
        Op::EndTurn,
        Op::Draw(2),
        Op::PlayFirstInHand,
        Op::PlayFirstInHand,
        Op::StartTurn,
        Op::AttackCreature,
        Op::AttackPlayer,
        Op::EndTurn,
        Op::StartTurn,
        Op::AttackPlayer,
        Op::EndTurn,
    ];

    let mut a = new_solver(1234);
    let mut b = new_solver(1234);
    for op in script {
        assert_eq!(apply(&mut a, op), apply(&mut b, op));
    }

    assert_eq!(a.state().snapshot_bytes().unwrap(), b.state().snapshot_bytes().unwrap());
    assert_eq!(a.state().rng().calls(), b.state().rng().calls());
}

#[test]
fn test_snapshot_covers_stats() {
    let a = new_solver(1);
    let mut b = new_solver(1);
    assert_eq!(a.state().snapshot_bytes().unwrap(), b.state().snapshot_bytes().unwrap());

    b.draw_cards(P1, 1).unwrap();
    assert_ne!(a.state().snapshot_bytes().unwrap(), b.state().snapshot_bytes().unwrap());
}

#[test]
fn test_config_json_roundtrip() {
    let config = catalog().build();
    let json = serde_json::to_string(&*config).unwrap();
    let restored: GameConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.validate(), Ok(()));
    assert_eq!(restored.card(BRAWLER).unwrap().stat_override("Life"), Some(3));
    assert_eq!(serde_json::to_string(&restored).unwrap(), json);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_random_games_replay_identically(seed in any::<u64>(), ops in vec(op(), 1..40)) {
        let mut a = new_solver(seed);
        let mut b = new_solver(seed);

        for op in ops {
            prop_assert_eq!(apply(&mut a, op), apply(&mut b, op));
        }

        prop_assert_eq!(a.state().snapshot_bytes().unwrap(), b.state().snapshot_bytes().unwrap());
        for player in [P1, P2] {
            prop_assert_eq!(
                a.state().stat_value(StatOwner::Player(player), "Life"),
                b.state().stat_value(StatOwner::Player(player), "Life")
            );
        }
    }
}
