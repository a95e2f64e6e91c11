use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use ccg_solver::cards::{CardDefinition, CardId};
use ccg_solver::core::{PlayerId, PlayerSetup};
use ccg_solver::effects::{CardEffect, CardTarget, PlayerEffect, PlayerTarget, Target, Value};
use ccg_solver::games::standard::{
    StandardGameBuilder, BOARD, CREATURE, CREATURE_CARD, HAND, SPELL_CARD,
};
use ccg_solver::rules::EffectSolver;
use ccg_solver::triggers::{Ability, StatSubject, Trigger, TriggeredAbility};

const P1: PlayerId = PlayerId::new(1);
const P2: PlayerId = PlayerId::new(2);

const HOUND: CardId = CardId::new(100);
const HEALER: CardId = CardId::new(101);

/// A board of creatures that react to their owner's life changes.
fn reactive_board(width: usize) -> EffectSolver {
    let hound = Ability::Triggered(TriggeredAbility::new(
        Trigger::StatDecreased {
            subject: StatSubject::Player,
            stat: "Life".into(),
        },
        CardEffect::increase(BOARD, CREATURE, "Attack", Value::Constant(1)).into(),
        Target::card(CardTarget::ThisCard),
    ));
    let healer = Ability::Triggered(TriggeredAbility::new(
        Trigger::TurnStarted,
        PlayerEffect::increase("Life", Value::Random { min: 1, max: 3 }).into(),
        Target::player(PlayerTarget::RandomPlayer),
    ));
    let mut solver = StandardGameBuilder::new()
        .with_card(CardDefinition::new(HOUND, "Hound", CREATURE).with_ability(hound))
        .with_card(CardDefinition::new(HEALER, "Healer", CREATURE).with_ability(healer))
        .start(7, [PlayerSetup::new(P1, vec![]), PlayerSetup::new(P2, vec![])])
        .unwrap();

    for i in 0..width {
        let card = if i % 2 == 0 { HOUND } else { HEALER };
        solver.create_card(P1, card, BOARD).unwrap();
        solver.create_card(P2, CREATURE_CARD, BOARD).unwrap();
    }
    solver.set_triggers_for_player(P1).unwrap();
    solver
}

fn bench_turn_start(c: &mut Criterion) {
    let solver = reactive_board(8);
    c.bench_function("turn_start_8_cards", |b| {
        b.iter_batched(
            || solver.clone(),
            |mut solver| black_box(solver.on_turn_started().unwrap()),
            BatchSize::SmallInput,
        )
    });
}

fn bench_spell_propagation(c: &mut Criterion) {
    let mut solver = reactive_board(8);
    let spark = solver.create_card(P2, SPELL_CARD, HAND).unwrap();
    c.bench_function("spell_propagation_8_cards", |b| {
        b.iter_batched(
            || solver.clone(),
            |mut solver| {
                solver.move_card(P2, spark, HAND, BOARD, None).unwrap();
                black_box(solver)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_fight_creature(c: &mut Criterion) {
    let solver = reactive_board(4);
    let attacker = solver.state().zone(P1, BOARD).unwrap().cards()[0];
    let defender = solver.state().zone(P2, BOARD).unwrap().cards()[0];
    c.bench_function("fight_creature", |b| {
        b.iter_batched(
            || solver.clone(),
            |mut solver| {
                solver.fight_creature(P1, attacker, defender).unwrap();
                black_box(solver)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let solver = reactive_board(16);
    c.bench_function("snapshot_bytes_16_cards", |b| {
        b.iter(|| black_box(solver.state().snapshot_bytes().unwrap()))
    });
}

criterion_group!(
    benches,
    bench_turn_start,
    bench_spell_propagation,
    bench_fight_creature,
    bench_snapshot
);
criterion_main!(benches);
