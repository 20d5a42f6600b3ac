use std::sync::Arc;

use arena_core::{
    Action, Amount, BaseStats, BattleEvent, Choice, Combatant, CombatantId, Competition, Count,
    DamageEffect, Decision, Element, Guard, InflictStatusEffect, Phase, ProtectEffect, Query,
    ScriptedDecisions, StatusCondition, TargetSelector,
};

fn smash() -> Arc<Action> {
    Arc::new(Action::new(
        "Smash",
        Element::Normal,
        vec![DamageEffect::new(TargetSelector::Opponent, Amount::Absolute(100), 100).into()],
    ))
}

fn sacrifice() -> Arc<Action> {
    Arc::new(Action::new(
        "Sacrifice",
        Element::Normal,
        vec![
            DamageEffect::new(TargetSelector::Opponent, Amount::Absolute(100), 100).into(),
            DamageEffect::new(TargetSelector::User, Amount::Absolute(100), 100).into(),
        ],
    ))
}

fn lullaby() -> Arc<Action> {
    Arc::new(Action::new(
        "Lullaby",
        Element::Normal,
        vec![InflictStatusEffect::new(TargetSelector::Opponent, StatusCondition::Sleep, 100).into()],
    ))
}

fn ember() -> Arc<Action> {
    Arc::new(Action::new(
        "Ember",
        Element::Fire,
        vec![InflictStatusEffect::new(TargetSelector::Opponent, StatusCondition::Burn, 100).into()],
    ))
}

fn shield() -> Arc<Action> {
    Arc::new(Action::new(
        "Shield",
        Element::Normal,
        vec![ProtectEffect::new(Guard::HEALTH, Count::Fixed(1), 100).into()],
    ))
}

fn jab() -> Arc<Action> {
    Arc::new(Action::new(
        "Jab",
        Element::Normal,
        vec![DamageEffect::new(TargetSelector::Opponent, Amount::Absolute(5), 100).into()],
    ))
}

fn monster(name: &str, hp: u32, spd: u32) -> Combatant {
    Combatant::new(
        name,
        Element::Normal,
        BaseStats::new(hp, 10, 10, spd),
        vec![smash(), sacrifice(), lullaby(), ember(), shield(), jab()],
    )
}

/// Three monsters, fastest first in roster order: A (30), B (20), C (10).
fn trio(decisions: ScriptedDecisions) -> Competition<ScriptedDecisions> {
    let mut competition = Competition::new(decisions);
    competition.add_combatant(monster("A", 50, 30)).unwrap();
    competition.add_combatant(monster("B", 50, 20)).unwrap();
    competition.add_combatant(monster("C", 50, 10)).unwrap();
    competition
}

const A: CombatantId = CombatantId(0);
const B: CombatantId = CombatantId(1);
const C: CombatantId = CombatantId(2);

#[test]
fn sole_survivor_wins() {
    let mut competition = trio(ScriptedDecisions::new());
    competition.start().unwrap();
    competition.submit(Choice::action_on("Smash", B)).unwrap();
    competition.submit(Choice::action_on("Smash", C)).unwrap();
    let phase = competition.submit(Choice::action_on("Smash", A)).unwrap();

    // A fells B, B never acts, C fells A.
    assert_eq!(phase, Phase::Decided { winner: Some(C) });
    let events = competition.drain_events();
    assert!(events.contains(&BattleEvent::Fainted { target: B }));
    assert!(events.contains(&BattleEvent::Fainted { target: A }));
    assert!(!events.contains(&BattleEvent::TurnStarted { actor: B }));
    assert_eq!(events.last(), Some(&BattleEvent::Won { winner: C }));
}

#[test]
fn everyone_falling_ends_without_winner() {
    let mut competition = trio(ScriptedDecisions::new());
    competition.start().unwrap();
    competition.submit(Choice::action_on("Smash", C)).unwrap();
    competition.submit(Choice::Pass).unwrap();
    competition.submit(Choice::Pass).unwrap();
    assert_eq!(competition.round(), 2);

    // C is down, so only A and B choose in round two.
    assert_eq!(
        competition.submit(Choice::action_on("Sacrifice", B)).unwrap(),
        Phase::AwaitingAction { actor: B }
    );
    let phase = competition.submit(Choice::Pass).unwrap();

    assert_eq!(phase, Phase::Decided { winner: None });
    assert_eq!(competition.drain_events().last(), Some(&BattleEvent::Draw));
}

#[test]
fn default_target_is_first_conscious_opponent() {
    let mut competition = trio(ScriptedDecisions::new());
    competition.start().unwrap();
    competition.submit(Choice::Pass).unwrap();
    competition.submit(Choice::Pass).unwrap();
    competition.submit(Choice::action("Jab")).unwrap();

    let events = competition.drain_events();
    assert!(events.contains(&BattleEvent::Damaged { target: A, amount: 5 }));
}

#[test]
fn sleeper_skips_turns_until_it_wakes() {
    // Round 1: lullaby hit, B stays asleep. Round 2: B wakes.
    let decisions = ScriptedDecisions::new().checks([true, false, true]);
    let mut competition = trio(decisions);
    competition.start().unwrap();
    competition.submit(Choice::action_on("Lullaby", B)).unwrap();
    competition.submit(Choice::action_on("Jab", A)).unwrap();
    competition.submit(Choice::Pass).unwrap();

    let events = competition.drain_events();
    assert!(events.contains(&BattleEvent::StatusActive {
        target: B,
        condition: StatusCondition::Sleep
    }));
    assert!(!events.iter().any(|e| matches!(e, BattleEvent::ActionUsed { actor, .. } if *actor == B)));

    competition.submit(Choice::Pass).unwrap();
    competition.submit(Choice::action_on("Jab", A)).unwrap();
    competition.submit(Choice::Pass).unwrap();

    let events = competition.drain_events();
    assert!(events.contains(&BattleEvent::StatusEnded {
        target: B,
        condition: StatusCondition::Sleep
    }));
    assert_eq!(
        competition.combatant(B).map(|c| c.state().status()),
        Some(StatusCondition::None)
    );
    assert_eq!(competition.combatant(A).map(|c| c.state().hp()), Some(50));
}

#[test]
fn burning_costs_a_tenth_after_own_turn() {
    // Ember hits, B's burn does not wear off after its jab hits.
    let decisions = ScriptedDecisions::new().checks([true, true, false]);
    let mut competition = trio(decisions);
    competition.start().unwrap();
    competition.submit(Choice::action_on("Ember", B)).unwrap();
    competition.submit(Choice::action_on("Jab", C)).unwrap();
    competition.submit(Choice::Pass).unwrap();

    let events = competition.drain_events();
    assert!(events.contains(&BattleEvent::BurnDamage { target: B, amount: 5 }));
    assert_eq!(competition.combatant(B).map(|c| c.state().hp()), Some(45));
    assert_eq!(
        competition.decisions().history(),
        &[
            Query::Check(Decision::EffectHit),
            Query::Check(Decision::EffectHit),
            Query::Check(Decision::StatusEnd),
        ]
    );
}

#[test]
fn protection_blocks_then_fades_at_round_end() {
    let mut competition = trio(ScriptedDecisions::new());
    competition.start().unwrap();
    competition.submit(Choice::action("Shield")).unwrap();
    competition.submit(Choice::action_on("Jab", A)).unwrap();
    competition.submit(Choice::Pass).unwrap();

    let events = competition.drain_events();
    assert!(events.contains(&BattleEvent::DamageBlocked { target: A }));
    assert!(events.contains(&BattleEvent::ProtectionFaded { target: A }));

    let faded = events
        .iter()
        .position(|e| *e == BattleEvent::ProtectionFaded { target: A });
    let next_round = events
        .iter()
        .position(|e| *e == BattleEvent::RoundStarted { round: 2 });
    assert!(faded < next_round);
    assert_eq!(competition.combatant(A).map(|c| c.state().hp()), Some(50));
}

#[test]
fn same_seed_replays_the_same_contest() {
    fn play(seed: u64) -> Vec<BattleEvent> {
        let uncertain = Arc::new(Action::new(
            "Wild Swing",
            Element::Fire,
            vec![
                DamageEffect::new(TargetSelector::Opponent, Amount::Base(40), 70).into(),
                DamageEffect::new(TargetSelector::Opponent, Amount::Base(20), 50).into(),
            ],
        ));
        let mut competition = Competition::with_seed(seed);
        for (name, spd) in [("Ember", 12), ("Pebble", 9)] {
            competition
                .add_combatant(Combatant::new(
                    name,
                    Element::Earth,
                    BaseStats::new(60, 12, 8, spd),
                    vec![uncertain.clone()],
                ))
                .unwrap();
        }
        competition.start().unwrap();
        let mut events = Vec::new();
        while !competition.is_decided() && competition.round() < 50 {
            competition.submit(Choice::action("Wild Swing")).unwrap();
            events.extend(competition.drain_events());
        }
        events
    }

    assert_eq!(play(2024), play(2024));
}
