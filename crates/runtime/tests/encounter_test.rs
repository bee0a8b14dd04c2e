use combat_content::ScenarioLoader;
use combat_core::{Combatant, CombatantId, DamageModifier, StatsSnapshot};
use combat_runtime::{Encounter, RuntimeConfig, RuntimeError};

const KNIGHT: CombatantId = CombatantId(0);
const GOBLIN: CombatantId = CombatantId(1);

fn duel(goblin_hp: i64) -> Encounter {
    let mut encounter = Encounter::new(&RuntimeConfig::default());
    encounter
        .join(Combatant::new(KNIGHT, "Knight", StatsSnapshot::new(120, 100, 300)))
        .unwrap();
    encounter
        .join(Combatant::new(GOBLIN, "Goblin", StatsSnapshot::new(80, 100, goblin_hp)))
        .unwrap();
    encounter
}

#[test]
fn knight_overkills_goblin_and_hp_clamps_at_zero() {
    let mut encounter = duel(50);

    let report = encounter.strike(KNIGHT, GOBLIN).unwrap();

    let outcome = report.outcome.expect("goblin was alive");
    assert_eq!(outcome.damage(), 120);
    assert!(report.defeated_defender());
    assert_eq!(encounter.combatant(GOBLIN).unwrap().stats().hp, 0);
    assert_eq!(
        encounter.survivors().map(|c| c.id).collect::<Vec<_>>(),
        vec![KNIGHT]
    );
}

#[test]
fn goblin_deals_reduced_damage() {
    let mut encounter = duel(50);

    let report = encounter.strike(GOBLIN, KNIGHT).unwrap();

    let outcome = report.outcome.unwrap();
    assert!(matches!(
        outcome.breakdown.modifier,
        DamageModifier::Reduction { amount: 25, .. }
    ));
    assert_eq!(encounter.combatant(KNIGHT).unwrap().stats().hp, 225);
}

#[test]
fn striking_a_defeated_combatant_is_a_no_op() {
    let mut encounter = duel(0);

    let report = encounter.strike(KNIGHT, GOBLIN).unwrap();

    assert_eq!(report.outcome, None);
    assert_eq!(encounter.combatant(GOBLIN).unwrap().stats().hp, 0);
    assert_eq!(encounter.log().len(), 1);
}

#[test]
fn self_target_and_unknown_ids_are_rejected() {
    let mut encounter = duel(50);

    assert_eq!(
        encounter.strike(KNIGHT, KNIGHT),
        Err(RuntimeError::SelfTarget(KNIGHT))
    );
    assert_eq!(
        encounter.strike(CombatantId(9), GOBLIN),
        Err(RuntimeError::UnknownCombatant(CombatantId(9)))
    );
    assert_eq!(
        encounter.strike(KNIGHT, CombatantId(9)),
        Err(RuntimeError::UnknownCombatant(CombatantId(9)))
    );
    assert!(encounter.log().is_empty());
    assert_eq!(encounter.strikes_resolved(), 0);
}

#[test]
fn duplicate_join_is_rejected() {
    let mut encounter = duel(50);

    let err = encounter
        .join(Combatant::new(GOBLIN, "Impostor", StatsSnapshot::new(1, 1, 1)))
        .unwrap_err();

    assert_eq!(err, RuntimeError::DuplicateCombatant(GOBLIN));
    assert_eq!(encounter.combatant(GOBLIN).unwrap().name, "Goblin");
}

#[test]
fn leaving_returns_the_combatant() {
    let mut encounter = duel(50);
    encounter.strike(KNIGHT, GOBLIN).unwrap();

    let goblin = encounter.leave(GOBLIN).unwrap();

    assert!(goblin.is_defeated());
    assert!(encounter.combatant(GOBLIN).is_none());
    assert_eq!(
        encounter.strike(KNIGHT, GOBLIN),
        Err(RuntimeError::UnknownCombatant(GOBLIN))
    );
}

#[test]
fn configured_hit_damage_drives_the_formula() {
    let config = RuntimeConfig::from_vars(|key| match key {
        "COMBAT_HIT_DAMAGE" => Some("10".to_string()),
        _ => None,
    });
    let mut encounter = Encounter::new(&config);
    encounter
        .join(Combatant::new(KNIGHT, "Knight", StatsSnapshot::new(50, 50, 100)))
        .unwrap();
    encounter
        .join(Combatant::new(GOBLIN, "Goblin", StatsSnapshot::new(50, 50, 100)))
        .unwrap();

    encounter.strike(KNIGHT, GOBLIN).unwrap();

    assert_eq!(encounter.combatant(GOBLIN).unwrap().stats().hp, 90);
}

#[test]
fn hit_log_keeps_only_recent_strikes() {
    let config = RuntimeConfig {
        log_capacity: 2,
        ..RuntimeConfig::default()
    };
    let mut encounter = Encounter::new(&config);
    encounter
        .join(Combatant::new(KNIGHT, "Knight", StatsSnapshot::new(10, 10, 10_000)))
        .unwrap();
    encounter
        .join(Combatant::new(GOBLIN, "Goblin", StatsSnapshot::new(10, 10, 10_000)))
        .unwrap();

    for _ in 0..5 {
        encounter.strike(KNIGHT, GOBLIN).unwrap();
    }

    let sequences: Vec<u64> = encounter.log().iter().map(|r| r.sequence).collect();
    assert_eq!(sequences, vec![3, 4]);
    assert_eq!(encounter.strikes_resolved(), 5);
    assert_eq!(encounter.combatant(GOBLIN).unwrap().stats().hp, 9_500);
}

#[test]
fn scripted_scenario_runs_to_completion() {
    let scenario = ScenarioLoader::parse(
        r#"(
            combatants: [
                (id: 0, name: "Knight", atk: 120, def: 100, hp: 300),
                (id: 1, name: "Goblin", atk: 80, def: 100, hp: 200),
            ],
            strikes: [
                (attacker: 0, defender: 1),
                (attacker: 1, defender: 0),
                (attacker: 0, defender: 1),
                (attacker: 1, defender: 0),
            ],
        )"#,
    )
    .unwrap();

    let mut encounter = Encounter::default();
    for combatant in scenario.combatants {
        encounter.join(combatant).unwrap();
    }
    let reports: Vec<_> = scenario
        .strikes
        .iter()
        .map(|strike| encounter.strike(strike.attacker(), strike.defender()).unwrap())
        .collect();

    // Goblin: 200 → 80 → 0. Knight: 300 → 225 → 150.
    assert_eq!(encounter.combatant(GOBLIN).unwrap().stats().hp, 0);
    assert_eq!(encounter.combatant(KNIGHT).unwrap().stats().hp, 150);
    assert!(reports[2].defeated_defender());

    let json = serde_json::to_value(&reports[0]).unwrap();
    assert_eq!(json["outcome"]["hp_after"], 80);
}
