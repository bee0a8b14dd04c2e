//! Damage resolution against a defender's hit points.

use crate::env::TablesOracle;
use crate::stats::StatsSnapshot;

use super::damage::{DamageBreakdown, apply_damage, calculate_damage};

/// Result of one resolved hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DamageOutcome {
    /// How the damage was derived.
    pub breakdown: DamageBreakdown,
    /// Defender HP before the hit.
    pub hp_before: i64,
    /// Defender HP after the hit (never negative).
    pub hp_after: i64,
}

impl DamageOutcome {
    /// Damage computed for the hit, including any overkill.
    pub fn damage(&self) -> u64 {
        self.breakdown.total
    }

    /// HP actually removed from the defender.
    pub fn hp_lost(&self) -> i64 {
        self.hp_before - self.hp_after
    }

    /// Returns true if this hit defeated the defender.
    pub fn is_lethal(&self) -> bool {
        self.hp_after == 0
    }
}

/// Compute the outcome of a hit without touching the defender.
///
/// Returns `None` when the defender is already defeated (`hp <= 0`).
pub fn preview_basic_damage(
    attacker_stats: &StatsSnapshot,
    defender_stats: &StatsSnapshot,
    tables: &(impl TablesOracle + ?Sized),
) -> Option<DamageOutcome> {
    if !defender_stats.is_alive() {
        return None;
    }

    let breakdown = calculate_damage(attacker_stats, defender_stats, tables);
    Some(DamageOutcome {
        breakdown,
        hp_before: defender_stats.hp,
        hp_after: apply_damage(defender_stats.hp, breakdown.total),
    })
}

/// Resolve a basic hit and apply it to the defender's hit points.
///
/// This is the main entry point for basic combat resolution. A defender that is
/// already defeated is left untouched and `None` is returned. Otherwise the
/// defender's `hp` is reduced by the computed damage and clamped at zero.
///
/// # Arguments
///
/// * `attacker_stats` - Snapshot of attacker's stats (read only)
/// * `defender_stats` - Snapshot of defender's stats (hp is updated in place)
/// * `tables` - Balance parameters oracle
pub fn resolve_basic_damage(
    attacker_stats: &StatsSnapshot,
    defender_stats: &mut StatsSnapshot,
    tables: &(impl TablesOracle + ?Sized),
) -> Option<DamageOutcome> {
    let outcome = preview_basic_damage(attacker_stats, defender_stats, tables)?;
    defender_stats.hp = outcome.hp_after;
    Some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tables;

    impl TablesOracle for Tables {
        fn hit_damage(&self) -> u32 {
            100
        }
    }

    #[test]
    fn overkill_clamps_defender_to_zero() {
        let attacker = StatsSnapshot::new(120, 0, 10);
        let mut defender = StatsSnapshot::new(0, 100, 50);

        let outcome = resolve_basic_damage(&attacker, &mut defender, &Tables).unwrap();

        assert_eq!(outcome.damage(), 120);
        assert_eq!(outcome.hp_lost(), 50);
        assert!(outcome.is_lethal());
        assert_eq!(defender.hp, 0);
    }

    #[test]
    fn reduced_hit_leaves_defender_standing() {
        let attacker = StatsSnapshot::new(80, 0, 10);
        let mut defender = StatsSnapshot::new(0, 100, 200);

        let outcome = resolve_basic_damage(&attacker, &mut defender, &Tables).unwrap();

        assert_eq!(outcome.damage(), 75);
        assert!(!outcome.is_lethal());
        assert_eq!(defender.hp, 125);
    }

    #[test]
    fn defeated_defender_is_untouched() {
        let attacker = StatsSnapshot::new(500, 0, 10);

        for hp in [0, -1, -250] {
            let mut defender = StatsSnapshot::new(0, 10, hp);
            assert_eq!(resolve_basic_damage(&attacker, &mut defender, &Tables), None);
            assert_eq!(defender.hp, hp);
        }
    }

    #[test]
    fn preview_does_not_mutate() {
        let attacker = StatsSnapshot::new(10, 0, 10);
        let defender = StatsSnapshot::new(0, 10, 300);

        let outcome = preview_basic_damage(&attacker, &defender, &Tables).unwrap();

        assert_eq!(outcome.hp_after, 200);
        assert_eq!(defender.hp, 300);
    }

    #[test]
    fn attacker_stats_are_not_modified() {
        let attacker = StatsSnapshot::new(40, 7, 9);
        let mut defender = StatsSnapshot::new(0, 20, 500);

        resolve_basic_damage(&attacker, &mut defender, &Tables);

        assert_eq!(attacker, StatsSnapshot::new(40, 7, 9));
    }
}
