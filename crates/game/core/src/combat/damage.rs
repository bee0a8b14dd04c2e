//! Damage calculation and application.

use core::cmp::Ordering;

use crate::env::TablesOracle;
use crate::stats::StatsSnapshot;

use super::percent::Percentage;

// ============================================================================
// Damage Modifier
// ============================================================================

/// How the attack/defense differential changed the base hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DamageModifier {
    /// Attack equals defense; the base hit lands unchanged.
    None,
    /// Attack exceeds defense.
    Bonus {
        /// Excess relative to the defender's defense, capped at 99 %.
        percent: Percentage,
        /// Damage added on top of the base hit (rounded up).
        amount: u64,
    },
    /// Defense exceeds attack.
    Reduction {
        /// Shortfall relative to the attacker's attack, capped at 99 %.
        percent: Percentage,
        /// Damage removed from the base hit (rounded down).
        amount: u64,
    },
}

/// Full breakdown of one hit before it is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DamageBreakdown {
    /// Base hit damage from the balance tables.
    pub base: u32,
    /// Adjustment derived from the attack/defense differential.
    pub modifier: DamageModifier,
    /// Final damage to subtract from the defender's hit points.
    pub total: u64,
}

// ============================================================================
// Damage Calculation
// ============================================================================

/// Calculate damage from an attack.
///
/// # Formula
///
/// ```text
/// diff = atk - def
///
/// if diff > 0:
///     p = min(diff * 100 / def, 99)       (99 when diff >= def or def == 0)
///     damage = base + ceil(p * base / 100)
/// if diff < 0:
///     p = min(-diff * 100 / atk, 99)      (99 when -diff >= atk or atk == 0)
///     damage = base - floor(p * base / 100)
/// if diff == 0:
///     damage = base
/// ```
///
/// The base hit is provided by [`TablesOracle::hit_damage`].
///
/// # Arguments
///
/// * `attacker_stats` - Attacker's stats snapshot
/// * `defender_stats` - Defender's stats snapshot
/// * `tables` - Balance parameters oracle
pub fn calculate_damage(
    attacker_stats: &StatsSnapshot,
    defender_stats: &StatsSnapshot,
    tables: &(impl TablesOracle + ?Sized),
) -> DamageBreakdown {
    let base = tables.hit_damage();
    let atk = attacker_stats.atk;
    let def = defender_stats.def;

    let modifier = match atk.cmp(&def) {
        Ordering::Greater => {
            let percent = Percentage::of_excess(atk - def, def);
            DamageModifier::Bonus {
                percent,
                amount: percent.scale_ceil(base),
            }
        }
        Ordering::Less => {
            let percent = Percentage::of_excess(def - atk, atk);
            DamageModifier::Reduction {
                percent,
                amount: percent.scale_floor(base),
            }
        }
        Ordering::Equal => DamageModifier::None,
    };

    let total = match modifier {
        DamageModifier::None => u64::from(base),
        DamageModifier::Bonus { amount, .. } => u64::from(base) + amount,
        DamageModifier::Reduction { amount, .. } => u64::from(base) - amount,
    };

    DamageBreakdown {
        base,
        modifier,
        total,
    }
}

/// Apply damage to current HP.
///
/// # Returns
///
/// New HP value (clamped to 0)
pub fn apply_damage(current_hp: i64, damage: u64) -> i64 {
    let damage = i64::try_from(damage).unwrap_or(i64::MAX);
    current_hp.saturating_sub(damage).max(0)
}
