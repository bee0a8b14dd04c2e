/// Combat configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Damage dealt by a plain hit between evenly matched combatants.
    /// Every bonus and reduction is a percentage of this value.
    pub hit_damage: u32,
}

impl CombatConfig {
    // ===== compile-time constants =====
    /// Upper bound for both the bonus and the reduction percentage.
    /// A hit never doubles, and never drops to nothing.
    pub const MAX_PERCENT: u64 = 99;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_HIT_DAMAGE: u32 = 100;

    pub fn new() -> Self {
        Self {
            hit_damage: Self::DEFAULT_HIT_DAMAGE,
        }
    }

    pub fn with_hit_damage(hit_damage: u32) -> Self {
        Self { hit_damage }
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}
