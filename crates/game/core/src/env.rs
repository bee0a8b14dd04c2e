//! Read-only oracles the combat rules consult for balance values.

/// Oracle providing combat balance tables.
///
/// This oracle defines tunable numbers like the base hit damage. It does NOT
/// hold combatant data; stats always arrive as explicit arguments.
pub trait TablesOracle: Send + Sync {
    /// Damage of a plain hit, before any attack/defense differential.
    fn hit_damage(&self) -> u32;
}
