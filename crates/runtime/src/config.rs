//! Runtime configuration structures and loaders.
use std::env;

use combat_core::CombatConfig;

/// Configuration required to run an encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub combat: CombatConfig,
    /// Number of strike reports retained by the hit log.
    pub log_capacity: usize,
}

impl RuntimeConfig {
    pub const DEFAULT_LOG_CAPACITY: usize = 64;

    pub const fn new(combat: CombatConfig, log_capacity: usize) -> Self {
        Self {
            combat,
            log_capacity,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `COMBAT_HIT_DAMAGE` - Base damage of a plain hit (default: 100)
    /// - `COMBAT_LOG_CAPACITY` - Strike reports kept in the hit log (default: 64)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Construct configuration from an arbitrary variable lookup.
    ///
    /// Unset or unparsable values keep their defaults.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(hit_damage) = read_var::<u32>(&lookup, "COMBAT_HIT_DAMAGE") {
            config.combat.hit_damage = hit_damage;
        }

        if let Some(capacity) = read_var::<usize>(&lookup, "COMBAT_LOG_CAPACITY") {
            config.log_capacity = capacity.max(1);
        }

        config
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new(CombatConfig::default(), Self::DEFAULT_LOG_CAPACITY)
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(RuntimeConfig::from_vars(lookup(&[])), RuntimeConfig::default());
    }

    #[test]
    fn reads_hit_damage_and_capacity() {
        let config = RuntimeConfig::from_vars(lookup(&[
            ("COMBAT_HIT_DAMAGE", "250"),
            ("COMBAT_LOG_CAPACITY", "8"),
        ]));

        assert_eq!(config.combat.hit_damage, 250);
        assert_eq!(config.log_capacity, 8);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let config = RuntimeConfig::from_vars(lookup(&[("COMBAT_LOG_CAPACITY", "0")]));
        assert_eq!(config.log_capacity, 1);
    }

    #[test]
    fn unparsable_values_are_ignored() {
        let config = RuntimeConfig::from_vars(lookup(&[("COMBAT_HIT_DAMAGE", "-3")]));
        assert_eq!(config.combat.hit_damage, CombatConfig::DEFAULT_HIT_DAMAGE);
    }
}
