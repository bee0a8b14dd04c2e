//! Encounter scenario definitions.

use combat_core::{Combatant, CombatantId, StatsError, StatsSnapshot};

/// Roster entry as written in content files.
///
/// Stats are kept as raw integers so malformed values surface as a
/// [`StatsError`] naming the stat instead of an opaque parse failure.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantSpec {
    pub id: u32,
    pub name: String,
    pub atk: i64,
    pub def: i64,
    pub hp: i64,
}

impl CombatantSpec {
    /// Validate the raw stats and build a combatant.
    pub fn into_combatant(self) -> Result<Combatant, StatsError> {
        let stats = StatsSnapshot::try_from_raw(self.atk, self.def, self.hp)?;
        Ok(Combatant::new(CombatantId(self.id), self.name, stats))
    }
}

/// One scripted hit: `attacker` strikes `defender`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrikeSpec {
    pub attacker: u32,
    pub defender: u32,
}

impl StrikeSpec {
    pub fn attacker(&self) -> CombatantId {
        CombatantId(self.attacker)
    }

    pub fn defender(&self) -> CombatantId {
        CombatantId(self.defender)
    }
}

/// A validated encounter: who fights, and the order of hits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    pub combatants: Vec<Combatant>,
    pub strikes: Vec<StrikeSpec>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::StatKind;

    #[test]
    fn spec_with_valid_stats_builds_combatant() {
        let spec = CombatantSpec {
            id: 3,
            name: "Goblin".into(),
            atk: 12,
            def: 8,
            hp: 40,
        };

        let combatant = spec.into_combatant().unwrap();

        assert_eq!(combatant.id, CombatantId(3));
        assert_eq!(*combatant.stats(), StatsSnapshot::new(12, 8, 40));
    }

    #[test]
    fn spec_with_negative_defense_is_rejected() {
        let spec = CombatantSpec {
            id: 1,
            name: "Broken".into(),
            atk: 1,
            def: -4,
            hp: 10,
        };

        assert_eq!(
            spec.into_combatant().unwrap_err(),
            StatsError::Negative {
                stat: StatKind::Def,
                value: -4
            }
        );
    }
}
