//! Encounter scenario loader.
//!
//! Loads a roster and a strike script from a single RON file.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, bail};

use crate::loaders::{LoadResult, read_file};
use crate::scenario::{CombatantSpec, Scenario, StrikeSpec};

/// On-disk layout of a scenario file.
#[derive(serde::Deserialize)]
struct ScenarioFile {
    combatants: Vec<CombatantSpec>,
    #[serde(default)]
    strikes: Vec<StrikeSpec>,
}

/// Loader for encounter scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file.
    ///
    /// RON format:
    ///
    /// ```text
    /// (
    ///     combatants: [
    ///         (id: 0, name: "Knight", atk: 120, def: 100, hp: 300),
    ///         (id: 1, name: "Goblin", atk: 80, def: 100, hp: 200),
    ///     ],
    ///     strikes: [
    ///         (attacker: 0, defender: 1),
    ///     ],
    /// )
    /// ```
    ///
    /// # Validation
    ///
    /// - Every combatant's stats must pass `StatsSnapshot::try_from_raw`
    /// - Combatant ids must be unique
    /// - Every strike must reference known combatants
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Invalid scenario {}", path.display()))
    }

    /// Parse and validate a scenario from RON text.
    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let raw: ScenarioFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        let mut ids = BTreeSet::new();
        let mut combatants = Vec::with_capacity(raw.combatants.len());
        for spec in raw.combatants {
            if !ids.insert(spec.id) {
                bail!("Duplicate combatant id {}", spec.id);
            }
            let name = spec.name.clone();
            let combatant = spec
                .into_combatant()
                .with_context(|| format!("Invalid stats for combatant '{}'", name))?;
            combatants.push(combatant);
        }

        for (index, strike) in raw.strikes.iter().enumerate() {
            for id in [strike.attacker, strike.defender] {
                if !ids.contains(&id) {
                    bail!("Strike {} references unknown combatant {}", index, id);
                }
            }
        }

        Ok(Scenario {
            combatants,
            strikes: raw.strikes,
        })
    }
}
