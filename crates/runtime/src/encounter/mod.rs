//! Stateful encounter driving the damage formula.
//!
//! An [`Encounter`] owns every combatant taking part in a fight. Strikes are
//! resolved through `&mut self`, so hits against the same defender are always
//! applied one after another.

mod log;

pub use log::{HitLog, StrikeReport};

use std::collections::BTreeMap;

use combat_core::{Combatant, CombatantId, GameError, TablesOracle, resolve_basic_damage};
use tracing::{debug, info, warn};

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::oracle::TablesOracleImpl;

/// A single fight between any number of combatants.
pub struct Encounter {
    combatants: BTreeMap<CombatantId, Combatant>,
    tables: Box<dyn TablesOracle>,
    log: HitLog,
    next_sequence: u64,
}

impl Encounter {
    /// Create an empty encounter using the balance values from `config`.
    pub fn new(config: &RuntimeConfig) -> Self {
        Self::with_tables(
            TablesOracleImpl::new(config.combat.clone()),
            config.log_capacity,
        )
    }

    /// Create an empty encounter with a custom tables oracle.
    pub fn with_tables(tables: impl TablesOracle + 'static, log_capacity: usize) -> Self {
        Self {
            combatants: BTreeMap::new(),
            tables: Box::new(tables),
            log: HitLog::new(log_capacity),
            next_sequence: 0,
        }
    }

    /// Add a combatant to the encounter.
    pub fn join(&mut self, combatant: Combatant) -> Result<()> {
        let id = combatant.id;
        if self.combatants.contains_key(&id) {
            return Err(rejected(RuntimeError::DuplicateCombatant(id)));
        }

        debug!(
            target: "combat.encounter",
            combatant = %id,
            name = %combatant.name,
            atk = combatant.stats().atk,
            def = combatant.stats().def,
            hp = combatant.stats().hp,
            "combatant joined"
        );
        self.combatants.insert(id, combatant);
        Ok(())
    }

    /// Remove a combatant and hand its stats back to the caller.
    pub fn leave(&mut self, id: CombatantId) -> Result<Combatant> {
        let combatant = self
            .combatants
            .remove(&id)
            .ok_or_else(|| rejected(RuntimeError::UnknownCombatant(id)))?;
        debug!(target: "combat.encounter", combatant = %id, "combatant left");
        Ok(combatant)
    }

    /// Resolve one hit from `attacker` against `defender`.
    ///
    /// A defender that is already defeated is left unchanged and the report
    /// carries no outcome. Every strike, including skipped ones, is recorded in
    /// the hit log.
    pub fn strike(&mut self, attacker: CombatantId, defender: CombatantId) -> Result<StrikeReport> {
        if attacker == defender {
            return Err(rejected(RuntimeError::SelfTarget(attacker)));
        }

        let attacker_stats = *self
            .combatants
            .get(&attacker)
            .ok_or_else(|| rejected(RuntimeError::UnknownCombatant(attacker)))?
            .stats();
        let target = self
            .combatants
            .get_mut(&defender)
            .ok_or_else(|| rejected(RuntimeError::UnknownCombatant(defender)))?;

        let outcome =
            resolve_basic_damage(&attacker_stats, target.stats_mut(), &*self.tables);

        let report = StrikeReport {
            sequence: self.next_sequence,
            attacker,
            defender,
            outcome,
        };
        self.next_sequence += 1;

        match outcome {
            Some(outcome) => {
                info!(
                    target: "combat.strike",
                    sequence = report.sequence,
                    attacker = %attacker,
                    defender = %defender,
                    damage = outcome.damage(),
                    hp_before = outcome.hp_before,
                    hp_after = outcome.hp_after,
                    "strike resolved"
                );
                if outcome.is_lethal() {
                    info!(target: "combat.encounter", combatant = %defender, "combatant defeated");
                }
            }
            None => debug!(
                target: "combat.strike",
                sequence = report.sequence,
                attacker = %attacker,
                defender = %defender,
                "defender already defeated, strike skipped"
            ),
        }

        self.log.push(report);
        Ok(report)
    }

    pub fn combatant(&self, id: CombatantId) -> Option<&Combatant> {
        self.combatants.get(&id)
    }

    /// Combatants that can still take damage, in id order.
    pub fn survivors(&self) -> impl Iterator<Item = &Combatant> {
        self.combatants.values().filter(|c| !c.is_defeated())
    }

    pub fn log(&self) -> &HitLog {
        &self.log
    }

    /// Total strikes attempted so far, including those evicted from the log.
    pub fn strikes_resolved(&self) -> u64 {
        self.next_sequence
    }
}

fn rejected(err: RuntimeError) -> RuntimeError {
    warn!(
        target: "combat.encounter",
        code = err.error_code(),
        severity = err.severity().as_str(),
        "{}",
        err
    );
    err
}

impl Default for Encounter {
    fn default() -> Self {
        Self::new(&RuntimeConfig::default())
    }
}
