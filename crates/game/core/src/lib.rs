//! Deterministic combat rules shared across the workspace.
//!
//! `combat-core` defines the canonical damage formula together with the stat
//! records it reads and writes. All functions are pure over their inputs: the
//! only mutation performed is the defender's hit points inside
//! [`combat::resolve_basic_damage`], and callers own the serialization of hits.
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod stats;

pub use combat::{
    DamageBreakdown, DamageModifier, DamageOutcome, Percentage, PercentageError, apply_damage,
    calculate_damage, preview_basic_damage, resolve_basic_damage,
};
pub use config::CombatConfig;
pub use env::TablesOracle;
pub use error::{ErrorSeverity, GameError};
pub use stats::{Combatant, CombatantId, StatKind, StatsError, StatsSnapshot};
