//! Encounter orchestration for the combat rules.
//!
//! This crate wires the pure damage formula from `combat-core` into a stateful
//! [`Encounter`] that owns its combatants and resolves strikes one at a time.
//! Consumers build a [`RuntimeConfig`] (usually via [`RuntimeConfig::from_env`]),
//! start an encounter from it, and read back [`StrikeReport`]s.
//!
//! Modules are organized by responsibility:
//! - [`encounter`] hosts the encounter and its bounded hit log
//! - [`oracle`] adapts configuration into the oracles `combat-core` consults
//! - [`config`] and [`error`] hold runtime configuration and failures
pub mod config;
pub mod encounter;
pub mod error;
pub mod oracle;

pub use config::RuntimeConfig;
pub use encounter::{Encounter, HitLog, StrikeReport};
pub use error::{Result, RuntimeError};
pub use oracle::TablesOracleImpl;
