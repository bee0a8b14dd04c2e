//! Data-driven combat content and loaders.
//!
//! This crate houses encounter definitions and provides loaders for RON/TOML data files:
//! - Combat configuration (data-driven via TOML)
//! - Encounter scenarios: roster and strike script (data-driven via RON)
//!
//! Content is consumed by the runtime and developer tools; the combat rules in
//! `combat-core` never read files themselves.

pub mod scenario;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use scenario::{CombatantSpec, Scenario, StrikeSpec};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, ScenarioLoader};
