//! Combat resolution system.
//!
//! This module provides pure functions for resolving combat interactions.
//! All combat logic is deterministic; the only side effect is the defender's
//! hit points in [`resolve_basic_damage`].
//!
//! # Architecture
//!
//! - **Percentages**: exact fractions, capped at 99 %, never divide by zero
//! - **Stats-based**: uses [`crate::StatsSnapshot`] for all calculations
//! - **Table-driven**: the base hit comes from [`crate::TablesOracle`]
//!
//! # Core Functions
//!
//! - `resolve_basic_damage`: Complete hit resolution (guard + damage + clamp)
//! - `preview_basic_damage`: Same as above without mutating the defender
//! - `calculate_damage`: Damage calculation with attack/defense differential
//! - `apply_damage`: HP reduction (clamped to 0)

pub mod damage;
pub mod percent;
pub mod result;

pub use damage::{DamageBreakdown, DamageModifier, apply_damage, calculate_damage};
pub use percent::{Percentage, PercentageError};
pub use result::{DamageOutcome, preview_basic_damage, resolve_basic_damage};
