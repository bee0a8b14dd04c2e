//! Stat records read and written by damage resolution.
//!
//! A [`StatsSnapshot`] carries the three numbers the formula cares about:
//! attack, defense, and current hit points. Attack and defense are
//! non-negative by type; hit points may arrive in any state from an external
//! store and only the resolver guarantees they end at zero or above.
//!
//! [`Combatant`] pairs a snapshot with an identity. The combatant owns its
//! stats exclusively for the duration of an encounter.

pub mod combatant;
pub mod error;
pub mod snapshot;

pub use combatant::{Combatant, CombatantId};
pub use error::StatsError;
pub use snapshot::{StatKind, StatsSnapshot};
