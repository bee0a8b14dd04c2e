//! StatsSnapshot - attack, defense and hit points at a point in time.

use super::error::StatsError;

/// Identifies one field of a [`StatsSnapshot`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatKind {
    /// Attack power.
    Atk,
    /// Defense power.
    Def,
    /// Current hit points.
    Hp,
}

/// Stats consulted and mutated by damage resolution.
///
/// The record itself does not enforce `hp >= 0`; a freshly loaded snapshot may
/// carry a zero or negative value. Damage resolution never leaves `hp` below
/// zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatsSnapshot {
    /// Attack power.
    pub atk: u32,
    /// Defense power.
    pub def: u32,
    /// Current hit points.
    pub hp: i64,
}

impl StatsSnapshot {
    pub const fn new(atk: u32, def: u32, hp: i64) -> Self {
        Self { atk, def, hp }
    }

    /// Build a snapshot from untyped numbers, rejecting malformed stats.
    ///
    /// Attack and defense must fit in `0..=u32::MAX`. Hit points are accepted
    /// as-is since a defeated combatant may legitimately carry `hp <= 0`.
    pub fn try_from_raw(atk: i64, def: i64, hp: i64) -> Result<Self, StatsError> {
        Ok(Self {
            atk: checked_stat(StatKind::Atk, atk)?,
            def: checked_stat(StatKind::Def, def)?,
            hp,
        })
    }

    /// Check if the combatant can still take damage (HP > 0).
    pub const fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

fn checked_stat(stat: StatKind, value: i64) -> Result<u32, StatsError> {
    if value < 0 {
        return Err(StatsError::Negative { stat, value });
    }
    u32::try_from(value).map_err(|_| StatsError::OutOfRange {
        stat,
        value,
        max: u32::MAX,
    })
}
