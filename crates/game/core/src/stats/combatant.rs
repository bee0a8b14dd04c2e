use std::fmt;

use super::snapshot::StatsSnapshot;

/// Unique identifier for a combatant within an encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantId(pub u32);

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An entity taking part in combat. Owns exactly one [`StatsSnapshot`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub id: CombatantId,
    pub name: String,
    stats: StatsSnapshot,
}

impl Combatant {
    pub fn new(id: CombatantId, name: impl Into<String>, stats: StatsSnapshot) -> Self {
        Self {
            id,
            name: name.into(),
            stats,
        }
    }

    pub fn stats(&self) -> &StatsSnapshot {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut StatsSnapshot {
        &mut self.stats
    }

    /// A defeated combatant ignores further hits.
    pub fn is_defeated(&self) -> bool {
        !self.stats.is_alive()
    }
}

impl fmt::Display for Combatant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.id)
    }
}
