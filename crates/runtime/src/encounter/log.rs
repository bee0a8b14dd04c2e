//! Bounded record of resolved strikes.

use std::collections::VecDeque;

use combat_core::{CombatantId, DamageOutcome};

/// One strike as seen by the encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct StrikeReport {
    /// Position of this strike in the encounter, starting at 0.
    pub sequence: u64,
    pub attacker: CombatantId,
    pub defender: CombatantId,
    /// `None` when the defender was already defeated and nothing happened.
    pub outcome: Option<DamageOutcome>,
}

impl StrikeReport {
    /// Returns true if this strike took the defender to zero HP.
    pub fn defeated_defender(&self) -> bool {
        self.outcome.is_some_and(|outcome| outcome.is_lethal())
    }
}

/// Ring buffer of the most recent strike reports.
///
/// Once `capacity` reports are stored, each new report evicts the oldest.
#[derive(Clone, Debug)]
pub struct HitLog {
    entries: VecDeque<StrikeReport>,
    capacity: usize,
}

impl HitLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, report: StrikeReport) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(report);
    }

    /// Reports from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &StrikeReport> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&StrikeReport> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
