//! Tables oracle implementation for runtime.

use combat_core::{CombatConfig, TablesOracle};

/// Runtime implementation of TablesOracle that wraps CombatConfig.
#[derive(Debug, Clone, Default)]
pub struct TablesOracleImpl {
    config: CombatConfig,
}

impl TablesOracleImpl {
    pub fn new(config: CombatConfig) -> Self {
        Self { config }
    }
}

impl TablesOracle for TablesOracleImpl {
    fn hit_damage(&self) -> u32 {
        self.config.hit_damage
    }
}
