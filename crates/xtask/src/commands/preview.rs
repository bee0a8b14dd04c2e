//! Preview a single hit without setting up an encounter.

use anyhow::Result;
use clap::Parser;
use combat_core::{StatsSnapshot, preview_basic_damage};
use combat_runtime::{RuntimeConfig, TablesOracleImpl};
use console::style;

use crate::render;

/// Resolve a single hit from explicit stats
#[derive(Parser, Debug)]
pub struct Preview {
    /// Attacker's attack power
    #[arg(long, value_name = "ATK")]
    atk: u32,

    /// Defender's defense power
    #[arg(long, value_name = "DEF")]
    def: u32,

    /// Defender's current hit points
    #[arg(long, value_name = "HP", allow_negative_numbers = true)]
    hp: i64,

    /// Base hit damage (defaults to COMBAT_HIT_DAMAGE or 100)
    #[arg(long, value_name = "DAMAGE")]
    hit_damage: Option<u32>,
}

impl Preview {
    pub fn execute(self) -> Result<()> {
        let mut config = RuntimeConfig::from_env();
        if let Some(hit_damage) = self.hit_damage {
            config.combat.hit_damage = hit_damage;
        }
        let tables = TablesOracleImpl::new(config.combat);

        let attacker = StatsSnapshot::new(self.atk, 0, 1);
        let defender = StatsSnapshot::new(0, self.def, self.hp);

        println!(
            "{} atk {} vs def {}",
            style("Hit").cyan().bold(),
            self.atk,
            self.def
        );
        match preview_basic_damage(&attacker, &defender, &tables) {
            Some(outcome) => render::print_outcome(&outcome),
            None => println!(
                "  {}",
                style("defender already defeated, no damage applied").dim()
            ),
        }

        Ok(())
    }
}
