//! Run a scenario file through an encounter.
//!
//! Loads a RON scenario (roster + strike script), optionally a TOML combat
//! config, and resolves every strike in order.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use combat_content::{ConfigLoader, ScenarioLoader};
use combat_runtime::{Encounter, RuntimeConfig};
use console::style;

use crate::render;

/// Run a scenario file through an encounter
#[derive(Parser, Debug)]
pub struct Simulate {
    /// Scenario file (RON)
    #[arg(value_name = "SCENARIO")]
    scenario: PathBuf,

    /// Combat config file (TOML); overrides COMBAT_HIT_DAMAGE
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum OutputFormat {
    /// Human-readable strike by strike summary
    Summary,
    /// Strike reports as JSON
    Json,
}

impl Simulate {
    pub fn execute(self) -> Result<()> {
        let mut config = RuntimeConfig::from_env();
        if let Some(path) = &self.config {
            config.combat = ConfigLoader::load(path)?;
        }

        let scenario = ScenarioLoader::load(&self.scenario)?;

        let mut encounter = Encounter::new(&config);
        for combatant in scenario.combatants {
            encounter.join(combatant)?;
        }

        let mut reports = Vec::with_capacity(scenario.strikes.len());
        for (index, strike) in scenario.strikes.iter().enumerate() {
            let report = encounter
                .strike(strike.attacker(), strike.defender())
                .with_context(|| format!("Strike {} failed", index))?;
            reports.push(report);
        }

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            }
            OutputFormat::Summary => {
                println!(
                    "{} {} (hit damage {})",
                    style("Scenario").cyan().bold(),
                    self.scenario.display(),
                    config.combat.hit_damage
                );
                for report in &reports {
                    let name = |id| {
                        encounter
                            .combatant(id)
                            .map(|c| c.to_string())
                            .unwrap_or_else(|| id.to_string())
                    };
                    println!(
                        "\n[{}] {} → {}",
                        report.sequence,
                        style(name(report.attacker)).bold(),
                        style(name(report.defender)).bold()
                    );
                    match &report.outcome {
                        Some(outcome) => render::print_outcome(outcome),
                        None => println!("  {}", style("target already defeated").dim()),
                    }
                }

                println!("\n{}", style("Survivors").cyan().bold());
                let mut any = false;
                for combatant in encounter.survivors() {
                    any = true;
                    println!("  {} hp {}", combatant, combatant.stats().hp);
                }
                if !any {
                    println!("  {}", style("none").dim());
                }
            }
        }

        Ok(())
    }
}
