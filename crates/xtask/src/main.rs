//! Development tasks for the combat workspace
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod render;

use anyhow::Result;
use clap::Parser;
use commands::{Preview, Simulate};

/// Development tasks for the combat workspace
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for combat balancing", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Resolve a single hit from explicit stats
    Preview(Preview),

    /// Run a scenario file through an encounter
    Simulate(Simulate),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for COMBAT_HIT_DAMAGE and other env vars)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Preview(cmd) => cmd.execute(),
        Command::Simulate(cmd) => cmd.execute(),
    }
}
