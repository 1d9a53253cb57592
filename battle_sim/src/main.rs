//! Headless battle runner.
//!
//! Builds a roster, runs one battle pass, and prints the event log followed by
//! every entity's final state.

use std::path::PathBuf;

use anyhow::{Context, Result};
use battle_sim::{Battle, BattleEvent, Roster, SimConfig};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Run one battle pass and print what happened
#[derive(Parser, Debug)]
#[command(name = "battle_sim")]
#[command(about = "Run one battle pass over a roster and print the event log")]
struct Args {
    /// Simulation config (TOML). Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Roster file (TOML). The stock party is used when omitted.
    #[arg(long)]
    roster: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("battle_sim=info")),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SimConfig::default(),
    };
    let roster = match &args.roster {
        Some(path) => Roster::load(path)
            .with_context(|| format!("loading roster from {}", path.display()))?,
        None => Roster::demo(),
    };

    let mut entities = roster.into_entities(&config)?;

    let mut log: Vec<BattleEvent> = Vec::new();
    Battle::new(config.battle).run(&mut entities, &mut log)?;

    println!("=== Battle Simulation ===");
    for event in &log {
        println!("{}", event);
    }

    println!("\n=== After Battle ===");
    for entity in &entities {
        println!("{}", entity);
    }

    Ok(())
}
