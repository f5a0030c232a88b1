//! Trainer Binary
//!
//! Plays blackjack sessions against the house, learning as it goes and
//! persisting what it learned to the configured store.
//!
//! Options: --rounds, --store, --config, --seed

use bqa::*;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Rounds to play before saving
    #[arg(short, long, default_value_t = 1000)]
    rounds: usize,
    /// SQLite path or postgres:// URL; overrides the config and DB_URL
    #[arg(short, long)]
    store: Option<String>,
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Seed for the deck and the agent
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    let config = match args.config {
        Some(ref path) => Config::read(path)?,
        None => Config::default(),
    }
    .from_env()?;
    let config = Config {
        store: args.store.unwrap_or(config.store),
        seed: args.seed.or(config.seed),
        ..config
    };
    log::info!("training {} rounds against {}", args.rounds, config.store);
    let store = store::open(&config.store)?;
    let mut game = game::Game::new(store, &config);
    let played = game.play(args.rounds);
    let saved = game.close();
    played?;
    saved?;
    println!("{}", game.summary());
    Ok(())
}
