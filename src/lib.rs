//! Blackjack agent with an adaptive decision cache.
//!
//! The agent learns a betting and play policy through a temporal-difference
//! style update rule. Per-state parameters live in a bounded, aging cache
//! that loads from and flushes to a durable store.
//!
//! ## Modules
//!
//! - [`cards`] — Cards, decks, hand values, and the unknown-card universe
//! - [`state`] — Game stages, actions, per-stage states, and lookup keys
//! - [`store`] — Durable store adapters (SQLite, PostgreSQL)
//! - [`table`] — The bounded triad cache and its eviction policy
//! - [`learning`] — Risk/payout estimators, softmax policy, update rule
//! - [`agent`] — The learning agent exposed to the game loop
//! - [`game`] — Chip accounts and the round-by-round orchestrator

pub mod agent;
pub mod cards;
pub mod config;
pub mod error;
pub mod game;
pub mod learning;
pub mod state;
pub mod store;
pub mod table;

pub use config::Config;
pub use error::Error;
pub use error::Result;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Wagers, balances, and chip deltas.
pub type Chips = i64;
/// Softmax outputs, risk scores, and sampled thresholds.
pub type Probability = f64;
/// Weights, biases, qvalues, rewards, and payouts.
pub type Utility = f64;

// ============================================================================
// CACHE PARAMETERS
// ============================================================================
/// Maximum number of live entries held in memory.
pub const CACHE_CAPACITY: usize = 64;
/// Accesses between synchronized age resets.
pub const AGING_QUANTUM: u64 = 32;
/// Default location of the durable store.
pub const STORE_LOCATION: &str = "table.db";

// ============================================================================
// LEARNING PARAMETERS
// ============================================================================
/// Blend factor for the risk estimate into the weight.
pub const ALPHA: Utility = 0.05;
/// Blend factor for the payout estimate into the bias.
pub const BETA: Utility = 0.05;
/// Step size of the temporal-difference target.
pub const LEARNING_RATE: Utility = 0.05;
/// Discount applied to the successor qvalue.
pub const DISCOUNT: Utility = 0.05;
/// Softmax temperature. Lower is greedier.
pub const TEMPERATURE: Utility = 0.05;

// ============================================================================
// REWARD SHAPING
// ============================================================================
/// Reward scale when the successor is a settled round.
pub const SETTLE_BONUS: Utility = 250.0;
/// Reward scale when the successor is a live hand.
pub const ADVANCE_BONUS: Utility = 500.0;
/// Reward scale when the successor is the next betting stage.
pub const ROUND_BONUS: Utility = 100.0;
/// Fixed payout used by the in-round payout estimate.
pub const PAYOUT: Utility = 200.0;

// ============================================================================
// TABLE RULES
// ============================================================================
/// Allowed wager sizes, smallest first.
pub const WAGERS: [Chips; 4] = [10, 20, 50, 100];
/// Starting balance of the agent.
pub const AGENT_CHIPS: Chips = 500;
/// Starting balance of the house.
pub const DEALER_CHIPS: Chips = 2000;
/// Dealer keeps drawing while below this total.
pub const DEALER_STANDS: u8 = 16;
/// Blackjack.
pub const TWENTY_ONE: u8 = 21;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
