use crate::*;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;

/// Tunable parameters of the cache, the learner, and the store.
///
/// Every field has a default, so a JSON file only needs to name the
/// options it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum live entries in memory.
    pub capacity: usize,
    /// Access ticks between synchronized age resets.
    pub quantum: u64,
    /// Risk blend factor for weights.
    pub alpha: Utility,
    /// Payout blend factor for biases.
    pub beta: Utility,
    /// Step size toward the temporal-difference target.
    pub learning_rate: Utility,
    /// Weight of the successor qvalue.
    pub discount: Utility,
    /// Softmax temperature for action sampling.
    pub temperature: Utility,
    /// SQLite path or `postgres://` URL.
    pub store: String,
    /// Reward scale for settled rounds.
    pub settle_bonus: Utility,
    /// Reward scale for reaching a live hand.
    pub advance_bonus: Utility,
    /// Reward scale for returning to the betting stage.
    pub round_bonus: Utility,
    /// Fixed payout used by the in-round payout estimate.
    pub payout: Utility,
    /// Size wagers from the normalized chip delta instead of the flat default.
    pub adaptive_wagers: bool,
    /// Seed for every random draw of the session.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: CACHE_CAPACITY,
            quantum: AGING_QUANTUM,
            alpha: ALPHA,
            beta: BETA,
            learning_rate: LEARNING_RATE,
            discount: DISCOUNT,
            temperature: TEMPERATURE,
            store: STORE_LOCATION.to_string(),
            settle_bonus: SETTLE_BONUS,
            advance_bonus: ADVANCE_BONUS,
            round_bonus: ROUND_BONUS,
            payout: PAYOUT,
            adaptive_wagers: false,
            seed: None,
        }
    }
}

impl Config {
    /// Reads and checks a JSON config file.
    pub fn read(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = serde_json::from_str::<Self>(&text)?;
        config.check()?;
        Ok(config)
    }
    /// Overlays `DB_URL` (store location) and `BQA_SEED` from the environment.
    pub fn from_env(self) -> Result<Self> {
        let store = std::env::var("DB_URL").unwrap_or(self.store);
        let seed = std::env::var("BQA_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .or(self.seed);
        let config = Self { store, seed, ..self };
        config.check()?;
        Ok(config)
    }
    /// Rejects values the cache or the learner cannot run with.
    pub fn check(&self) -> Result<()> {
        let rates = [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("learning_rate", self.learning_rate),
            ("discount", self.discount),
        ];
        if self.capacity == 0 {
            return Err(Error::invalid("capacity must be at least 1"));
        }
        if self.quantum == 0 {
            return Err(Error::invalid("quantum must be at least 1"));
        }
        if !(self.temperature.is_finite() && self.temperature > 0.0) {
            return Err(Error::invalid(format!(
                "temperature must be positive, got {}",
                self.temperature
            )));
        }
        match rates.iter().find(|(_, r)| !(0.0..=1.0).contains(r)) {
            Some((name, r)) => Err(Error::invalid(format!("{} must be in [0, 1], got {}", name, r))),
            None => Ok(()),
        }
    }
}
