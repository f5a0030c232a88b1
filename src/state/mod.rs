//! Game stages, actions, and the per-stage state records the agent observes.
//!
//! - [`Stage`] — Betting, playing, or settling
//! - [`Action`] — Decisions (and settlements) available at each stage
//! - [`Outcome`] — How a settled round ended
//! - [`GameState`] — One of [`PreRound`], [`InRound`], [`PostRound`]
//! - [`StateKey`] — Deterministic lookup key derived from a state
mod action;
mod key;
mod outcome;
mod stage;
mod state;

pub use action::*;
pub use key::*;
pub use outcome::*;
pub use stage::*;
pub use state::*;
