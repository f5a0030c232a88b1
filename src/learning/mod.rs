//! Learning signals and the rules that consume them.
//!
//! - [`Record`] — Running win/draw/loss counts and chip-delta history
//! - [`risk`] and [`payout`] — Heuristic estimators over a state and action
//! - [`Reward`] — Stage-dependent reward for one transition
//! - [`Policy`] — Softmax over qvalues with the order-statistic sampler
//! - [`Update`] — Blends risk, payout, and a TD target into a new triad
mod payout;
mod policy;
mod record;
mod reward;
mod risk;
mod update;

pub use payout::*;
pub use policy::*;
pub use record::*;
pub use reward::*;
pub use risk::*;
pub use update::*;
