//! The learning agent the game loop talks to.
mod agent;
mod wager;

pub use agent::*;
pub use wager::*;
