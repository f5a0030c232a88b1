//! Chip accounts, showdowns, and the round-by-round game loop.
mod account;
mod game;
mod showdown;
mod summary;

pub use account::*;
pub use game::*;
pub use showdown::*;
pub use summary::*;
