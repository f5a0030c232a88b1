//! The bounded triad cache.
//!
//! Two layers joined by a load-on-miss, flush-on-evict protocol:
//!
//! - [`Cache`] — Pure in-memory map with synchronized aging and eviction choice
//! - [`Table`] — Owns a [`Cache`] and a [`Store`](crate::store::Store), moving
//!   triads between them
//!
//! plus the values they hold:
//!
//! - [`Triad`] — Weights, biases, and qvalues, one slot per action
//! - [`Entry`] — A live triad with its age and insertion order
mod cache;
mod entry;
mod table;
mod triad;

pub use cache::*;
pub use entry::*;
pub use table::*;
pub use triad::*;
