//! Durable storage for learned triads.
//!
//! A single table keyed by [`StateKey`] with the weights, biases, and
//! qvalues of each state stored as JSON-encoded text. Every write is
//! committed before it returns; nothing is batched behind the cache's back.
//!
//! - [`Store`] — Read, upsert, and release interface the cache depends on
//! - [`Sqlite`] — File-backed (or `:memory:`) SQLite store
//! - [`Postgres`] — PostgreSQL store, behind the `database` feature
mod error;
#[cfg(feature = "database")]
mod postgres;
mod sqlite;

pub use error::*;
#[cfg(feature = "database")]
pub use postgres::*;
pub use sqlite::*;

use crate::state::StateKey;
use crate::table::Triad;

/// Table holding one row per persisted state.
#[rustfmt::skip]
pub const QTABLE: &str = "qtable";

/// Key → triad persistence used by the cache on misses, evictions, and shutdown.
pub trait Store {
    /// Loads the triad stored under `key`, if any.
    fn read(&mut self, key: StateKey) -> Result<Option<Triad>, StoreError>;
    /// Inserts or overwrites the triad stored under `key`.
    fn write(&mut self, key: StateKey, triad: &Triad) -> Result<(), StoreError>;
    /// Releases the underlying handle. Later calls fail with [`StoreError::Closed`].
    fn close(&mut self) -> Result<(), StoreError>;
}

impl<S> Store for Box<S>
where
    S: Store + ?Sized,
{
    fn read(&mut self, key: StateKey) -> Result<Option<Triad>, StoreError> {
        self.as_mut().read(key)
    }
    fn write(&mut self, key: StateKey, triad: &Triad) -> Result<(), StoreError> {
        self.as_mut().write(key, triad)
    }
    fn close(&mut self) -> Result<(), StoreError> {
        self.as_mut().close()
    }
}

/// Opens the store named by `location`.
///
/// `postgres://` and `postgresql://` URLs select PostgreSQL (feature
/// `database`); anything else is treated as a SQLite path.
pub fn open(location: &str) -> Result<Box<dyn Store>, StoreError> {
    log::debug!("opening store at {}", location);
    if location.starts_with("postgres://") || location.starts_with("postgresql://") {
        #[cfg(feature = "database")]
        return Ok(Box::new(Postgres::connect(location)?));
        #[cfg(not(feature = "database"))]
        return Err(StoreError::Io(format!(
            "{} requires the database feature",
            location
        )));
    }
    Ok(Box::new(Sqlite::open(location)?))
}

/// JSON text columns for one triad.
fn encode(triad: &Triad) -> Result<[String; 3], StoreError> {
    Ok([
        serde_json::to_string(triad.weights())?,
        serde_json::to_string(triad.biases())?,
        serde_json::to_string(triad.qvalues())?,
    ])
}

/// Triad from its JSON text columns.
fn decode(weights: &str, biases: &str, qvalues: &str) -> Result<Triad, StoreError> {
    Triad::try_from((
        serde_json::from_str::<Vec<f64>>(weights)?,
        serde_json::from_str::<Vec<f64>>(biases)?,
        serde_json::from_str::<Vec<f64>>(qvalues)?,
    ))
    .map_err(|e| StoreError::Io(e.to_string()))
}
