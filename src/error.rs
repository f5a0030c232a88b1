use crate::store::StoreError;
use thiserror::Error;

/// Errors surfaced by the cache, the estimators, and the agent.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The durable store failed or was already closed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The cache was used after its entries were saved and the store released.
    #[error("table used after save")]
    Closed,

    /// A game state or triad does not fit the stage it claims to be.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl Error {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }
    /// True for failures of the backing store that leave the cache usable in memory.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Store(StoreError::Io(_)))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
