use super::state::GameState;
use super::state::InRound;
use super::state::PostRound;
use super::state::PreRound;
use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Lookup key for a game state.
///
/// Derived by feeding the stage tag and then each of the stage's fields, in
/// declaration order, into a deterministic hasher. Keys outlive the process
/// in the durable store, so the hasher must not be randomly seeded, and only
/// fixed-width writes are used. Stored keys stay valid only as long as the
/// `rustc-hash` version is pinned. The projection is lossy and cannot be
/// turned back into a state.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct StateKey(i64);

/// Writes a state's fields into a hasher in a fixed order.
trait Canonical {
    fn canonicalize(&self, hasher: &mut FxHasher);
}

impl Canonical for PreRound {
    fn canonicalize(&self, hasher: &mut FxHasher) {
        hasher.write_i64(self.wager());
    }
}

impl Canonical for InRound {
    fn canonicalize(&self, hasher: &mut FxHasher) {
        hasher.write_u8(u8::from(self.dealer()));
        hasher.write_u64(self.hand().len() as u64);
        self.hand()
            .cards()
            .iter()
            .for_each(|&card| hasher.write_u8(u8::from(card)));
    }
}

impl Canonical for PostRound {
    fn canonicalize(&self, hasher: &mut FxHasher) {
        hasher.write_u8(u8::from(self.outcome()));
        hasher.write_i64(self.delta());
    }
}

impl From<&GameState> for StateKey {
    fn from(state: &GameState) -> Self {
        let ref mut hasher = FxHasher::default();
        hasher.write_u8(u8::from(state.stage()));
        match state {
            GameState::Pre(s) => s.canonicalize(hasher),
            GameState::In(s) => s.canonicalize(hasher),
            GameState::Post(s) => s.canonicalize(hasher),
        }
        Self(hasher.finish() as i64)
    }
}

/// i64 isomorphism, the durable store's primary key
impl From<StateKey> for i64 {
    fn from(key: StateKey) -> i64 {
        key.0
    }
}
impl From<i64> for StateKey {
    fn from(n: i64) -> Self {
        Self(n)
    }
}

impl std::fmt::Display for StateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}
