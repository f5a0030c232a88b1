use super::triad::Triad;

/// A live triad in the cache.
///
/// `age` counts aging sweeps since the last access and `order` records when
/// the key was first admitted, which breaks eviction ties.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub triad: Triad,
    pub age: u32,
    pub order: u64,
}

impl Entry {
    pub fn new(triad: Triad, order: u64) -> Self {
        Self {
            triad,
            age: 0,
            order,
        }
    }
    /// Eviction priority: oldest first, later admissions first among equals.
    pub fn priority(&self) -> (u32, u64) {
        (self.age, self.order)
    }
}
