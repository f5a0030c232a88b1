use super::entry::Entry;
use super::triad::Triad;
use crate::state::StateKey;
use std::collections::HashMap;

/// Capacity-bounded map from state keys to live triads.
///
/// Ages advance in lockstep: every [`tick`](Cache::tick) bumps every entry,
/// except on multiples of the quantum, where every age drops back to zero.
/// Accesses reset only the accessed entry. The cache never talks to storage;
/// it only names the entry that should go when room is needed.
#[derive(Debug, Clone)]
pub struct Cache {
    entries: HashMap<StateKey, Entry>,
    capacity: usize,
    quantum: u64,
    clock: u64,
    admitted: u64,
}

/// Snapshot of a cache's clock and ages.
#[derive(Debug, Clone, PartialEq)]
pub struct Aging {
    clock: u64,
    ages: Vec<(StateKey, u32)>,
}

impl Cache {
    pub fn new(capacity: usize, quantum: u64) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity.max(1)),
            capacity: capacity.max(1),
            quantum: quantum.max(1),
            clock: 0,
            admitted: 0,
        }
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn contains(&self, key: StateKey) -> bool {
        self.entries.contains_key(&key)
    }
    pub fn age(&self, key: StateKey) -> Option<u32> {
        self.entries.get(&key).map(|e| e.age)
    }
    /// Returns the live triad for `key`, resetting its age.
    pub fn touch(&mut self, key: StateKey) -> Option<&Triad> {
        self.entries.get_mut(&key).map(|entry| {
            entry.age = 0;
            &entry.triad
        })
    }
    /// Stores `triad` under `key` with age zero. An existing key keeps its
    /// admission order; a new key must fit.
    pub fn insert(&mut self, key: StateKey, triad: Triad) {
        match self.entries.get_mut(&key) {
            Some(entry) => {
                entry.triad = triad;
                entry.age = 0;
            }
            None => {
                debug_assert!(!self.is_full(), "insert into a full cache");
                self.entries.insert(key, Entry::new(triad, self.admitted));
                self.admitted += 1;
            }
        }
    }
    pub fn remove(&mut self, key: StateKey) -> Option<Entry> {
        self.entries.remove(&key)
    }
    /// The entry to evict: the strictly oldest, and among equally old
    /// entries the one admitted last.
    pub fn victim(&self) -> Option<(StateKey, &Entry)> {
        self.entries
            .iter()
            .max_by_key(|(_, entry)| entry.priority())
            .map(|(key, entry)| (*key, entry))
    }
    /// Advances the access clock and ages every entry.
    pub fn tick(&mut self) {
        self.clock += 1;
        let reset = self.clock % self.quantum == 0;
        for entry in self.entries.values_mut() {
            entry.age = match reset {
                true => 0,
                false => entry.age.saturating_add(1),
            };
        }
    }
    /// Live entries in admission order.
    pub fn entries(&self) -> Vec<(StateKey, &Entry)> {
        let mut entries = self
            .entries
            .iter()
            .map(|(key, entry)| (*key, entry))
            .collect::<Vec<_>>();
        entries.sort_by_key(|(_, entry)| entry.order);
        entries
    }
    /// The clock and every age, enough to undo ticks.
    pub fn aging(&self) -> Aging {
        Aging {
            clock: self.clock,
            ages: self.entries.iter().map(|(key, entry)| (*key, entry.age)).collect(),
        }
    }
    /// Puts the clock and ages back as they were in `aging`.
    pub fn restore(&mut self, aging: Aging) {
        self.clock = aging.clock;
        for (key, age) in aging.ages {
            if let Some(entry) = self.entries.get_mut(&key) {
                entry.age = age;
            }
        }
    }
    /// Drops every entry and restarts the clock.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.clock = 0;
        self.admitted = 0;
    }
}
