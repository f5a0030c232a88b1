use super::cache::Cache;
use super::triad::Triad;
use crate::Error;
use crate::Result;
use crate::state::Stage;
use crate::state::StateKey;
use crate::store::Store;

/// Bounded triad cache over a durable store.
///
/// Misses load from the store, or seed a fresh triad when the store has
/// nothing either. Admitting a new key into a full cache first writes the
/// victim to the store and only then drops it from memory. Every `get` and
/// `put` counts as one access tick, and one that fails leaves entries, ages
/// and the clock exactly as they were.
pub struct Table<S>
where
    S: Store,
{
    cache: Cache,
    store: Option<S>,
}

impl<S> Table<S>
where
    S: Store,
{
    pub fn new(store: S, capacity: usize, quantum: u64) -> Self {
        Self {
            cache: Cache::new(capacity, quantum),
            store: Some(store),
        }
    }
    pub fn len(&self) -> usize {
        self.cache.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
    pub fn capacity(&self) -> usize {
        self.cache.capacity()
    }
    pub fn is_closed(&self) -> bool {
        self.store.is_none()
    }
    /// Whether `key` is live in memory. Does not count as an access.
    pub fn contains(&self, key: StateKey) -> bool {
        self.cache.contains(key)
    }
    /// Age of a live entry. Does not count as an access.
    pub fn age(&self, key: StateKey) -> Option<u32> {
        self.cache.age(key)
    }

    /// Returns the triad for `key`, loading or seeding it on a miss.
    ///
    /// `init` is only called when neither memory nor the store know `key`.
    pub fn get<F>(&mut self, key: StateKey, stage: Stage, init: F) -> Result<Triad>
    where
        F: FnOnce(Stage) -> Triad,
    {
        self.ensure_open()?;
        self.access(|table| table.fetch(key, stage, init))
    }

    /// Stores `triad` under `key` with its age reset.
    pub fn put(&mut self, key: StateKey, triad: Triad) -> Result<()> {
        self.ensure_open()?;
        self.access(|table| table.admit(key, triad))
    }

    /// Runs one aging sweep without accessing anything.
    pub fn tick(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.cache.tick();
        Ok(())
    }

    /// Writes every live entry to the store, then releases it.
    ///
    /// If a write fails the table stays open so the caller may retry or keep
    /// going in memory. Once the store is released every operation fails with
    /// [`Error::Closed`].
    pub fn save(&mut self) -> Result<()> {
        self.ensure_open()?;
        let entries = self
            .cache
            .entries()
            .into_iter()
            .map(|(key, entry)| (key, entry.triad.clone()))
            .collect::<Vec<_>>();
        let store = self.store_mut()?;
        for (key, triad) in entries.iter() {
            store.write(*key, triad)?;
        }
        if let Some(mut store) = self.store.take() {
            store.close()?;
        }
        log::info!("saved {} entries", entries.len());
        Ok(())
    }

    /// Switches to another store. The old store is released without flushing
    /// and every live entry is dropped, even when releasing it fails.
    pub fn load(&mut self, store: S) -> Result<()> {
        self.cache.clear();
        match self.store.replace(store) {
            Some(mut old) => Ok(old.close()?),
            None => Ok(()),
        }
    }

    /// Ticks, then runs `op`. A failed `op` leaves the clock and ages as they were.
    fn access<T, F>(&mut self, op: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        let aging = self.cache.aging();
        self.cache.tick();
        op(self).inspect_err(|_| self.cache.restore(aging))
    }

    fn fetch<F>(&mut self, key: StateKey, stage: Stage, init: F) -> Result<Triad>
    where
        F: FnOnce(Stage) -> Triad,
    {
        if let Some(triad) = self.cache.touch(key) {
            return Ok(triad.clone());
        }
        let triad = match self.store_mut()?.read(key)? {
            Some(triad) => {
                log::debug!("loaded {} {} from store", stage, key);
                triad
            }
            None => {
                log::debug!("seeding {} {}", stage, key);
                init(stage)
            }
        };
        triad.check(stage)?;
        self.admit(key, triad.clone())?;
        Ok(triad)
    }

    fn admit(&mut self, key: StateKey, triad: Triad) -> Result<()> {
        if !self.cache.contains(key) && self.cache.is_full() {
            self.evict()?;
        }
        self.cache.insert(key, triad);
        Ok(())
    }

    fn evict(&mut self) -> Result<()> {
        let (key, triad, age) = match self.cache.victim() {
            Some((key, entry)) => (key, entry.triad.clone(), entry.age),
            None => return Ok(()),
        };
        self.store_mut()?.write(key, &triad)?;
        self.cache.remove(key);
        log::debug!("evicted {} at age {}", key, age);
        Ok(())
    }

    fn ensure_open(&self) -> Result<()> {
        match self.store {
            Some(_) => Ok(()),
            None => Err(Error::Closed),
        }
    }

    fn store_mut(&mut self) -> Result<&mut S> {
        self.store.as_mut().ok_or(Error::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Sqlite;
    use crate::store::StoreError;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn key(n: i64) -> StateKey {
        StateKey::from(n)
    }
    fn triad(q: f64) -> Triad {
        Triad::try_from((vec![0.1, 0.3, 0.6], vec![0.25, 0.25, 0.5], vec![q, 2.0 * q, 3.0 * q]))
            .unwrap()
    }
    fn table(capacity: usize) -> Table<Sqlite> {
        Table::new(Sqlite::memory().unwrap(), capacity, 32)
    }
    fn seed(rng: &mut SmallRng) -> impl FnOnce(Stage) -> Triad + '_ {
        move |stage| Triad::seeded(stage, rng)
    }

    /// Store double whose reads, writes, and release can be switched to fail.
    struct Flaky {
        inner: Sqlite,
        reads: bool,
        writes: bool,
        closes: bool,
    }
    impl Flaky {
        fn new() -> Self {
            Self {
                inner: Sqlite::memory().unwrap(),
                reads: true,
                writes: true,
                closes: true,
            }
        }
    }
    impl Store for Flaky {
        fn read(&mut self, key: StateKey) -> std::result::Result<Option<Triad>, StoreError> {
            match self.reads {
                true => self.inner.read(key),
                false => Err(StoreError::Io("unreadable".into())),
            }
        }
        fn write(&mut self, key: StateKey, triad: &Triad) -> std::result::Result<(), StoreError> {
            match self.writes {
                true => self.inner.write(key, triad),
                false => Err(StoreError::Io("disk full".into())),
            }
        }
        fn close(&mut self) -> std::result::Result<(), StoreError> {
            match self.closes {
                true => self.inner.close(),
                false => Err(StoreError::Io("stuck".into())),
            }
        }
    }
    fn flaky(table: &mut Table<Flaky>) -> &mut Flaky {
        table.store.as_mut().unwrap()
    }

    #[test]
    fn get_after_put_round_trips() {
        let mut table = table(4);
        table.put(key(1), triad(1234.0)).unwrap();
        let got = table
            .get(key(1), Stage::PostRound, |_| unreachable!("live entry"))
            .unwrap();
        assert_eq!(got, triad(1234.0));
        assert!(table.contains(key(1)));
    }

    #[test]
    fn misses_seed_fresh_triads() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let mut table = table(4);
        let got = table.get(key(9), Stage::PreRound, seed(rng)).unwrap();
        assert_eq!(got.qvalues(), &[1.0]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn misses_prefer_the_store() {
        let mut store = Sqlite::memory().unwrap();
        store.write(key(5), &triad(7.0)).unwrap();
        let mut table = Table::new(store, 4, 32);
        let got = table
            .get(key(5), Stage::PostRound, |_| unreachable!("stored entry"))
            .unwrap();
        assert_eq!(got, triad(7.0));
    }

    #[test]
    fn stored_triads_must_fit_the_stage() {
        let mut store = Sqlite::memory().unwrap();
        store.write(key(5), &triad(7.0)).unwrap();
        let mut table = Table::new(store, 4, 32);
        let got = table.get(key(5), Stage::InRound, |_| unreachable!("stored entry"));
        assert!(matches!(got, Err(Error::InvalidState(_))));
        assert!(!table.contains(key(5)));
    }

    #[test]
    fn never_exceeds_capacity() {
        let ref mut rng = SmallRng::seed_from_u64(4);
        let mut table = table(3);
        for n in 0..20 {
            match n % 2 {
                0 => table.put(key(n), triad(n as f64)).unwrap(),
                _ => drop(table.get(key(n % 7), Stage::PostRound, seed(rng)).unwrap()),
            }
            assert!(table.len() <= 3);
        }
    }

    #[test]
    fn evicted_entries_come_back_from_the_store() {
        let ref mut rng = SmallRng::seed_from_u64(5);
        let mut table = table(1);
        table.put(key(1), triad(1.0)).unwrap();
        table.put(key(2), triad(2.0)).unwrap();
        assert!(!table.contains(key(1)));
        let got = table.get(key(1), Stage::PostRound, seed(rng)).unwrap();
        assert_eq!(got, triad(1.0));
    }

    #[test]
    fn failed_eviction_leaves_the_cache_alone() {
        let mut table = Table::new(Flaky::new(), 2, 32);
        table.put(key(1), triad(1.0)).unwrap();
        table.put(key(2), triad(2.0)).unwrap();
        let ages = (table.age(key(1)), table.age(key(2)));
        assert_eq!(ages, (Some(1), Some(0)));
        flaky(&mut table).writes = false;
        let err = table.put(key(3), triad(3.0)).unwrap_err();
        assert!(err.is_recoverable());
        assert!(table.contains(key(1)));
        assert!(table.contains(key(2)));
        assert!(!table.contains(key(3)));
        assert_eq!((table.age(key(1)), table.age(key(2))), ages);
        flaky(&mut table).writes = true;
        table.put(key(3), triad(3.0)).unwrap();
        assert!(table.contains(key(3)));
        assert!(!table.contains(key(1)));
    }

    #[test]
    fn failed_reads_surface_instead_of_seeding() {
        let mut table = Table::new(Flaky::new(), 2, 32);
        table.put(key(1), triad(1.0)).unwrap();
        table.tick().unwrap();
        flaky(&mut table).reads = false;
        let err = table
            .get(key(9), Stage::PostRound, |_| unreachable!("store failed"))
            .unwrap_err();
        assert!(err.is_recoverable());
        assert!(!table.contains(key(9)));
        assert_eq!(table.age(key(1)), Some(1));
        let got = table
            .get(key(1), Stage::PostRound, |_| unreachable!("live entry"))
            .unwrap();
        assert_eq!(got, triad(1.0));
    }

    #[test]
    fn save_flushes_and_closes() {
        let path = std::env::temp_dir().join(format!("bqa-table-save-{}.db", std::process::id()));
        let _ = std::fs::remove_file(&path);
        let mut table = Table::new(Sqlite::open(&path).unwrap(), 4, 32);
        table.put(key(1), triad(1.0)).unwrap();
        table.put(key(2), triad(2.0)).unwrap();
        table.save().unwrap();
        assert!(table.is_closed());
        assert!(matches!(table.put(key(3), triad(3.0)), Err(Error::Closed)));
        assert!(matches!(table.tick(), Err(Error::Closed)));
        assert!(matches!(table.save(), Err(Error::Closed)));
        let mut store = Sqlite::open(&path).unwrap();
        assert_eq!(store.read(key(1)).unwrap(), Some(triad(1.0)));
        assert_eq!(store.read(key(2)).unwrap(), Some(triad(2.0)));
        store.close().unwrap();
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn load_swaps_stores() {
        let mut table = table(4);
        table.put(key(1), triad(1.0)).unwrap();
        let mut other = Sqlite::memory().unwrap();
        other.write(key(2), &triad(2.0)).unwrap();
        table.load(other).unwrap();
        assert!(table.is_empty());
        let got = table
            .get(key(2), Stage::PostRound, |_| unreachable!("stored entry"))
            .unwrap();
        assert_eq!(got, triad(2.0));
    }

    #[test]
    fn load_drops_entries_when_release_fails() {
        let mut table = Table::new(Flaky::new(), 4, 32);
        table.put(key(1), triad(1.0)).unwrap();
        flaky(&mut table).closes = false;
        let mut other = Flaky::new();
        other.inner.write(key(2), &triad(2.0)).unwrap();
        let err = table.load(other).unwrap_err();
        assert!(err.is_recoverable());
        assert!(table.is_empty());
        assert!(!table.contains(key(1)));
        assert_eq!(flaky(&mut table).inner.read(key(1)).unwrap(), None);
        let got = table
            .get(key(2), Stage::PostRound, |_| unreachable!("stored entry"))
            .unwrap();
        assert_eq!(got, triad(2.0));
        table.save().unwrap();
    }

    #[test]
    fn end_to_end_aging_and_eviction() {
        let ref mut rng = SmallRng::seed_from_u64(6);
        let (k1, k2, k3) = (key(1), key(2), key(3));
        let mut table = table(2);
        table.get(k1, Stage::InRound, |s| Triad::seeded(s, rng)).unwrap();
        let evicted = table.get(k2, Stage::InRound, |s| Triad::seeded(s, rng)).unwrap();
        table.get(k1, Stage::InRound, |_| unreachable!("live entry")).unwrap();
        assert_eq!(table.age(k1), Some(0));
        table.tick().unwrap();
        assert!(table.age(k2) > table.age(k1));
        table.get(k3, Stage::InRound, |s| Triad::seeded(s, rng)).unwrap();
        assert!(table.contains(k1));
        assert!(table.contains(k3));
        assert!(!table.contains(k2));
        let stored = table.store.as_mut().unwrap().read(k2).unwrap();
        assert_eq!(stored, Some(evicted));
    }
}
