use super::*;
use const_format::concatcp;
use rusqlite::Connection;
use rusqlite::OptionalExtension;
use rusqlite::params;
use std::path::Path;

/// SQLite-backed [`Store`]. Writes run in autocommit mode, so each upsert
/// is durable by the time it returns.
pub struct Sqlite(Option<Connection>);

#[rustfmt::skip]
impl Sqlite {
    const CREATES: &'static str = concatcp!(
        "CREATE TABLE IF NOT EXISTS ", QTABLE, " (",
            "state_hash INTEGER PRIMARY KEY, ",
            "weights    TEXT NOT NULL, ",
            "biases     TEXT NOT NULL, ",
            "qvalues    TEXT NOT NULL",
        ")"
    );
    const SELECTS: &'static str = concatcp!(
        "SELECT weights, ",
               "biases, ",
               "qvalues ",
        "FROM   ", QTABLE, " ",
        "WHERE  state_hash = ?1"
    );
    const UPSERTS: &'static str = concatcp!(
        "INSERT INTO ", QTABLE, " (state_hash, weights, biases, qvalues) ",
        "VALUES (?1, ?2, ?3, ?4) ",
        "ON CONFLICT(state_hash) DO UPDATE SET ",
            "weights = excluded.weights, ",
            "biases  = excluded.biases, ",
            "qvalues = excluded.qvalues"
    );
}

impl Sqlite {
    /// Opens (creating if needed) the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::init(Connection::open(path)?)
    }
    /// A private in-memory database, gone once closed.
    pub fn memory() -> Result<Self, StoreError> {
        Self::init(Connection::open_in_memory()?)
    }
    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(Self::CREATES)?;
        Ok(Self(Some(conn)))
    }
    fn conn(&self) -> Result<&Connection, StoreError> {
        self.0.as_ref().ok_or(StoreError::Closed)
    }
    /// Number of persisted rows.
    pub fn len(&self) -> Result<usize, StoreError> {
        const SQL: &str = concatcp!("SELECT COUNT(*) FROM ", QTABLE);
        Ok(self.conn()?.query_row(SQL, [], |row| row.get::<_, i64>(0))? as usize)
    }
}

impl Store for Sqlite {
    fn read(&mut self, key: StateKey) -> Result<Option<Triad>, StoreError> {
        self.conn()?
            .query_row(Self::SELECTS, params![i64::from(key)], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })
            .optional()?
            .map(|(w, b, q)| decode(&w, &b, &q))
            .transpose()
    }
    fn write(&mut self, key: StateKey, triad: &Triad) -> Result<(), StoreError> {
        let [w, b, q] = encode(triad)?;
        self.conn()?
            .execute(Self::UPSERTS, params![i64::from(key), w, b, q])?;
        Ok(())
    }
    fn close(&mut self) -> Result<(), StoreError> {
        match self.0.take() {
            None => Err(StoreError::Closed),
            Some(conn) => conn.close().map_err(|(_, e)| StoreError::from(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triad() -> Triad {
        Triad::try_from((vec![0.1, 0.3, 0.6], vec![0.25, 0.25, 0.5], vec![1234., 5678., 4321.]))
            .unwrap()
    }

    #[test]
    fn missing_rows_read_none() {
        let mut store = Sqlite::memory().unwrap();
        assert_eq!(store.read(StateKey::from(7)).unwrap(), None);
    }

    #[test]
    fn written_rows_read_back() {
        let mut store = Sqlite::memory().unwrap();
        store.write(StateKey::from(7), &triad()).unwrap();
        assert_eq!(store.read(StateKey::from(7)).unwrap(), Some(triad()));
    }

    #[test]
    fn upserts_are_idempotent() {
        let mut store = Sqlite::memory().unwrap();
        let key = StateKey::from(-3);
        store.write(key, &triad()).unwrap();
        store.write(key, &triad()).unwrap();
        assert_eq!(store.len().unwrap(), 1);
        let other = Triad::try_from((vec![0.5], vec![0.5], vec![2.0])).unwrap();
        store.write(key, &other).unwrap();
        assert_eq!(store.len().unwrap(), 1);
        assert_eq!(store.read(key).unwrap(), Some(other));
    }

    #[test]
    fn closed_stores_refuse_work() {
        let mut store = Sqlite::memory().unwrap();
        store.close().unwrap();
        assert_eq!(store.read(StateKey::from(1)), Err(StoreError::Closed));
        assert_eq!(store.write(StateKey::from(1), &triad()), Err(StoreError::Closed));
        assert_eq!(store.close(), Err(StoreError::Closed));
    }

    #[test]
    fn survives_reopen() {
        let path = std::env::temp_dir().join(format!("bqa-sqlite-{}.db", std::process::id()));
        let _ = std::fs::remove_file(&path);
        let mut store = Sqlite::open(&path).unwrap();
        store.write(StateKey::from(42), &triad()).unwrap();
        store.close().unwrap();
        let mut store = Sqlite::open(&path).unwrap();
        assert_eq!(store.read(StateKey::from(42)).unwrap(), Some(triad()));
        store.close().unwrap();
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn corrupt_rows_are_io_errors() {
        let mut store = Sqlite::memory().unwrap();
        store
            .conn()
            .unwrap()
            .execute(
                concatcp!("INSERT INTO ", QTABLE, " VALUES (1, 'nope', '[]', '[]')"),
                [],
            )
            .unwrap();
        assert!(matches!(store.read(StateKey::from(1)), Err(StoreError::Io(_))));
    }
}
