use super::*;
use const_format::concatcp;
use tokio::runtime::Runtime;
use tokio_postgres::Client;
use tokio_postgres::NoTls;

/// PostgreSQL-backed [`Store`].
///
/// The cache is synchronous, so the client is driven by a private
/// current-thread runtime; the connection task only makes progress while a
/// query is being awaited through [`Runtime::block_on`].
pub struct Postgres {
    runtime: Runtime,
    client: Option<Client>,
}

#[rustfmt::skip]
impl Postgres {
    const CREATES: &'static str = concatcp!(
        "CREATE TABLE IF NOT EXISTS ", QTABLE, " (",
            "state_hash BIGINT PRIMARY KEY, ",
            "weights    TEXT   NOT NULL, ",
            "biases     TEXT   NOT NULL, ",
            "qvalues    TEXT   NOT NULL",
        ")"
    );
    const SELECTS: &'static str = concatcp!(
        "SELECT weights, ",
               "biases, ",
               "qvalues ",
        "FROM   ", QTABLE, " ",
        "WHERE  state_hash = $1"
    );
    const UPSERTS: &'static str = concatcp!(
        "INSERT INTO ", QTABLE, " (state_hash, weights, biases, qvalues) ",
        "VALUES ($1, $2, $3, $4) ",
        "ON CONFLICT (state_hash) DO UPDATE SET ",
            "weights = EXCLUDED.weights, ",
            "biases  = EXCLUDED.biases, ",
            "qvalues = EXCLUDED.qvalues"
    );
}

impl Postgres {
    /// Connects to `url` and ensures the table exists.
    pub fn connect(url: &str) -> Result<Self, StoreError> {
        log::info!("connecting to database");
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let (client, connection) = runtime.block_on(tokio_postgres::connect(url, NoTls))?;
        runtime.spawn(async move {
            if let Err(e) = connection.await {
                log::warn!("database connection closed: {}", e);
            }
        });
        runtime.block_on(client.batch_execute("SET client_min_messages TO WARNING"))?;
        runtime.block_on(client.batch_execute(Self::CREATES))?;
        Ok(Self {
            runtime,
            client: Some(client),
        })
    }
    fn client(&self) -> Result<&Client, StoreError> {
        self.client.as_ref().ok_or(StoreError::Closed)
    }
}

impl Store for Postgres {
    fn read(&mut self, key: StateKey) -> Result<Option<Triad>, StoreError> {
        let client = self.client()?;
        self.runtime
            .block_on(client.query_opt(Self::SELECTS, &[&i64::from(key)]))?
            .map(|row| {
                decode(
                    row.get::<_, &str>(0),
                    row.get::<_, &str>(1),
                    row.get::<_, &str>(2),
                )
            })
            .transpose()
    }
    fn write(&mut self, key: StateKey, triad: &Triad) -> Result<(), StoreError> {
        let [w, b, q] = encode(triad)?;
        let client = self.client()?;
        self.runtime
            .block_on(client.execute(Self::UPSERTS, &[&i64::from(key), &w, &b, &q]))?;
        Ok(())
    }
    fn close(&mut self) -> Result<(), StoreError> {
        self.client.take().map(drop).ok_or(StoreError::Closed)
    }
}
