//! [`SqliteStore`]: the SQLite implementation of [`InsightsStore`].

use std::{path::Path, time::Duration};

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{Connection, OpenFlags};
use strum::IntoEnumIterator as _;

use zion_core::{
  EntityKind,
  insights::{Insight, Insights, Row, RowCounts},
  store::InsightsStore,
};

use crate::{Result, encode::column_to_json, queries};

// ─── Settings ────────────────────────────────────────────────────────────────

/// Bounds of the read pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
  /// Connections kept open at most.
  pub max_size: u32,
  /// How long a request waits for a free connection.
  pub timeout:  Duration,
}

impl Default for PoolSettings {
  fn default() -> Self {
    Self { max_size: 4, timeout: Duration::from_secs(30) }
  }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// Read-only view of a seeded database, backed by an r2d2 pool.
///
/// Cloning is cheap; the pool is reference-counted. Connections are opened
/// lazily and never create the file, so a missing database surfaces as a
/// failed [`ping`](InsightsStore::ping) rather than an empty one.
#[derive(Clone)]
pub struct SqliteStore {
  pool: Pool<SqliteConnectionManager>,
}

impl SqliteStore {
  /// Build the pool for `path`. No connection is made yet.
  pub fn open(path: impl AsRef<Path>, settings: PoolSettings) -> Self {
    let manager = SqliteConnectionManager::file(path.as_ref())
      .with_flags(
        OpenFlags::SQLITE_OPEN_READ_WRITE
          | OpenFlags::SQLITE_OPEN_NO_MUTEX
          | OpenFlags::SQLITE_OPEN_URI,
      )
      .with_init(|conn| {
        conn.execute_batch("PRAGMA query_only = ON; PRAGMA busy_timeout = 5000;")
      });

    let pool = Pool::builder()
      .max_size(settings.max_size.max(1))
      .connection_timeout(settings.timeout.max(Duration::from_secs(1)))
      .build_unchecked(manager);

    tracing::debug!(
      path = %path.as_ref().display(),
      max_size = settings.max_size.max(1),
      "read pool configured"
    );

    Self { pool }
  }

  /// Check out a connection and run `f` on a blocking worker.
  pub(crate) async fn with_conn<F, T>(&self, f: F) -> Result<T>
  where
    F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
    T: Send + 'static,
  {
    let pool = self.pool.clone();
    tokio::task::spawn_blocking(move || -> Result<T> {
      let conn = pool.get()?;
      Ok(f(&conn)?)
    })
    .await?
  }
}

// ─── Query helpers ───────────────────────────────────────────────────────────

/// Run `sql` and return every row as a lower-cased column → JSON map.
fn query_rows(conn: &Connection, sql: &str) -> rusqlite::Result<Vec<Row>> {
  let mut stmt = conn.prepare_cached(sql)?;
  let columns: Vec<String> = stmt
    .column_names()
    .into_iter()
    .map(str::to_lowercase)
    .collect();

  let mut rows = stmt.query([])?;
  let mut out = Vec::new();
  while let Some(row) = rows.next()? {
    let mut map = Row::new();
    for (i, name) in columns.iter().enumerate() {
      map.insert(name.clone(), column_to_json(row.get_ref(i)?));
    }
    out.push(map);
  }
  Ok(out)
}

fn count_rows(conn: &Connection) -> rusqlite::Result<RowCounts> {
  let mut counts = Vec::with_capacity(EntityKind::INSERT_ORDER.len());
  for kind in EntityKind::INSERT_ORDER {
    let n: i64 = conn.query_row(
      &format!("SELECT COUNT(*) FROM {}", kind.table_name()),
      [],
      |row| row.get(0),
    )?;
    counts.push((kind, n as u64));
  }
  Ok(RowCounts::from_counts(counts))
}

// ─── InsightsStore impl ──────────────────────────────────────────────────────

impl InsightsStore for SqliteStore {
  type Error = crate::Error;

  async fn ping(&self) -> Result<()> {
    self
      .with_conn(|conn| conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0)).map(drop))
      .await
  }

  async fn row_counts(&self) -> Result<RowCounts> {
    self.with_conn(count_rows).await
  }

  async fn insight(&self, insight: Insight) -> Result<Vec<Row>> {
    let rows = self
      .with_conn(move |conn| query_rows(conn, queries::sql(insight)))
      .await?;
    tracing::debug!(%insight, rows = rows.len(), "insight query");
    Ok(rows)
  }

  async fn insights(&self) -> Result<Insights> {
    self
      .with_conn(|conn| {
        let mut out = Insights::default();
        for insight in Insight::iter() {
          out.push(insight, query_rows(conn, queries::sql(insight))?);
        }
        Ok(out)
      })
      .await
  }
}
