//! [`Seeder`]: writes generated datasets into SQLite.

use std::{path::Path, time::Duration};

use rand::Rng;
use rusqlite::{CachedStatement, Transaction};
use zion_core::{Dataset, EntityKind, Record, generate::Generation, insights::RowCounts};

use crate::{
  Error, Result,
  encode::encode_value,
  schema::SCHEMA,
};

// ─── Readiness gate ──────────────────────────────────────────────────────────

/// Fixed retry schedule for the startup readiness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
  pub attempts: u32,
  pub delay:    Duration,
}

impl Default for RetryPolicy {
  fn default() -> Self {
    Self { attempts: 60, delay: Duration::from_secs(10) }
  }
}

// ─── Load report ─────────────────────────────────────────────────────────────

/// Outcome of a committed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
  pub counts:        RowCounts,
  /// Insert batches written across all tables.
  pub batches:       u64,
  /// Rows in the largest batch, the most ever held between generation and
  /// insertion.
  pub largest_batch: usize,
}

// ─── Seeder ──────────────────────────────────────────────────────────────────

/// Owns the single write connection used by a generation run.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct Seeder {
  conn: tokio_rusqlite::Connection,
}

impl Seeder {
  /// Wait until the database at `path` answers `SELECT 1`, then create the
  /// schema.
  ///
  /// Each failed attempt is logged and followed by `policy.delay`. Nothing is
  /// written before a check succeeds.
  pub async fn connect(path: impl AsRef<Path>, policy: RetryPolicy) -> Result<Self> {
    let path = path.as_ref().to_path_buf();
    let attempts = policy.attempts.max(1);
    let mut last_error = String::new();

    for attempt in 1..=attempts {
      match try_open(&path).await {
        Ok(conn) => {
          tracing::info!(path = %path.display(), attempt, "database ready");
          let seeder = Self { conn };
          seeder.init_schema().await?;
          return Ok(seeder);
        }
        Err(e) => {
          tracing::warn!("[{attempt}/{attempts}] database not ready yet: {e}");
          last_error = e.to_string();
          if attempt < attempts {
            tokio::time::sleep(policy.delay).await;
          }
        }
      }
    }

    Err(Error::Unavailable { attempts, last_error })
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Delete every row, children before parents, in one transaction.
  ///
  /// A failing delete rolls the whole reset back.
  pub async fn reset(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        let tx = conn.transaction()?;
        for kind in EntityKind::reset_order() {
          let removed = tx.execute(&format!("DELETE FROM {}", kind.table_name()), [])?;
          tracing::info!(entity = %kind, rows = removed, "cleared {}", kind.table_name());
        }
        tx.commit()?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Draw every table from `generation` in `chunk_size` batches, inserting
  /// each batch before the next one is generated, and commit once at the end.
  ///
  /// At most one batch of rows is held in memory. Any failure, generation
  /// included, drops the transaction, so either the whole dataset is visible
  /// or none of it is.
  pub async fn populate<R>(&self, mut generation: Generation<R>, chunk_size: usize) -> Result<LoadReport>
  where
    R: Rng + Send + 'static,
  {
    let chunk_size = chunk_size.max(1);

    let (loaded, tally) = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let mut loaded = Vec::with_capacity(EntityKind::INSERT_ORDER.len());
        let mut tally = Tally::default();
        for kind in EntityKind::INSERT_ORDER {
          let mut writer = TableWriter::new(&tx, kind)?;
          for chunk in generation.chunks(kind, chunk_size).map_err(generation_failed)? {
            writer.write(&chunk.map_err(generation_failed)?)?;
          }
          loaded.push(writer.finish(&mut tally));
        }
        tx.commit()?;
        Ok((loaded, tally))
      })
      .await
      .map_err(unwrap_generation_error)?;

    Ok(tally.report(loaded))
  }

  /// Insert every table of an already generated `dataset`, `chunk_size` rows
  /// per batch, and commit once at the end.
  pub async fn load(&self, dataset: Dataset, chunk_size: usize) -> Result<LoadReport> {
    let chunk_size = chunk_size.max(1);

    let (loaded, tally) = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let mut loaded = Vec::with_capacity(dataset.tables.len());
        let mut tally = Tally::default();
        for table in &dataset.tables {
          let mut writer = TableWriter::new(&tx, table.kind)?;
          for chunk in table.records.chunks(chunk_size) {
            writer.write(chunk)?;
          }
          loaded.push(writer.finish(&mut tally));
        }
        tx.commit()?;
        Ok((loaded, tally))
      })
      .await?;

    Ok(tally.report(loaded))
  }

  /// `COUNT(*)` of every table, as seen by the write connection.
  pub async fn row_counts(&self) -> Result<RowCounts> {
    let counts: Vec<(EntityKind, u64)> = self
      .conn
      .call(|conn| {
        let mut counts = Vec::with_capacity(EntityKind::INSERT_ORDER.len());
        for kind in EntityKind::INSERT_ORDER {
          let n: i64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", kind.table_name()),
            [],
            |row| row.get(0),
          )?;
          counts.push((kind, n as u64));
        }
        Ok(counts)
      })
      .await?;

    Ok(RowCounts::from_counts(counts))
  }

  /// Run `f` on the write connection. Test-only escape hatch.
  #[cfg(test)]
  pub(crate) async fn with_conn<F, T>(&self, f: F) -> Result<T>
  where
    F: FnOnce(&mut rusqlite::Connection) -> rusqlite::Result<T> + Send + 'static,
    T: Send + 'static,
  {
    Ok(self.conn.call(move |conn| Ok(f(conn)?)).await?)
  }
}

async fn try_open(path: &Path) -> Result<tokio_rusqlite::Connection> {
  let conn = tokio_rusqlite::Connection::open(path).await?;
  conn
    .call(|conn| {
      conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
      Ok(())
    })
    .await?;
  Ok(conn)
}

fn generation_failed(e: zion_core::Error) -> tokio_rusqlite::Error {
  tokio_rusqlite::Error::Other(Box::new(e))
}

/// Surface a generation error that crossed the connection thread as
/// [`Error::Core`].
fn unwrap_generation_error(e: tokio_rusqlite::Error) -> Error {
  match e {
    tokio_rusqlite::Error::Other(inner) => match inner.downcast::<zion_core::Error>() {
      Ok(core) => Error::Core(*core),
      Err(inner) => Error::Database(tokio_rusqlite::Error::Other(inner)),
    },
    e => Error::Database(e),
  }
}

#[derive(Debug, Default)]
struct Tally {
  batches:       u64,
  largest_batch: usize,
}

impl Tally {
  fn report(self, loaded: Vec<(EntityKind, u64)>) -> LoadReport {
    LoadReport {
      counts:        RowCounts::from_counts(loaded),
      batches:       self.batches,
      largest_batch: self.largest_batch,
    }
  }
}

/// Inserts the rows of one table through a cached prepared statement. No
/// commit happens here.
struct TableWriter<'tx> {
  kind:          EntityKind,
  stmt:          CachedStatement<'tx>,
  rows:          usize,
  batches:       u64,
  largest_batch: usize,
}

impl<'tx> TableWriter<'tx> {
  fn new(tx: &'tx Transaction<'_>, kind: EntityKind) -> rusqlite::Result<Self> {
    let spec = kind.spec();
    let columns = spec.column_names();
    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{i}")).collect();
    let sql = format!(
      "INSERT INTO {} ({}) VALUES ({})",
      spec.table,
      columns.join(", "),
      placeholders.join(", "),
    );

    Ok(Self {
      kind,
      stmt: tx.prepare_cached(&sql)?,
      rows: 0,
      batches: 0,
      largest_batch: 0,
    })
  }

  fn write(&mut self, chunk: &[Record]) -> rusqlite::Result<()> {
    for record in chunk {
      let params = std::iter::once(rusqlite::types::Value::Integer(record.id))
        .chain(record.values.iter().map(encode_value));
      self.stmt.execute(rusqlite::params_from_iter(params))?;
    }
    self.rows += chunk.len();
    self.batches += 1;
    self.largest_batch = self.largest_batch.max(chunk.len());
    tracing::debug!(
      entity = %self.kind,
      batch = self.batches,
      rows = chunk.len(),
      "inserted {} chunk",
      self.kind.plural()
    );
    Ok(())
  }

  fn finish(self, tally: &mut Tally) -> (EntityKind, u64) {
    tracing::info!(entity = %self.kind, rows = self.rows, "inserted {}", self.kind.plural());
    tally.batches += self.batches;
    tally.largest_batch = tally.largest_batch.max(self.largest_batch);
    (self.kind, self.rows as u64)
  }
}
