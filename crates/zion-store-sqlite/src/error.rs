//! Error type for `zion-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] zion_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("sqlite error: {0}")]
  Sqlite(#[from] rusqlite::Error),

  #[error("connection pool error: {0}")]
  Pool(#[from] r2d2::Error),

  #[error("query worker failed: {0}")]
  Worker(#[from] tokio::task::JoinError),

  /// The readiness check never got an answer.
  #[error("database unavailable after {attempts} attempts: {last_error}")]
  Unavailable { attempts: u32, last_error: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl zion_core::store::StoreError for Error {
  fn is_unavailable(&self) -> bool {
    matches!(self, Error::Pool(_) | Error::Unavailable { .. })
  }
}
