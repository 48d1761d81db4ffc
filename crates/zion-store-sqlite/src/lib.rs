//! SQLite backend for the Zion dataset.
//!
//! Two halves share one schema:
//!
//! - [`Seeder`] owns a single [`tokio_rusqlite`] connection and streams a
//!   [`Generation`](zion_core::generate::Generation) into the tables chunk by
//!   chunk inside one transaction.
//! - [`SqliteStore`] serves the read-only insight queries from a bounded
//!   [`r2d2`] pool, running each query on a blocking worker.

mod encode;
mod queries;
mod schema;
mod seeder;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use seeder::{LoadReport, RetryPolicy, Seeder};
pub use store::{PoolSettings, SqliteStore};
