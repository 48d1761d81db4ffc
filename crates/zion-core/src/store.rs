//! The `InsightsStore` trait.
//!
//! Implemented by storage backends (e.g. `zion-store-sqlite`). The dashboard
//! depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::insights::{Insight, Insights, RowCounts, Row};

/// Errors raised by an [`InsightsStore`].
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  /// `true` when the database could not be reached at all, as opposed to a
  /// query that failed once connected.
  fn is_unavailable(&self) -> bool { false }
}

/// Read-only access to a populated dataset.
///
/// All methods return `Send` futures so the trait can be used from axum
/// handlers on a multi-threaded runtime. No method mutates data.
pub trait InsightsStore: Send + Sync {
  type Error: StoreError;

  /// Round-trip a trivial query; no domain tables are touched.
  fn ping(&self) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// `COUNT(*)` of every entity table.
  fn row_counts(&self) -> impl Future<Output = Result<RowCounts, Self::Error>> + Send + '_;

  /// Run a single insight query.
  fn insight(
    &self,
    insight: Insight,
  ) -> impl Future<Output = Result<Vec<Row>, Self::Error>> + Send + '_;

  /// Run every insight query, in menu order.
  fn insights(&self) -> impl Future<Output = Result<Insights, Self::Error>> + Send + '_;
}
