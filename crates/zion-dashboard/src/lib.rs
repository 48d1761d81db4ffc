//! HTTP insights dashboard for the Zion dataset.
//!
//! Exposes an axum [`Router`] backed by any [`InsightsStore`]. The store is
//! built once at startup and shared through [`AppState`].

pub mod error;
pub mod handlers;
pub mod page;

pub use error::ApiError;

use std::{path::{Path, PathBuf}, sync::Arc, time::Duration};

use axum::{Router, routing::get};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use zion_core::store::InsightsStore;
use zion_store_sqlite::PoolSettings;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration: defaults, then `zion.toml`, then `ZION_*`
/// environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
  pub host:              String,
  pub port:              u16,
  pub database_path:     PathBuf,
  pub pool_size:         u32,
  pub pool_timeout_secs: u64,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:              "0.0.0.0".to_string(),
      port:              8000,
      database_path:     PathBuf::from("zion.db"),
      pool_size:         4,
      pool_timeout_secs: 30,
    }
  }
}

impl ServerConfig {
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    Self::from_sources(File::from(path).required(false), environment())
  }

  fn from_sources<F, E>(file: F, env: E) -> Result<Self, ConfigError>
  where
    F: config::Source + Send + Sync + 'static,
    E: config::Source + Send + Sync + 'static,
  {
    Config::builder()
      .add_source(file)
      .add_source(env)
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  pub fn pool(&self) -> PoolSettings {
    PoolSettings {
      max_size: self.pool_size,
      timeout:  Duration::from_secs(self.pool_timeout_secs),
    }
  }
}

fn environment() -> Environment {
  Environment::with_prefix("ZION")
    .prefix_separator("_")
    .separator("__")
    .try_parsing(true)
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<S> {
  pub store: Arc<S>,
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self { Self { store: Arc::clone(&self.store) } }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the dashboard [`Router`].
pub fn router<S>(state: AppState<S>) -> Router
where
  S: InsightsStore + 'static,
{
  Router::new()
    .route("/",         get(handlers::index::<S>))
    .route("/health",   get(handlers::health::<S>))
    .route("/stats",    get(handlers::stats::<S>))
    .route("/insights", get(handlers::insights::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
