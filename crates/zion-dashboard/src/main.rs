//! zion-dashboard server binary.
//!
//! Reads `zion.toml` (or the path given with `--config`) and `ZION_*`
//! environment variables, builds the read pool, and serves the dashboard
//! until Ctrl-C.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use zion_dashboard::{AppState, ServerConfig};
use zion_store_sqlite::SqliteStore;

#[derive(Parser)]
#[command(author, version, about = "Zion insights dashboard")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "zion.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to read configuration from {:?}", cli.config))?;

  // The pool connects lazily; a missing database shows up on /health.
  let store = Arc::new(SqliteStore::open(&server_cfg.database_path, server_cfg.pool()));
  let state = AppState { store: Arc::clone(&store) };

  let app = zion_dashboard::router(state);
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  drop(store);
  tracing::info!("connection pool closed");

  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!("failed to listen for Ctrl-C: {e}");
    std::future::pending::<()>().await;
  }
  tracing::info!("shutting down");
}
