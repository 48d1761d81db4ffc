//! `seed`: populates the Zion database with a synthetic dataset.
//!
//! Checks the targets, waits for the database, optionally empties it, then
//! generates every entity in dependency order and streams the rows into one
//! transaction a chunk at a time. Reads `zion.toml` (or the path given with
//! `--config`) and `ZION_*` environment variables.

mod settings;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use zion_core::{EntityKind, generate::Generation};
use zion_store_sqlite::{LoadReport, Seeder};

use crate::settings::SeedConfig;

#[derive(Parser)]
#[command(author, version, about = "Generate and load the Zion dataset")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "zion.toml")]
  config: PathBuf,

  /// Delete existing rows before loading.
  #[arg(long)]
  reset: bool,
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

  let cfg = SeedConfig::load(&cli.config)
    .with_context(|| format!("failed to read configuration from {:?}", cli.config))?;
  let reset = cli.reset || cfg.reset;

  let report = run(&cfg, reset).await?;

  for kind in EntityKind::INSERT_ORDER {
    tracing::info!("{:>10}: {}", kind.plural(), report.counts.get(kind));
  }
  tracing::info!(
    total_rows = report.counts.total_rows,
    batches = report.batches,
    "seeding complete"
  );

  Ok(())
}

/// One seeding run. Invalid targets are reported before the database is
/// opened, so a bad configuration never costs existing rows.
async fn run(cfg: &SeedConfig, reset: bool) -> anyhow::Result<LoadReport> {
  let rng = match cfg.seed {
    Some(seed) => {
      tracing::info!(seed, "using fixed seed");
      StdRng::seed_from_u64(seed)
    }
    None => StdRng::from_entropy(),
  };
  let generation = Generation::new(cfg.targets, rng).context("invalid generation targets")?;

  let seeder = Seeder::connect(&cfg.database_path, cfg.connect.into())
    .await
    .with_context(|| format!("database at {:?} never became ready", cfg.database_path))?;

  if reset {
    tracing::info!("resetting existing data");
    seeder.reset().await.context("reset failed")?;
  }

  seeder
    .populate(generation, cfg.chunk_size)
    .await
    .context("load failed; no rows were committed")
}
