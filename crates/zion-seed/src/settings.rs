//! Generator configuration: built-in defaults, then an optional TOML file,
//! then `ZION_*` environment variables.

use std::{path::{Path, PathBuf}, time::Duration};

use config::{Config, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;
use zion_core::Targets;
use zion_store_sqlite::RetryPolicy;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
  pub database_path: PathBuf,
  /// Empty every table before loading.
  pub reset:         bool,
  /// Fixed RNG seed; a fresh one is drawn when unset.
  pub seed:          Option<u64>,
  pub chunk_size:    usize,
  pub connect:       ConnectConfig,
  pub targets:       Targets,
}

impl Default for SeedConfig {
  fn default() -> Self {
    Self {
      database_path: PathBuf::from("zion.db"),
      reset:         false,
      seed:          None,
      chunk_size:    1000,
      connect:       ConnectConfig::default(),
      targets:       Targets::default(),
    }
  }
}

/// Readiness check schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConnectConfig {
  pub attempts:   u32,
  pub delay_secs: u64,
}

impl Default for ConnectConfig {
  fn default() -> Self {
    let policy = RetryPolicy::default();
    Self { attempts: policy.attempts, delay_secs: policy.delay.as_secs() }
  }
}

impl From<ConnectConfig> for RetryPolicy {
  fn from(c: ConnectConfig) -> Self {
    RetryPolicy { attempts: c.attempts, delay: Duration::from_secs(c.delay_secs) }
  }
}

impl SeedConfig {
  /// Layer `path` (if present) and the process environment over the
  /// defaults.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    Self::from_builder(
      Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(environment()),
    )
  }

  fn from_builder(builder: config::ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
    builder.build()?.try_deserialize()
  }
}

/// `ZION_RESET=1`, `ZION_TARGETS__MISSIONS=100`, ...
pub fn environment() -> Environment {
  Environment::with_prefix("ZION")
    .prefix_separator("_")
    .separator("__")
    .try_parsing(true)
}

#[cfg(test)]
mod tests {
  use config::{FileFormat, Map};

  use super::*;

  fn env(vars: &[(&str, &str)]) -> Environment {
    let map: Map<String, String> =
      vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    environment().source(Some(map))
  }

  #[test]
  fn missing_file_gives_defaults() {
    let cfg = SeedConfig::from_builder(
      Config::builder()
        .add_source(File::from(Path::new("does-not-exist.toml")).required(false))
        .add_source(env(&[])),
    )
    .unwrap();
    assert_eq!(cfg, SeedConfig::default());
    assert_eq!(cfg.targets.sleepers, 3000);
    assert_eq!(cfg.targets.missions, 6400);
  }

  #[test]
  fn file_overrides_nested_keys() {
    let toml = r#"
      database_path = "/tmp/zion-test.db"
      seed = 42
      chunk_size = 250

      [connect]
      attempts = 3

      [targets]
      ships = 25
      sleepers = 10
    "#;
    let cfg = SeedConfig::from_builder(
      Config::builder().add_source(File::from_str(toml, FileFormat::Toml)),
    )
    .unwrap();
    assert_eq!(cfg.database_path, PathBuf::from("/tmp/zion-test.db"));
    assert_eq!(cfg.seed, Some(42));
    assert_eq!(cfg.chunk_size, 250);
    assert_eq!(cfg.connect.attempts, 3);
    assert_eq!(cfg.connect.delay_secs, 10);
    assert_eq!(cfg.targets.sleepers, 10);
    assert_eq!(cfg.targets.humans, 400);
  }

  #[test]
  fn environment_wins_over_file() {
    let cfg = SeedConfig::from_builder(
      Config::builder()
        .add_source(File::from_str("reset = false\n[targets]\nmissions = 10", FileFormat::Toml))
        .add_source(env(&[("ZION_RESET", "1"), ("ZION_TARGETS__MISSIONS", "100")])),
    )
    .unwrap();
    assert!(cfg.reset);
    assert_eq!(cfg.targets.missions, 100);
  }

  #[test]
  fn retry_policy_from_connect_section() {
    let policy = RetryPolicy::from(ConnectConfig { attempts: 5, delay_secs: 2 });
    assert_eq!(policy.attempts, 5);
    assert_eq!(policy.delay, Duration::from_secs(2));
  }
}
