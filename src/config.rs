//! Run configuration: items file, finder source, per-query timeout, output path.
//!
//! Environment variables override CLI flags when set, the same way for every run.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::artifact_io::ARTIFACT_FILENAME;
use crate::error::RecipeError;
use crate::finder::{CommandFinderFactory, FinderFactory, FixtureFinderFactory};
use crate::types::TargetItems;

/// Overrides `--finder-cmd`.
pub const FINDER_CMD_ENV: &str = "RECIPES_FINDER_CMD";
/// Overrides `--timeout-secs`.
pub const QUERY_TIMEOUT_ENV: &str = "RECIPES_QUERY_TIMEOUT_SECS";

/// Where recipes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinderSource {
  /// Shell command run once per item.
  Command(String),
  /// Recorded fixture file.
  Fixture(PathBuf),
}

impl FinderSource {
  pub fn factory(&self) -> Result<Arc<dyn FinderFactory>, RecipeError> {
    match self {
      FinderSource::Command(cmd) => Ok(Arc::new(CommandFinderFactory::new(cmd.clone()))),
      FinderSource::Fixture(path) => Ok(Arc::new(FixtureFinderFactory::load(path)?)),
    }
  }
}

/// Raw option values before env overrides are applied (mirrors the CLI flags).
#[derive(Debug, Clone, Default)]
pub struct ConfigInput {
  pub items_path: PathBuf,
  pub output: Option<PathBuf>,
  pub finder_cmd: Option<String>,
  pub fixture: Option<PathBuf>,
  pub timeout_secs: Option<u64>,
  pub check: bool,
}

/// Fully resolved options for [crate::pipeline::run].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
  pub items_path: PathBuf,
  pub output_path: PathBuf,
  pub finder: FinderSource,
  pub query_timeout: Option<Duration>,
  /// Compare with the existing artifact instead of writing it.
  pub check: bool,
}

impl GeneratorConfig {
  /// Applies env overrides (looked up through `env`) and fills defaults.
  pub fn resolve(
    input: ConfigInput,
    env: impl Fn(&str) -> Option<String>,
  ) -> Result<Self, RecipeError> {
    let finder_cmd = env(FINDER_CMD_ENV).or(input.finder_cmd);
    let finder = match (finder_cmd, input.fixture) {
      (Some(_), Some(_)) => {
        return Err(RecipeError::Config(
          "give either a finder command or a fixture, not both".to_string(),
        ));
      }
      (Some(cmd), None) => FinderSource::Command(cmd),
      (None, Some(path)) => FinderSource::Fixture(path),
      (None, None) => {
        return Err(RecipeError::Config(format!(
          "no finder: pass --finder-cmd, --fixture or set {}",
          FINDER_CMD_ENV
        )));
      }
    };

    let query_timeout = match env(QUERY_TIMEOUT_ENV) {
      Some(raw) => Some(parse_timeout_secs(&raw)?),
      None => input.timeout_secs.map(Duration::from_secs),
    };

    let output_path = input
      .output
      .unwrap_or_else(|| default_output_path(&input.items_path));

    Ok(Self {
      items_path: input.items_path,
      output_path,
      finder,
      query_timeout,
      check: input.check,
    })
  }
}

/// Parses a whole number of seconds.
pub fn parse_timeout_secs(raw: &str) -> Result<Duration, RecipeError> {
  raw
    .trim()
    .parse::<u64>()
    .map(Duration::from_secs)
    .map_err(|e| RecipeError::Config(format!("invalid {} {:?}: {}", QUERY_TIMEOUT_ENV, raw, e)))
}

/// `recipes.json` in the same directory as the items file.
pub fn default_output_path(items_path: &Path) -> PathBuf {
  items_path
    .parent()
    .map(|dir| dir.join(ARTIFACT_FILENAME))
    .unwrap_or_else(|| PathBuf::from(ARTIFACT_FILENAME))
}

/// Loads and parses the items file.
pub fn load_target_items(path: &Path) -> Result<TargetItems, RecipeError> {
  let bytes = std::fs::read(path)?;
  Ok(serde_json::from_slice(&bytes)?)
}
