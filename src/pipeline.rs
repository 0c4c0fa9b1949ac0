//! End-to-end run: targets → dispatch → merge → dedupe → serialize → persist.
//!
//! - [generate_recipes]: produce the artifact in memory.
//! - [run]: load config inputs, generate, then write (or check) the artifact file.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, instrument};

use crate::artifact_io::{stored_fingerprint, write_artifact};
use crate::config::{GeneratorConfig, load_target_items};
use crate::dedupe::dedupe;
use crate::dispatcher::{DispatchOptions, dispatch};
use crate::error::RecipeError;
use crate::finder::FinderFactory;
use crate::merger::fold_recipes;
use crate::serializer::serialize;
use crate::types::{Artifact, TargetItem};

/// Queries every target and folds the answers into the canonical artifact.
/// Any query failure or recipe conflict (including results that collide after
/// sanitizing) fails the whole run.
#[instrument(level = "trace", skip(targets, factory, options))]
pub async fn generate_recipes(
  targets: &BTreeSet<TargetItem>,
  factory: Arc<dyn FinderFactory>,
  options: &DispatchOptions,
) -> Result<Artifact, RecipeError> {
  let results = dispatch(targets, factory, options).await?;
  let table = fold_recipes(results.into_values())?;
  let artifact = serialize(&dedupe(table))?;
  info!(recipes = artifact.recipe_count, "got a total of {} recipes", artifact.recipe_count);
  info!(hash = %artifact.hash, "hash of output");
  Ok(artifact)
}

/// What [run] did with the artifact file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactStatus {
  Written,
  /// Check mode: the stored file has the same fingerprint.
  Matches,
  /// Check mode: the stored file differs (or is missing).
  Differs { stored_hash: Option<String> },
}

/// Outcome of [run].
#[derive(Debug, Clone)]
pub struct RunReport {
  pub artifact: Artifact,
  pub output_path: PathBuf,
  pub status: ArtifactStatus,
}

/// Runs the whole pipeline for a resolved config. Nothing is written unless every stage succeeded.
#[instrument(level = "trace", skip(config), fields(items = %config.items_path.display()))]
pub async fn run(config: &GeneratorConfig) -> Result<RunReport, RecipeError> {
  let targets = load_target_items(&config.items_path)?.targets()?;
  info!(targets = targets.len(), "loaded target items");
  let factory = config.finder.factory()?;
  let options = DispatchOptions {
    query_timeout: config.query_timeout,
  };

  let artifact = generate_recipes(&targets, factory, &options).await?;

  let status = if config.check {
    match stored_fingerprint(&config.output_path) {
      Ok(stored) if stored == artifact.hash => ArtifactStatus::Matches,
      Ok(stored) => ArtifactStatus::Differs {
        stored_hash: Some(stored),
      },
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
        ArtifactStatus::Differs { stored_hash: None }
      }
      Err(e) => return Err(e.into()),
    }
  } else {
    write_artifact(&config.output_path, &artifact)?;
    info!(path = %config.output_path.display(), "wrote recipes");
    ArtifactStatus::Written
  };

  Ok(RunReport {
    artifact,
    output_path: config.output_path.clone(),
    status,
  })
}
