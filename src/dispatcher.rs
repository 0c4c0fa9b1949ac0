//! Fan-out/fan-in over isolated workers, one per target item.
//!
//! All queries start at once. The first failure aborts every query still running and
//! becomes the result of the whole dispatch; no partial results are returned.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;
use tracing::{info, instrument, warn};

use crate::error::RecipeError;
use crate::executor::run_isolated;
use crate::finder::FinderFactory;
use crate::types::{RawRecipe, TargetItem};

/// Options for [dispatch].
#[derive(Debug, Clone, Default)]
pub struct DispatchOptions {
  /// Per-query timeout. `None` lets a query run until it resolves.
  pub query_timeout: Option<Duration>,
}

/// Recipes found per target item.
pub type QueryResults = BTreeMap<TargetItem, Vec<RawRecipe>>;

/// Runs one isolated query per target concurrently and collects every result.
#[instrument(level = "trace", skip(targets, factory), fields(targets = targets.len()))]
pub async fn dispatch(
  targets: &BTreeSet<TargetItem>,
  factory: Arc<dyn FinderFactory>,
  options: &DispatchOptions,
) -> Result<QueryResults, RecipeError> {
  let mut set = JoinSet::new();
  let mut task_items = HashMap::new();
  for item in targets {
    let factory = Arc::clone(&factory);
    let timeout = options.query_timeout;
    let task_item = item.clone();
    let handle = set.spawn(async move {
      let found = run_isolated(factory.as_ref(), &task_item, timeout).await;
      (task_item, found)
    });
    task_items.insert(handle.id(), item.clone());
  }

  let mut results = QueryResults::new();
  while let Some(joined) = set.join_next().await {
    let failure = match joined {
      Ok((item, Ok(recipes))) => {
        info!(item = %item, recipes = recipes.len(), "got recipes");
        results.insert(item, recipes);
        continue;
      }
      Ok((_, Err(e))) => e,
      Err(join_err) => RecipeError::WorkerPanicked {
        item: task_items.remove(&join_err.id()).unwrap_or_default(),
      },
    };
    warn!(error = %failure, "query failed, aborting remaining queries");
    // Waits for the aborted workers so every finder is torn down before returning.
    set.shutdown().await;
    return Err(failure);
  }
  Ok(results)
}
