//! Isolated query executor: one fresh finder per item, one query, torn down on every path.
//!
//! Teardown is scoped: the [IsolatedWorker] owns its finder and drops it when the
//! query returns, fails, times out, or the surrounding task is aborted.

use std::time::Duration;

use tracing::{instrument, trace};

use crate::error::RecipeError;
use crate::finder::{FinderFactory, RecipeFinder};
use crate::types::RawRecipe;

/// A finder bound to the single item it was created for.
pub(crate) struct IsolatedWorker {
  item: String,
  finder: Box<dyn RecipeFinder>,
}

impl IsolatedWorker {
  pub(crate) fn spawn(factory: &dyn FinderFactory, item: &str) -> Self {
    trace!(item, "worker created");
    Self {
      item: item.to_string(),
      finder: factory.create(item),
    }
  }

  /// Runs the query, bounded by `timeout` when set.
  pub(crate) async fn query(
    &mut self,
    timeout: Option<Duration>,
  ) -> Result<Vec<RawRecipe>, RecipeError> {
    let item = self.item.clone();
    let found = match timeout {
      Some(limit) => tokio::time::timeout(limit, self.finder.find_recipes(&item))
        .await
        .map_err(|_| RecipeError::QueryTimedOut {
          item: item.clone(),
          timeout: limit,
        })?,
      None => self.finder.find_recipes(&item).await,
    };
    found.map_err(|reason| RecipeError::QueryFailed { item, reason })
  }
}

impl Drop for IsolatedWorker {
  fn drop(&mut self) {
    trace!(item = %self.item, "worker torn down");
  }
}

/// Runs one discovery query for `item` in a fresh finder and discards the finder afterwards.
#[instrument(level = "trace", skip(factory))]
pub async fn run_isolated(
  factory: &dyn FinderFactory,
  item: &str,
  timeout: Option<Duration>,
) -> Result<Vec<RawRecipe>, RecipeError> {
  let mut worker = IsolatedWorker::spawn(factory, item);
  worker.query(timeout).await
}
