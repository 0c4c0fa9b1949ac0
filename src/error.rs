//! Error type for a recipe generation run.
//!
//! Every failure aborts the whole run; there is no partial-success mode.

use std::time::Duration;

use thiserror::Error;

use crate::types::IngredientPair;

#[derive(Debug, Error)]
pub enum RecipeError {
  /// The finder reported an error for one item.
  #[error("failed to find item {item}: {reason}")]
  QueryFailed { item: String, reason: String },

  /// The finder did not answer within the configured per-query timeout.
  #[error("failed to find item {item}: timed out after {timeout:?}")]
  QueryTimedOut { item: String, timeout: Duration },

  /// The task running the query panicked or was cancelled.
  #[error("worker for item {item} did not complete")]
  WorkerPanicked { item: String },

  /// Two discovered recipes disagree on the ingredients of the same result.
  #[error("recipe conflict: {result} ({existing} vs {incoming})")]
  Conflict {
    result: String,
    existing: IngredientPair,
    incoming: IngredientPair,
  },

  #[error("config: {0}")]
  Config(String),

  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),
}

impl RecipeError {
  /// Item whose query caused the error, if any.
  pub fn item(&self) -> Option<&str> {
    match self {
      RecipeError::QueryFailed { item, .. }
      | RecipeError::QueryTimedOut { item, .. }
      | RecipeError::WorkerPanicked { item } => Some(item.as_str()),
      _ => None,
    }
  }
}
