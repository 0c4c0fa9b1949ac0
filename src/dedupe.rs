//! Collapses each ingredient pair to its distinct names.

use tracing::instrument;

use crate::types::{DedupedRecipeTable, Ingredients, RecipeTable};

/// Replaces every pair with its distinct ingredients (`water + water` becomes `[water]`).
#[instrument(level = "trace", skip(table), fields(recipes = table.len()))]
pub fn dedupe(table: RecipeTable) -> DedupedRecipeTable {
  table
    .into_iter()
    .map(|(result, pair)| (result, Ingredients::from_pair(pair)))
    .collect()
}
