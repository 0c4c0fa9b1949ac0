//! Folds every discovered recipe into one [RecipeTable], rejecting contradictions.
//!
//! The same result is often rediscovered while searching for different targets. A
//! rediscovery with the same ingredients (in either order) is accepted and the first-seen
//! order is kept; different ingredients are a [RecipeError::Conflict]. The outcome does not
//! depend on the order recipes arrive in.

use std::collections::hash_map::Entry;

use tracing::{debug, instrument};

use crate::error::RecipeError;
use crate::types::{RawRecipe, RecipeTable};

/// Adds one recipe to `table`.
pub fn merge_recipe(table: &mut RecipeTable, recipe: RawRecipe) -> Result<(), RecipeError> {
  let (result, incoming) = recipe.into_parts();
  match table.entry(result) {
    Entry::Vacant(slot) => {
      slot.insert(incoming);
      Ok(())
    }
    Entry::Occupied(slot) => {
      let existing = slot.get();
      if existing.matches_unordered(&incoming) {
        debug!(result = %slot.key(), "rediscovered recipe");
        Ok(())
      } else {
        Err(RecipeError::Conflict {
          result: slot.key().clone(),
          existing: existing.clone(),
          incoming,
        })
      }
    }
  }
}

/// Folds the recipe lists of all queries into one table.
#[instrument(level = "trace", skip(results))]
pub fn fold_recipes<I, R>(results: I) -> Result<RecipeTable, RecipeError>
where
  I: IntoIterator<Item = R>,
  R: IntoIterator<Item = RawRecipe>,
{
  let mut table = RecipeTable::new();
  for recipes in results {
    for recipe in recipes {
      merge_recipe(&mut table, recipe)?;
    }
  }
  Ok(table)
}
