//! A single recipe as reported by a finder.

use serde::{Deserialize, Serialize};

use super::IngredientPair;

/// One discovered `first + second = result` triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawRecipe {
  pub first: String,
  pub second: String,
  pub result: String,
}

impl RawRecipe {
  pub fn new(
    first: impl Into<String>,
    second: impl Into<String>,
    result: impl Into<String>,
  ) -> Self {
    Self {
      first: first.into(),
      second: second.into(),
      result: result.into(),
    }
  }

  /// Splits the recipe into its result name and ingredient pair.
  pub fn into_parts(self) -> (String, IngredientPair) {
    (self.result, IngredientPair::new(self.first, self.second))
  }
}
