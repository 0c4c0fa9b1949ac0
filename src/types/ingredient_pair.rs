//! Ordered ingredient pair stored per result in a [super::RecipeTable].

use std::fmt;

/// The two ingredients of a recipe, in the order they were first seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientPair {
  pub first: String,
  pub second: String,
}

impl IngredientPair {
  pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
    Self {
      first: first.into(),
      second: second.into(),
    }
  }

  /// True when both pairs hold the same ingredients, ignoring order.
  pub fn matches_unordered(&self, other: &IngredientPair) -> bool {
    (self.first == other.first && self.second == other.second)
      || (self.first == other.second && self.second == other.first)
  }

  /// True when the item combines with itself.
  pub fn is_self_combination(&self) -> bool {
    self.first == self.second
  }
}

impl fmt::Display for IngredientPair {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} + {}", self.first, self.second)
  }
}
