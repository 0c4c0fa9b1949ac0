//! Result → distinct ingredient names, after self-combinations are collapsed.

use std::collections::HashMap;

use super::IngredientPair;

/// Distinct ingredients of one recipe in first-appearance order.
///
/// A self-combination (`water + water`) holds one name, any other recipe two.
/// There is no empty form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ingredients {
  Single(String),
  Pair(String, String),
}

impl Ingredients {
  /// Collapses a pair to its distinct names, keeping `first` before `second`.
  pub fn from_pair(pair: IngredientPair) -> Self {
    if pair.is_self_combination() {
      Ingredients::Single(pair.first)
    } else {
      Ingredients::Pair(pair.first, pair.second)
    }
  }

  pub fn len(&self) -> usize {
    match self {
      Ingredients::Single(_) => 1,
      Ingredients::Pair(_, _) => 2,
    }
  }

  /// Names in first-appearance order.
  pub fn names(&self) -> impl Iterator<Item = &str> {
    let (first, second) = match self {
      Ingredients::Single(a) => (a, None),
      Ingredients::Pair(a, b) => (a, Some(b)),
    };
    std::iter::once(first.as_str()).chain(second.map(String::as_str))
  }

  /// Back to pair form; a single name pairs with itself.
  pub fn to_pair(&self) -> IngredientPair {
    match self {
      Ingredients::Single(a) => IngredientPair::new(a.clone(), a.clone()),
      Ingredients::Pair(a, b) => IngredientPair::new(a.clone(), b.clone()),
    }
  }
}

/// Recipe table whose entries hold 1 or 2 distinct ingredient names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DedupedRecipeTable {
  entries: HashMap<String, Ingredients>,
}

impl DedupedRecipeTable {
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn get(&self, result: &str) -> Option<&Ingredients> {
    self.entries.get(result)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&String, &Ingredients)> {
    self.entries.iter()
  }
}

impl FromIterator<(String, Ingredients)> for DedupedRecipeTable {
  fn from_iter<I: IntoIterator<Item = (String, Ingredients)>>(iter: I) -> Self {
    Self {
      entries: iter.into_iter().collect(),
    }
  }
}
