//! Merged result → ingredient pair table.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::collections::hash_map::Entry;

use super::IngredientPair;

/// Mapping from result name to the ingredient pair that crafts it.
///
/// Built by [crate::merger::fold_recipes]; at most one pair (up to ordering) is
/// ever stored for a result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeTable {
  entries: HashMap<String, IngredientPair>,
}

impl RecipeTable {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn get(&self, result: &str) -> Option<&IngredientPair> {
    self.entries.get(result)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&String, &IngredientPair)> {
    self.entries.iter()
  }

  pub(crate) fn entry(&mut self, result: String) -> Entry<'_, String, IngredientPair> {
    self.entries.entry(result)
  }

  /// Order-insensitive view: result → set of ingredient names.
  pub fn ingredient_sets(&self) -> BTreeMap<String, BTreeSet<String>> {
    self
      .entries
      .iter()
      .map(|(result, pair)| {
        let set: BTreeSet<String> = [pair.first.clone(), pair.second.clone()]
          .into_iter()
          .collect();
        (result.clone(), set)
      })
      .collect()
  }
}

impl IntoIterator for RecipeTable {
  type Item = (String, IngredientPair);
  type IntoIter = std::collections::hash_map::IntoIter<String, IngredientPair>;

  fn into_iter(self) -> Self::IntoIter {
    self.entries.into_iter()
  }
}
