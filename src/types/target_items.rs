//! Items file: the target names a run resolves recipes for.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::TargetItem;
use crate::error::RecipeError;

/// Two groups of target names, as stored in `items.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetItems {
  #[serde(default)]
  pub relevant_items: Vec<String>,
  #[serde(default)]
  pub miscellaneous_items: Vec<String>,
}

impl TargetItems {
  /// Merges both groups into one ordered set. Duplicates collapse; blank names are rejected.
  pub fn targets(&self) -> Result<BTreeSet<TargetItem>, RecipeError> {
    let mut out = BTreeSet::new();
    for name in self
      .relevant_items
      .iter()
      .chain(self.miscellaneous_items.iter())
    {
      if name.trim().is_empty() {
        return Err(RecipeError::Config("blank item name in items file".to_string()));
      }
      out.insert(name.clone());
    }
    Ok(out)
  }
}
