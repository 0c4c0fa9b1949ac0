//! Canonical text rendering of a [DedupedRecipeTable] plus its SHA-256 fingerprint.
//!
//! The text is a pure function of table content: one line per result, lines sorted by
//! their full rendered text, so map iteration order never shows through. Names are
//! sanitized before rendering; results that end up under the same key must agree on
//! their ingredients or the run fails with a conflict.
//!
//! ```text
//! {
//!   "lava": ["stone", "fire"],
//!   "stone": ["air", "fire"]
//! }
//! ```

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use sha2::{Digest, Sha256};
use tracing::{debug, instrument};

use crate::error::RecipeError;
use crate::types::{Artifact, DedupedRecipeTable, IngredientPair, Ingredients};

const INDENT: &str = "  ";

/// Lowercases a name and replaces `+` with `p` and `=` with `?`.
pub fn sanitize_name(name: &str) -> String {
  name.to_lowercase().replace('+', "p").replace('=', "?")
}

/// Sanitizes every key and ingredient name.
///
/// Ingredients that become equal collapse like a self-combination. Results that map to
/// the same key are merged when their ingredient sets match and rejected otherwise.
/// Raw names are visited in sorted order so the kept ordering and any reported
/// conflict do not depend on table iteration order.
pub fn canonicalize(table: &DedupedRecipeTable) -> Result<DedupedRecipeTable, RecipeError> {
  let mut raw: Vec<(&String, &Ingredients)> = table.iter().collect();
  raw.sort_by(|a, b| a.0.cmp(b.0));

  let mut out: BTreeMap<String, Ingredients> = BTreeMap::new();
  for (result, ingredients) in raw {
    let pair = ingredients.to_pair();
    let incoming = Ingredients::from_pair(IngredientPair::new(
      sanitize_name(&pair.first),
      sanitize_name(&pair.second),
    ));
    match out.entry(sanitize_name(result)) {
      Entry::Vacant(slot) => {
        slot.insert(incoming);
      }
      Entry::Occupied(slot) => {
        let existing = slot.get().to_pair();
        let incoming = incoming.to_pair();
        if !existing.matches_unordered(&incoming) {
          return Err(RecipeError::Conflict {
            result: slot.key().clone(),
            existing,
            incoming,
          });
        }
        debug!(key = %slot.key(), result = %result, "merged result with same sanitized key");
      }
    }
  }
  Ok(out.into_iter().collect())
}

/// JSON string literal for `s`.
fn quote(s: &str) -> String {
  serde_json::Value::String(s.to_string()).to_string()
}

/// Renders one entry as `  "key": ["a", "b"]`. Names are written as given.
pub fn render_line(result: &str, ingredients: &Ingredients) -> String {
  let quoted: Vec<String> = ingredients.names().map(quote).collect();
  format!("{}{}: [{}]", INDENT, quote(result), quoted.join(", "))
}

/// Base64 SHA-256 of `bytes`.
pub fn fingerprint(bytes: &[u8]) -> String {
  STANDARD.encode(Sha256::digest(bytes))
}

/// Sanitizes the table, renders it canonically and fingerprints the exact text.
#[instrument(level = "trace", skip(table), fields(recipes = table.len()))]
pub fn serialize(table: &DedupedRecipeTable) -> Result<Artifact, RecipeError> {
  let table = canonicalize(table)?;
  let mut lines: Vec<String> = table
    .iter()
    .map(|(result, ingredients)| render_line(result, ingredients))
    .collect();
  lines.sort();

  let mut text = String::from("{\n");
  if !lines.is_empty() {
    text.push_str(&lines.join(",\n"));
    text.push('\n');
  }
  text.push_str("}\n");

  let hash = fingerprint(text.as_bytes());
  Ok(Artifact {
    text,
    hash,
    recipe_count: lines.len(),
  })
}
