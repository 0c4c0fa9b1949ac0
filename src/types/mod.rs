//! Data model for a recipe generation run.
//!
//! Target names come in from the items file, [RawRecipe]s come back from the finders,
//! and the stages fold them into a [RecipeTable], a [DedupedRecipeTable] and finally
//! an [Artifact].

mod artifact;
mod deduped_recipe_table;
mod ingredient_pair;
mod raw_recipe;
mod recipe_table;
mod target_items;

pub use artifact::Artifact;
pub use deduped_recipe_table::{DedupedRecipeTable, Ingredients};
pub use ingredient_pair::IngredientPair;
pub use raw_recipe::RawRecipe;
pub use recipe_table::RecipeTable;
pub use target_items::TargetItems;

/// Name of a crafting result the run must resolve a recipe for.
pub type TargetItem = String;
