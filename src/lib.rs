//! # crafting-recipes
//!
//! Builds a canonical `result → ingredients` recipe table by querying a recipe-discovery
//! engine once per target item.
//!
//! ## Pipeline
//!
//! targets → [dispatcher] (one isolated [executor] worker per item, concurrently)
//! → [merger] (conflict-checked fold) → [dedupe] → [serializer] (sorted text + SHA-256)
//! → [artifact_io].
//!
//! The engine itself sits behind [finder::RecipeFinder]; see [finder::CommandFinder] and
//! [finder::FixtureFinder].

pub mod artifact_io;
pub mod config;
pub mod dedupe;
pub mod dispatcher;
pub mod error;
pub mod executor;
pub mod finder;
pub mod merger;
pub mod pipeline;
pub mod serializer;
#[cfg(test)]
mod test_support;
pub mod types;

pub use dispatcher::{DispatchOptions, dispatch};
pub use error::RecipeError;
pub use finder::{FinderFactory, RecipeFinder};
pub use merger::fold_recipes;
pub use pipeline::{generate_recipes, run};
pub use types::{Artifact, DedupedRecipeTable, RawRecipe, RecipeTable};
