//! Boundary to the recipe-discovery engine.
//!
//! The engine is opaque: given an item name it returns the recipes it walked through to
//! reach it. A [FinderFactory] hands out a fresh [RecipeFinder] per item so no state
//! leaks between queries; the executor drops it as soon as the query ends.

mod command_finder;
#[cfg(test)]
mod command_finder_test;
mod fixture_finder;

pub use command_finder::{CommandFinder, CommandFinderFactory, ITEM_ENV_VAR};
pub use fixture_finder::{FixtureFinder, FixtureFinderFactory};

use crate::types::RawRecipe;
use async_trait::async_trait;

/// One discovery engine instance, used for exactly one item.
#[async_trait]
pub trait RecipeFinder: Send {
  /// Finds the recipes leading to `item`. Errors are opaque strings from the engine.
  async fn find_recipes(&mut self, item: &str) -> Result<Vec<RawRecipe>, String>;
}

/// Creates a fresh, isolated [RecipeFinder] for each item.
pub trait FinderFactory: Send + Sync {
  fn create(&self, item: &str) -> Box<dyn RecipeFinder>;
}
