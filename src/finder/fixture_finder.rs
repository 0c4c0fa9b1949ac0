//! Finder that answers from a recorded JSON fixture (`{"item": [recipes...]}`).
//!
//! Useful to reproduce an artifact offline from a previous engine run.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use super::{FinderFactory, RecipeFinder};
use crate::error::RecipeError;
use crate::types::RawRecipe;

type Fixture = HashMap<String, Vec<RawRecipe>>;

pub struct FixtureFinder {
  fixture: Arc<Fixture>,
}

#[async_trait]
impl RecipeFinder for FixtureFinder {
  async fn find_recipes(&mut self, item: &str) -> Result<Vec<RawRecipe>, String> {
    self
      .fixture
      .get(item)
      .cloned()
      .ok_or_else(|| format!("no fixture entry for {}", item))
  }
}

/// Shares one read-only fixture between all finders it creates.
#[derive(Debug, Clone, Default)]
pub struct FixtureFinderFactory {
  fixture: Arc<Fixture>,
}

impl FixtureFinderFactory {
  pub fn new(fixture: HashMap<String, Vec<RawRecipe>>) -> Self {
    Self {
      fixture: Arc::new(fixture),
    }
  }

  /// Loads a fixture file from `path`.
  pub fn load(path: &Path) -> Result<Self, RecipeError> {
    let bytes = std::fs::read(path)?;
    let fixture: Fixture = serde_json::from_slice(&bytes)?;
    Ok(Self::new(fixture))
  }
}

impl FinderFactory for FixtureFinderFactory {
  fn create(&self, _item: &str) -> Box<dyn RecipeFinder> {
    Box::new(FixtureFinder {
      fixture: Arc::clone(&self.fixture),
    })
  }
}
