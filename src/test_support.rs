//! In-memory finders shared by the unit tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::finder::{FinderFactory, RecipeFinder};
use crate::types::RawRecipe;

/// Counts finder creations and teardowns.
#[derive(Debug, Default)]
pub(crate) struct Lifecycle {
  pub created: AtomicUsize,
  pub dropped: AtomicUsize,
}

impl Lifecycle {
  pub fn created(&self) -> usize {
    self.created.load(Ordering::SeqCst)
  }

  pub fn dropped(&self) -> usize {
    self.dropped.load(Ordering::SeqCst)
  }
}

/// Per-item scripted answer.
#[derive(Debug, Clone)]
pub(crate) enum Answer {
  Recipes(Vec<RawRecipe>),
  Fail(String),
  Hang,
  Panic,
}

pub(crate) struct ScriptedFinder {
  answers: Arc<HashMap<String, Answer>>,
  lifecycle: Arc<Lifecycle>,
  queries: usize,
}

#[async_trait]
impl RecipeFinder for ScriptedFinder {
  async fn find_recipes(&mut self, item: &str) -> Result<Vec<RawRecipe>, String> {
    self.queries += 1;
    assert_eq!(self.queries, 1, "finder reused for a second query");
    match self.answers.get(item) {
      Some(Answer::Recipes(r)) => Ok(r.clone()),
      Some(Answer::Fail(e)) => Err(e.clone()),
      Some(Answer::Hang) => {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(vec![])
      }
      Some(Answer::Panic) => panic!("finder crashed on {}", item),
      None => Err(format!("unscripted item {}", item)),
    }
  }
}

impl Drop for ScriptedFinder {
  fn drop(&mut self) {
    self.lifecycle.dropped.fetch_add(1, Ordering::SeqCst);
  }
}

#[derive(Default)]
pub(crate) struct ScriptedFactory {
  answers: Arc<HashMap<String, Answer>>,
  pub lifecycle: Arc<Lifecycle>,
}

impl ScriptedFactory {
  pub fn new(answers: Vec<(&str, Answer)>) -> Self {
    Self {
      answers: Arc::new(
        answers
          .into_iter()
          .map(|(k, v)| (k.to_string(), v))
          .collect(),
      ),
      lifecycle: Arc::new(Lifecycle::default()),
    }
  }
}

impl FinderFactory for ScriptedFactory {
  fn create(&self, _item: &str) -> Box<dyn RecipeFinder> {
    self.lifecycle.created.fetch_add(1, Ordering::SeqCst);
    Box::new(ScriptedFinder {
      answers: Arc::clone(&self.answers),
      lifecycle: Arc::clone(&self.lifecycle),
      queries: 0,
    })
  }
}

/// The two-item scenario: stone is crafted from air and fire, the water search passes through lava.
pub(crate) fn stone_and_water() -> Vec<(&'static str, Answer)> {
  vec![
    (
      "stone",
      Answer::Recipes(vec![RawRecipe::new("air", "fire", "stone")]),
    ),
    (
      "water",
      Answer::Recipes(vec![RawRecipe::new("stone", "fire", "lava")]),
    ),
  ]
}
