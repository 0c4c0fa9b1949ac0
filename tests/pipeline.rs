//! Library-level end-to-end tests: real finder processes through the public API.

use std::collections::BTreeSet;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crafting_recipes::finder::{CommandFinderFactory, FixtureFinderFactory};
use crafting_recipes::{DispatchOptions, FinderFactory, RawRecipe, RecipeError, generate_recipes};

/// Shell finder answering per `$RECIPE_ITEM`; any other item fails.
const FINDER: &str = r#"case "$RECIPE_ITEM" in
  stone) echo '{"ok":true,"recipes":[{"first":"air","second":"fire","result":"stone"}]}' ;;
  water) echo '{"ok":true,"recipes":[{"first":"stone","second":"fire","result":"lava"}]}' ;;
  slow) sleep 30; echo '{"ok":true,"recipes":[]}' ;;
  *) echo "{\"ok\":false,\"error\":\"cannot find $RECIPE_ITEM\"}" ;;
esac"#;

const EXPECTED: &str =
  "{\n  \"lava\": [\"stone\", \"fire\"],\n  \"stone\": [\"air\", \"fire\"]\n}\n";

fn targets(names: &[&str]) -> BTreeSet<String> {
  names.iter().map(|s| s.to_string()).collect()
}

fn command_factory() -> Arc<dyn FinderFactory> {
  Arc::new(CommandFinderFactory::new(FINDER))
}

#[tokio::test]
async fn command_finder_end_to_end() {
  let artifact = generate_recipes(
    &targets(&["stone", "water"]),
    command_factory(),
    &DispatchOptions::default(),
  )
  .await
  .expect("generate");
  assert_eq!(artifact.text, EXPECTED);
  assert_eq!(artifact.hash, "WDoqYqEDEo45eJ3nxJvfwlBr+xD6rW3vt/SGku5WCmI=");
}

#[tokio::test]
async fn repeated_runs_are_byte_identical() {
  let opts = DispatchOptions::default();
  let a = generate_recipes(&targets(&["stone", "water"]), command_factory(), &opts)
    .await
    .expect("first run");
  let b = generate_recipes(&targets(&["water", "stone"]), command_factory(), &opts)
    .await
    .expect("second run");
  assert_eq!(a.text, b.text);
  assert_eq!(a.hash, b.hash);
}

#[tokio::test]
async fn failing_item_aborts_run() {
  let err = generate_recipes(
    &targets(&["stone", "water", "unobtainium"]),
    command_factory(),
    &DispatchOptions::default(),
  )
  .await
  .expect_err("must fail");
  match err {
    RecipeError::QueryFailed { item, reason } => {
      assert_eq!(item, "unobtainium");
      assert!(reason.contains("cannot find unobtainium"));
    }
    other => panic!("unexpected error: {other}"),
  }
}

#[tokio::test]
async fn slow_item_times_out() {
  let opts = DispatchOptions {
    query_timeout: Some(Duration::from_millis(300)),
  };
  let started = std::time::Instant::now();
  let err = generate_recipes(&targets(&["stone", "slow"]), command_factory(), &opts)
    .await
    .expect_err("must time out");
  assert!(matches!(err, RecipeError::QueryTimedOut { ref item, .. } if item == "slow"));
  assert!(started.elapsed() < Duration::from_secs(20));
}

#[tokio::test]
async fn fixture_conflict_names_result() {
  let mut fixture = HashMap::new();
  fixture.insert(
    "stone".to_string(),
    vec![RawRecipe::new("air", "fire", "stone")],
  );
  fixture.insert(
    "mud".to_string(),
    vec![
      RawRecipe::new("earth", "water", "stone"),
      RawRecipe::new("earth", "water", "mud"),
    ],
  );
  let err = generate_recipes(
    &targets(&["stone", "mud"]),
    Arc::new(FixtureFinderFactory::new(fixture)),
    &DispatchOptions::default(),
  )
  .await
  .expect_err("must conflict");
  assert!(matches!(err, RecipeError::Conflict { ref result, .. } if result == "stone"));
}

#[tokio::test]
async fn self_combination_is_deduplicated() {
  let mut fixture = HashMap::new();
  fixture.insert(
    "lake".to_string(),
    vec![RawRecipe::new("Water", "Water", "Lake")],
  );
  let artifact = generate_recipes(
    &targets(&["lake"]),
    Arc::new(FixtureFinderFactory::new(fixture)),
    &DispatchOptions::default(),
  )
  .await
  .expect("generate");
  assert_eq!(artifact.text, "{\n  \"lake\": [\"water\"]\n}\n");
}
