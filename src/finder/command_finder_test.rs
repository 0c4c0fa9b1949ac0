//! Tests for `CommandFinder`.

use super::command_finder::parse_worker_message;
use super::{CommandFinder, CommandFinderFactory, FinderFactory, RecipeFinder};
use crate::types::RawRecipe;

#[test]
fn parse_ok_message() {
  let out = br#"{"ok":true,"recipes":[{"first":"air","second":"fire","result":"stone"}]}"#;
  let recipes = parse_worker_message(out).unwrap();
  assert_eq!(recipes, vec![RawRecipe::new("air", "fire", "stone")]);
}

#[test]
fn parse_ok_without_recipes_is_empty() {
  assert!(parse_worker_message(br#"{"ok":true}"#).unwrap().is_empty());
}

#[test]
fn parse_error_message() {
  let err = parse_worker_message(br#"{"ok":false,"error":"no path"}"#).unwrap_err();
  assert_eq!(err, "no path");
}

#[test]
fn parse_error_without_text() {
  let err = parse_worker_message(br#"{"ok":false}"#).unwrap_err();
  assert!(err.contains("finder reported failure"));
}

#[test]
fn parse_garbage_is_error() {
  let err = parse_worker_message(b"Searching...\n").unwrap_err();
  assert!(err.contains("invalid worker message"));
}

#[tokio::test]
async fn runs_command_with_item_in_env() {
  let mut finder = CommandFinder::new(
    r#"printf '{"ok":true,"recipes":[{"first":"air","second":"fire","result":"%s"}]}' "$RECIPE_ITEM""#,
  );
  let recipes = finder.find_recipes("stone").await.unwrap();
  assert_eq!(recipes, vec![RawRecipe::new("air", "fire", "stone")]);
}

#[tokio::test]
async fn item_is_written_to_stdin() {
  let mut finder = CommandFinder::new(
    r#"read item; printf '{"ok":true,"recipes":[{"first":"%s","second":"%s","result":"x"}]}' "$item" "$item""#,
  );
  let recipes = finder.find_recipes("mud").await.unwrap();
  assert_eq!(recipes, vec![RawRecipe::new("mud", "mud", "x")]);
}

#[tokio::test]
async fn nonzero_exit_is_error() {
  let mut finder = CommandFinder::new("exit 3");
  let err = finder.find_recipes("stone").await.unwrap_err();
  assert_eq!(err, "finder exit 3");
}

#[tokio::test]
async fn empty_command_is_error() {
  let mut finder = CommandFinder::new("  ");
  assert!(finder.find_recipes("stone").await.is_err());
}

#[tokio::test]
async fn factory_creates_independent_finders() {
  let factory = CommandFinderFactory::new(r#"echo '{"ok":true,"recipes":[]}'"#);
  let mut a = factory.create("stone");
  let mut b = factory.create("water");
  assert!(a.find_recipes("stone").await.unwrap().is_empty());
  assert!(b.find_recipes("water").await.unwrap().is_empty());
}
