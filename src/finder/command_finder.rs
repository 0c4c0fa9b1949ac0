//! Finder backed by an external command, one child process per item.
//!
//! The command runs under `sh -c` with the item name on stdin (and in [ITEM_ENV_VAR]).
//! It must print a single worker message on stdout:
//! `{"ok": true, "recipes": [...]}` or `{"ok": false, "error": "..."}`.

use std::process::Stdio;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::instrument;

use super::{FinderFactory, RecipeFinder};
use crate::types::RawRecipe;

/// Environment variable carrying the item name into the child process.
pub const ITEM_ENV_VAR: &str = "RECIPE_ITEM";

/// Reply printed by the finder command.
#[derive(Debug, Deserialize)]
pub(crate) struct WorkerMessage {
  ok: bool,
  #[serde(default)]
  recipes: Vec<RawRecipe>,
  #[serde(default)]
  error: Option<String>,
}

/// Parses the child's stdout into recipes, or the error it reported.
pub(crate) fn parse_worker_message(stdout: &[u8]) -> Result<Vec<RawRecipe>, String> {
  let msg: WorkerMessage =
    serde_json::from_slice(stdout).map_err(|e| format!("invalid worker message: {}", e))?;
  if msg.ok {
    Ok(msg.recipes)
  } else {
    Err(
      msg
        .error
        .unwrap_or_else(|| "finder reported failure".to_string()),
    )
  }
}

/// Runs the configured command once for one item.
pub struct CommandFinder {
  command: String,
}

impl CommandFinder {
  pub fn new(command: impl Into<String>) -> Self {
    Self {
      command: command.into(),
    }
  }
}

#[async_trait]
impl RecipeFinder for CommandFinder {
  #[instrument(level = "trace", skip(self))]
  async fn find_recipes(&mut self, item: &str) -> Result<Vec<RawRecipe>, String> {
    if self.command.trim().is_empty() {
      return Err("finder command is empty".to_string());
    }
    // kill_on_drop: a timed-out or aborted query must not leave the child running.
    let mut child = Command::new("sh")
      .arg("-c")
      .arg(&self.command)
      .env(ITEM_ENV_VAR, item)
      .stdin(Stdio::piped())
      .stdout(Stdio::piped())
      .stderr(Stdio::inherit())
      .kill_on_drop(true)
      .spawn()
      .map_err(|e| format!("finder spawn: {}", e))?;

    if let Some(mut stdin) = child.stdin.take() {
      // The command may ignore stdin and exit early; a broken pipe is not an error.
      let _ = stdin.write_all(item.as_bytes()).await;
      let _ = stdin.write_all(b"\n").await;
    }

    let output = child
      .wait_with_output()
      .await
      .map_err(|e| format!("finder wait: {}", e))?;
    if !output.status.success() {
      return Err(
        output
          .status
          .code()
          .map(|c| format!("finder exit {}", c))
          .unwrap_or_else(|| "finder killed by signal".to_string()),
      );
    }
    parse_worker_message(&output.stdout)
  }
}

/// Hands out a [CommandFinder] per item; every query spawns its own process.
#[derive(Debug, Clone)]
pub struct CommandFinderFactory {
  command: String,
}

impl CommandFinderFactory {
  pub fn new(command: impl Into<String>) -> Self {
    Self {
      command: command.into(),
    }
  }
}

impl FinderFactory for CommandFinderFactory {
  fn create(&self, _item: &str) -> Box<dyn RecipeFinder> {
    Box::new(CommandFinder::new(self.command.clone()))
  }
}
