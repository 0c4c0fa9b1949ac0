//! CLI: Generate the canonical recipes file for the targets listed in an items file.
//!
//! Runs one finder query per item concurrently, merges the answers (failing on any
//! conflicting recipe), and writes a sorted, hashed `recipes.json`.
//!
//! Usage: `generate_recipes [OPTIONS] <items-file>`
//! Example: generate_recipes --finder-cmd ./find_recipes.sh problems/crafting/items.json
//!
//! Set RUST_LOG=crafting_recipes=trace for worker lifecycle and span events.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use crafting_recipes::config::{ConfigInput, GeneratorConfig};
use crafting_recipes::pipeline::{ArtifactStatus, run};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Generate the canonical recipes file for an items file.
#[derive(Parser, Debug)]
#[command(name = "generate_recipes")]
#[command(
  after_help = r#"Environment variables (override the matching flags when set):
  RECIPES_FINDER_CMD          Shell command run once per item. Receives the item on stdin and
                              in RECIPE_ITEM; prints {"ok":true,"recipes":[...]} on stdout.
  RECIPES_QUERY_TIMEOUT_SECS  Per-query timeout in seconds (default: none).

Examples:
  generate_recipes --finder-cmd ./find_recipes.sh items.json
  generate_recipes --fixture recorded.json --check items.json"#
)]
struct Args {
  /// Shell command that finds recipes for one item. Overridden by RECIPES_FINDER_CMD if set.
  #[arg(long, value_name = "CMD")]
  finder_cmd: Option<String>,

  /// Recorded finder answers (`{"item": [recipes]}`) instead of a live command.
  #[arg(long, value_name = "PATH")]
  fixture: Option<PathBuf>,

  /// Per-query timeout in seconds. Overridden by RECIPES_QUERY_TIMEOUT_SECS if set.
  #[arg(long, value_name = "SECS")]
  timeout_secs: Option<u64>,

  /// Output file. Default: recipes.json next to the items file.
  #[arg(long, short, value_name = "PATH")]
  output: Option<PathBuf>,

  /// Do not write; exit 1 if the existing output differs from the regenerated one.
  #[arg(long)]
  check: bool,

  /// Path to items.json (relevant_items + miscellaneous_items)
  #[arg(value_name = "items-file")]
  items_path: PathBuf,
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();
  let input = ConfigInput {
    items_path: args.items_path,
    output: args.output,
    finder_cmd: args.finder_cmd,
    fixture: args.fixture,
    timeout_secs: args.timeout_secs,
    check: args.check,
  };

  let config = match GeneratorConfig::resolve(input, |k| std::env::var(k).ok()) {
    Ok(c) => c,
    Err(e) => {
      eprintln!("Error: {}", e);
      process::exit(1);
    }
  };
  info!(finder = ?config.finder, timeout = ?config.query_timeout, output = %config.output_path.display(), "options (env or flags)");

  let report = match run(&config).await {
    Ok(r) => r,
    Err(e) => {
      eprintln!("Error: {}", e);
      process::exit(1);
    }
  };

  println!("Got a total of {} recipes", report.artifact.recipe_count);
  println!("Hash of output: {}", report.artifact.hash);
  match report.status {
    ArtifactStatus::Written => println!("Wrote {}", report.output_path.display()),
    ArtifactStatus::Matches => println!("{} is up to date", report.output_path.display()),
    ArtifactStatus::Differs { stored_hash } => {
      println!(
        "{} differs (stored hash: {})",
        report.output_path.display(),
        stored_hash.as_deref().unwrap_or("missing")
      );
      process::exit(1);
    }
  }
}
