//! Artifact persistence and reproducibility checks against an existing file.

use std::path::Path;

use tracing::instrument;

use crate::serializer::fingerprint;
use crate::types::Artifact;

/// Default artifact filename, written next to the items file.
pub const ARTIFACT_FILENAME: &str = "recipes.json";

/// Writes the artifact text to `path`, creating the parent directory if needed.
#[instrument(level = "trace", skip(path, artifact))]
pub fn write_artifact(path: &Path, artifact: &Artifact) -> Result<(), std::io::Error> {
  if let Some(parent) = path.parent()
    && !parent.as_os_str().is_empty()
  {
    std::fs::create_dir_all(parent)?;
  }
  std::fs::write(path, artifact.as_bytes())
}

/// Fingerprint of the artifact currently stored at `path`.
pub fn stored_fingerprint(path: &Path) -> Result<String, std::io::Error> {
  let bytes = std::fs::read(path)?;
  Ok(fingerprint(&bytes))
}
