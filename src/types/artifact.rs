//! Final serialized recipe table and its fingerprint.

/// Canonical artifact text plus the base64 SHA-256 of exactly that text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
  pub text: String,
  pub hash: String,
  /// Number of recipes rendered into `text`.
  pub recipe_count: usize,
}

impl Artifact {
  pub fn as_bytes(&self) -> &[u8] {
    self.text.as_bytes()
  }
}
