use std::path::Path;

/// How the content of a raw-imported file is turned into a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
  /// Inlined byte for byte.
  Text,
  /// Parsed and pretty-printed before inlining.
  Json,
}

impl AssetKind {
  pub fn from_path(p: &Path) -> Self {
    match p.extension().and_then(|ext| ext.to_str()) {
      Some("json") => Self::Json,
      _ => Self::Text,
    }
  }

  pub fn is_json(&self) -> bool {
    matches!(self, Self::Json)
  }
}
