use std::fmt::Display;

/// The only query the rewriter acts on. Any other query leaves the import to the host.
const RAW_QUERY: &str = "raw";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecifierKind {
  /// `./a.txt`, `../a.txt`
  Relative,
  /// `/assets/a.txt`, resolved from the root directory.
  RootAbsolute,
  /// `pkg/LICENSE`, resolved from `<root>/node_modules`.
  Bare,
}

/// The module specifier of a raw import, e.g. `./package.json?raw`.
///
/// `raw` is the text as written in the source, `path` is everything before the
/// last `?`, which must be followed by exactly `raw`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSpecifier {
  raw: String,
  path: String,
}

impl RawSpecifier {
  /// Returns `None` if the specifier doesn't end with the `?raw` query.
  pub fn parse(specifier: &str) -> Option<Self> {
    let (path, query) = specifier.rsplit_once('?')?;
    if query != RAW_QUERY {
      return None;
    }
    Some(Self {
      raw: specifier.to_string(),
      path: path.to_string(),
    })
  }

  pub fn raw(&self) -> &str {
    &self.raw
  }

  pub fn path(&self) -> &str {
    &self.path
  }

  pub fn kind(&self) -> SpecifierKind {
    let path = self.path.as_str();
    if path == "." || path == ".." || path.starts_with("./") || path.starts_with("../") {
      SpecifierKind::Relative
    } else if path.starts_with('/') {
      SpecifierKind::RootAbsolute
    } else {
      SpecifierKind::Bare
    }
  }
}

impl Display for RawSpecifier {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.raw)
  }
}
