use std::path::{Path, PathBuf};

use raw_import_common::{AssetKind, RawSpecifier, SpecifierKind};
use raw_import_error::Error;
use sugar_path::SugarPath;

/// The file a raw import points to. It might not exist, that's for the loader to find out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
  pub path: PathBuf,
  pub kind: AssetKind,
}

/// Resolves raw imports of a single importer.
///
/// Relative specifiers are resolved against the importer's directory, `/x` against
/// the root and bare specifiers against `<root>/node_modules`. Nothing is allowed
/// to resolve outside of the root.
#[derive(Debug)]
pub struct Resolver {
  root: PathBuf,
  importer_dir: PathBuf,
}

impl Resolver {
  pub fn new(root: impl AsRef<Path>, importer: Option<&Path>) -> Self {
    let root = root.as_ref().normalize();
    let importer_dir = importer
      .map(|importer| {
        if importer.is_absolute() {
          importer.normalize()
        } else {
          root.join(importer).normalize()
        }
      })
      .and_then(|importer| importer.parent().map(Path::to_path_buf))
      .unwrap_or_else(|| root.clone());
    Self { root, importer_dir }
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  pub fn importer_dir(&self) -> &Path {
    &self.importer_dir
  }

  pub fn resolve(&self, specifier: &RawSpecifier) -> raw_import_error::Result<ResolvedFile> {
    if !self.root.is_absolute() {
      return Err(Error::relative_root(specifier.raw(), &self.root));
    }
    if specifier.path().is_empty() {
      return Err(Error::empty_raw_import(specifier.raw()));
    }

    let joined = match specifier.kind() {
      SpecifierKind::Relative => self.importer_dir.join(specifier.path()),
      SpecifierKind::RootAbsolute => self.root.join(specifier.path().trim_start_matches('/')),
      SpecifierKind::Bare => self.root.join("node_modules").join(specifier.path()),
    };
    let path = joined.normalize();

    if !path.starts_with(&self.root) {
      return Err(Error::raw_import_outside_root(specifier.raw(), path));
    }

    tracing::trace!("Resolved {} to {}", specifier, path.display());
    Ok(ResolvedFile {
      kind: AssetKind::from_path(&path),
      path,
    })
  }
}
