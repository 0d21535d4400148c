use raw_import_common::RawSpecifier;
use raw_import_swc_utils::ImportDeclExt;
use swc_core::ecma::ast::{self, ModuleDecl, ModuleItem};

/// A top-level `import ... from "...?raw"` found by [scan_raw_imports].
#[derive(Debug, Clone)]
pub struct ScannedRawImport<'a> {
  /// Index of the declaration in `Module::body`.
  pub stmt_index: usize,
  pub decl: &'a ast::ImportDecl,
  pub specifier: RawSpecifier,
}

/// Lazily walk the top-level statements and yield every raw import, in source order.
///
/// Notices
/// 1. Only import declarations are considered. `export * from "./a.txt?raw"` is left to the host.
/// 2. `import type` declarations are erased by the host and never yielded.
pub fn scan_raw_imports(items: &[ModuleItem]) -> impl Iterator<Item = ScannedRawImport<'_>> {
  items
    .iter()
    .enumerate()
    .filter_map(|(stmt_index, item)| match item {
      ModuleItem::ModuleDecl(ModuleDecl::Import(decl)) if !decl.type_only => {
        let Some(specifier) = RawSpecifier::parse(decl.source()) else {
          tracing::trace!("Skip non-raw import {:?}", decl.source());
          return None;
        };
        Some(ScannedRawImport {
          stmt_index,
          decl,
          specifier,
        })
      }
      _ => None,
    })
}
