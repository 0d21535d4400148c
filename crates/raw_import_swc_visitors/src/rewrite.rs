use rustc_hash::FxHashMap;
use swc_core::ecma::{
  ast::{self, ModuleDecl, ModuleItem},
  visit::{noop_visit_mut_type, VisitMut},
};

/// Replace the top-level statement at `stmt_index` with `item`.
#[derive(Debug)]
pub struct Rewrite {
  pub stmt_index: usize,
  pub item: ModuleItem,
}

/// Apply `rewrites` to the top-level statements of a module.
///
/// Each replaced statement keeps its index, so siblings never move. Nested code
/// is not visited.
pub fn rewriter(rewrites: Vec<Rewrite>) -> impl VisitMut {
  Rewriter {
    rewrites: rewrites
      .into_iter()
      .map(|rewrite| (rewrite.stmt_index, rewrite.item))
      .collect(),
  }
}

struct Rewriter {
  rewrites: FxHashMap<usize, ModuleItem>,
}

impl VisitMut for Rewriter {
  noop_visit_mut_type!();

  fn visit_mut_module(&mut self, module: &mut ast::Module) {
    for (index, item) in module.body.iter_mut().enumerate() {
      if let Some(replacement) = self.rewrites.remove(&index) {
        debug_assert!(
          matches!(item, ModuleItem::ModuleDecl(ModuleDecl::Import(_))),
          "Only import declarations are rewritten"
        );
        *item = replacement;
      }
    }
    debug_assert!(
      self.rewrites.is_empty(),
      "Rewrites out of range: {:?}",
      self.rewrites.keys().collect::<Vec<_>>()
    );
  }
}
