use swc_core::ecma::ast;

/// The shape of the bindings of an import declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportForm<'a> {
  /// `import foo from "./foo"`
  Default(&'a ast::Ident),
  /// `import { foo } from "./foo"`, also `import foo, { bar } from "./foo"`
  Named,
  /// `import * as foo from "./foo"`, also `import foo, * as bar from "./foo"`
  Namespace,
  /// `import "./foo"`
  SideEffect,
}

impl ImportForm<'_> {
  pub fn name(&self) -> &'static str {
    match self {
      ImportForm::Default(_) => "default",
      ImportForm::Named => "named",
      ImportForm::Namespace => "namespace",
      ImportForm::SideEffect => "side-effect",
    }
  }
}

pub trait ImportDeclExt {
  fn source(&self) -> &str;

  fn import_form(&self) -> ImportForm<'_>;
}

impl ImportDeclExt for ast::ImportDecl {
  fn source(&self) -> &str {
    &self.src.value
  }

  fn import_form(&self) -> ImportForm<'_> {
    let mut default = None;
    let mut has_named = false;
    for specifier in &self.specifiers {
      match specifier {
        ast::ImportSpecifier::Namespace(_) => return ImportForm::Namespace,
        ast::ImportSpecifier::Named(_) => has_named = true,
        ast::ImportSpecifier::Default(s) => default = Some(&s.local),
      }
    }
    match default {
      _ if has_named => ImportForm::Named,
      Some(local) => ImportForm::Default(local),
      None => ImportForm::SideEffect,
    }
  }
}
