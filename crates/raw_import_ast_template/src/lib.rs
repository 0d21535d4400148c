use swc_core::{
  common::Span,
  ecma::{ast, atoms::Atom},
};

/// Build `<kind> <local> = <raw>;`
///
/// `value` is the cooked string value and `raw` its quoted, escaped source text.
/// Codegen prints `raw` verbatim, so the two must agree.
pub fn build_raw_var_decl(
  span: Span,
  kind: ast::VarDeclKind,
  local: ast::Ident,
  value: impl Into<Atom>,
  raw: impl Into<Atom>,
) -> ast::ModuleItem {
  use ast::{Decl, Expr, Lit, ModuleItem, Pat, Stmt, Str, VarDecl, VarDeclarator};

  ModuleItem::Stmt(Stmt::Decl(Decl::Var(Box::new(VarDecl {
    span,
    kind,
    declare: false,
    decls: vec![VarDeclarator {
      span,
      name: Pat::Ident(local.into()),
      init: Some(Box::new(Expr::Lit(Lit::Str(Str {
        span,
        value: value.into(),
        raw: Some(raw.into()),
      })))),
      definite: false,
    }],
  }))))
}
