use std::path::Path;

use raw_import_ast_template::build_raw_var_decl;
use raw_import_error::{Error, Errors};
use raw_import_resolver::Resolver;
use raw_import_swc_utils::{ImportDeclExt, ImportForm};
use raw_import_swc_visitors::{rewriter, scan_raw_imports, Rewrite, ScannedRawImport};
use swc_core::ecma::{ast, visit::VisitMutWith};
use tracing::instrument;

use crate::{load, render, TransformOptions, TransformResult};

/// Rewrites the raw imports of one compilation unit.
#[derive(Debug)]
pub struct RawImportTransformer<'a> {
  options: &'a TransformOptions,
  resolver: Resolver,
  importer: Option<&'a Path>,
}

impl<'a> RawImportTransformer<'a> {
  /// `importer` is the path of the file being compiled, if the host knows it.
  pub fn new(options: &'a TransformOptions, importer: Option<&'a Path>) -> Self {
    Self {
      options,
      resolver: Resolver::new(&options.root, importer),
      importer,
    }
  }

  /// Rewrite every raw import of `module`, returning how many were rewritten.
  ///
  /// All raw imports are processed before `module` is touched. If any of them
  /// fails, all errors are returned and `module` is left as it was.
  #[instrument(skip_all, fields(importer = ?self.importer))]
  pub fn transform_module(&self, module: &mut ast::Module) -> TransformResult<usize> {
    self.options.validate()?;

    let mut rewrites = vec![];
    let mut errors = vec![];
    for raw_import in scan_raw_imports(&module.body) {
      match self.rewrite(&raw_import) {
        Ok(rewrite) => rewrites.push(rewrite),
        Err(err) => errors.push(self.with_importer(err.with_span(raw_import.decl.span))),
      }
    }

    if !errors.is_empty() {
      tracing::debug!("Abort with {} error(s)", errors.len());
      return Err(Errors::from_vec(errors));
    }

    let count = rewrites.len();
    if count > 0 {
      module.visit_mut_with(&mut rewriter(rewrites));
    }
    Ok(count)
  }

  /// Scripts can't contain import declarations, so only modules are rewritten.
  pub fn transform_program(&self, program: &mut ast::Program) -> TransformResult<usize> {
    match program {
      ast::Program::Module(module) => self.transform_module(module),
      ast::Program::Script(_) => Ok(0),
    }
  }

  fn rewrite(&self, raw_import: &ScannedRawImport) -> crate::Result<Rewrite> {
    let ScannedRawImport {
      stmt_index,
      decl,
      specifier,
    } = raw_import;

    let local = match decl.import_form() {
      ImportForm::Default(local) => local.clone(),
      form => return Err(Error::unsupported_import_form(specifier.raw(), form.name())),
    };
    let file = self.resolver.resolve(specifier)?;
    let content = load(specifier, &file)?;
    let literal = render(content, &file, self.options)?;

    tracing::debug!(
      "Inline {} as `{}` ({:?}, {} bytes)",
      specifier,
      local.sym,
      file.kind,
      literal.value.len()
    );

    let raw = literal.raw();
    Ok(Rewrite {
      stmt_index: *stmt_index,
      item: build_raw_var_decl(
        decl.span,
        self.options.decl_kind.into(),
        local,
        literal.value,
        raw,
      ),
    })
  }

  fn with_importer(&self, err: Error) -> Error {
    match self.importer {
      Some(importer) => err.context(format!("imported by {}", importer.display())),
      None => err,
    }
  }
}

/// `(AST, options) -> AST | Errors`
pub fn transform(
  mut program: ast::Program,
  options: &TransformOptions,
  importer: Option<&Path>,
) -> TransformResult<ast::Program> {
  RawImportTransformer::new(options, importer).transform_program(&mut program)?;
  Ok(program)
}
