//! Parse and print ECMAScript modules the way the host compiler does.
//!
//! The plugin itself never parses or prints source text; this crate stands in
//! for the host in tests and fixtures.

use std::path::PathBuf;

use swc_core::{
  common::{self as swc_common, sync::Lrc, SourceFile},
  ecma::{
    ast::{self, EsVersion},
    codegen as swc_ecma_codegen,
    parser::{self as swc_ecma_parser, PResult},
  },
};
use swc_common::{FileName, SourceMap};
use swc_ecma_codegen::text_writer::JsWriter;
use swc_ecma_parser::{lexer::Lexer, Parser, StringInput, Syntax};

#[derive(Default)]
pub struct Compiler {
  pub cm: Lrc<SourceMap>,
}

impl Compiler {
  pub fn create_source_file(&self, filename: PathBuf, code: String) -> Lrc<SourceFile> {
    self.cm.new_source_file(FileName::Real(filename), code)
  }

  pub fn print(&self, ast: &ast::Module) -> anyhow::Result<String> {
    let mut output = Vec::new();

    {
      let mut emitter = swc_ecma_codegen::Emitter {
        cfg: Default::default(),
        cm: self.cm.clone(),
        comments: None,
        wr: Box::new(JsWriter::new(self.cm.clone(), "\n", &mut output, None)),
      };
      emitter.emit_module(ast)?;
    }

    String::from_utf8(output).map_err(Into::into)
  }

  /// Parse `source_file` as a module. Recoverable syntax errors are treated as fatal.
  pub fn parse(&self, source_file: Lrc<SourceFile>, syntax: Syntax) -> PResult<ast::Module> {
    let lexer = Lexer::new(
      syntax,
      EsVersion::latest(),
      StringInput::from(source_file.as_ref()),
      None,
    );
    let mut parser = Parser::new_from(lexer);
    // Raw imports only make sense in modules, so the input is always parsed as one
    let module = parser.parse_module()?;
    match parser.take_errors().into_iter().next() {
      Some(err) => Err(err),
      None => Ok(module),
    }
  }

  /// Shorthand for `create_source_file` + `parse` with the default ES syntax.
  pub fn parse_code(&self, filename: impl Into<PathBuf>, code: impl Into<String>) -> PResult<ast::Module> {
    let fm = self.create_source_file(filename.into(), code.into());
    self.parse(fm, Syntax::default())
  }
}
