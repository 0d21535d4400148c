use std::{path::PathBuf, str::FromStr};

use raw_import_error::Error;
use swc_core::ecma::ast;

pub const DEFAULT_JSON_INDENT: usize = 4;
/// Same limit as the `space` argument of `JSON.stringify`.
pub const MAX_JSON_INDENT: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuoteStyle {
  #[default]
  Single,
  Double,
}

impl QuoteStyle {
  pub fn as_char(&self) -> char {
    match self {
      QuoteStyle::Single => '\'',
      QuoteStyle::Double => '"',
    }
  }
}

impl FromStr for QuoteStyle {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "single" => Ok(Self::Single),
      "double" => Ok(Self::Double),
      _ => Err(Error::invalid_option(
        "quote",
        format!(r#"expected "single" or "double", received "{s}"."#),
      )),
    }
  }
}

/// The keyword of the declaration that replaces a raw import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeclKind {
  #[default]
  Var,
  Let,
  Const,
}

impl FromStr for DeclKind {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "var" => Ok(Self::Var),
      "let" => Ok(Self::Let),
      "const" => Ok(Self::Const),
      _ => Err(Error::invalid_option(
        "declKind",
        format!(r#"expected "var", "let" or "const", received "{s}"."#),
      )),
    }
  }
}

impl From<DeclKind> for ast::VarDeclKind {
  fn from(value: DeclKind) -> Self {
    match value {
      DeclKind::Var => ast::VarDeclKind::Var,
      DeclKind::Let => ast::VarDeclKind::Let,
      DeclKind::Const => ast::VarDeclKind::Const,
    }
  }
}

#[derive(Debug, Clone)]
pub struct TransformOptions {
  /// Absolute. No raw import may resolve outside of it.
  pub root: PathBuf,
  pub quote: QuoteStyle,
  pub decl_kind: DeclKind,
  /// Spaces per level when pretty-printing `.json` files.
  pub json_indent: usize,
}

impl TransformOptions {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self {
      root: root.into(),
      quote: Default::default(),
      decl_kind: Default::default(),
      json_indent: DEFAULT_JSON_INDENT,
    }
  }

  pub fn validate(&self) -> crate::Result<()> {
    if !self.root.is_absolute() {
      return Err(Error::invalid_option(
        "rootDir",
        format!(r#"expected an absolute path, received "{}"."#, self.root.display()),
      ));
    }
    if self.json_indent > MAX_JSON_INDENT {
      return Err(Error::invalid_option(
        "jsonIndent",
        format!(
          "expected at most {MAX_JSON_INDENT} spaces, received {}.",
          self.json_indent
        ),
      ));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults() {
    let options = TransformOptions::new("/project");
    assert_eq!(options.quote, QuoteStyle::Single);
    assert_eq!(options.decl_kind, DeclKind::Var);
    assert_eq!(options.json_indent, 4);
    assert!(options.validate().is_ok());
  }

  #[test]
  fn parse_option_values() {
    assert_eq!("double".parse::<QuoteStyle>().unwrap(), QuoteStyle::Double);
    assert_eq!("const".parse::<DeclKind>().unwrap(), DeclKind::Const);
    let err = "backtick".parse::<QuoteStyle>().unwrap_err();
    assert_eq!(
      err.to_string(),
      r#"Invalid option "quote": expected "single" or "double", received "backtick"."#
    );
    assert_eq!(
      "CONST".parse::<DeclKind>().unwrap_err().kind.code(),
      "INVALID_OPTION"
    );
  }

  #[test]
  fn reject_invalid_options() {
    let mut options = TransformOptions::new("project");
    assert_eq!(options.validate().unwrap_err().kind.code(), "INVALID_OPTION");

    options.root = "/project".into();
    options.json_indent = 11;
    let err = options.validate().unwrap_err();
    assert_eq!(
      err.to_string(),
      r#"Invalid option "jsonIndent": expected at most 10 spaces, received 11."#
    );
  }
}
