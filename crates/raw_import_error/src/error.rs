use std::{
  fmt::Display,
  path::{Path, PathBuf},
};

use swc_core::common::{Span, DUMMY_SP};

use crate::{ErrorKind, UnresolvedReason};

#[derive(Debug)]
pub struct Error {
  contexts: Vec<String>,
  span: Span,
  pub kind: ErrorKind,
}

impl PartialEq for Error {
  fn eq(&self, other: &Self) -> bool {
    self.kind.to_string().eq(&other.kind.to_string())
  }
}

impl Eq for Error {}

impl PartialOrd for Error {
  fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for Error {
  fn cmp(&self, other: &Self) -> std::cmp::Ordering {
    self.kind.to_string().cmp(&other.kind.to_string())
  }
}

impl Error {
  fn with_kind(kind: ErrorKind) -> Self {
    Self {
      contexts: vec![],
      span: DUMMY_SP,
      kind,
    }
  }

  pub fn context(mut self, context: String) -> Self {
    self.contexts.push(context);
    self
  }

  /// Attach the span of the import declaration that caused this error.
  pub fn with_span(mut self, span: Span) -> Self {
    self.span = span;
    self
  }

  pub fn span(&self) -> Span {
    self.span
  }

  // --- Resolution

  pub fn empty_raw_import(specifier: impl Into<String>) -> Self {
    Self::with_kind(ErrorKind::UnresolvedRawImport {
      specifier: specifier.into(),
      reason: UnresolvedReason::EmptyPath,
    })
  }

  pub fn raw_import_outside_root(specifier: impl Into<String>, resolved: impl AsRef<Path>) -> Self {
    Self::with_kind(ErrorKind::UnresolvedRawImport {
      specifier: specifier.into(),
      reason: UnresolvedReason::OutsideRoot {
        resolved: resolved.as_ref().to_path_buf(),
      },
    })
  }

  pub fn relative_root(specifier: impl Into<String>, root: impl AsRef<Path>) -> Self {
    Self::with_kind(ErrorKind::UnresolvedRawImport {
      specifier: specifier.into(),
      reason: UnresolvedReason::RelativeRoot {
        root: root.as_ref().to_path_buf(),
      },
    })
  }

  // --- Loading

  pub fn raw_import_not_found(specifier: impl Into<String>, path: impl AsRef<Path>) -> Self {
    Self::with_kind(ErrorKind::RawImportNotFound {
      specifier: specifier.into(),
      path: path.as_ref().to_path_buf(),
    })
  }

  pub fn read_file_failed(path: impl AsRef<Path>, source: std::io::Error) -> Self {
    Self::with_kind(ErrorKind::ReadFileFailed {
      path: path.as_ref().to_path_buf(),
      source,
    })
  }

  pub fn invalid_json(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
    Self::with_kind(ErrorKind::InvalidJson {
      path: path.as_ref().to_path_buf(),
      source,
    })
  }

  // --- Import shape

  pub fn unsupported_import_form(specifier: impl Into<String>, form: &'static str) -> Self {
    Self::with_kind(ErrorKind::UnsupportedImportForm {
      specifier: specifier.into(),
      form,
    })
  }

  // --- Plugin

  pub fn invalid_option(option: &'static str, reason: impl Into<String>) -> Self {
    Self::with_kind(ErrorKind::InvalidOption {
      option,
      reason: reason.into(),
    })
  }

  pub fn contexts(&self) -> &[String] {
    &self.contexts
  }

  pub fn path(&self) -> Option<&PathBuf> {
    match &self.kind {
      ErrorKind::RawImportNotFound { path, .. }
      | ErrorKind::ReadFileFailed { path, .. }
      | ErrorKind::InvalidJson { path, .. } => Some(path),
      ErrorKind::UnresolvedRawImport {
        reason: UnresolvedReason::OutsideRoot { resolved },
        ..
      } => Some(resolved),
      _ => None,
    }
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match &self.kind {
      ErrorKind::ReadFileFailed { source, .. } => Some(source),
      ErrorKind::InvalidJson { source, .. } => Some(source),
      _ => None,
    }
  }
}

impl Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for ctx in self.contexts.iter().rev() {
      writeln!(f, "{}: {}", ansi_term::Color::Yellow.paint("context"), ctx)?;
    }

    self.kind.fmt(f)
  }
}
