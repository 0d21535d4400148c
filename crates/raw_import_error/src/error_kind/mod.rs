use std::{
  fmt::Display,
  path::{Path, PathBuf},
};

use crate::utils::PathExt;
use crate::CWD;

pub mod error_code;

#[derive(Debug)]
pub enum UnresolvedReason {
  /// `import a from "?raw"`
  EmptyPath,
  /// The normalized path left the root directory, e.g. `../../etc/passwd?raw`.
  OutsideRoot { resolved: PathBuf },
  /// `rootDir` is relative, so nothing can be resolved against it.
  RelativeRoot { root: PathBuf },
}

#[derive(Debug)]
pub enum ErrorKind {
  // --- Resolution
  UnresolvedRawImport {
    specifier: String,
    reason: UnresolvedReason,
  },

  // --- Loading
  RawImportNotFound {
    specifier: String,
    path: PathBuf,
  },
  ReadFileFailed {
    path: PathBuf,
    source: std::io::Error,
  },
  InvalidJson {
    path: PathBuf,
    source: serde_json::Error,
  },

  // --- Import shape
  /// Only `import foo from "./foo.txt?raw"` can be turned into a declaration.
  UnsupportedImportForm {
    specifier: String,
    form: &'static str,
  },

  // --- Plugin
  InvalidOption {
    option: &'static str,
    reason: String,
  },
}

impl Display for ErrorKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ErrorKind::UnresolvedRawImport { specifier, reason } => match reason {
        UnresolvedReason::EmptyPath => {
          write!(f, r#"Could not resolve raw import "{specifier}": the path is empty."#)
        }
        UnresolvedReason::OutsideRoot { resolved } => write!(
          f,
          r#"Could not resolve raw import "{specifier}": "{}" is outside of the root directory."#,
          resolved.may_display_relative()
        ),
        UnresolvedReason::RelativeRoot { root } => write!(
          f,
          r#"Could not resolve raw import "{specifier}": the root directory "{}" is not absolute."#,
          root.display()
        ),
      },
      ErrorKind::RawImportNotFound { specifier, path } => write!(
        f,
        r#"Could not load raw import "{specifier}": "{}" does not exist."#,
        path.may_display_relative()
      ),
      ErrorKind::ReadFileFailed { path, source } => {
        write!(f, r#"Could not read "{}": {source}"#, path.may_display_relative())
      }
      ErrorKind::InvalidJson { path, source } => write!(
        f,
        r#"Could not parse "{}" as JSON: {source}"#,
        path.may_display_relative()
      ),
      ErrorKind::UnsupportedImportForm { specifier, form } => write!(
        f,
        r#"Raw import "{specifier}" must be imported as default, e.g. `import content from "{specifier}"`, but found a {form} import."#
      ),
      ErrorKind::InvalidOption { option, reason } => {
        write!(f, r#"Invalid option "{option}": {reason}"#)
      }
    }
  }
}

impl ErrorKind {
  /// Shorten the file paths in messages by make them relative to CWD.
  pub fn to_readable_string(&self, cwd: impl AsRef<Path>) -> String {
    let cwd = cwd.as_ref().to_path_buf();
    CWD.set(&cwd, || self.to_string())
  }

  pub fn code(&self) -> &'static str {
    match self {
      ErrorKind::UnresolvedRawImport { .. } => error_code::UNRESOLVED_RAW_IMPORT,
      ErrorKind::RawImportNotFound { .. } => error_code::RAW_IMPORT_NOT_FOUND,
      ErrorKind::ReadFileFailed { .. } => error_code::READ_FILE_FAILED,
      ErrorKind::InvalidJson { .. } => error_code::INVALID_JSON,
      ErrorKind::UnsupportedImportForm { .. } => error_code::UNSUPPORTED_IMPORT_FORM,
      ErrorKind::InvalidOption { .. } => error_code::INVALID_OPTION,
    }
  }
}
