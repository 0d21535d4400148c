use std::path::{Path, PathBuf};

use raw_import_core::{Errors, RawImportTransformer};
use swc_core::{
  common::errors::HANDLER,
  ecma::ast::Program,
  plugin::{
    metadata::TransformPluginMetadataContextKind, plugin_transform,
    proxies::TransformPluginProgramMetadata,
  },
};

mod options;
pub use options::*;

/// Where the host's `rootDir` is mounted inside the plugin runtime.
pub const SANDBOX_ROOT: &str = "/cwd";

#[plugin_transform]
pub fn process_transform(program: Program, metadata: TransformPluginProgramMetadata) -> Program {
  transform_with_config(
    program,
    metadata.get_transform_plugin_config().as_deref(),
    metadata
      .get_context(&TransformPluginMetadataContextKind::Filename)
      .as_deref(),
    Path::new(SANDBOX_ROOT),
  )
}

/// Everything `process_transform` does, with `sandbox_root` standing for `/cwd`.
///
/// Failures are emitted through `HANDLER` and the program is returned untouched.
pub fn transform_with_config(
  mut program: Program,
  config: Option<&str>,
  filename: Option<&str>,
  sandbox_root: &Path,
) -> Program {
  let config = match PluginConfig::from_json(config) {
    Ok(config) => config,
    Err(err) => {
      report(Errors::new(err));
      return program;
    }
  };
  let options = match config.to_transform_options(sandbox_root) {
    Ok(options) => options,
    Err(err) => {
      report(Errors::new(err));
      return program;
    }
  };

  let importer = sandbox_importer(sandbox_root, &config.root_dir, filename);
  tracing::debug!("Transform {:?} as {:?}", filename, importer);

  if let Err(errors) =
    RawImportTransformer::new(&options, importer.as_deref()).transform_program(&mut program)
  {
    report(errors);
  }
  program
}

/// Map the host path of the file being compiled into the sandbox.
///
/// - `<root_dir>/src/main.js` becomes `<sandbox_root>/src/main.js`
/// - `src/main.js` becomes `<sandbox_root>/src/main.js`
/// - files outside of `root_dir`, or no file at all, give `None`, so raw imports
///   are resolved from the root.
///
/// `\` and `/` are interchangeable on both sides.
pub fn sandbox_importer(
  sandbox_root: &Path,
  root_dir: &str,
  filename: Option<&str>,
) -> Option<PathBuf> {
  let filename = filename?.replace('\\', "/");
  let root_dir = root_dir.replace('\\', "/");
  let root_dir = root_dir.trim_end_matches('/');

  if let Some(rest) = filename.strip_prefix(root_dir) {
    if rest.starts_with('/') {
      return Some(sandbox_root.join(rest.trim_start_matches('/')));
    }
  }

  if filename.starts_with('/') || is_windows_absolute(&filename) {
    return None;
  }
  Some(sandbox_root.join(filename))
}

/// `C:/project/main.js` isn't absolute inside the (unix-like) plugin runtime.
fn is_windows_absolute(filename: &str) -> bool {
  let bytes = filename.as_bytes();
  bytes.len() > 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' && bytes[2] == b'/'
}

fn report(errors: Errors) {
  HANDLER.with(|handler| {
    for err in errors.into_sorted_vec() {
      let message = format!("[{}] {}", err.kind.code(), err);
      if err.span().is_dummy() {
        handler.err(&message);
      } else {
        handler.struct_span_err(err.span(), &message).emit();
      }
    }
  });
}
