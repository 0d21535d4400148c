use std::path::PathBuf;

use raw_import_core::TransformOptions;
use raw_import_error::Error;
use serde::Deserialize;

/// The JSON object passed next to the plugin path in `jsc.experimental.plugins`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PluginConfig {
  /// The host's project directory, the one mounted at `/cwd`.
  pub root_dir: String,
  #[serde(default)]
  pub quote: Option<String>,
  #[serde(default)]
  pub decl_kind: Option<String>,
  #[serde(default)]
  pub json_indent: Option<usize>,
}

impl PluginConfig {
  pub fn from_json(config: Option<&str>) -> raw_import_core::Result<Self> {
    let config = config.ok_or_else(|| {
      Error::invalid_option("rootDir", "the plugin requires a config object with `rootDir`.")
    })?;
    let config: Self =
      serde_json::from_str(config).map_err(|err| Error::invalid_option("config", err.to_string()))?;
    if config.root_dir.is_empty() {
      return Err(Error::invalid_option("rootDir", "expected a non-empty path."));
    }
    Ok(config)
  }

  /// `root` is where `root_dir` is visible to the plugin.
  pub fn to_transform_options(
    &self,
    root: impl Into<PathBuf>,
  ) -> raw_import_core::Result<TransformOptions> {
    let mut options = TransformOptions::new(root);
    if let Some(quote) = &self.quote {
      options.quote = quote.parse()?;
    }
    if let Some(decl_kind) = &self.decl_kind {
      options.decl_kind = decl_kind.parse()?;
    }
    if let Some(json_indent) = self.json_indent {
      options.json_indent = json_indent;
    }
    options.validate()?;
    Ok(options)
  }
}
