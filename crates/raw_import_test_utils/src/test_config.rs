use std::path::Path;

use schemars::JsonSchema;
use serde::Deserialize;

use crate::impl_serde_default;

fn filename_default() -> String {
  "main.js".to_string()
}

fn root_default() -> String {
  ".".to_string()
}

/// `test.config.json` of a fixture. Every path is relative to the fixture folder.
#[derive(Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TestConfig {
  /// The module to transform.
  #[serde(default = "filename_default")]
  pub filename: String,

  /// Passed as `rootDir`.
  #[serde(default = "root_default")]
  pub root: String,

  #[serde(default)]
  pub quote: Option<String>,

  #[serde(default)]
  pub decl_kind: Option<String>,

  #[serde(default)]
  pub json_indent: Option<usize>,
}

impl_serde_default!(TestConfig);

impl TestConfig {
  pub fn from_config_path(filepath: &Path) -> Self {
    serde_json::from_str(&std::fs::read_to_string(filepath).unwrap_or_else(|_| "{}".to_string()))
      .unwrap()
  }

  pub fn json_schema() -> String {
    serde_json::to_string_pretty(&schemars::schema_for!(TestConfig)).unwrap()
  }
}
