use std::path::{Path, PathBuf};

use raw_import::PluginConfig;
use raw_import_core::TransformOptions;

use crate::test_config::TestConfig;

pub struct Tester {
  pub config: TestConfig,
  /// Canonicalized folder holding `test.config.json`.
  pub fixture_path: PathBuf,
}

impl Tester {
  pub fn from_config_path(filepath: &Path) -> Self {
    let fixture_path = filepath.parent().unwrap().canonicalize().unwrap();
    Self {
      config: TestConfig::from_config_path(filepath),
      fixture_path,
    }
  }

  pub fn importer(&self) -> PathBuf {
    self.fixture_path.join(&self.config.filename)
  }

  pub fn root(&self) -> PathBuf {
    self.fixture_path.join(&self.config.root).canonicalize().unwrap()
  }

  /// The options the plugin would derive from this fixture's config.
  pub fn transform_options(&self) -> raw_import_core::Result<TransformOptions> {
    let root = self.root();
    PluginConfig {
      root_dir: root.to_string_lossy().into_owned(),
      quote: self.config.quote.clone(),
      decl_kind: self.config.decl_kind.clone(),
      json_indent: self.config.json_indent,
    }
    .to_transform_options(root)
  }
}
