use std::path::{Path, PathBuf};

use raw_import_compiler::Compiler;
use raw_import_core::{Error, RawImportTransformer};
use raw_import_test_utils::Tester;

pub struct CompiledFixture {
  pub tester: Tester,
  pub output: Result<String, Vec<Error>>,
  pub fixture_path: PathBuf,
}

impl CompiledFixture {
  pub fn output_friendly_to_snapshot(&self) -> String {
    match &self.output {
      Ok(code) => code.trim().to_string(),
      Err(errors) => [
        "---------- ERRORS ----------".to_string(),
        errors
          .iter()
          .map(|e| {
            format!(
              "{}: {}",
              e.kind.code(),
              e.kind.to_readable_string(&self.fixture_path)
            )
          })
          .collect::<Vec<_>>()
          .join("\n"),
      ]
      .join("\n"),
    }
  }
}

pub fn compile_fixture(test_config_path: &Path) -> CompiledFixture {
  let tester = Tester::from_config_path(test_config_path);
  let fixture_path = tester.fixture_path.clone();

  let importer = tester.importer();
  let code = std::fs::read_to_string(&importer).unwrap();
  let compiler = Compiler::default();
  let mut module = compiler.parse_code(importer.clone(), code).unwrap();

  let options = tester.transform_options().unwrap();
  let output = RawImportTransformer::new(&options, Some(&importer))
    .transform_module(&mut module)
    .map(|_| compiler.print(&module).unwrap())
    .map_err(|errors| errors.into_sorted_vec());

  CompiledFixture {
    tester,
    output,
    fixture_path,
  }
}

pub fn run_test(test_config_path: &Path) {
  raw_import_tracing::init();

  let compiled_fx = compile_fixture(test_config_path);

  // Configure insta to use the test config path as the snapshot path
  let fixture_folder = test_config_path.parent().unwrap();
  let mut settings = insta::Settings::clone_current();
  settings.set_snapshot_path(fixture_folder);
  settings.set_prepend_module_to_snapshot(false);
  settings.set_input_file(fixture_folder);
  settings.bind(|| {
    insta::assert_snapshot!("output", compiled_fx.output_friendly_to_snapshot());
  });
}
