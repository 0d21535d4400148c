use raw_import_common::RawSpecifier;
use raw_import_error::Error;
use raw_import_resolver::ResolvedFile;

/// Read the whole file as UTF-8. Either all of it or an error, never a partial read.
pub fn load(specifier: &RawSpecifier, file: &ResolvedFile) -> crate::Result<String> {
  std::fs::read_to_string(&file.path).map_err(|err| match err.kind() {
    std::io::ErrorKind::NotFound => Error::raw_import_not_found(specifier.raw(), &file.path),
    _ => Error::read_file_failed(&file.path, err),
  })
}
