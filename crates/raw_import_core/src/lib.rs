mod loader;
pub use loader::*;
mod options;
pub use options::*;
mod render;
pub use render::*;
mod transformer;
pub use transformer::*;

// public exports

pub use raw_import_common::{AssetKind, RawSpecifier};
pub use raw_import_error::{Error, ErrorKind, Errors};
pub use raw_import_resolver::{ResolvedFile, Resolver};

pub type Result<T> = raw_import_error::Result<T>;
pub type TransformResult<T> = std::result::Result<T, Errors>;
