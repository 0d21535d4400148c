use std::path::PathBuf;

mod error;
pub use error::*;
mod error_kind;
pub use error_kind::*;
mod errors;
pub use errors::*;
mod utils;
pub use utils::PathExt;

pub type Result<T> = std::result::Result<T, Error>;

scoped_tls::scoped_thread_local!(pub(crate) static CWD: PathBuf);
