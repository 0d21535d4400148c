mod asset_kind;
pub use asset_kind::*;
mod specifier;
pub use specifier::*;
