mod scan;
pub use scan::*;
mod rewrite;
pub use rewrite::*;
