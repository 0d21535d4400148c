use std::sync::atomic::AtomicBool;

use tracing::Level;

static IS_INIT: AtomicBool = AtomicBool::new(false);

/// Install a global subscriber printing `raw_import*` events, filtered by `RUST_LOG`.
///
/// Calling it more than once is a no-op.
pub fn init() {
  use tracing_subscriber::{fmt, prelude::*, EnvFilter};
  if !IS_INIT.swap(true, std::sync::atomic::Ordering::SeqCst) {
    tracing_subscriber::registry()
      .with(fmt::layer().with_test_writer())
      .with(EnvFilter::from_default_env())
      .with(
        tracing_subscriber::filter::Targets::new().with_targets(vec![
          ("raw_import_core", Level::TRACE),
          ("raw_import_resolver", Level::TRACE),
          ("raw_import_swc_visitors", Level::TRACE),
          ("raw_import", Level::TRACE),
        ]),
      )
      .init();
  }
}
