pub mod test_config;
pub mod tester;
pub use test_config::TestConfig;
pub use tester::Tester;

#[macro_export]
macro_rules! impl_serde_default {
  ($t:ty) => {
    impl Default for $t {
      fn default() -> Self {
        serde_json::from_str("{}").unwrap()
      }
    }
  };
}
