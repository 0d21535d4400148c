use crate::Error;

/// A collection of [Error]s raised while transforming one compilation unit.
///
/// Yeah, this is just a wrapper of `Vec<Error>` but with a few promises:
///
/// [Errors] is never empty. You could only construct a `Errors` from a `Error`.
#[derive(Debug)]
pub struct Errors(Vec<Error>);

impl Errors {
  pub fn new(err: Error) -> Self {
    Self(vec![err])
  }

  pub fn into_vec(self) -> Vec<Error> {
    self.0
  }

  /// Sorted by message, so reports don't depend on statement order.
  pub fn into_sorted_vec(mut self) -> Vec<Error> {
    self.0.sort();
    self.0
  }

  /// This method will panic if passing Vec<Error> is empty.
  pub fn from_vec(vec: Vec<Error>) -> Self {
    assert!(
      !vec.is_empty(),
      "You must pass a non-empty Vec<Error> to Errors::from_vec"
    );
    Self(vec)
  }
}

impl From<Error> for Errors {
  fn from(error: Error) -> Self {
    Self(vec![error])
  }
}
