#![cfg_attr(test, allow(clippy::unwrap_used))]

mod error;
mod std_impl;

pub use error::*;
pub mod extras;

/// Types that can check themselves and report every failing field
/// in a single pass.
pub trait Validate {
  /// Recomputes the errors from scratch. An empty set means the
  /// value is valid.
  fn errors(&self) -> ValidationErrors;

  fn validate(&self) -> Result<(), ValidationErrors> {
    self.errors().into_result()
  }
}

/// Length of form input as a browser reports it: strings are
/// measured in UTF-16 code units, so an emoji outside the basic
/// plane counts as two.
pub trait HasLength {
  fn length(&self) -> usize;
}
