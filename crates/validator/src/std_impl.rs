use crate::{HasLength, Validate, ValidationErrors};
use std::borrow::Cow;

impl HasLength for str {
  fn length(&self) -> usize {
    self.encode_utf16().count()
  }
}

impl HasLength for String {
  fn length(&self) -> usize {
    self.as_str().length()
  }
}

impl<'a> HasLength for Cow<'a, str> {
  fn length(&self) -> usize {
    self.as_ref().length()
  }
}

impl<'a, T: HasLength + ?Sized> HasLength for &'a T {
  fn length(&self) -> usize {
    T::length(self)
  }
}

// ------------------------------------------------ //

impl<T: Validate + ?Sized> Validate for Box<T> {
  fn errors(&self) -> ValidationErrors {
    T::errors(self)
  }
}

impl<'a, T: Validate + ?Sized> Validate for &'a T {
  fn errors(&self) -> ValidationErrors {
    T::errors(self)
  }
}
