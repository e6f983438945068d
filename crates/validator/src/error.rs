use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

type FieldName = Cow<'static, str>;
type Message = Cow<'static, str>;

/// Accumulates field errors while a form is being checked.
///
/// Passing `None` as a message means the field passed its checks
/// and nothing gets recorded for it.
pub struct FieldBuilder(IndexMap<FieldName, Message>);

#[allow(clippy::new_without_default)]
impl FieldBuilder {
  #[must_use]
  pub fn new() -> Self {
    Self(IndexMap::new())
  }

  pub fn insert(
    &mut self,
    field: impl Into<FieldName>,
    message: Option<Message>,
  ) -> &mut Self {
    if let Some(message) = message {
      self.0.insert(field.into(), message);
    }
    self
  }

  #[must_use]
  pub fn build(&mut self) -> ValidationErrors {
    ValidationErrors(std::mem::take(&mut self.0))
  }
}

// ---------------------------------------------------- //

/// Field name to human readable message, kept in the order the
/// fields were checked. An empty set is the only valid state.
#[derive(Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(IndexMap<FieldName, Message>);

impl std::fmt::Display for ValidationErrors {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str("Invalid form data occurred")
  }
}

impl std::error::Error for ValidationErrors {}

impl std::fmt::Debug for ValidationErrors {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    self.0.fmt(f)
  }
}

impl ValidationErrors {
  #[must_use]
  pub fn field_builder() -> FieldBuilder {
    FieldBuilder::new()
  }

  #[must_use]
  pub fn single(
    field: impl Into<FieldName>,
    message: impl Into<Message>,
  ) -> Self {
    FieldBuilder::new().insert(field, Some(message.into())).build()
  }
}

impl ValidationErrors {
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.0.len()
  }

  #[must_use]
  pub fn get(&self, field: &str) -> Option<&str> {
    self.0.get(field).map(AsRef::as_ref)
  }

  #[must_use]
  pub fn contains(&self, field: &str) -> bool {
    self.0.contains_key(field)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
    self.0.iter().map(|(k, v)| (k.as_ref(), v.as_ref()))
  }

  pub fn into_result(self) -> Result<(), Self> {
    if self.is_empty() {
      Ok(())
    } else {
      Err(self)
    }
  }
}
