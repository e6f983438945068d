use crate::HasLength;

#[must_use]
pub fn validate_length<T: HasLength + ?Sized>(
  value: &T,
  min: Option<usize>,
  max: Option<usize>,
  equal: Option<usize>,
) -> bool {
  let length = value.length();
  if let Some(equal) = equal {
    return length == equal;
  }

  let above_min = min.map_or(true, |m| length >= m);
  let below_max = max.map_or(true, |m| length <= m);
  above_min && below_max
}

/// A required field is present as long as it is not empty.
/// Whitespace counts as content.
#[must_use]
pub fn validate_required<T: HasLength + ?Sized>(value: &T) -> bool {
  value.length() > 0
}
