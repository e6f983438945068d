use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use validator::HasLength;

/// Keeps a secret (a typed password, mostly) in memory without
/// letting it leak through `Debug`, `Display` or log fields.
///
/// Serialization is transparent so a form can still be read from
/// and written to JSON.
#[derive(
    Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize,
)]
#[serde(transparent)]
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Debug for Sensitive<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("<hidden>")
    }
}

impl<T> Display for Sensitive<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("<hidden>")
    }
}

impl<T: AsRef<str>> Sensitive<T> {
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }
}

impl<T> AsMut<T> for Sensitive<T> {
    fn as_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T: HasLength> HasLength for Sensitive<T> {
    fn length(&self) -> usize {
        self.0.length()
    }
}

impl<T> From<T> for Sensitive<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl From<&str> for Sensitive<String> {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::Sensitive;
    use serde_test::Token;
    use validator::HasLength;

    #[test]
    fn test_serde_impl() {
        let password = Sensitive::new(String::from("hunter22"));
        serde_test::assert_tokens(&password, &[Token::Str("hunter22")]);
    }

    #[test]
    fn test_fmt() {
        let value = Sensitive::new("hello");
        assert_eq!(value.to_string(), "<hidden>");
        assert_eq!(format!("{value:?}"), "<hidden>");
    }

    #[test]
    fn test_length_and_access() {
        let value = Sensitive::<String>::from("pässword");
        assert_eq!(value.length(), 8);
        assert_eq!(value.as_str(), "pässword");
        assert_eq!(value.into_inner(), "pässword");
    }
}
