use once_cell::sync::Lazy;
use regex::Regex;

// Whitespace as browsers define it. Unlike Rust's `\s` this leaves
// out U+0085 and includes U+FEFF.
const WHITESPACE: &str = r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

// A local part, an `@`, then a domain with at least one dot. None of
// the parts may contain whitespace or another `@`.
#[allow(clippy::expect_used)]
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
  let part = format!("[^{WHITESPACE}@]+");
  Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("compile email regex")
});

/// Loose e-mail check for form input. It accepts plenty of
/// technically invalid addresses (`a@b.c`, `a..b@c.d`) and only
/// rejects input that is obviously not an address.
#[must_use]
pub fn validate_email(email: &str) -> bool {
  EMAIL_REGEX.is_match(email)
}
