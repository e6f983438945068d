//! Field rules shared by the signup and login forms.
//!
//! Every `check_*` function returns the message to show next to the
//! field, or `None` when the value passes.
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::extras::{validate_email, validate_length, validate_required};
use validator::{HasLength, Validate, ValidationErrors};

pub const PASSWORD_MIN: usize = 8;

/// Upper bound for a configured minimum password length.
pub const PASSWORD_MIN_LIMIT: usize = 128;

pub const FIRST_NAME_REQUIRED: &str = "First name is required.";
pub const LAST_NAME_REQUIRED: &str = "Last name is required.";
pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Enter a valid email.";
pub const PASSWORD_REQUIRED: &str = "Password is required.";

/// Password rules applied when a form is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PasswordPolicy {
    /// Minimum amount of characters a password must have.
    ///
    /// **Environment variable**: `FORMWISE_PASSWORD_MIN_LENGTH`
    ///
    /// The default value is `8`, if not set.
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self { min_length: PASSWORD_MIN }
    }
}

impl PasswordPolicy {
    #[must_use]
    pub fn too_short_message(&self) -> Cow<'static, str> {
        if self.min_length == PASSWORD_MIN {
            Cow::Borrowed("Password must be at least 8 characters.")
        } else {
            Cow::Owned(format!(
                "Password must be at least {} characters.",
                self.min_length
            ))
        }
    }
}

impl Validate for PasswordPolicy {
    fn errors(&self) -> ValidationErrors {
        let mut fields = ValidationErrors::field_builder();
        let in_range = (1..=PASSWORD_MIN_LIMIT).contains(&self.min_length);
        fields.insert(
            "min_length",
            (!in_range).then(|| {
                format!("Must be between 1 and {PASSWORD_MIN_LIMIT} characters").into()
            }),
        );
        fields.build()
    }
}

/// Empty means missing. The value is never trimmed, so a single
/// space still counts as an answer.
pub fn check_required<T: HasLength + ?Sized>(
    value: &T,
    message: &'static str,
) -> Option<Cow<'static, str>> {
    (!validate_required(value)).then_some(Cow::Borrowed(message))
}

pub fn check_email(email: &str) -> Option<Cow<'static, str>> {
    check_required(email, EMAIL_REQUIRED).or_else(|| {
        (!validate_email(email)).then_some(Cow::Borrowed(EMAIL_INVALID))
    })
}

pub fn check_password<T: HasLength + ?Sized>(
    password: &T,
    policy: &PasswordPolicy,
) -> Option<Cow<'static, str>> {
    check_required(password, PASSWORD_REQUIRED).or_else(|| {
        let long_enough =
            validate_length(password, Some(policy.min_length), None, None);
        (!long_enough).then(|| policy.too_short_message())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_required() {
        assert_eq!(
            check_required("", FIRST_NAME_REQUIRED).as_deref(),
            Some(FIRST_NAME_REQUIRED)
        );
        assert_eq!(check_required(" ", FIRST_NAME_REQUIRED), None);
        assert_eq!(check_required("Ada", FIRST_NAME_REQUIRED), None);
    }

    #[test]
    fn test_check_email() {
        assert_eq!(check_email("").as_deref(), Some(EMAIL_REQUIRED));
        assert_eq!(check_email("bad").as_deref(), Some(EMAIL_INVALID));
        assert_eq!(check_email("a@b.com"), None);
    }

    #[test]
    fn test_check_password() {
        let policy = PasswordPolicy::default();
        assert_eq!(
            check_password("", &policy).as_deref(),
            Some(PASSWORD_REQUIRED)
        );
        assert_eq!(
            check_password("short", &policy).as_deref(),
            Some("Password must be at least 8 characters.")
        );
        assert_eq!(
            check_password("1234567", &policy).as_deref(),
            Some("Password must be at least 8 characters.")
        );
        assert_eq!(check_password("12345678", &policy), None);
        assert_eq!(check_password("longenough1", &policy), None);
    }

    #[test]
    fn test_password_length_in_utf16_units() {
        let policy = PasswordPolicy::default();
        assert_eq!(check_password("😀😀😀😀", &policy), None);
        assert_eq!(
            check_password("😀😀😀a", &policy).as_deref(),
            Some("Password must be at least 8 characters.")
        );
    }

    #[test]
    fn test_custom_policy() {
        let policy = PasswordPolicy { min_length: 12 };
        assert_eq!(
            check_password("longenough1", &policy).as_deref(),
            Some("Password must be at least 12 characters.")
        );
        assert_eq!(check_password("longenough12", &policy), None);
    }

    #[test]
    fn test_policy_bounds() {
        assert!(PasswordPolicy::default().validate().is_ok());
        assert!(PasswordPolicy { min_length: 1 }.validate().is_ok());
        assert!(PasswordPolicy { min_length: 128 }.validate().is_ok());

        let error = PasswordPolicy { min_length: 0 }.validate().unwrap_err();
        assert!(error.contains("min_length"));
        assert!(PasswordPolicy { min_length: 129 }.validate().is_err());
    }
}
