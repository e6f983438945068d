//! The two forms a visitor can fill in and the shared entry point
//! for checking them.
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;
use validator::{Validate, ValidationErrors};

use crate::validation::PasswordPolicy;

mod login;
mod signup;

pub use self::login::Login;
pub use self::signup::Signup;

/// Validates a form with the default password policy.
///
/// Every field is checked in the same pass and the result is
/// rebuilt from scratch on each call.
pub fn validate(input: &FormInput) -> ValidationErrors {
    validate_with(input, &PasswordPolicy::default())
}

/// Same as [`validate`] but with a configured password policy.
pub fn validate_with(
    input: &FormInput,
    policy: &PasswordPolicy,
) -> ValidationErrors {
    let errors = input.check(policy);
    debug!(form = %input.kind(), errors = errors.len(), "validated form");
    errors
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
}

impl Field {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "firstName" => Ok(Self::FirstName),
            "lastName" => Ok(Self::LastName),
            "email" => Ok(Self::Email),
            "password" => Ok(Self::Password),
            _ => Err(FieldError::Unknown(s.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("unknown {0:?} form field")]
    Unknown(String),
    #[error("{field} is not part of the {kind} form")]
    NotInForm { field: Field, kind: FormKind },
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    #[default]
    Signup,
    Login,
}

impl FormKind {
    /// Fields in the order they are shown and checked.
    #[must_use]
    pub const fn fields(self) -> &'static [Field] {
        match self {
            Self::Signup => {
                &[Field::FirstName, Field::LastName, Field::Email, Field::Password]
            }
            Self::Login => &[Field::Email, Field::Password],
        }
    }
}

impl Display for FormKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Signup => f.write_str("signup"),
            Self::Login => f.write_str("login"),
        }
    }
}

/// Raw values of whichever form is on screen. The caller owns it,
/// updates it on every keystroke and hands it back here to check.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "form", rename_all = "lowercase")]
pub enum FormInput {
    Signup(Signup),
    Login(Login),
}

impl FormInput {
    #[must_use]
    pub fn empty(kind: FormKind) -> Self {
        match kind {
            FormKind::Signup => Self::Signup(Signup::default()),
            FormKind::Login => Self::Login(Login::default()),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> FormKind {
        match self {
            Self::Signup(..) => FormKind::Signup,
            Self::Login(..) => FormKind::Login,
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        match self {
            Self::Signup(form) => Some(form.get(field)),
            Self::Login(form) => form.get(field),
        }
    }

    pub fn set(
        &mut self,
        field: Field,
        value: impl Into<String>,
    ) -> Result<(), FieldError> {
        let kind = self.kind();
        let slot = match self {
            Self::Signup(form) => Some(form.get_mut(field)),
            Self::Login(form) => form.get_mut(field),
        };

        let slot = slot.ok_or(FieldError::NotInForm { field, kind })?;
        *slot = value.into();
        Ok(())
    }

    /// Looks up the field by the name used in error maps.
    pub fn set_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), FieldError> {
        self.set(name.parse()?, value)
    }

    /// Current password, used to refresh the strength indicator.
    #[must_use]
    pub fn password(&self) -> &str {
        match self {
            Self::Signup(form) => form.password.as_str(),
            Self::Login(form) => form.password.as_str(),
        }
    }

    /// Clears every field, keeping the same form.
    pub fn reset(&mut self) {
        *self = Self::empty(self.kind());
    }

    #[must_use]
    pub fn check(&self, policy: &PasswordPolicy) -> ValidationErrors {
        match self {
            Self::Signup(form) => form.check(policy),
            Self::Login(form) => form.check(policy),
        }
    }
}

impl Default for FormInput {
    fn default() -> Self {
        Self::empty(FormKind::default())
    }
}

impl Validate for FormInput {
    fn errors(&self) -> ValidationErrors {
        self.check(&PasswordPolicy::default())
    }
}

impl From<Signup> for FormInput {
    fn from(value: Signup) -> Self {
        Self::Signup(value)
    }
}

impl From<Login> for FormInput {
    fn from(value: Login) -> Self {
        Self::Login(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::Token;
    use static_assertions::assert_impl_all;

    assert_impl_all!(FormInput: Send, Sync);
    assert_impl_all!(ValidationErrors: Send, Sync);

    fn filled_signup() -> FormInput {
        Signup {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: "analytical1".into(),
        }
        .into()
    }

    #[test]
    fn test_valid_signup_has_no_errors() {
        assert!(validate(&filled_signup()).is_empty());
    }

    #[test]
    fn test_empty_signup_reports_every_field() {
        let errors = validate(&FormInput::empty(FormKind::Signup));
        let fields = errors.iter().collect::<Vec<_>>();
        assert_eq!(
            fields,
            [
                ("firstName", "First name is required."),
                ("lastName", "Last name is required."),
                ("email", "Email is required."),
                ("password", "Password is required."),
            ]
        );
    }

    #[test]
    fn test_empty_login_reports_its_fields_only() {
        let errors = validate(&FormInput::empty(FormKind::Login));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("email"), Some("Email is required."));
        assert_eq!(errors.get("password"), Some("Password is required."));
    }

    #[test]
    fn test_login_bad_email() {
        let input = FormInput::from(Login {
            email: "bad".into(),
            password: "longenough1".into(),
        });

        let errors = validate(&input);
        assert_eq!(errors, ValidationErrors::single("email", "Enter a valid email."));
    }

    #[test]
    fn test_login_short_password() {
        let input = FormInput::from(Login {
            email: "a@b.com".into(),
            password: "short".into(),
        });

        let errors = validate(&input);
        assert_eq!(
            errors,
            ValidationErrors::single(
                "password",
                "Password must be at least 8 characters."
            )
        );
    }

    #[test]
    fn test_validate_is_idempotent() {
        let mut input = filled_signup();
        input.set(Field::Email, "nope").unwrap();

        let first = validate(&input);
        let second = validate(&input);
        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn test_validate_with_policy() {
        let policy = PasswordPolicy { min_length: 12 };
        let errors = validate_with(&filled_signup(), &policy);
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 12 characters.")
        );
    }

    #[test]
    fn test_set_and_get_fields() {
        let mut input = FormInput::empty(FormKind::Login);
        input.set(Field::Email, "a@b.com").unwrap();
        input.set_by_name("password", "hunter2hunter2").unwrap();

        assert_eq!(input.get(Field::Email), Some("a@b.com"));
        assert_eq!(input.get(Field::Password), Some("hunter2hunter2"));
        assert_eq!(input.password(), "hunter2hunter2");
        assert_eq!(input.get(Field::FirstName), None);

        assert_eq!(
            input.set(Field::FirstName, "Ada"),
            Err(FieldError::NotInForm { field: Field::FirstName, kind: FormKind::Login })
        );
        assert_eq!(
            input.set_by_name("nickname", "ada"),
            Err(FieldError::Unknown("nickname".into()))
        );
    }

    #[test]
    fn test_reset_keeps_form_kind() {
        let mut input = filled_signup();
        input.reset();

        assert_eq!(input.kind(), FormKind::Signup);
        for field in FormKind::Signup.fields() {
            assert_eq!(input.get(*field), Some(""));
        }
    }

    #[test]
    fn test_field_names_match_error_keys() {
        for field in FormKind::Signup.fields() {
            assert_eq!(field.as_str().parse::<Field>(), Ok(*field));
        }

        serde_test::assert_tokens(
            &Field::FirstName,
            &[Token::UnitVariant { name: "Field", variant: "firstName" }],
        );
    }

    #[test]
    fn test_form_input_from_json() {
        let input: FormInput = serde_json::from_str(
            r#"{"form": "login", "email": "a@b.com", "password": "longenough1"}"#,
        )
        .unwrap();

        assert_eq!(input.kind(), FormKind::Login);
        assert!(validate(&input).is_empty());
    }

    #[test]
    fn test_default_form_is_signup() {
        assert_eq!(FormInput::default().kind(), FormKind::Signup);
    }
}
