use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use super::Field;
use crate::validation::{check_email, check_password, PasswordPolicy};
use crate::Sensitive;

/// The login form only asks for the fields it shares with
/// [`Signup`](super::Signup) and checks them the same way.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Login {
    pub email: String,
    pub password: Sensitive<String>,
}

impl Login {
    #[must_use]
    pub fn check(&self, policy: &PasswordPolicy) -> ValidationErrors {
        let mut fields = ValidationErrors::field_builder();
        fields
            .insert(Field::Email.as_str(), check_email(&self.email))
            .insert(Field::Password.as_str(), check_password(&self.password, policy));

        fields.build()
    }

    pub(super) fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Email => Some(&self.email),
            Field::Password => Some(self.password.as_str()),
            Field::FirstName | Field::LastName => None,
        }
    }

    pub(super) fn get_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Email => Some(&mut self.email),
            Field::Password => Some(self.password.as_mut()),
            Field::FirstName | Field::LastName => None,
        }
    }
}

impl Validate for Login {
    fn errors(&self) -> ValidationErrors {
        self.check(&PasswordPolicy::default())
    }
}
