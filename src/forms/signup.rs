use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use super::Field;
use crate::validation::{
    check_email, check_password, check_required, PasswordPolicy,
    FIRST_NAME_REQUIRED, LAST_NAME_REQUIRED,
};
use crate::Sensitive;

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Signup {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: Sensitive<String>,
}

impl Signup {
    #[must_use]
    pub fn check(&self, policy: &PasswordPolicy) -> ValidationErrors {
        let mut fields = ValidationErrors::field_builder();
        fields
            .insert(
                Field::FirstName.as_str(),
                check_required(&self.first_name, FIRST_NAME_REQUIRED),
            )
            .insert(
                Field::LastName.as_str(),
                check_required(&self.last_name, LAST_NAME_REQUIRED),
            )
            .insert(Field::Email.as_str(), check_email(&self.email))
            .insert(Field::Password.as_str(), check_password(&self.password, policy));

        fields.build()
    }

    pub(super) fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Password => self.password.as_str(),
        }
    }

    pub(super) fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Password => self.password.as_mut(),
        }
    }
}

impl Validate for Signup {
    fn errors(&self) -> ValidationErrors {
        self.check(&PasswordPolicy::default())
    }
}
