use serde::Serialize;
use tracing::{info, warn};
use validator::ValidationErrors;

use crate::forms::{validate_with, FormInput, FormKind};
use crate::validation::PasswordPolicy;

/// A submission that passed every check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Accepted {
    pub form: FormKind,
    pub greeting: String,
}

/// Checks the form and, if nothing fails, accepts it and clears
/// every field.
///
/// A rejected form is left as it was so the visitor can fix it. The
/// caller is expected to show each message next to its field.
pub fn submit(
    input: &mut FormInput,
    policy: &PasswordPolicy,
) -> Result<Accepted, ValidationErrors> {
    let form = input.kind();
    let errors = validate_with(input, policy);
    if !errors.is_empty() {
        warn!(%form, ?errors, "rejected form submission");
        return Err(errors);
    }

    let greeting = match input {
        FormInput::Signup(signup) => {
            info!(
                first_name = %signup.first_name,
                last_name = %signup.last_name,
                email = %signup.email,
                "signup accepted"
            );
            format!("Welcome {}!", signup.first_name)
        }
        FormInput::Login(login) => {
            info!(email = %login.email, "login accepted");
            format!("Welcome back, {}!", login.email)
        }
    };

    input.reset();
    Ok(Accepted { form, greeting })
}
