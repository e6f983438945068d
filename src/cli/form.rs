use clap::Args;
use error_stack::Result;
use formwise::forms::{Login, Signup};
use formwise::{submit, FormInput, PasswordPolicy};
use serde_json::json;
use std::process::ExitCode;

use super::{print_json, CliError};

/// Every field defaults to an empty string, the same as an
/// untouched input box.
#[derive(Debug, Args)]
pub struct SignupCommand {
    #[clap(long, default_value = "")]
    pub first_name: String,
    #[clap(long, default_value = "")]
    pub last_name: String,
    #[clap(long, default_value = "")]
    pub email: String,
    #[clap(long, default_value = "")]
    pub password: String,
}

impl From<SignupCommand> for FormInput {
    fn from(args: SignupCommand) -> Self {
        Signup {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            password: args.password.into(),
        }
        .into()
    }
}

#[derive(Debug, Args)]
pub struct LoginCommand {
    #[clap(long, default_value = "")]
    pub email: String,
    #[clap(long, default_value = "")]
    pub password: String,
}

impl From<LoginCommand> for FormInput {
    fn from(args: LoginCommand) -> Self {
        Login { email: args.email, password: args.password.into() }.into()
    }
}

pub fn run(
    mut input: FormInput,
    policy: &PasswordPolicy,
) -> Result<ExitCode, CliError> {
    match submit(&mut input, policy) {
        Ok(accepted) => {
            print_json(&json!({
                "accepted": true,
                "form": accepted.form,
                "greeting": accepted.greeting,
            }))?;
            Ok(ExitCode::SUCCESS)
        }
        Err(errors) => {
            print_json(&json!({
                "accepted": false,
                "form": input.kind(),
                "errors": errors,
            }))?;
            Ok(ExitCode::FAILURE)
        }
    }
}
