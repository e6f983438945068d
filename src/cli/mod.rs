use clap::Parser;
use error_stack::{Result, ResultExt};
use formwise::config::Config;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

mod form;
mod strength;

#[derive(Debug, Error)]
#[error("Failed to run formwise")]
pub struct CliError;

/// Command line options for formwise.
#[derive(Debug, Parser)]
#[command(
    about = "Checks signup and login forms from the terminal",
    version,
    long_about = None
)]
pub struct Cli {
    /// Path to a TOML configuration file. Defaults to `formwise.toml`
    /// in the current directory, if present.
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub subcommand: Subcommand,
}

impl Cli {
    pub fn run(self) -> Result<ExitCode, CliError> {
        let config = Config::load(self.config.as_deref()).change_context(CliError)?;
        formwise::telemetry::init(&config.logging).change_context(CliError)?;

        match self.subcommand {
            Subcommand::Signup(args) => self::form::run(args.into(), &config.password),
            Subcommand::Login(args) => self::form::run(args.into(), &config.password),
            Subcommand::Strength(args) => self::strength::run(&args),
        }
    }
}

#[derive(Debug, clap::Subcommand)]
pub enum Subcommand {
    /// Submit the signup form
    Signup(self::form::SignupCommand),
    /// Submit the login form
    Login(self::form::LoginCommand),
    /// Rate a password the way the signup form does
    Strength(self::strength::StrengthCommand),
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let output = serde_json::to_string_pretty(value)
        .change_context(CliError)
        .attach_printable("could not serialize output")?;

    println!("{output}");
    Ok(())
}
