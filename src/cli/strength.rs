use clap::Args;
use error_stack::Result;
use formwise::evaluate_strength;
use serde_json::json;
use std::process::ExitCode;

use super::{print_json, CliError};

#[derive(Debug, Args)]
pub struct StrengthCommand {
    /// Password to rate. Nothing gets stored or logged.
    pub password: String,
}

pub fn run(args: &StrengthCommand) -> Result<ExitCode, CliError> {
    let strength = evaluate_strength(&args.password);
    print_json(&json!({
        "category": strength.category,
        "tone": strength.tone,
        "score": strength.score,
        "label": strength.label(),
    }))?;

    Ok(ExitCode::SUCCESS)
}
