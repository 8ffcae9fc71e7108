//! Implementation of the `projshell check` command.

use serde::Serialize;
use tracing::instrument;

use projshell_core::domain::is_valid_format;

use crate::{
    cli::CheckArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Debug, Serialize, PartialEq)]
struct CheckResult<'a> {
    email: &'a str,
    valid: bool,
}

#[instrument(skip_all, fields(count = args.emails.len()))]
pub fn execute(args: CheckArgs, output: &OutputManager) -> CliResult<()> {
    let results = check_all(&args.emails);

    if output.is_json() {
        output.json(&results)?;
    } else {
        for r in &results {
            if r.valid {
                output.success(&format!("{}: valid", r.email))?;
            } else {
                output.error(&format!("{}: invalid", r.email))?;
            }
        }
    }

    let invalid = results.iter().filter(|r| !r.valid).count();
    if args.strict && invalid > 0 {
        return Err(CliError::InvalidEmails {
            count: invalid,
            total: results.len(),
        });
    }
    Ok(())
}

fn check_all(emails: &[String]) -> Vec<CheckResult<'_>> {
    emails
        .iter()
        .map(|email| CheckResult {
            email,
            valid: is_valid_format(email),
        })
        .collect()
}
